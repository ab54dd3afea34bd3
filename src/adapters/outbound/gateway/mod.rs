mod in_memory;
mod soap;

pub use in_memory::InMemoryCarrierGateway;
pub use soap::SoapCarrierGateway;
