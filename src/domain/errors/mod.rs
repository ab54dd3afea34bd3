mod export_errors;
mod validation_errors;

pub use export_errors::*;
pub use validation_errors::*;
