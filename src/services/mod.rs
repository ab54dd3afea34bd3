mod export_service_impl;

pub use export_service_impl::ExportServiceImpl;
