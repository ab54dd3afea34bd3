mod in_memory_export_repository;

pub use in_memory_export_repository::InMemoryExportRepository;
