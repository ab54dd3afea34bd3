mod filesystem;
mod in_memory;

pub use filesystem::FilesystemLabelStore;
pub use in_memory::InMemoryLabelStore;
