pub mod errors;
pub mod language;
pub mod models;
pub mod normalize;
pub mod value_objects;

// Re-export commonly used types
pub use errors::{ExportError, ExportResult, ValidationError};
pub use models::*;
pub use value_objects::*;
