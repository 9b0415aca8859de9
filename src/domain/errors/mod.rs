mod storage_errors;
mod validation_errors;

pub use storage_errors::{StorageError, StorageResult};
pub use validation_errors::ValidationError;
