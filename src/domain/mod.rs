pub mod errors;
pub mod value_objects;

pub use errors::{StorageError, StorageResult, ValidationError};
pub use value_objects::{BucketName, ObjectKey};
