use std::path::Path;

use crate::domain::{errors::StorageResult, value_objects::ObjectKey};
use async_trait::async_trait;

/// Outcome of the ensure-bucket step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketStatus {
    /// The bucket was absent and has been created
    Created,
    /// The bucket already appeared in the caller's bucket list
    AlreadyExists,
}

/// Port for the bucket/object lifecycle steps
///
/// The steps are meant to run in order: ensure the bucket, upload a file,
/// read it back, overwrite it with a second file (another `upload_file`
/// call, since a put always replaces the whole body), read again, delete
/// the object, then delete the empty bucket.
#[async_trait]
pub trait LifecycleService: Send + Sync {
    /// Create the target bucket unless it already exists
    async fn ensure_bucket(&self) -> StorageResult<BucketStatus>;

    /// Upload a local file under `key`, replacing any existing object.
    /// Returns the number of bytes transmitted.
    async fn upload_file(&self, path: &Path, key: &ObjectKey) -> StorageResult<u64>;

    /// Fetch the object body and decode it as UTF-8 text
    async fn read_object(&self, key: &ObjectKey) -> StorageResult<String>;

    /// Delete the object
    async fn delete_object(&self, key: &ObjectKey) -> StorageResult<()>;

    /// Delete the bucket; it must be empty by now
    async fn delete_bucket(&self) -> StorageResult<()>;
}
