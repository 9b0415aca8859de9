use crate::domain::{
    errors::StorageResult,
    value_objects::{BucketName, ObjectKey},
};
use async_trait::async_trait;
use bytes::Bytes;

/// Port for object storage operations
/// This abstracts the actual storage backend (S3, MinIO, in-memory)
#[async_trait]
pub trait ObjectStore: Send + Sync + 'static {
    /// List the names of all buckets owned by the caller
    async fn list_buckets(&self) -> StorageResult<Vec<String>>;

    /// Create a bucket in the given region
    async fn create_bucket(&self, bucket: &BucketName, region: &str) -> StorageResult<()>;

    /// Delete a bucket; fails with `BucketNotEmpty` while objects remain
    async fn delete_bucket(&self, bucket: &BucketName) -> StorageResult<()>;

    /// Store an object body, replacing any existing object under the key
    async fn put_object(
        &self,
        bucket: &BucketName,
        key: &ObjectKey,
        data: Bytes,
    ) -> StorageResult<()>;

    /// Retrieve the full object body
    async fn get_object(&self, bucket: &BucketName, key: &ObjectKey) -> StorageResult<Bytes>;

    /// Delete an object; deleting an absent key succeeds
    async fn delete_object(&self, bucket: &BucketName, key: &ObjectKey) -> StorageResult<()>;
}
