use async_trait::async_trait;
use bytes::Bytes;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use crate::{
    domain::{
        errors::{StorageError, StorageResult},
        value_objects::{BucketName, ObjectKey},
    },
    ports::{
        services::{BucketStatus, LifecycleService},
        storage::ObjectStore,
    },
};

/// Implementation of LifecycleService bound to one target bucket and region
#[derive(Clone)]
pub struct LifecycleServiceImpl {
    store: Arc<dyn ObjectStore>,
    bucket: BucketName,
    region: String,
}

impl LifecycleServiceImpl {
    /// Create a new LifecycleServiceImpl instance
    pub fn new(store: Arc<dyn ObjectStore>, bucket: BucketName, region: String) -> Self {
        Self {
            store,
            bucket,
            region,
        }
    }

    /// The bucket this service operates on
    pub fn bucket(&self) -> &BucketName {
        &self.bucket
    }

    /// The region buckets are created in
    pub fn region(&self) -> &str {
        &self.region
    }
}

#[async_trait]
impl LifecycleService for LifecycleServiceImpl {
    async fn ensure_bucket(&self) -> StorageResult<BucketStatus> {
        let existing = self.store.list_buckets().await?;
        if existing.iter().any(|name| name == self.bucket.as_str()) {
            info!(bucket = %self.bucket, "bucket already exists");
            return Ok(BucketStatus::AlreadyExists);
        }

        self.store.create_bucket(&self.bucket, &self.region).await?;
        info!(bucket = %self.bucket, region = %self.region, "bucket created");
        Ok(BucketStatus::Created)
    }

    async fn upload_file(&self, path: &Path, key: &ObjectKey) -> StorageResult<u64> {
        let data = tokio::fs::read(path)
            .await
            .map_err(|source| StorageError::LocalFile {
                path: path.to_path_buf(),
                source,
            })?;
        let size = data.len() as u64;

        self.store
            .put_object(&self.bucket, key, Bytes::from(data))
            .await?;
        info!(bucket = %self.bucket, key = %key, size, "object uploaded");
        Ok(size)
    }

    async fn read_object(&self, key: &ObjectKey) -> StorageResult<String> {
        let data = self.store.get_object(&self.bucket, key).await?;
        let text =
            String::from_utf8(data.to_vec()).map_err(|source| StorageError::InvalidUtf8 {
                key: key.to_string(),
                source,
            })?;

        info!(bucket = %self.bucket, key = %key, bytes = text.len(), "object read");
        Ok(text)
    }

    async fn delete_object(&self, key: &ObjectKey) -> StorageResult<()> {
        self.store.delete_object(&self.bucket, key).await?;
        info!(bucket = %self.bucket, key = %key, "object deleted");
        Ok(())
    }

    async fn delete_bucket(&self) -> StorageResult<()> {
        self.store.delete_bucket(&self.bucket).await?;
        info!(bucket = %self.bucket, "bucket deleted");
        Ok(())
    }
}
