use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{
    domain::{
        errors::{StorageError, StorageResult},
        value_objects::{BucketName, ObjectKey},
    },
    ports::storage::ObjectStore,
};

/// In-memory implementation of ObjectStore for testing and development.
/// Enforces the same semantics as the remote service: not-found errors,
/// the non-empty-bucket guard on deletion, and idempotent object deletes.
#[derive(Clone, Default)]
pub struct InMemoryObjectStoreAdapter {
    // Map of bucket name -> object key -> body
    buckets: Arc<RwLock<HashMap<String, HashMap<String, Bytes>>>>,
}

impl InMemoryObjectStoreAdapter {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ObjectStore for InMemoryObjectStoreAdapter {
    async fn list_buckets(&self) -> StorageResult<Vec<String>> {
        let buckets = self.buckets.read().await;

        // Sort for consistent results
        let mut names: Vec<String> = buckets.keys().cloned().collect();
        names.sort();
        Ok(names)
    }

    async fn create_bucket(&self, bucket: &BucketName, _region: &str) -> StorageResult<()> {
        let mut buckets = self.buckets.write().await;

        // Re-creating an owned bucket is a no-op, matching S3's
        // BucketAlreadyOwnedByYou handling in the S3 adapter
        buckets.entry(bucket.as_str().to_string()).or_default();
        Ok(())
    }

    async fn delete_bucket(&self, bucket: &BucketName) -> StorageResult<()> {
        let mut buckets = self.buckets.write().await;

        match buckets.get(bucket.as_str()) {
            None => Err(StorageError::BucketNotFound {
                bucket: bucket.to_string(),
            }),
            Some(objects) if !objects.is_empty() => Err(StorageError::BucketNotEmpty {
                bucket: bucket.to_string(),
            }),
            Some(_) => {
                buckets.remove(bucket.as_str());
                Ok(())
            }
        }
    }

    async fn put_object(
        &self,
        bucket: &BucketName,
        key: &ObjectKey,
        data: Bytes,
    ) -> StorageResult<()> {
        let mut buckets = self.buckets.write().await;

        let objects = buckets
            .get_mut(bucket.as_str())
            .ok_or_else(|| StorageError::BucketNotFound {
                bucket: bucket.to_string(),
            })?;

        objects.insert(key.as_str().to_string(), data);
        Ok(())
    }

    async fn get_object(&self, bucket: &BucketName, key: &ObjectKey) -> StorageResult<Bytes> {
        let buckets = self.buckets.read().await;

        let objects = buckets
            .get(bucket.as_str())
            .ok_or_else(|| StorageError::BucketNotFound {
                bucket: bucket.to_string(),
            })?;

        objects
            .get(key.as_str())
            .cloned()
            .ok_or_else(|| StorageError::ObjectNotFound {
                key: key.to_string(),
            })
    }

    async fn delete_object(&self, bucket: &BucketName, key: &ObjectKey) -> StorageResult<()> {
        let mut buckets = self.buckets.write().await;

        // Absent keys delete silently, like the remote service
        if let Some(objects) = buckets.get_mut(bucket.as_str()) {
            objects.remove(key.as_str());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bucket() -> BucketName {
        BucketName::new("test-bucket".to_string()).unwrap()
    }

    fn key() -> ObjectKey {
        ObjectKey::new("test.txt".to_string()).unwrap()
    }

    #[tokio::test]
    async fn put_get_roundtrip() {
        let store = InMemoryObjectStoreAdapter::new();
        store.create_bucket(&bucket(), "ap-northeast-2").await.unwrap();

        store
            .put_object(&bucket(), &key(), Bytes::from("hello"))
            .await
            .unwrap();

        let body = store.get_object(&bucket(), &key()).await.unwrap();
        assert_eq!(body, Bytes::from("hello"));
    }

    #[tokio::test]
    async fn get_missing_object_is_not_found() {
        let store = InMemoryObjectStoreAdapter::new();
        store.create_bucket(&bucket(), "ap-northeast-2").await.unwrap();

        let err = store.get_object(&bucket(), &key()).await.unwrap_err();
        assert!(matches!(err, StorageError::ObjectNotFound { .. }));
    }

    #[tokio::test]
    async fn delete_missing_object_succeeds() {
        let store = InMemoryObjectStoreAdapter::new();
        store.create_bucket(&bucket(), "ap-northeast-2").await.unwrap();

        store.delete_object(&bucket(), &key()).await.unwrap();
    }

    #[tokio::test]
    async fn delete_bucket_requires_empty() {
        let store = InMemoryObjectStoreAdapter::new();
        store.create_bucket(&bucket(), "ap-northeast-2").await.unwrap();
        store
            .put_object(&bucket(), &key(), Bytes::from("x"))
            .await
            .unwrap();

        let err = store.delete_bucket(&bucket()).await.unwrap_err();
        assert!(matches!(err, StorageError::BucketNotEmpty { .. }));

        store.delete_object(&bucket(), &key()).await.unwrap();
        store.delete_bucket(&bucket()).await.unwrap();
        assert!(store.list_buckets().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_bucket_twice_keeps_contents() {
        let store = InMemoryObjectStoreAdapter::new();
        store.create_bucket(&bucket(), "ap-northeast-2").await.unwrap();
        store
            .put_object(&bucket(), &key(), Bytes::from("keep"))
            .await
            .unwrap();

        store.create_bucket(&bucket(), "ap-northeast-2").await.unwrap();

        let body = store.get_object(&bucket(), &key()).await.unwrap();
        assert_eq!(body, Bytes::from("keep"));
    }
}
