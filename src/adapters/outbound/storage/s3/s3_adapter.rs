use async_trait::async_trait;
use aws_sdk_s3::{
    error::{DisplayErrorContext, ProvideErrorMetadata},
    primitives::ByteStream,
    types::{BucketLocationConstraint, CreateBucketConfiguration},
    Client,
};
use bytes::Bytes;

use crate::{
    domain::{
        errors::{StorageError, StorageResult},
        value_objects::{BucketName, ObjectKey},
    },
    ports::storage::ObjectStore,
};

/// S3 storage adapter that implements the ObjectStore trait on the AWS SDK
/// client. Also speaks to S3-compatible services such as MinIO when the
/// client was built with an endpoint override.
#[derive(Clone)]
pub struct S3ObjectStoreAdapter {
    client: Client,
}

impl S3ObjectStoreAdapter {
    /// Create a new S3 adapter
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    fn backend_error<E>(operation: &str, err: E) -> StorageError
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        StorageError::Backend {
            message: format!("{}: {}", operation, DisplayErrorContext(&err)),
        }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStoreAdapter {
    async fn list_buckets(&self) -> StorageResult<Vec<String>> {
        let response = self
            .client
            .list_buckets()
            .send()
            .await
            .map_err(|err| Self::backend_error("ListBuckets", err))?;

        Ok(response
            .buckets()
            .iter()
            .filter_map(|bucket| bucket.name().map(str::to_string))
            .collect())
    }

    async fn create_bucket(&self, bucket: &BucketName, region: &str) -> StorageResult<()> {
        let mut request = self.client.create_bucket().bucket(bucket.as_str());

        // us-east-1 is the default location; S3 rejects an explicit
        // constraint naming it
        if region != "us-east-1" {
            let config = CreateBucketConfiguration::builder()
                .location_constraint(BucketLocationConstraint::from(region))
                .build();
            request = request.create_bucket_configuration(config);
        }

        match request.send().await {
            Ok(_) => Ok(()),
            // Created on an earlier run; the bucket exists, which is all
            // the caller asked for
            Err(err) if err.code() == Some("BucketAlreadyOwnedByYou") => Ok(()),
            Err(err) => Err(Self::backend_error("CreateBucket", err)),
        }
    }

    async fn delete_bucket(&self, bucket: &BucketName) -> StorageResult<()> {
        match self
            .client
            .delete_bucket()
            .bucket(bucket.as_str())
            .send()
            .await
        {
            Ok(_) => Ok(()),
            Err(err) => Err(match err.code() {
                Some("BucketNotEmpty") => StorageError::BucketNotEmpty {
                    bucket: bucket.to_string(),
                },
                Some("NoSuchBucket") => StorageError::BucketNotFound {
                    bucket: bucket.to_string(),
                },
                _ => Self::backend_error("DeleteBucket", err),
            }),
        }
    }

    async fn put_object(
        &self,
        bucket: &BucketName,
        key: &ObjectKey,
        data: Bytes,
    ) -> StorageResult<()> {
        self.client
            .put_object()
            .bucket(bucket.as_str())
            .key(key.as_str())
            .body(ByteStream::from(data))
            .send()
            .await
            .map_err(|err| match err.code() {
                Some("NoSuchBucket") => StorageError::BucketNotFound {
                    bucket: bucket.to_string(),
                },
                _ => Self::backend_error("PutObject", err),
            })?;

        Ok(())
    }

    async fn get_object(&self, bucket: &BucketName, key: &ObjectKey) -> StorageResult<Bytes> {
        let response = self
            .client
            .get_object()
            .bucket(bucket.as_str())
            .key(key.as_str())
            .send()
            .await
            .map_err(|err| match err.code() {
                Some("NoSuchKey") => StorageError::ObjectNotFound {
                    key: key.to_string(),
                },
                Some("NoSuchBucket") => StorageError::BucketNotFound {
                    bucket: bucket.to_string(),
                },
                _ => Self::backend_error("GetObject", err),
            })?;

        let data = response.body.collect().await.map_err(|err| {
            StorageError::Backend {
                message: format!("GetObject body: {}", err),
            }
        })?;

        Ok(data.into_bytes())
    }

    async fn delete_object(&self, bucket: &BucketName, key: &ObjectKey) -> StorageResult<()> {
        // DeleteObject is idempotent on the service side: an absent key
        // still returns 204
        self.client
            .delete_object()
            .bucket(bucket.as_str())
            .key(key.as_str())
            .send()
            .await
            .map_err(|err| match err.code() {
                Some("NoSuchBucket") => StorageError::BucketNotFound {
                    bucket: bucket.to_string(),
                },
                _ => Self::backend_error("DeleteObject", err),
            })?;

        Ok(())
    }
}
