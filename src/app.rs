use std::sync::Arc;
use std::time::Duration;

use aws_config::{retry::RetryConfig, timeout::TimeoutConfig, BehaviorVersion, Region};
use aws_sdk_s3::Client;

use crate::{
    adapters::outbound::storage::{InMemoryObjectStoreAdapter, S3ObjectStoreAdapter},
    domain::value_objects::BucketName,
    ports::storage::ObjectStore,
    services::LifecycleServiceImpl,
};

/// Per-operation timeout applied to the S3 client
pub const DEFAULT_OPERATION_TIMEOUT: Duration = Duration::from_secs(30);

/// Default upper bound on SDK attempts per operation (first call + retries)
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Configuration for the application
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bucket: String,
    pub region: String,
    pub storage_backend: StorageBackend,
}

/// Storage backend configuration
#[derive(Debug, Clone)]
pub enum StorageBackend {
    /// Process-local map, for tests and dry runs
    InMemory,
    /// S3 or an S3-compatible service
    S3 {
        /// Custom endpoint (e.g. a local MinIO); None means AWS
        endpoint: Option<String>,
        /// Upper bound on SDK attempts per operation
        max_attempts: u32,
        /// Timeout applied to each operation, retries included
        operation_timeout: Duration,
    },
}

/// Application-level errors
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Invalid bucket name: {0}")]
    InvalidBucketName(#[from] crate::domain::errors::ValidationError),
}

/// Application builder for dependency injection
pub struct AppBuilder {
    config: AppConfig,
}

impl AppBuilder {
    /// Create a new application builder targeting a bucket in a region
    pub fn new(bucket: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            config: AppConfig {
                bucket: bucket.into(),
                region: region.into(),
                storage_backend: StorageBackend::InMemory,
            },
        }
    }

    /// Configure storage backend
    pub fn with_storage_backend(mut self, backend: StorageBackend) -> Self {
        self.config.storage_backend = backend;
        self
    }

    /// Build the lifecycle service over the configured backend
    pub async fn build(self) -> Result<LifecycleServiceImpl, AppError> {
        let bucket = BucketName::new(self.config.bucket.clone())?;

        let store: Arc<dyn ObjectStore> = match &self.config.storage_backend {
            StorageBackend::InMemory => Arc::new(InMemoryObjectStoreAdapter::new()),
            StorageBackend::S3 {
                endpoint,
                max_attempts,
                operation_timeout,
            } => {
                let client = build_s3_client(
                    &self.config.region,
                    endpoint.as_deref(),
                    *max_attempts,
                    *operation_timeout,
                )
                .await;
                Arc::new(S3ObjectStoreAdapter::new(client))
            }
        };

        Ok(LifecycleServiceImpl::new(store, bucket, self.config.region))
    }
}

/// Build an S3 client with an explicit region, a bounded retry policy, and
/// explicit timeouts rather than the SDK defaults. Credentials resolve
/// through the standard provider chain (environment, shared profile).
async fn build_s3_client(
    region: &str,
    endpoint: Option<&str>,
    max_attempts: u32,
    operation_timeout: Duration,
) -> Client {
    let retry = RetryConfig::standard().with_max_attempts(max_attempts);
    let timeouts = TimeoutConfig::builder()
        .operation_timeout(operation_timeout)
        .build();

    let shared = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(region.to_string()))
        .retry_config(retry)
        .timeout_config(timeouts)
        .load()
        .await;

    let mut builder = aws_sdk_s3::config::Builder::from(&shared);
    if let Some(endpoint) = endpoint {
        // MinIO and friends want path-style addressing
        builder = builder.endpoint_url(endpoint).force_path_style(true);
    }

    Client::from_conf(builder.build())
}

/// Create an in-memory application for testing and development
pub async fn create_in_memory_app(
    bucket: &str,
    region: &str,
) -> Result<LifecycleServiceImpl, AppError> {
    AppBuilder::new(bucket, region).build().await
}

/// Create an S3-backed application
pub async fn create_s3_app(
    bucket: &str,
    region: &str,
    endpoint: Option<String>,
    max_attempts: u32,
) -> Result<LifecycleServiceImpl, AppError> {
    AppBuilder::new(bucket, region)
        .with_storage_backend(StorageBackend::S3 {
            endpoint,
            max_attempts,
            operation_timeout: DEFAULT_OPERATION_TIMEOUT,
        })
        .build()
        .await
}
