pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

// Re-export key types for convenience

// Domain types - value objects and errors
pub use domain::{BucketName, ObjectKey, StorageError, StorageResult, ValidationError};

// Port types - interfaces for the storage backend and the lifecycle steps
pub use ports::{BucketStatus, LifecycleService, ObjectStore};

// Service implementations
pub use services::LifecycleServiceImpl;

// Application factory and configuration
pub use app::{
    create_in_memory_app, create_s3_app, AppBuilder, AppConfig, AppError, StorageBackend,
    DEFAULT_MAX_ATTEMPTS, DEFAULT_OPERATION_TIMEOUT,
};

// Adapter types - infrastructure implementations
pub use adapters::outbound::storage::{InMemoryObjectStoreAdapter, S3ObjectStoreAdapter};

// Public facade for easy construction
pub mod prelude {
    pub use crate::{
        create_in_memory_app, create_s3_app, AppBuilder, BucketName, BucketStatus,
        LifecycleService, LifecycleServiceImpl, ObjectKey, ObjectStore, StorageBackend,
    };
}
