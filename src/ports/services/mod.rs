mod lifecycle_service;

pub use lifecycle_service::{BucketStatus, LifecycleService};
