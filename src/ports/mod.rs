pub mod services;
pub mod storage;

pub use services::{BucketStatus, LifecycleService};
pub use storage::ObjectStore;
