mod in_memory;
pub mod s3;

pub use in_memory::InMemoryObjectStoreAdapter;
pub use s3::S3ObjectStoreAdapter;
