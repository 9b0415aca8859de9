use std::path::PathBuf;

use storage_lifecycle::{create_s3_app, BucketStatus, LifecycleService, ObjectKey};
use tempfile::TempDir;

// This test requires an S3-compatible server (MinIO works) configured via
// environment variables:
// - S3_ENDPOINT (default: http://localhost:9000)
// - LIFECYCLE_TEST_BUCKET (default: storage-lifecycle-test)
// - LIFECYCLE_TEST_REGION (default: us-east-1)
// - AWS_ACCESS_KEY_ID / AWS_SECRET_ACCESS_KEY for credentials

fn fixture(dir: &TempDir, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[tokio::test]
#[ignore = "requires an S3-compatible server to be running"]
async fn live_full_lifecycle() {
    let endpoint =
        std::env::var("S3_ENDPOINT").unwrap_or_else(|_| "http://localhost:9000".to_string());
    let bucket = std::env::var("LIFECYCLE_TEST_BUCKET")
        .unwrap_or_else(|_| "storage-lifecycle-test".to_string());
    let region =
        std::env::var("LIFECYCLE_TEST_REGION").unwrap_or_else(|_| "us-east-1".to_string());

    println!("Connecting to {} with bucket {}", endpoint, bucket);

    let service = create_s3_app(&bucket, &region, Some(endpoint), 3)
        .await
        .unwrap();

    let dir = TempDir::new().unwrap();
    let first = fixture(&dir, "file_1.txt", b"hello");
    let second = fixture(&dir, "file_2.txt", b"world");
    let object = ObjectKey::new("file_1.txt".to_string()).unwrap();

    let status = service.ensure_bucket().await.unwrap();
    println!("ensure_bucket: {:?}", status);

    service.upload_file(&first, &object).await.unwrap();
    assert_eq!(service.read_object(&object).await.unwrap(), "hello");

    service.upload_file(&second, &object).await.unwrap();
    assert_eq!(service.read_object(&object).await.unwrap(), "world");

    service.delete_object(&object).await.unwrap();
    service.delete_bucket().await.unwrap();

    // A fresh ensure must create the bucket again, proving nothing was
    // left behind by the previous run
    assert_eq!(service.ensure_bucket().await.unwrap(), BucketStatus::Created);
    service.delete_bucket().await.unwrap();
}
