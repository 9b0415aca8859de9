use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use storage_lifecycle::{
    app::{AppBuilder, StorageBackend, DEFAULT_OPERATION_TIMEOUT},
    BucketStatus, LifecycleService, ObjectKey,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "storage-lifecycle")]
#[command(about = "Runs a bucket/object lifecycle against S3-compatible storage", long_about = None)]
struct Cli {
    /// Target bucket name
    #[arg(short, long, env = "LIFECYCLE_BUCKET", default_value = "storage-lifecycle-demo")]
    bucket: String,

    /// Region used as the bucket's location constraint
    #[arg(short, long, env = "LIFECYCLE_REGION", default_value = "ap-northeast-2")]
    region: String,

    /// Local file uploaded in the first pass
    #[arg(long, env = "LIFECYCLE_FILE", default_value = "file_1.txt")]
    file: PathBuf,

    /// Local file whose content overwrites the object in the second pass
    #[arg(long, env = "LIFECYCLE_UPDATE_FILE", default_value = "file_2.txt")]
    update_file: PathBuf,

    /// Object key; defaults to the first file's name
    #[arg(short, long, env = "LIFECYCLE_KEY")]
    key: Option<String>,

    /// Storage backend type
    #[arg(long, env = "STORAGE_BACKEND", value_enum, default_value = "s3")]
    backend: Backend,

    /// Custom S3 endpoint URL (e.g. a local MinIO)
    #[arg(long, env = "S3_ENDPOINT")]
    endpoint: Option<String>,

    /// Maximum SDK attempts per operation (first call plus retries)
    #[arg(long, env = "S3_MAX_ATTEMPTS", default_value_t = storage_lifecycle::DEFAULT_MAX_ATTEMPTS)]
    max_attempts: u32,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Backend {
    /// Process-local store, useful for a dry run without credentials
    Memory,
    /// S3 or an S3-compatible service
    S3,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_new(&cli.log_level)
                .context("invalid log level")?,
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let backend = match cli.backend {
        Backend::Memory => StorageBackend::InMemory,
        Backend::S3 => StorageBackend::S3 {
            endpoint: cli.endpoint.clone(),
            max_attempts: cli.max_attempts,
            operation_timeout: DEFAULT_OPERATION_TIMEOUT,
        },
    };

    let service = AppBuilder::new(&cli.bucket, &cli.region)
        .with_storage_backend(backend)
        .build()
        .await
        .context("failed to set up the storage backend")?;

    let key_name = match &cli.key {
        Some(key) => key.clone(),
        None => cli
            .file
            .file_name()
            .and_then(|name| name.to_str())
            .map(str::to_string)
            .context("--file has no usable file name; pass --key explicitly")?,
    };
    let key = ObjectKey::new(key_name).context("invalid object key")?;

    // The sequence below is fail-fast: the first error aborts the run
    // and any bucket or object created so far is left in place.
    match service.ensure_bucket().await? {
        BucketStatus::Created => {
            println!("Bucket '{}' created in {}.", cli.bucket, cli.region)
        }
        BucketStatus::AlreadyExists => {
            println!("Bucket '{}' already exists, reusing it.", cli.bucket)
        }
    }

    let size = service.upload_file(&cli.file, &key).await?;
    println!(
        "Uploaded {} as '{}' ({} bytes).",
        cli.file.display(),
        key,
        size
    );

    let content = service.read_object(&key).await?;
    println!("Content of '{}': {}", key, content);

    let size = service.upload_file(&cli.update_file, &key).await?;
    println!(
        "Overwrote '{}' with the content of {} ({} bytes).",
        key,
        cli.update_file.display(),
        size
    );

    let content = service.read_object(&key).await?;
    println!("Updated content of '{}': {}", key, content);

    service.delete_object(&key).await?;
    println!("Deleted object '{}'.", key);

    service.delete_bucket().await?;
    println!("Deleted bucket '{}'. All done.", cli.bucket);

    Ok(())
}
