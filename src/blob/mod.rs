use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

pub mod memory;
pub mod s3;

#[derive(Debug, Error)]
pub enum BlobError {
    #[error("object storage error: {0}")]
    Backend(String),
}

pub type BlobResult<T> = Result<T, BlobError>;

/// Prefix-keyed object storage. There are no real directories: the browse
/// endpoints synthesize folders by splitting listed keys on `/`.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Every object key under `prefix`, in key order.
    async fn list(&self, prefix: &str) -> BlobResult<Vec<String>>;

    async fn upload(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> BlobResult<()>;

    fn public_url(&self, key: &str) -> String;

    async fn signed_url(&self, key: &str, ttl: Duration) -> BlobResult<String>;
}
