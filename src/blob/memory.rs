//! In-process blob backend for the integration tests.

use std::collections::BTreeMap;
use std::sync::RwLock;
use std::time::Duration;

use async_trait::async_trait;

use super::{BlobResult, BlobStore};

#[derive(Default)]
pub struct MemoryBlobStore {
    objects: RwLock<BTreeMap<String, (String, Vec<u8>)>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn list(&self, prefix: &str) -> BlobResult<Vec<String>> {
        let objects = self.objects.read().expect("blob lock");
        Ok(objects
            .range(prefix.to_string()..)
            .take_while(|(key, _)| key.starts_with(prefix))
            .map(|(key, _)| key.clone())
            .collect())
    }

    async fn upload(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> BlobResult<()> {
        self.objects
            .write()
            .expect("blob lock")
            .insert(key.to_string(), (content_type.to_string(), bytes));
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        format!("memory://{key}")
    }

    async fn signed_url(&self, key: &str, ttl: Duration) -> BlobResult<String> {
        Ok(format!("memory://{key}?expires={}", ttl.as_secs()))
    }
}
