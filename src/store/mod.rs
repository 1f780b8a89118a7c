use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

pub mod memory;
pub mod paths;
pub mod postgres;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("document not found")]
    Missing,

    #[error("database error")]
    Db(#[from] sqlx::Error),

    #[error("{0}")]
    Backend(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// A document read back from the store: its id (the last path segment)
/// plus its fields as loose JSON.
#[derive(Debug, Clone)]
pub struct Document {
    pub id: String,
    pub fields: Value,
}

impl Document {
    pub fn decode<T: DeserializeOwned>(&self) -> StoreResult<T> {
        serde_json::from_value(self.fields.clone())
            .map_err(|err| StoreError::Backend(format!("malformed document: {err}")))
    }
}

/// Filter applied by [`DocumentStore::query`] against one document field.
#[derive(Debug, Clone)]
pub enum Filter {
    All,
    Eq(&'static str, Value),
    /// Matches documents whose `field` is an array containing `value`.
    /// This is how the prefix-search probe runs against `search_prefix`.
    ArrayContains(&'static str, Value),
}

/// Hierarchical, tenant-scoped document storage.
///
/// Paths alternate collection and document segments
/// (`tenants/{t}/customers/{c}/orders/{o}`); see [`paths`] for the layout.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn get(&self, path: &str) -> StoreResult<Option<Document>>;

    /// Create or overwrite the document at `path`. With `merge` set, fields
    /// not present in `fields` are left as they are.
    async fn set(&self, path: &str, fields: Value, merge: bool) -> StoreResult<()>;

    /// Merge `fields` into an existing document. [`StoreError::Missing`]
    /// if there is none.
    async fn update(&self, path: &str, fields: Value) -> StoreResult<()>;

    async fn delete(&self, path: &str) -> StoreResult<()>;

    /// Direct children of `collection` matching `filter`, ordered by path.
    async fn query(
        &self,
        collection: &str,
        filter: Filter,
        limit: Option<i64>,
    ) -> StoreResult<Vec<Document>>;

    /// Insert a document under a generated id; returns the id.
    async fn add(&self, collection: &str, fields: Value) -> StoreResult<String>;

    /// Atomically add `delta` to the integer field `field`, clamping the
    /// result at `floor`, and return the new value. Single conditional
    /// write against the store; concurrent adjusts never lose updates.
    async fn adjust_field(
        &self,
        path: &str,
        field: &str,
        delta: i64,
        floor: i64,
    ) -> StoreResult<i64>;
}

/// Last path segment, i.e. the document id.
pub(crate) fn doc_id(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
