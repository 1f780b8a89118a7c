//! In-process backend with the same contract as the Postgres one. The
//! integration tests run the services against this store.

use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use super::{Document, DocumentStore, Filter, StoreError, StoreResult, doc_id};

#[derive(Default)]
pub struct MemoryStore {
    docs: RwLock<BTreeMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn get(&self, path: &str) -> StoreResult<Option<Document>> {
        let docs = self.docs.read().expect("store lock");
        Ok(docs.get(path).map(|fields| Document {
            id: doc_id(path).to_string(),
            fields: fields.clone(),
        }))
    }

    async fn set(&self, path: &str, fields: Value, merge: bool) -> StoreResult<()> {
        let mut docs = self.docs.write().expect("store lock");
        match docs.get_mut(path) {
            Some(existing) if merge => merge_fields(existing, fields),
            _ => {
                docs.insert(path.to_string(), fields);
            }
        }
        Ok(())
    }

    async fn update(&self, path: &str, fields: Value) -> StoreResult<()> {
        let mut docs = self.docs.write().expect("store lock");
        match docs.get_mut(path) {
            Some(existing) => {
                merge_fields(existing, fields);
                Ok(())
            }
            None => Err(StoreError::Missing),
        }
    }

    async fn delete(&self, path: &str) -> StoreResult<()> {
        self.docs.write().expect("store lock").remove(path);
        Ok(())
    }

    async fn query(
        &self,
        collection: &str,
        filter: Filter,
        limit: Option<i64>,
    ) -> StoreResult<Vec<Document>> {
        let docs = self.docs.read().expect("store lock");
        let prefix = format!("{collection}/");
        let limit = limit.unwrap_or(i64::MAX).max(0) as usize;

        let mut matches = Vec::new();
        for (path, fields) in docs.range(prefix.clone()..) {
            if !path.starts_with(&prefix) {
                break;
            }
            // direct children only; deeper paths belong to subcollections
            let rest = &path[prefix.len()..];
            if rest.contains('/') || !filter_matches(&filter, fields) {
                continue;
            }
            matches.push(Document {
                id: rest.to_string(),
                fields: fields.clone(),
            });
            if matches.len() >= limit {
                break;
            }
        }
        Ok(matches)
    }

    async fn add(&self, collection: &str, fields: Value) -> StoreResult<String> {
        let id = Uuid::new_v4().simple().to_string();
        let path = format!("{collection}/{id}");
        self.docs
            .write()
            .expect("store lock")
            .insert(path, fields);
        Ok(id)
    }

    async fn adjust_field(
        &self,
        path: &str,
        field: &str,
        delta: i64,
        floor: i64,
    ) -> StoreResult<i64> {
        let mut docs = self.docs.write().expect("store lock");
        let Some(fields) = docs.get_mut(path) else {
            return Err(StoreError::Missing);
        };

        let current = fields.get(field).and_then(Value::as_i64).unwrap_or(0);
        let next = (current + delta).max(floor);
        if let Some(object) = fields.as_object_mut() {
            object.insert(field.to_string(), Value::from(next));
        }
        Ok(next)
    }
}

fn filter_matches(filter: &Filter, fields: &Value) -> bool {
    match filter {
        Filter::All => true,
        Filter::Eq(field, value) => fields.get(field) == Some(value),
        Filter::ArrayContains(field, value) => fields
            .get(field)
            .and_then(Value::as_array)
            .is_some_and(|array| array.contains(value)),
    }
}

/// Shallow merge matching jsonb `||`: incoming top-level keys replace.
fn merge_fields(target: &mut Value, incoming: Value) {
    match (target.as_object_mut(), incoming) {
        (Some(object), Value::Object(fields)) => {
            for (key, value) in fields {
                object.insert(key, value);
            }
        }
        (_, incoming) => *target = incoming,
    }
}
