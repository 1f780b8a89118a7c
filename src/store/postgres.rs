//! Postgres backend: one `documents` table of `(path, collection, jsonb)`
//! rows, created by the migration under `migrations/`.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

use super::{Document, DocumentStore, Filter, StoreError, StoreResult, doc_id};

#[derive(Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentStore for PostgresStore {
    async fn get(&self, path: &str) -> StoreResult<Option<Document>> {
        let row: Option<(Value,)> = sqlx::query_as("SELECT data FROM documents WHERE path = $1")
            .bind(path)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|(fields,)| Document {
            id: doc_id(path).to_string(),
            fields,
        }))
    }

    async fn set(&self, path: &str, fields: Value, merge: bool) -> StoreResult<()> {
        let collection = parent_collection(path)?;
        let sql = if merge {
            r#"
            INSERT INTO documents (path, collection, data)
            VALUES ($1, $2, $3)
            ON CONFLICT (path) DO UPDATE SET data = documents.data || EXCLUDED.data
            "#
        } else {
            r#"
            INSERT INTO documents (path, collection, data)
            VALUES ($1, $2, $3)
            ON CONFLICT (path) DO UPDATE SET data = EXCLUDED.data
            "#
        };

        sqlx::query(sql)
            .bind(path)
            .bind(collection)
            .bind(fields)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn update(&self, path: &str, fields: Value) -> StoreResult<()> {
        let result = sqlx::query("UPDATE documents SET data = data || $2 WHERE path = $1")
            .bind(path)
            .bind(fields)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::Missing);
        }
        Ok(())
    }

    async fn delete(&self, path: &str) -> StoreResult<()> {
        sqlx::query("DELETE FROM documents WHERE path = $1")
            .bind(path)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn query(
        &self,
        collection: &str,
        filter: Filter,
        limit: Option<i64>,
    ) -> StoreResult<Vec<Document>> {
        // LIMIT NULL is "no limit" in Postgres.
        let rows: Vec<(String, Value)> = match filter {
            Filter::All => {
                sqlx::query_as(
                    r#"
                    SELECT path, data FROM documents
                    WHERE collection = $1
                    ORDER BY path
                    LIMIT $2
                    "#,
                )
                .bind(collection)
                .bind(limit)
                .fetch_all(&self.pool)
                .await?
            }
            Filter::Eq(field, value) => {
                sqlx::query_as(
                    r#"
                    SELECT path, data FROM documents
                    WHERE collection = $1 AND data->$2 = $3
                    ORDER BY path
                    LIMIT $4
                    "#,
                )
                .bind(collection)
                .bind(field)
                .bind(value)
                .bind(limit)
                .fetch_all(&self.pool)
                .await?
            }
            Filter::ArrayContains(field, value) => {
                sqlx::query_as(
                    r#"
                    SELECT path, data FROM documents
                    WHERE collection = $1 AND data->$2 @> $3
                    ORDER BY path
                    LIMIT $4
                    "#,
                )
                .bind(collection)
                .bind(field)
                .bind(value)
                .bind(limit)
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(rows
            .into_iter()
            .map(|(path, fields)| Document {
                id: doc_id(&path).to_string(),
                fields,
            })
            .collect())
    }

    async fn add(&self, collection: &str, fields: Value) -> StoreResult<String> {
        let id = Uuid::new_v4().simple().to_string();
        let path = format!("{collection}/{id}");

        sqlx::query("INSERT INTO documents (path, collection, data) VALUES ($1, $2, $3)")
            .bind(&path)
            .bind(collection)
            .bind(fields)
            .execute(&self.pool)
            .await?;

        Ok(id)
    }

    async fn adjust_field(
        &self,
        path: &str,
        field: &str,
        delta: i64,
        floor: i64,
    ) -> StoreResult<i64> {
        // One statement: read, add, clamp, and write happen inside the
        // UPDATE, so concurrent adjusts serialize on the row lock.
        let row: Option<(i64,)> = sqlx::query_as(
            r#"
            UPDATE documents
            SET data = jsonb_set(
                data,
                ARRAY[$2],
                to_jsonb(GREATEST(COALESCE((data->>$2)::bigint, 0) + $3, $4))
            )
            WHERE path = $1
            RETURNING (data->>$2)::bigint
            "#,
        )
        .bind(path)
        .bind(field)
        .bind(delta)
        .bind(floor)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some((value,)) => Ok(value),
            None => Err(StoreError::Missing),
        }
    }
}

fn parent_collection(path: &str) -> StoreResult<&str> {
    match path.rsplit_once('/') {
        Some((collection, _)) => Ok(collection),
        None => Err(StoreError::Backend(format!(
            "document path has no collection: {path}"
        ))),
    }
}
