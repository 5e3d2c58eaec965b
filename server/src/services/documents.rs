//! Document store: JSON documents grouped into named collections.
//!
//! DESIGN
//! ======
//! Content lives as schemaless JSON keyed by `(collection, id)`. Queries are
//! equality filters on top-level fields, which maps directly onto JSONB
//! containment (`data @> '{"field": value}'`) in Postgres and onto a linear
//! scan in the in-memory store. Results are ordered by id in both.
//!
//! The in-memory store backs local development without a database and the
//! route tests.

#[cfg(test)]
#[path = "documents_test.rs"]
mod documents_test;

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use sqlx::{PgPool, Row};
use tokio::sync::RwLock;

use crate::error::ErrorCode;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("document not found: {collection}/{id}")]
    NotFound { collection: String, id: String },
    #[error("field {field} of {collection}/{id} is not an integer")]
    NotNumeric { collection: String, id: String, field: String },
}

impl ErrorCode for StoreError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Database(_) => "E_DATABASE",
            Self::NotFound { .. } => "E_NOT_FOUND",
            Self::NotNumeric { .. } => "E_NOT_NUMERIC",
        }
    }

    fn retryable(&self) -> bool {
        matches!(self, Self::Database(sqlx::Error::PoolTimedOut | sqlx::Error::Io(_)))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub data: Value,
}

/// Equality on one top-level field.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub field: String,
    pub value: Value,
}

impl Filter {
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self { field: field.into(), value: value.into() }
    }

    fn matches(&self, data: &Value) -> bool {
        data.get(&self.field) == Some(&self.value)
    }
}

fn containment(filters: &[Filter]) -> Value {
    let object: Map<String, Value> = filters.iter().map(|f| (f.field.clone(), f.value.clone())).collect();
    Value::Object(object)
}

#[async_trait::async_trait]
pub trait DocumentStore: Send + Sync {
    /// Documents in `collection` matching every filter, ordered by id.
    async fn query(&self, collection: &str, filters: &[Filter], limit: Option<usize>)
    -> Result<Vec<Document>, StoreError>;

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError>;

    /// Insert or replace a whole document.
    async fn put(&self, collection: &str, id: &str, data: Value) -> Result<(), StoreError>;

    /// Remove a document. Returns whether it existed.
    async fn delete(&self, collection: &str, id: &str) -> Result<bool, StoreError>;

    /// Atomically add `by` to an integer field, treating a missing field as 0.
    /// Returns the new value.
    async fn increment(&self, collection: &str, id: &str, field: &str, by: i64) -> Result<i64, StoreError>;
}

// =============================================================================
// POSTGRES
// =============================================================================

pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl DocumentStore for PgDocumentStore {
    async fn query(
        &self,
        collection: &str,
        filters: &[Filter],
        limit: Option<usize>,
    ) -> Result<Vec<Document>, StoreError> {
        let limit = limit.map(|n| i64::try_from(n).unwrap_or(i64::MAX));
        let rows = sqlx::query(
            r"SELECT id, data FROM documents
              WHERE collection = $1 AND data @> $2
              ORDER BY id
              LIMIT $3",
        )
        .bind(collection)
        .bind(containment(filters))
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| Ok(Document { id: row.try_get("id")?, data: row.try_get("data")? }))
            .collect()
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError> {
        let row = sqlx::query("SELECT id, data FROM documents WHERE collection = $1 AND id = $2")
            .bind(collection)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|row| Ok(Document { id: row.try_get("id")?, data: row.try_get("data")? }))
            .transpose()
    }

    async fn put(&self, collection: &str, id: &str, data: Value) -> Result<(), StoreError> {
        sqlx::query(
            r"INSERT INTO documents (collection, id, data)
              VALUES ($1, $2, $3)
              ON CONFLICT (collection, id) DO UPDATE SET data = EXCLUDED.data, updated_at = now()",
        )
        .bind(collection)
        .bind(id)
        .bind(data)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM documents WHERE collection = $1 AND id = $2")
            .bind(collection)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn increment(&self, collection: &str, id: &str, field: &str, by: i64) -> Result<i64, StoreError> {
        let current: Option<Value> =
            sqlx::query_scalar("SELECT data -> $3 FROM documents WHERE collection = $1 AND id = $2")
                .bind(collection)
                .bind(id)
                .bind(field)
                .fetch_optional(&self.pool)
                .await?
                .ok_or_else(|| StoreError::NotFound { collection: collection.to_owned(), id: id.to_owned() })?;
        if current.as_ref().is_some_and(|v| !v.is_i64() && !v.is_null()) {
            return Err(StoreError::NotNumeric {
                collection: collection.to_owned(),
                id: id.to_owned(),
                field: field.to_owned(),
            });
        }

        let value: i64 = sqlx::query_scalar(
            r"UPDATE documents
              SET data = jsonb_set(data, ARRAY[$3::text], to_jsonb(COALESCE((data ->> $3)::bigint, 0) + $4)),
                  updated_at = now()
              WHERE collection = $1 AND id = $2
              RETURNING (data ->> $3)::bigint",
        )
        .bind(collection)
        .bind(id)
        .bind(field)
        .bind(by)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| StoreError::NotFound { collection: collection.to_owned(), id: id.to_owned() })?;
        Ok(value)
    }
}

// =============================================================================
// IN-MEMORY
// =============================================================================

#[derive(Default)]
pub struct MemoryDocumentStore {
    documents: RwLock<BTreeMap<(String, String), Value>>,
}

impl MemoryDocumentStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn query(
        &self,
        collection: &str,
        filters: &[Filter],
        limit: Option<usize>,
    ) -> Result<Vec<Document>, StoreError> {
        let documents = self.documents.read().await;
        Ok(documents
            .iter()
            .filter(|((c, _), data)| c == collection && filters.iter().all(|f| f.matches(data)))
            .take(limit.unwrap_or(usize::MAX))
            .map(|((_, id), data)| Document { id: id.clone(), data: data.clone() })
            .collect())
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError> {
        let documents = self.documents.read().await;
        Ok(documents
            .get(&(collection.to_owned(), id.to_owned()))
            .map(|data| Document { id: id.to_owned(), data: data.clone() }))
    }

    async fn put(&self, collection: &str, id: &str, data: Value) -> Result<(), StoreError> {
        let mut documents = self.documents.write().await;
        documents.insert((collection.to_owned(), id.to_owned()), data);
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<bool, StoreError> {
        let mut documents = self.documents.write().await;
        Ok(documents.remove(&(collection.to_owned(), id.to_owned())).is_some())
    }

    async fn increment(&self, collection: &str, id: &str, field: &str, by: i64) -> Result<i64, StoreError> {
        let mut documents = self.documents.write().await;
        let data = documents
            .get_mut(&(collection.to_owned(), id.to_owned()))
            .ok_or_else(|| StoreError::NotFound { collection: collection.to_owned(), id: id.to_owned() })?;
        let not_numeric =
            || StoreError::NotNumeric { collection: collection.to_owned(), id: id.to_owned(), field: field.to_owned() };

        let object = data.as_object_mut().ok_or_else(not_numeric)?;
        let current = match object.get(field) {
            None | Some(Value::Null) => 0,
            Some(value) => value.as_i64().ok_or_else(not_numeric)?,
        };
        let next = current.checked_add(by).ok_or_else(not_numeric)?;
        object.insert(field.to_owned(), Value::from(next));
        Ok(next)
    }
}
