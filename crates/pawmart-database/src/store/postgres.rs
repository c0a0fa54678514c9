//! PostgreSQL document store: every collection lives in one JSONB table.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::types::Json;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use tracing::debug;
use uuid::Uuid;

use pawmart_core::error::{AppError, ErrorKind};
use pawmart_core::result::AppResult;
use pawmart_core::traits::DocumentStore;
use pawmart_core::types::{Document, Fields, FindQuery, SortField, UpsertOutcome};

/// Document store on the `documents` table.
#[derive(Debug, Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
}

#[derive(Debug, FromRow)]
struct DocumentRow {
    id: Uuid,
    body: Json<Fields>,
}

impl From<DocumentRow> for Document {
    fn from(row: DocumentRow) -> Self {
        Document::with_id(row.id, row.body.0)
    }
}

impl PgDocumentStore {
    /// Create a store over an existing pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Appends `ORDER BY`. Timestamps sort on the stored body value so both
/// backends agree on newest-first.
fn push_order(qb: &mut QueryBuilder<'_, Postgres>, sort: Option<&SortField>) {
    match sort {
        Some(sort) if matches!(sort.field.as_str(), "created_at" | "updated_at") => {
            let dir = sort.direction.as_sql();
            qb.push(" ORDER BY (body ->> ")
                .push_bind(sort.field.clone())
                .push(format!(")::timestamptz {dir}, id {dir}"));
        }
        Some(sort) => {
            let dir = sort.direction.as_sql();
            qb.push(" ORDER BY body -> ")
                .push_bind(sort.field.clone())
                .push(format!(" {dir}, id {dir}"));
        }
        None => {
            qb.push(" ORDER BY id ASC");
        }
    }
}

fn store_error(context: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
    move |e| AppError::with_source(ErrorKind::StoreUnavailable, context, e)
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn find(&self, collection: &str, query: &FindQuery) -> AppResult<Vec<Document>> {
        let mut qb: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT id, body FROM documents WHERE collection = ");
        qb.push_bind(collection.to_string());

        for (field, value) in &query.filter {
            qb.push(" AND body -> ")
                .push_bind(field.clone())
                .push(" = ")
                .push_bind(Json(value.clone()));
        }

        push_order(&mut qb, query.sort.as_ref());

        if let Some(limit) = query.limit {
            qb.push(" LIMIT ").push_bind(limit as i64);
        }

        let rows = qb
            .build_query_as::<DocumentRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(store_error("Failed to query documents"))?;

        Ok(rows.into_iter().map(Document::from).collect())
    }

    async fn find_by_id(&self, collection: &str, id: Uuid) -> AppResult<Option<Document>> {
        let row = sqlx::query_as::<_, DocumentRow>(
            "SELECT id, body FROM documents WHERE collection = $1 AND id = $2",
        )
        .bind(collection)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(store_error("Failed to find document by id"))?;

        Ok(row.map(Document::from))
    }

    async fn find_one_by(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> AppResult<Option<Document>> {
        let row = sqlx::query_as::<_, DocumentRow>(
            r#"SELECT id, body FROM documents
               WHERE collection = $1 AND body ->> $2 = $3
               ORDER BY created_at ASC
               LIMIT 1"#,
        )
        .bind(collection)
        .bind(field)
        .bind(value)
        .fetch_optional(&self.pool)
        .await
        .map_err(store_error("Failed to find document by field"))?;

        Ok(row.map(Document::from))
    }

    async fn insert(&self, collection: &str, document: Document) -> AppResult<Uuid> {
        sqlx::query("INSERT INTO documents (collection, id, body) VALUES ($1, $2, $3)")
            .bind(collection)
            .bind(document.id)
            .bind(Json(&document.body))
            .execute(&self.pool)
            .await
            .map_err(store_error("Failed to insert document"))?;

        debug!(collection, id = %document.id, "Inserted document");
        Ok(document.id)
    }

    async fn update(&self, collection: &str, id: Uuid, set: Fields) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE documents SET body = body || $3 WHERE collection = $1 AND id = $2",
        )
        .bind(collection)
        .bind(id)
        .bind(Json(set))
        .execute(&self.pool)
        .await
        .map_err(store_error("Failed to update document"))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, collection: &str, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM documents WHERE collection = $1 AND id = $2")
            .bind(collection)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(store_error("Failed to delete document"))?;

        Ok(result.rows_affected() > 0)
    }

    async fn upsert_by(
        &self,
        collection: &str,
        key_field: &str,
        key: &str,
        mut replacement: Fields,
        on_insert: Fields,
    ) -> AppResult<UpsertOutcome> {
        replacement.insert(key_field.to_string(), Value::from(key));
        let kept_keys: Vec<String> = on_insert.keys().cloned().collect();
        let mut body = replacement;
        body.extend(on_insert);

        // On conflict the incoming body wins, except for `kept_keys`, which
        // are restored from the stored row when it has them.
        let (id, inserted): (Uuid, bool) = sqlx::query_as(
            r#"INSERT INTO documents (collection, id, natural_key, body)
               VALUES ($1, $2, $3, $4)
               ON CONFLICT (collection, natural_key) DO UPDATE
               SET body = EXCLUDED.body || COALESCE(
                   (SELECT jsonb_object_agg(kv.key, kv.value)
                      FROM jsonb_each(documents.body) AS kv
                     WHERE kv.key = ANY($5)),
                   '{}'::jsonb)
               RETURNING id, (xmax = 0) AS inserted"#,
        )
        .bind(collection)
        .bind(Uuid::now_v7())
        .bind(key)
        .bind(Json(body))
        .bind(kept_keys)
        .fetch_one(&self.pool)
        .await
        .map_err(store_error("Failed to upsert document"))?;

        Ok(if inserted {
            UpsertOutcome::Inserted(id)
        } else {
            UpsertOutcome::Replaced(id)
        })
    }

    async fn health_check(&self) -> AppResult<bool> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|v| v == 1)
            .map_err(store_error("Health check failed"))
    }
}
