//! PostgreSQL-backed book lookup

use futures::future::BoxFuture;
use hostgate_shared::{LookupError, BOOKS_TABLE};
use sqlx::PgPool;

use super::BookLookup;

/// Book lookup over the catalog table
#[derive(Clone)]
pub struct PgBookStore {
    pool: PgPool,
}

impl PgBookStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Count books with `slug`, optionally only those with the flag set
    pub async fn count(&self, slug: &str, require_flag: bool) -> Result<i64, LookupError> {
        let sql = count_query(require_flag);
        let count: i64 = sqlx::query_scalar(&sql)
            .bind(slug)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(slug = %slug, error = ?e, "Book lookup failed");
                LookupError::from(e)
            })?;

        Ok(count)
    }
}

impl BookLookup for PgBookStore {
    fn exists<'a>(
        &'a self,
        slug: &'a str,
        require_flag: bool,
    ) -> BoxFuture<'a, Result<bool, LookupError>> {
        Box::pin(async move { Ok(self.count(slug, require_flag).await? == 1) })
    }
}

fn count_query(require_flag: bool) -> String {
    if require_flag {
        format!("SELECT COUNT(*) FROM {BOOKS_TABLE} WHERE slug = $1 AND display_in_index = TRUE")
    } else {
        format!("SELECT COUNT(*) FROM {BOOKS_TABLE} WHERE slug = $1")
    }
}
