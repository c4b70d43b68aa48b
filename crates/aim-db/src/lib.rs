//! # aim-db
//!
//! libSQL storage for AI maturity assessments.
//!
//! Holds the pillar/question catalog, assessments, answers, and the
//! persisted pillar-score snapshots. Scoring itself is delegated to
//! `aim-scoring`; this crate reads the inputs, runs the engine, and writes
//! the results back in one transaction.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod seed;
pub mod service;
mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Database handle: a libSQL database plus its single connection.
pub struct AimDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl AimDb {
    /// Open a local database at the given path, or `":memory:"`.
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let aim_db = Self { db, conn };
        aim_db.run_migrations().await?;
        tracing::debug!(path, "database opened");
        Ok(aim_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Generate a prefixed ID via libSQL. Returns e.g., `"asm-a3f8b2c1"`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or returns no rows.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                &format!("SELECT '{prefix}-' || lower(hex(randomblob(4)))"),
                (),
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<String>(0)?)
    }
}

/// Roll back a failed transaction and hand back the error that caused it.
///
/// A failing rollback is logged at warn and not returned.
pub(crate) async fn abort(
    tx: libsql::Transaction,
    operation: &str,
    error: DatabaseError,
) -> DatabaseError {
    if let Err(rollback_error) = tx.rollback().await {
        tracing::warn!(
            operation,
            %error,
            %rollback_error,
            "rollback failed after write error"
        );
    }
    error
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_db() -> AimDb {
        AimDb::open_local(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn open_local_creates_schema() {
        let db = test_db().await;

        let tables = ["pillars", "questions", "assessments", "answers", "pillar_scores"];
        for table in &tables {
            let mut rows = db
                .conn()
                .query(
                    "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                    [*table],
                )
                .await
                .unwrap();
            let row = rows.next().await.unwrap();
            assert!(row.is_some(), "table '{table}' should exist");
        }
    }

    #[tokio::test]
    async fn migrations_are_idempotent() {
        let db = test_db().await;
        db.run_migrations().await.unwrap();
    }

    #[tokio::test]
    async fn foreign_keys_are_enforced() {
        let db = test_db().await;
        let result = db
            .conn()
            .execute(
                "INSERT INTO answers (id, assessment_id, question_id, score) \
                 VALUES ('ans-1', 'asm-missing', 'q-missing', 1)",
                (),
            )
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn generate_id_correct_format() {
        let db = test_db().await;
        let id = db.generate_id("asm").await.unwrap();
        assert!(id.starts_with("asm-"), "ID should start with 'asm-': {id}");
        assert_eq!(id.len(), 12, "3 prefix + 1 dash + 8 hex: {id}");
        assert!(id[4..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[tokio::test]
    async fn abort_discards_writes_and_keeps_the_cause() {
        let db = test_db().await;
        let tx = db.conn().transaction().await.unwrap();
        tx.execute(
            "INSERT INTO pillars (id, key, name, ord, weight) \
             VALUES ('plr-1', 'ai_security', 'AI Security', 1, 1.0)",
            (),
        )
        .await
        .unwrap();

        let err = abort(tx, "test", DatabaseError::Validation("bad".into())).await;
        assert_eq!(err.kind(), "validation");

        let mut rows = db.conn().query("SELECT COUNT(*) FROM pillars", ()).await.unwrap();
        let count: i64 = rows.next().await.unwrap().unwrap().get(0).unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn generate_id_all_prefixes() {
        let db = test_db().await;
        for prefix in aim_core::ids::ALL_PREFIXES {
            let id = db.generate_id(prefix).await.unwrap();
            assert!(id.starts_with(&format!("{prefix}-")));
        }
    }
}
