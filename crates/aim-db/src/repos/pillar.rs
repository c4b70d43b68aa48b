//! Pillar repository: catalog reads and weight administration.

use chrono::Utc;

use aim_core::entities::Pillar;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, get_unsigned};
use crate::service::AimService;

pub(crate) const PILLAR_COLS: &str = "id, key, name, description, weight, ord";

pub(crate) fn row_to_pillar(row: &libsql::Row) -> Result<Pillar, DatabaseError> {
    Ok(Pillar {
        id: row.get(0)?,
        key: row.get(1)?,
        name: row.get(2)?,
        description: get_opt_string(row, 3)?,
        weight: row.get(4)?,
        order: get_unsigned(row, 5)?,
    })
}

impl AimService {
    /// All pillars in display order.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_pillars(&self) -> Result<Vec<Pillar>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {PILLAR_COLS} FROM pillars ORDER BY ord, key"),
                (),
            )
            .await?;

        let mut pillars = Vec::new();
        while let Some(row) = rows.next().await? {
            pillars.push(row_to_pillar(&row)?);
        }
        Ok(pillars)
    }

    /// Look a pillar up by ID or by key.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if neither matches.
    pub async fn get_pillar(&self, id_or_key: &str) -> Result<Pillar, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {PILLAR_COLS} FROM pillars WHERE id = ?1 OR key = ?1"),
                [id_or_key],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found("pillar", id_or_key))?;
        row_to_pillar(&row)
    }

    /// Change a pillar's relative weight. Takes effect on the next `calculate`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Validation` for negative or non-finite weights,
    /// `DatabaseError::NotFound` for an unknown pillar.
    pub async fn set_pillar_weight(
        &self,
        id_or_key: &str,
        weight: f64,
    ) -> Result<Pillar, DatabaseError> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(DatabaseError::Validation(format!(
                "pillar weight must be a finite, non-negative number (got {weight})"
            )));
        }

        let current = self.get_pillar(id_or_key).await?;
        self.db()
            .conn()
            .execute(
                "UPDATE pillars SET weight = ?1, updated_at = ?2 WHERE id = ?3",
                libsql::params![weight, Utc::now().to_rfc3339(), current.id.as_str()],
            )
            .await?;

        tracing::info!(pillar = %current.key, from = current.weight, to = weight, "pillar weight updated");
        Ok(Pillar { weight, ..current })
    }

    pub(crate) async fn count_pillars(&self) -> Result<u32, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query("SELECT COUNT(*) FROM pillars", ())
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        get_unsigned(&row, 0)
    }
}
