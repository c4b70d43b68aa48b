//! Assessment repository: lifecycle and listing.

use chrono::Utc;

use aim_core::entities::Assessment;
use aim_core::enums::{AssessmentStatus, AssessmentVariant, MaturityLevel};
use aim_core::ids::PREFIX_ASSESSMENT;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime, parse_enum, parse_optional_datetime};
use crate::service::AimService;

pub(crate) const ASSESSMENT_COLS: &str = "id, client_id, variant, status, created_by, \
     overall_score, maturity_level, risk_level, created_at, updated_at, completed_at";

const DEFAULT_LIST_LIMIT: u32 = 20;

#[derive(Debug, Clone, Default)]
pub struct AssessmentFilter {
    pub client_id: Option<String>,
    pub status: Option<AssessmentStatus>,
    pub variant: Option<AssessmentVariant>,
    pub limit: Option<u32>,
}

pub(crate) fn row_to_assessment(row: &libsql::Row) -> Result<Assessment, DatabaseError> {
    let maturity_level = row
        .get::<Option<i64>>(6)?
        .map(|raw| {
            u8::try_from(raw)
                .map_err(|_| DatabaseError::Query(format!("invalid maturity level {raw}")))
                .and_then(|level| MaturityLevel::try_from(level).map_err(DatabaseError::from))
        })
        .transpose()?;

    Ok(Assessment {
        id: row.get(0)?,
        client_id: row.get(1)?,
        variant: parse_enum(&row.get::<String>(2)?)?,
        status: parse_enum(&row.get::<String>(3)?)?,
        created_by: get_opt_string(row, 4)?,
        overall_score: row.get::<Option<f64>>(5)?,
        maturity_level,
        risk_level: get_opt_string(row, 7)?
            .map(|s| parse_enum(&s))
            .transpose()?,
        created_at: parse_datetime(&row.get::<String>(8)?)?,
        updated_at: parse_datetime(&row.get::<String>(9)?)?,
        completed_at: parse_optional_datetime(get_opt_string(row, 10)?.as_deref())?,
    })
}

impl AimService {
    /// Start a new DRAFT assessment for a client.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Validation` for an empty client ID.
    pub async fn create_assessment(
        &self,
        client_id: &str,
        variant: AssessmentVariant,
        created_by: Option<&str>,
    ) -> Result<Assessment, DatabaseError> {
        let client_id = client_id.trim();
        if client_id.is_empty() {
            return Err(DatabaseError::Validation("client ID must not be empty".into()));
        }

        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_ASSESSMENT).await?;

        self.db()
            .conn()
            .execute(
                "INSERT INTO assessments (id, client_id, variant, status, created_by, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                libsql::params![
                    id.as_str(),
                    client_id,
                    variant.as_str(),
                    AssessmentStatus::Draft.as_str(),
                    created_by,
                    now.to_rfc3339(),
                    now.to_rfc3339()
                ],
            )
            .await?;

        tracing::debug!(assessment = %id, client = client_id, %variant, "assessment created");

        Ok(Assessment {
            id,
            client_id: client_id.to_string(),
            variant,
            status: AssessmentStatus::Draft,
            created_by: created_by.map(String::from),
            overall_score: None,
            maturity_level: None,
            risk_level: None,
            created_at: now,
            updated_at: now,
            completed_at: None,
        })
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no assessment has this ID.
    pub async fn get_assessment(&self, id: &str) -> Result<Assessment, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {ASSESSMENT_COLS} FROM assessments WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found("assessment", id))?;
        row_to_assessment(&row)
    }

    /// Assessments matching `filter`, newest first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_assessments(
        &self,
        filter: &AssessmentFilter,
    ) -> Result<Vec<Assessment>, DatabaseError> {
        let mut conditions = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();

        if let Some(ref client_id) = filter.client_id {
            params.push(libsql::Value::Text(client_id.clone()));
            conditions.push(format!("client_id = ?{}", params.len()));
        }
        if let Some(status) = filter.status {
            params.push(libsql::Value::Text(status.as_str().to_string()));
            conditions.push(format!("status = ?{}", params.len()));
        }
        if let Some(variant) = filter.variant {
            params.push(libsql::Value::Text(variant.as_str().to_string()));
            conditions.push(format!("variant = ?{}", params.len()));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let limit = filter.limit.unwrap_or(DEFAULT_LIST_LIMIT);
        let sql = format!(
            "SELECT {ASSESSMENT_COLS} FROM assessments {where_clause}
             ORDER BY created_at DESC, rowid DESC LIMIT {limit}"
        );

        let mut rows = self
            .db()
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;
        let mut assessments = Vec::new();
        while let Some(row) = rows.next().await? {
            assessments.push(row_to_assessment(&row)?);
        }
        Ok(assessments)
    }
}
