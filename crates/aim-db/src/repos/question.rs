//! Question repository: catalog question reads.

use aim_core::entities::Question;
use aim_core::enums::AssessmentVariant;

use crate::error::DatabaseError;
use crate::helpers::{get_unsigned, parse_enum};
use crate::service::AimService;

const QUESTION_SELECT: &str = "SELECT q.id, q.pillar_id, p.key, q.text, q.variant, q.ord
     FROM questions q JOIN pillars p ON p.id = q.pillar_id";

fn row_to_question(row: &libsql::Row) -> Result<Question, DatabaseError> {
    Ok(Question {
        id: row.get(0)?,
        pillar_id: row.get(1)?,
        pillar_key: row.get(2)?,
        text: row.get(3)?,
        variant: parse_enum(&row.get::<String>(4)?)?,
        order: get_unsigned(row, 5)?,
    })
}

impl AimService {
    /// Questions filtered by variant and/or pillar (ID or key), ordered by
    /// pillar order then question order.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_questions(
        &self,
        variant: Option<AssessmentVariant>,
        pillar: Option<&str>,
    ) -> Result<Vec<Question>, DatabaseError> {
        let mut conditions = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();

        if let Some(variant) = variant {
            params.push(libsql::Value::Text(variant.as_str().to_string()));
            conditions.push(format!("q.variant = ?{}", params.len()));
        }
        if let Some(pillar) = pillar {
            params.push(libsql::Value::Text(pillar.to_string()));
            let n = params.len();
            conditions.push(format!("(p.id = ?{n} OR p.key = ?{n})"));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("{QUESTION_SELECT} {where_clause} ORDER BY p.ord, q.variant DESC, q.ord"),
                libsql::params_from_iter(params),
            )
            .await?;

        let mut questions = Vec::new();
        while let Some(row) = rows.next().await? {
            questions.push(row_to_question(&row)?);
        }
        Ok(questions)
    }

    /// Fetch one question by its stable ID.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if it does not exist.
    pub async fn get_question(&self, id: &str) -> Result<Question, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(&format!("{QUESTION_SELECT} WHERE q.id = ?1"), [id])
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found("question", id))?;
        row_to_question(&row)
    }
}
