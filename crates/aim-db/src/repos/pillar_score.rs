//! Pillar score repository: reads of the persisted scoring snapshot.

use aim_core::catalog::Catalog;
use aim_core::entities::{PillarScore, PillarScoreDetail};
use aim_core::responses::PillarScoreReport;
use aim_scoring::recommend;

use crate::error::DatabaseError;
use crate::helpers::{get_unsigned, parse_datetime};
use crate::service::AimService;

fn row_to_detail(row: &libsql::Row) -> Result<PillarScoreDetail, DatabaseError> {
    Ok(PillarScoreDetail {
        score: PillarScore {
            id: row.get(0)?,
            assessment_id: row.get(1)?,
            pillar_id: row.get(2)?,
            score: row.get(3)?,
            answered_count: get_unsigned(row, 4)?,
            total_count: get_unsigned(row, 5)?,
            updated_at: parse_datetime(&row.get::<String>(6)?)?,
        },
        pillar_key: row.get(7)?,
        pillar_name: row.get(8)?,
        pillar_order: get_unsigned(row, 9)?,
    })
}

impl AimService {
    /// Persisted pillar scores of an assessment, in pillar order.
    ///
    /// Empty until the assessment has been calculated.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` for an unknown assessment.
    pub async fn get_pillar_scores(
        &self,
        assessment_id: &str,
    ) -> Result<Vec<PillarScoreDetail>, DatabaseError> {
        self.get_assessment(assessment_id).await?;

        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT s.id, s.assessment_id, s.pillar_id, s.score, s.answered_count,
                        s.total_count, s.updated_at, p.key, p.name, p.ord
                 FROM pillar_scores s JOIN pillars p ON p.id = s.pillar_id
                 WHERE s.assessment_id = ?1
                 ORDER BY p.ord, p.key",
                [assessment_id],
            )
            .await?;

        let mut scores = Vec::new();
        while let Some(row) = rows.next().await? {
            scores.push(row_to_detail(&row)?);
        }
        Ok(scores)
    }

    /// Persisted pillar scores, each with the built-in catalog's
    /// recommendation for its tier.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` for an unknown assessment.
    pub async fn pillar_report(
        &self,
        assessment_id: &str,
    ) -> Result<Vec<PillarScoreReport>, DatabaseError> {
        let catalog = Catalog::builtin()?;
        let scores = self.get_pillar_scores(assessment_id).await?;
        Ok(scores
            .into_iter()
            .map(|detail| {
                let recommendation = recommend(&catalog, &detail.pillar_key, detail.score.score);
                PillarScoreReport {
                    detail,
                    recommendation,
                }
            })
            .collect())
    }
}
