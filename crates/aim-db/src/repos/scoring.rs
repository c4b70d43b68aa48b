//! `calculate`: score an assessment and persist the snapshot.
//!
//! Reads the assessment, the pillar catalog and the answers, runs the pure
//! engine from `aim-scoring`, then writes every pillar score and the
//! assessment's summary fields in a single transaction. Readers see either
//! the previous snapshot or the new one, never a mix.

use chrono::{DateTime, Utc};

use aim_core::enums::AssessmentStatus;
use aim_core::ids::PREFIX_PILLAR_SCORE;
use aim_core::responses::ScoreResult;
use aim_scoring::{PillarAggregate, Scorecard, score_assessment};

use crate::error::DatabaseError;
use crate::service::AimService;

impl AimService {
    /// Recompute and persist all scores of an assessment.
    ///
    /// Marks the assessment COMPLETED. Recalculating a COMPLETED assessment
    /// overwrites its scores and timestamps; the status stays COMPLETED.
    /// Deterministic: with no answer or weight changes in between, repeated
    /// calls return identical results.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` for an unknown assessment. Any
    /// storage failure rolls the whole write back.
    pub async fn calculate(&self, assessment_id: &str) -> Result<ScoreResult, DatabaseError> {
        let assessment = self.get_assessment(assessment_id).await?;
        let pillars = self.list_pillars().await?;
        for pillar in &pillars {
            if !pillar.weight.is_finite() || pillar.weight < 0.0 {
                tracing::warn!(pillar = %pillar.key, weight = pillar.weight, "pillar weight out of range");
            }
        }
        if pillars.iter().all(|p| p.weight <= 0.0) {
            tracing::warn!(assessment = %assessment.id, "total pillar weight is zero; overall score will be 0");
        }

        let answers = self.load_scored_answers(&assessment.id).await?;
        let card = score_assessment(&pillars, &answers);
        tracing::debug!(
            assessment = %assessment.id,
            answers = answers.len(),
            adoption = card.risk.composites.adoption,
            governance = card.risk.composites.governance,
            security = card.risk.composites.security,
            rule = card.risk.rule.unwrap_or("default"),
            "risk classified"
        );

        let mut score_ids = Vec::with_capacity(card.aggregates.len());
        for _ in &card.aggregates {
            score_ids.push(self.db().generate_id(PREFIX_PILLAR_SCORE).await?);
        }

        let now = Utc::now();
        let tx = self.db().conn().transaction().await?;
        let written = write_snapshot(&tx, &assessment.id, &card, &score_ids, now).await;
        match written {
            Ok(()) => tx.commit().await?,
            Err(e) => return Err(crate::abort(tx, "calculate", e).await),
        }

        tracing::info!(
            assessment = %assessment.id,
            overall = card.result.overall_score,
            maturity = card.result.maturity_level.level(),
            risk = %card.result.risk_level,
            "assessment scored"
        );
        Ok(card.result)
    }
}

async fn write_snapshot(
    tx: &libsql::Transaction,
    assessment_id: &str,
    card: &Scorecard,
    score_ids: &[String],
    now: DateTime<Utc>,
) -> Result<(), DatabaseError> {
    for (agg, id) in card.aggregates.iter().zip(score_ids) {
        upsert_pillar_score(tx, assessment_id, agg, id, now).await?;
    }

    tx.execute(
        "UPDATE assessments
         SET overall_score = ?1, maturity_level = ?2, risk_level = ?3,
             status = ?4, completed_at = ?5, updated_at = ?5
         WHERE id = ?6",
        libsql::params![
            card.result.overall_score,
            i64::from(card.result.maturity_level.level()),
            card.result.risk_level.as_str(),
            AssessmentStatus::Completed.as_str(),
            now.to_rfc3339(),
            assessment_id
        ],
    )
    .await?;
    Ok(())
}

async fn upsert_pillar_score(
    tx: &libsql::Transaction,
    assessment_id: &str,
    agg: &PillarAggregate,
    id: &str,
    now: DateTime<Utc>,
) -> Result<(), DatabaseError> {
    tx.execute(
        "INSERT INTO pillar_scores
             (id, assessment_id, pillar_id, score, answered_count, total_count, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
         ON CONFLICT(assessment_id, pillar_id) DO UPDATE SET
             score = excluded.score,
             answered_count = excluded.answered_count,
             total_count = excluded.total_count,
             updated_at = excluded.updated_at",
        libsql::params![
            id,
            assessment_id,
            agg.pillar_id.as_str(),
            agg.score,
            i64::from(agg.answered_count),
            i64::from(agg.total_count),
            now.to_rfc3339()
        ],
    )
    .await?;
    Ok(())
}
