//! Side-by-side comparison of two assessments' persisted scores.

use aim_core::responses::ComparisonResult;
use aim_scoring::compare::{overall_delta, pillar_deltas};

use crate::error::DatabaseError;
use crate::service::AimService;

impl AimService {
    /// Compare the stored snapshots of `a` and `b` (`delta = b - a`).
    ///
    /// Reads what `calculate` last persisted; it does not rescore. An
    /// assessment that was never calculated contributes no pillar rows and an
    /// overall score of 0.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if either assessment is unknown.
    pub async fn compare_assessments(
        &self,
        a: &str,
        b: &str,
    ) -> Result<ComparisonResult, DatabaseError> {
        let assessment_a = self.get_assessment(a).await?;
        let assessment_b = self.get_assessment(b).await?;
        let scores_a = self.get_pillar_scores(a).await?;
        let scores_b = self.get_pillar_scores(b).await?;

        let comparison = pillar_deltas(&scores_a, &scores_b);
        let overall = overall_delta(assessment_a.overall_score, assessment_b.overall_score);
        tracing::debug!(a, b, pillars = comparison.len(), overall, "assessments compared");

        Ok(ComparisonResult {
            assessment_a,
            assessment_b,
            comparison,
            overall_delta: overall,
        })
    }
}
