//! Portfolio-level figures across all assessments.

use aim_core::enums::{AssessmentStatus, RiskLevel};
use aim_core::responses::{DashboardStats, RiskBucket};
use aim_scoring::rounding::round2;

use crate::error::DatabaseError;
use crate::helpers::{get_unsigned, parse_enum};
use crate::repos::assessment::{ASSESSMENT_COLS, row_to_assessment};
use crate::service::AimService;

/// How many recently completed assessments the dashboard lists.
pub const RECENT_LIMIT: u32 = 5;

impl AimService {
    /// Totals, average overall score and risk distribution over completed
    /// assessments, plus the most recently completed ones.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if a query fails.
    pub async fn dashboard_stats(&self) -> Result<DashboardStats, DatabaseError> {
        let completed = AssessmentStatus::Completed.as_str();

        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT COUNT(*),
                        COALESCE(SUM(CASE WHEN status = ?1 THEN 1 ELSE 0 END), 0),
                        AVG(CASE WHEN status = ?1 THEN overall_score END)
                 FROM assessments",
                [completed],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let total_assessments: u32 = get_unsigned(&row, 0)?;
        let completed_assessments: u32 = get_unsigned(&row, 1)?;
        let avg_maturity_score = row.get::<Option<f64>>(2)?.map_or(0.0, round2);

        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT risk_level, COUNT(*) FROM assessments
                 WHERE status = ?1 AND risk_level IS NOT NULL
                 GROUP BY risk_level",
                [completed],
            )
            .await?;
        let mut counts = Vec::new();
        while let Some(row) = rows.next().await? {
            let level: RiskLevel = parse_enum(&row.get::<String>(0)?)?;
            counts.push((level, get_unsigned::<u32>(&row, 1)?));
        }
        let risk_distribution = RiskLevel::ALL
            .iter()
            .filter_map(|level| {
                counts
                    .iter()
                    .find(|(l, _)| l == level)
                    .map(|(_, count)| RiskBucket {
                        level: *level,
                        count: *count,
                    })
            })
            .collect();

        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {ASSESSMENT_COLS} FROM assessments WHERE status = ?1
                     ORDER BY completed_at DESC, rowid DESC LIMIT {RECENT_LIMIT}"
                ),
                [completed],
            )
            .await?;
        let mut recent_assessments = Vec::new();
        while let Some(row) = rows.next().await? {
            recent_assessments.push(row_to_assessment(&row)?);
        }

        Ok(DashboardStats {
            total_assessments,
            completed_assessments,
            avg_maturity_score,
            risk_distribution,
            recent_assessments,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{answer_pillar, express_assessment, test_service};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn empty_database() {
        let svc = test_service().await;
        let stats = svc.dashboard_stats().await.unwrap();
        assert_eq!(stats.total_assessments, 0);
        assert_eq!(stats.completed_assessments, 0);
        assert_eq!(stats.avg_maturity_score, 0.0);
        assert!(stats.risk_distribution.is_empty());
        assert!(stats.recent_assessments.is_empty());
    }

    #[tokio::test]
    async fn only_completed_assessments_count() {
        let svc = test_service().await;
        let _draft = express_assessment(&svc, "acme").await;

        let latent = express_assessment(&svc, "acme").await;
        let latent_score = svc.calculate(&latent.id).await.unwrap();

        let critical = express_assessment(&svc, "globex").await;
        for key in ["employee_usage", "ai_development", "agents_integrations"] {
            answer_pillar(&svc, &critical.id, key, 4).await;
        }
        let critical_score = svc.calculate(&critical.id).await.unwrap();

        let stats = svc.dashboard_stats().await.unwrap();
        assert_eq!(stats.total_assessments, 3);
        assert_eq!(stats.completed_assessments, 2);
        assert_eq!(
            stats.avg_maturity_score,
            round2((latent_score.overall_score + critical_score.overall_score) / 2.0)
        );
        assert_eq!(
            stats.risk_distribution,
            vec![
                RiskBucket {
                    level: RiskLevel::Critical,
                    count: 1
                },
                RiskBucket {
                    level: RiskLevel::Latent,
                    count: 1
                },
            ]
        );
        assert_eq!(stats.recent_assessments.len(), 2);
        assert_eq!(stats.recent_assessments[0].id, critical.id);
    }

    #[tokio::test]
    async fn recent_list_is_capped() {
        let svc = test_service().await;
        for i in 0..7 {
            let asm = express_assessment(&svc, &format!("client-{i}")).await;
            svc.calculate(&asm.id).await.unwrap();
        }
        let stats = svc.dashboard_stats().await.unwrap();
        assert_eq!(stats.completed_assessments, 7);
        assert_eq!(stats.recent_assessments.len(), RECENT_LIMIT as usize);
    }
}
