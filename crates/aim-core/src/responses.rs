//! Response contracts handed to callers of the scoring engine.
//!
//! These use `camelCase` field names: they are the wire shape consumed by the
//! submission, report, and comparison collaborators.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Assessment, PillarScoreDetail};
use crate::enums::{AssessmentStatus, MaturityLevel, RecommendationTier, RiskLevel};

/// Per-pillar line of a [`ScoreResult`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PillarScoreResult {
    pub pillar_id: String,
    pub pillar_key: String,
    pub score: f64,
    pub answered_count: u32,
    pub total_count: u32,
}

/// Result of one `calculate` invocation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub overall_score: f64,
    #[schemars(with = "u8")]
    pub maturity_level: MaturityLevel,
    pub maturity_label: String,
    pub risk_level: RiskLevel,
    pub pillar_scores: Vec<PillarScoreResult>,
}

/// Recommendation picked for one pillar score.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Recommendation {
    pub tier: RecommendationTier,
    pub text: String,
}

/// A persisted pillar score with its recommendation, as read by reports.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct PillarScoreReport {
    #[serde(flatten)]
    pub detail: PillarScoreDetail,
    pub recommendation: Recommendation,
}

/// Outcome of an answer submission.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionSummary {
    pub assessment_id: String,
    pub saved: u32,
    pub status: AssessmentStatus,
}

/// Per-pillar delta between two assessments (`delta = scoreB - scoreA`).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PillarDelta {
    pub pillar: String,
    pub pillar_key: String,
    pub score_a: f64,
    pub score_b: f64,
    pub delta: f64,
}

/// Side-by-side comparison of two assessments.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub assessment_a: Assessment,
    pub assessment_b: Assessment,
    pub comparison: Vec<PillarDelta>,
    pub overall_delta: f64,
}

/// Count of completed assessments in one risk category.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RiskBucket {
    pub level: RiskLevel,
    pub count: u32,
}

/// Aggregate figures for the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_assessments: u32,
    pub completed_assessments: u32,
    pub avg_maturity_score: f64,
    pub risk_distribution: Vec<RiskBucket>,
    pub recent_assessments: Vec<Assessment>,
}
