use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Persisted per-pillar snapshot, one per (assessment, pillar).
///
/// Recomputed in full on every scoring run.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct PillarScore {
    pub id: String,
    pub assessment_id: String,
    pub pillar_id: String,
    /// Mean of applicable answers, rounded to 2 decimals.
    pub score: f64,
    pub answered_count: u32,
    pub total_count: u32,
    pub updated_at: DateTime<Utc>,
}

/// A pillar score joined with its pillar's display fields.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct PillarScoreDetail {
    #[serde(flatten)]
    pub score: PillarScore,
    pub pillar_key: String,
    pub pillar_name: String,
    pub pillar_order: u32,
}
