use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{AssessmentStatus, AssessmentVariant, MaturityLevel, RiskLevel};

/// One evaluation run for one client organization.
///
/// `overall_score`, `maturity_level`, and `risk_level` stay `None` until the
/// assessment has been scored at least once.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Assessment {
    pub id: String,
    pub client_id: String,
    pub variant: AssessmentVariant,
    pub status: AssessmentStatus,
    pub created_by: Option<String>,
    pub overall_score: Option<f64>,
    #[schemars(with = "Option<u8>")]
    pub maturity_level: Option<MaturityLevel>,
    pub risk_level: Option<RiskLevel>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Assessment {
    #[must_use]
    pub const fn is_scored(&self) -> bool {
        self.overall_score.is_some()
    }
}
