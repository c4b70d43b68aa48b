use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::AssessmentVariant;

/// One catalog question. Belongs to exactly one pillar and one variant.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Question {
    /// Stable ID, see [`crate::ids::question_id`].
    pub id: String,
    pub pillar_id: String,
    pub pillar_key: String,
    pub text: String,
    pub variant: AssessmentVariant,
    pub order: u32,
}
