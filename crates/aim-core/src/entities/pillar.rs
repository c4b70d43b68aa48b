use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A named evaluation dimension with a relative weight.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Pillar {
    pub id: String,
    /// Stable identifier, e.g. `strategy_governance`.
    pub key: String,
    pub name: String,
    pub description: Option<String>,
    /// Non-negative; only meaningful relative to the other weights.
    pub weight: f64,
    pub order: u32,
}
