//! General application configuration.

use aim_core::enums::AssessmentVariant;
use serde::{Deserialize, Serialize};

/// Default result limit.
const fn default_limit() -> u32 {
    20
}

const fn default_variant() -> AssessmentVariant {
    AssessmentVariant::Express
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default result limit for list commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// Variant used by `assessment create` when none is given.
    #[serde(default = "default_variant")]
    pub default_variant: AssessmentVariant,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            default_variant: default_variant(),
        }
    }
}
