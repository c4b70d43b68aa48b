//! Variants, lifecycle statuses, risk categories, maturity levels, and
//! recommendation tiers.
//!
//! String enums serialize as `SCREAMING_SNAKE_CASE` (`EXPRESS`, `IN_PROGRESS`,
//! `CRITICAL`), which is also their SQL storage form. `MaturityLevel` is stored
//! and serialized as its integer level.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// AssessmentVariant
// ---------------------------------------------------------------------------

/// Questionnaire variant chosen for an assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssessmentVariant {
    /// Short-form questionnaire.
    Express,
    /// Full-form questionnaire.
    Advanced,
}

impl AssessmentVariant {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Express => "EXPRESS",
            Self::Advanced => "ADVANCED",
        }
    }
}

impl fmt::Display for AssessmentVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AssessmentStatus
// ---------------------------------------------------------------------------

/// Lifecycle of an assessment.
///
/// ```text
/// draft → in_progress → completed
///       ↘ completed
/// ```
///
/// `Completed` is terminal. Re-scoring a completed assessment overwrites its
/// scores but never moves it out of `Completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssessmentStatus {
    Draft,
    InProgress,
    Completed,
}

impl AssessmentStatus {
    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Draft => &[Self::InProgress, Self::Completed],
            Self::InProgress => &[Self::Completed],
            Self::Completed => &[],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    /// Status after one or more answers have been recorded.
    #[must_use]
    pub fn after_answers(self) -> Self {
        if self.can_transition_to(Self::InProgress) {
            Self::InProgress
        } else {
            self
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
        }
    }
}

impl fmt::Display for AssessmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RiskLevel
// ---------------------------------------------------------------------------

/// Risk category derived from the adoption/governance/security balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Controlled,
    Low,
    Medium,
    High,
    Critical,
    Latent,
}

impl RiskLevel {
    pub const ALL: [Self; 6] = [
        Self::Controlled,
        Self::Low,
        Self::Medium,
        Self::High,
        Self::Critical,
        Self::Latent,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Controlled => "CONTROLLED",
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
            Self::Latent => "LATENT",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// MaturityLevel
// ---------------------------------------------------------------------------

/// Discrete maturity band, levels 1 through 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum MaturityLevel {
    Experimental = 1,
    Emergent = 2,
    Defined = 3,
    Managed = 4,
    Optimized = 5,
}

impl MaturityLevel {
    #[must_use]
    pub const fn level(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Experimental => "Experimental",
            Self::Emergent => "Emergent",
            Self::Defined => "Defined",
            Self::Managed => "Managed",
            Self::Optimized => "Optimized",
        }
    }
}

impl TryFrom<u8> for MaturityLevel {
    type Error = CoreError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            1 => Ok(Self::Experimental),
            2 => Ok(Self::Emergent),
            3 => Ok(Self::Defined),
            4 => Ok(Self::Managed),
            5 => Ok(Self::Optimized),
            other => Err(CoreError::Validation(format!(
                "maturity level must be 1..=5, got {other}"
            ))),
        }
    }
}

impl From<MaturityLevel> for u8 {
    fn from(level: MaturityLevel) -> Self {
        level.level()
    }
}

impl fmt::Display for MaturityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.level(), self.label())
    }
}

// ---------------------------------------------------------------------------
// RecommendationTier
// ---------------------------------------------------------------------------

/// Which of a pillar's three recommendation texts applies to its score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecommendationTier {
    Low,
    Medium,
    High,
}

impl RecommendationTier {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }
}

impl fmt::Display for RecommendationTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
