//! ID prefixes and the stable question ID scheme.
//!
//! Generated IDs look like `asm-a3f8b2c1`: a three-letter prefix, a dash, and
//! eight lowercase hex characters produced by the database.

use crate::enums::AssessmentVariant;

pub const PREFIX_PILLAR: &str = "plr";
pub const PREFIX_ASSESSMENT: &str = "asm";
pub const PREFIX_ANSWER: &str = "ans";
pub const PREFIX_PILLAR_SCORE: &str = "psc";

pub const ALL_PREFIXES: &[&str] = &[
    PREFIX_PILLAR,
    PREFIX_ASSESSMENT,
    PREFIX_ANSWER,
    PREFIX_PILLAR_SCORE,
];

/// Stable question ID, keyed by pillar, variant, and order.
///
/// Reseeding the catalog produces the same IDs, so historical answers stay linked.
#[must_use]
pub fn question_id(pillar_key: &str, variant: AssessmentVariant, order: u32) -> String {
    format!("{pillar_key}_{}_{order}", variant.as_str().to_ascii_lowercase())
}
