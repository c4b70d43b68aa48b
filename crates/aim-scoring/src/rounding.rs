//! Two-decimal rounding shared by every derived score.
//!
//! Ties round away from zero (`f64::round`), so `0.125 -> 0.13` and
//! `-0.125 -> -0.13`. Pillar scores, overall scores, and comparison deltas all
//! go through [`round2`].

/// Round to 2 decimal places, ties away from zero.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
