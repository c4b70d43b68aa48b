//! Maturity Classifier: band the overall score into levels 1–5.
//!
//! | score        | level |
//! |--------------|-------|
//! | `< 1.0`      | 1     |
//! | `[1.0, 2.0)` | 2     |
//! | `[2.0, 3.0)` | 3     |
//! | `[3.0, 3.5]` | 4     |
//! | `> 3.5`      | 5     |
//!
//! Level 4 is half as wide as the others.

use aim_core::enums::MaturityLevel;

#[must_use]
pub fn classify_maturity(overall_score: f64) -> MaturityLevel {
    if overall_score < 1.0 {
        MaturityLevel::Experimental
    } else if overall_score < 2.0 {
        MaturityLevel::Emergent
    } else if overall_score < 3.0 {
        MaturityLevel::Defined
    } else if overall_score <= 3.5 {
        MaturityLevel::Managed
    } else {
        MaturityLevel::Optimized
    }
}
