//! Per-pillar recommendation: band a pillar score into a tier, then pick the
//! catalog text for that pillar and tier.
//!
//! | score        | tier   |
//! |--------------|--------|
//! | `< 1.5`      | LOW    |
//! | `[1.5, 3.0)` | MEDIUM |
//! | `>= 3.0`     | HIGH   |
//!
//! Pillars the catalog has no texts for get the catalog's generic text.

use aim_core::catalog::Catalog;
use aim_core::enums::RecommendationTier;
use aim_core::responses::Recommendation;

#[must_use]
pub fn recommendation_tier(score: f64) -> RecommendationTier {
    if score < 1.5 {
        RecommendationTier::Low
    } else if score < 3.0 {
        RecommendationTier::Medium
    } else {
        RecommendationTier::High
    }
}

/// Tier and text for one pillar score.
#[must_use]
pub fn recommend(catalog: &Catalog, pillar_key: &str, score: f64) -> Recommendation {
    let tier = recommendation_tier(score);
    let text = catalog
        .pillar(pillar_key)
        .and_then(|pillar| pillar.recommendations.as_ref())
        .map_or(catalog.generic_recommendation.as_str(), |recs| {
            recs.for_tier(tier)
        });
    Recommendation {
        tier,
        text: text.to_string(),
    }
}
