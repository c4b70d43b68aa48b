//! Overall Scorer: weighted mean of pillar scores.

use std::collections::HashMap;

use aim_core::entities::Pillar;

use crate::aggregate::PillarAggregate;
use crate::rounding::round2;

/// Weight used when a pillar score has no matching catalog entry.
pub const FALLBACK_WEIGHT: f64 = 1.0;

/// Weighted overall score on the 0–4 scale, rounded to 2 decimals.
///
/// ```text
/// overall = Σ score(p) · weight(p) / Σ weight(p)     when Σ weight > 0
///         = 0                                         otherwise
/// ```
///
/// The denominator sums every pillar in `pillars`, not just the ones with
/// answers. Uses the rounded pillar scores.
#[must_use]
pub fn overall_score(pillars: &[Pillar], aggregates: &[PillarAggregate]) -> f64 {
    let total_weight: f64 = pillars.iter().map(|p| p.weight).sum();
    if !(total_weight.is_finite() && total_weight > 0.0) {
        return 0.0;
    }

    let weights: HashMap<&str, f64> = pillars.iter().map(|p| (p.id.as_str(), p.weight)).collect();
    let weighted: f64 = aggregates
        .iter()
        .map(|agg| {
            let weight = weights
                .get(agg.pillar_id.as_str())
                .copied()
                .unwrap_or(FALLBACK_WEIGHT);
            agg.score * weight
        })
        .sum();

    round2(weighted / total_weight)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::aggregate_pillars;
    use crate::test_support::helpers::{answer, pillar, six_pillars};

    #[test]
    fn equal_weights_average_over_all_pillars() {
        let pillars = six_pillars(1.0);
        let aggs = aggregate_pillars(&pillars, &[answer("ai_security", 2), answer("ai_security", 4)]);
        assert_eq!(overall_score(&pillars, &aggs), 0.5);
    }

    #[test]
    fn weights_shift_the_mean() {
        let pillars = vec![pillar("a", 3.0, 1), pillar("b", 1.0, 2)];
        let aggs = aggregate_pillars(&pillars, &[answer("a", 4), answer("b", 0)]);
        assert_eq!(overall_score(&pillars, &aggs), 3.0);
    }

    #[test]
    fn zero_total_weight_scores_zero() {
        let pillars = vec![pillar("a", 0.0, 1), pillar("b", 0.0, 2)];
        let aggs = aggregate_pillars(&pillars, &[answer("a", 4), answer("b", 4)]);
        assert_eq!(overall_score(&pillars, &aggs), 0.0);
    }

    #[test]
    fn empty_catalog_scores_zero() {
        assert_eq!(overall_score(&[], &[]), 0.0);
    }

    #[test]
    fn zero_weight_pillar_is_ignored() {
        let pillars = vec![pillar("a", 1.0, 1), pillar("b", 0.0, 2)];
        let aggs = aggregate_pillars(&pillars, &[answer("a", 2), answer("b", 4)]);
        assert_eq!(overall_score(&pillars, &aggs), 2.0);
    }

    #[test]
    fn unknown_pillar_falls_back_to_unit_weight() {
        let pillars = vec![pillar("a", 1.0, 1), pillar("b", 1.0, 2)];
        let stray = PillarAggregate {
            pillar_id: "plr-stray".into(),
            pillar_key: "stray".into(),
            mean: 2.0,
            score: 2.0,
            answered_count: 1,
            total_count: 1,
        };
        assert_eq!(overall_score(&pillars, &[stray]), 1.0);
    }

    #[test]
    fn seeded_weights_mix() {
        // 1.2, 1.0, 1.0, 0.8, 1.0, 1.5 with every pillar at 2 except security at 4
        let weights = [1.2, 1.0, 1.0, 0.8, 1.0, 1.5];
        let pillars: Vec<Pillar> = six_pillars(1.0)
            .into_iter()
            .zip(weights)
            .map(|(mut p, w)| {
                p.weight = w;
                p
            })
            .collect();
        let mut answers = Vec::new();
        for p in &pillars {
            let score = if p.key == "ai_security" { 4 } else { 2 };
            answers.push(answer(&p.key, score));
        }
        let aggs = aggregate_pillars(&pillars, &answers);
        // (2 * 5.0 + 4 * 1.5) / 6.5 = 16 / 6.5 = 2.4615...
        assert_eq!(overall_score(&pillars, &aggs), 2.46);
    }
}
