//! Per-pillar deltas between two scored assessments.

use std::collections::HashMap;

use aim_core::entities::PillarScoreDetail;
use aim_core::responses::PillarDelta;

use crate::rounding::round2;

/// One delta per pillar row of `a`, in `a`'s order. `delta = score_b - score_a`.
///
/// Pillars absent from `b` compare against 0. Pillars only in `b` are dropped.
#[must_use]
pub fn pillar_deltas(a: &[PillarScoreDetail], b: &[PillarScoreDetail]) -> Vec<PillarDelta> {
    let b_scores: HashMap<&str, f64> = b
        .iter()
        .map(|row| (row.score.pillar_id.as_str(), row.score.score))
        .collect();

    a.iter()
        .map(|row| {
            let score_a = row.score.score;
            let score_b = b_scores
                .get(row.score.pillar_id.as_str())
                .copied()
                .unwrap_or(0.0);
            PillarDelta {
                pillar: row.pillar_name.clone(),
                pillar_key: row.pillar_key.clone(),
                score_a,
                score_b,
                delta: round2(score_b - score_a),
            }
        })
        .collect()
}

/// Difference of overall scores; an unscored side counts as 0.
#[must_use]
pub fn overall_delta(a: Option<f64>, b: Option<f64>) -> f64 {
    round2(b.unwrap_or(0.0) - a.unwrap_or(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use aim_core::entities::PillarScore;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    fn detail(assessment: &str, key: &str, order: u32, score: f64) -> PillarScoreDetail {
        PillarScoreDetail {
            score: PillarScore {
                id: format!("psc-{assessment}-{key}"),
                assessment_id: assessment.to_string(),
                pillar_id: format!("plr-{key}"),
                score,
                answered_count: 1,
                total_count: 1,
                updated_at: Utc::now(),
            },
            pillar_key: key.to_string(),
            pillar_name: key.to_uppercase(),
            pillar_order: order,
        }
    }

    #[test]
    fn deltas_follow_first_assessment_order() {
        let a = vec![
            detail("a", "strategy_governance", 1, 1.5),
            detail("a", "ai_security", 6, 2.0),
        ];
        let b = vec![
            detail("b", "ai_security", 6, 3.25),
            detail("b", "strategy_governance", 1, 1.0),
        ];
        let deltas = pillar_deltas(&a, &b);
        let keys: Vec<&str> = deltas.iter().map(|d| d.pillar_key.as_str()).collect();
        assert_eq!(keys, ["strategy_governance", "ai_security"]);
        assert_eq!(deltas[0].delta, -0.5);
        assert_eq!(deltas[1].delta, 1.25);
        assert_eq!(deltas[1].pillar, "AI_SECURITY");
    }

    #[test]
    fn missing_pillar_in_b_compares_against_zero() {
        let a = vec![detail("a", "infrastructure", 5, 2.33)];
        let deltas = pillar_deltas(&a, &[]);
        assert_eq!(deltas[0].score_b, 0.0);
        assert_eq!(deltas[0].delta, -2.33);
    }

    #[test]
    fn pillars_only_in_b_are_dropped() {
        let b = vec![detail("b", "infrastructure", 5, 4.0)];
        assert!(pillar_deltas(&[], &b).is_empty());
    }

    #[test]
    fn delta_is_rounded() {
        let a = vec![detail("a", "ai_development", 3, 1.33)];
        let b = vec![detail("b", "ai_development", 3, 2.67)];
        assert_eq!(pillar_deltas(&a, &b)[0].delta, 1.34);
    }

    #[test]
    fn overall_delta_treats_unscored_as_zero() {
        assert_eq!(overall_delta(Some(1.5), Some(2.75)), 1.25);
        assert_eq!(overall_delta(None, Some(2.0)), 2.0);
        assert_eq!(overall_delta(Some(2.0), None), -2.0);
        assert_eq!(overall_delta(None, None), 0.0);
    }
}
