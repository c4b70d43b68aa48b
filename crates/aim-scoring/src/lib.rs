//! # aim-scoring
//!
//! Pure scoring engine. Takes a snapshot of the pillar catalog and an
//! assessment's answers, and returns pillar scores, a weighted overall score,
//! a maturity level, and a risk level. No I/O; persistence lives in `aim-db`.
//!
//! The pipeline:
//!
//! 1. [`aggregate::aggregate_pillars`] reduces answers to one row per pillar.
//! 2. [`overall::overall_score`] weights the rounded pillar scores.
//! 3. [`maturity::classify_maturity`] bands the overall score.
//! 4. [`risk::evaluate_risk`] runs the decision list over unrounded pillar means.
//!
//! [`recommendation::recommend`] bands persisted pillar scores for reports.

pub mod aggregate;
pub mod compare;
pub mod maturity;
pub mod overall;
pub mod recommendation;
pub mod risk;
pub mod rounding;

mod test_support;

use std::collections::HashMap;

use aim_core::entities::Pillar;
use aim_core::responses::{PillarScoreResult, ScoreResult};

pub use aggregate::{PillarAggregate, ScoredAnswer, aggregate_pillars};
pub use maturity::classify_maturity;
pub use overall::overall_score;
pub use recommendation::{recommend, recommendation_tier};
pub use risk::{RiskComposites, RiskEvaluation, evaluate_risk};

/// Everything one scoring run produces.
#[derive(Debug, Clone, PartialEq)]
pub struct Scorecard {
    pub result: ScoreResult,
    pub aggregates: Vec<PillarAggregate>,
    pub risk: RiskEvaluation,
}

/// Score an assessment against a catalog snapshot.
///
/// Deterministic: the same inputs always produce the same [`Scorecard`].
#[must_use]
pub fn score_assessment(pillars: &[Pillar], answers: &[ScoredAnswer]) -> Scorecard {
    let aggregates = aggregate_pillars(pillars, answers);
    let overall = overall_score(pillars, &aggregates);
    let maturity = classify_maturity(overall);

    let means: HashMap<String, f64> = aggregates
        .iter()
        .map(|agg| (agg.pillar_key.clone(), agg.mean))
        .collect();
    let risk = evaluate_risk(&means);

    let pillar_scores = aggregates
        .iter()
        .map(|agg| PillarScoreResult {
            pillar_id: agg.pillar_id.clone(),
            pillar_key: agg.pillar_key.clone(),
            score: agg.score,
            answered_count: agg.answered_count,
            total_count: agg.total_count,
        })
        .collect();

    Scorecard {
        result: ScoreResult {
            overall_score: overall,
            maturity_level: maturity,
            maturity_label: maturity.label().to_string(),
            risk_level: risk.level,
            pillar_scores,
        },
        aggregates,
        risk,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{PILLAR_KEYS, answer, not_applicable, six_pillars};
    use aim_core::enums::{MaturityLevel, RiskLevel};
    use pretty_assertions::assert_eq;

    fn pillar_score<'a>(card: &'a Scorecard, key: &str) -> &'a PillarScoreResult {
        card.result
            .pillar_scores
            .iter()
            .find(|p| p.pillar_key == key)
            .unwrap()
    }

    fn uniform(scores: &[(&str, u8)]) -> Vec<ScoredAnswer> {
        scores
            .iter()
            .flat_map(|(key, s)| [answer(key, *s), answer(key, *s)])
            .collect()
    }

    #[test]
    fn single_pillar_answered() {
        let pillars = six_pillars(1.0);
        let card = score_assessment(&pillars, &[answer("ai_security", 2), answer("ai_security", 4)]);

        assert_eq!(pillar_score(&card, "ai_security").score, 3.0);
        assert_eq!(card.result.overall_score, 0.5);
        assert_eq!(card.result.maturity_level, MaturityLevel::Experimental);
        assert_eq!(card.result.maturity_label, "Experimental");
        assert_eq!(card.result.pillar_scores.len(), 6);
    }

    #[test]
    fn high_adoption_weak_governance_is_critical() {
        let answers = uniform(&[
            ("employee_usage", 3),
            ("ai_development", 3),
            ("agents_integrations", 3),
            ("strategy_governance", 1),
            ("infrastructure", 1),
            ("ai_security", 3),
        ]);
        let card = score_assessment(&six_pillars(1.0), &answers);
        assert_eq!(card.result.risk_level, RiskLevel::Critical);
        assert_eq!(card.risk.rule, Some("high_adoption_weak_governance"));
    }

    #[test]
    fn modest_adoption_with_controls_is_low() {
        // adoption 1.0, governance (2 + 3) / 2 = 2.5, security 2.5
        let answers = vec![
            answer("employee_usage", 1),
            answer("ai_development", 1),
            answer("agents_integrations", 1),
            answer("strategy_governance", 2),
            answer("infrastructure", 3),
            answer("ai_security", 2),
            answer("ai_security", 3),
        ];
        let card = score_assessment(&six_pillars(1.0), &answers);
        assert_eq!(card.risk.composites.adoption, 1.0);
        assert_eq!(card.risk.composites.governance, 2.5);
        assert_eq!(card.risk.composites.security, 2.5);
        assert_eq!(card.result.risk_level, RiskLevel::Low);
    }

    #[test]
    fn not_applicable_excluded_from_mean() {
        let answers = [
            not_applicable("infrastructure", 3),
            answer("infrastructure", 1),
            answer("infrastructure", 3),
        ];
        let card = score_assessment(&six_pillars(1.0), &answers);
        let infra = pillar_score(&card, "infrastructure");
        assert_eq!(infra.score, 2.0);
        assert_eq!(infra.answered_count, 2);
        assert_eq!(infra.total_count, 3);
    }

    #[test]
    fn no_answers_is_latent_and_experimental() {
        let card = score_assessment(&six_pillars(1.0), &[]);
        assert_eq!(card.result.overall_score, 0.0);
        assert_eq!(card.result.maturity_level, MaturityLevel::Experimental);
        assert_eq!(card.result.risk_level, RiskLevel::Latent);
        assert!(card.result.pillar_scores.iter().all(|p| p.score == 0.0));
    }

    #[test]
    fn all_fours_is_optimized() {
        let answers: Vec<ScoredAnswer> = PILLAR_KEYS.iter().map(|k| answer(k, 4)).collect();
        let card = score_assessment(&six_pillars(1.0), &answers);
        assert_eq!(card.result.overall_score, 4.0);
        assert_eq!(card.result.maturity_level, MaturityLevel::Optimized);
        assert_eq!(card.result.risk_level, RiskLevel::Controlled);
    }

    #[test]
    fn risk_reads_unrounded_means() {
        // (3 + 3 + 2) / 3 is reported as 2.67 but classified as 2.666..
        let answers = vec![
            answer("employee_usage", 3),
            answer("employee_usage", 3),
            answer("employee_usage", 2),
        ];
        let card = score_assessment(&six_pillars(1.0), &answers);
        assert!((card.risk.composites.adoption - 8.0 / 3.0).abs() < f64::EPSILON);
        assert_eq!(pillar_score(&card, "employee_usage").score, 2.67);
    }

    #[test]
    fn scoring_is_deterministic() {
        let pillars = six_pillars(1.0);
        let answers = vec![
            answer("strategy_governance", 1),
            answer("strategy_governance", 2),
            not_applicable("ai_security", 0),
            answer("ai_development", 4),
        ];
        let first = score_assessment(&pillars, &answers);
        let second = score_assessment(&pillars, &answers);
        assert_eq!(first, second);
    }

    #[test]
    fn scores_stay_in_range() {
        let pillars = six_pillars(1.0);
        for s in 0..=4u8 {
            let answers: Vec<ScoredAnswer> = PILLAR_KEYS
                .iter()
                .flat_map(|k| [answer(k, s), answer(k, 4 - s)])
                .collect();
            let card = score_assessment(&pillars, &answers);
            assert!((0.0..=4.0).contains(&card.result.overall_score));
            for p in &card.result.pillar_scores {
                assert!((0.0..=4.0).contains(&p.score));
            }
        }
    }
}
