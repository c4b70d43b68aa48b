//! Risk Classifier: an ordered decision list over three pillar composites.
//!
//! Composites:
//! - `adoption`: mean of `employee_usage`, `ai_development`, `agents_integrations`
//! - `governance`: mean of `strategy_governance`, `infrastructure`
//! - `security`: `ai_security` as is
//!
//! A pillar scoring exactly 0 is treated as "no signal" and left out of the
//! adoption and governance means, so a pillar truly rated 0 is
//! indistinguishable from one with no answers. When every pillar of a
//! composite is left out, the composite is 0.
//!
//! [`RISK_RULES`] is evaluated top to bottom and the first match wins. The
//! rules overlap; their order is part of the classification.

use std::collections::HashMap;

use serde::Serialize;

use aim_core::enums::RiskLevel;

pub const ADOPTION_PILLARS: [&str; 3] = ["employee_usage", "ai_development", "agents_integrations"];
pub const GOVERNANCE_PILLARS: [&str; 2] = ["strategy_governance", "infrastructure"];
pub const SECURITY_PILLAR: &str = "ai_security";

/// The three derived scores the decision list reads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskComposites {
    pub adoption: f64,
    pub governance: f64,
    pub security: f64,
}

impl RiskComposites {
    /// Derive composites from a pillar key → score map.
    #[must_use]
    pub fn from_pillar_scores(scores: &HashMap<String, f64>) -> Self {
        Self {
            adoption: signal_mean(scores, &ADOPTION_PILLARS),
            governance: signal_mean(scores, &GOVERNANCE_PILLARS),
            security: scores.get(SECURITY_PILLAR).copied().unwrap_or(0.0),
        }
    }
}

fn signal_mean(scores: &HashMap<String, f64>, keys: &[&str]) -> f64 {
    let signals: Vec<f64> = keys
        .iter()
        .map(|key| scores.get(*key).copied().unwrap_or(0.0))
        .filter(|score| *score > 0.0)
        .collect();
    if signals.is_empty() {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let n = signals.len() as f64;
    signals.iter().sum::<f64>() / n
}

/// One entry of the decision list.
#[derive(Debug, Clone, Copy)]
pub struct RiskRule {
    pub name: &'static str,
    pub level: RiskLevel,
    pub applies: fn(&RiskComposites) -> bool,
}

/// Ordered decision list. Anything that matches none of these is `MEDIUM`.
pub const RISK_RULES: [RiskRule; 6] = [
    RiskRule {
        name: "high_adoption_weak_governance",
        level: RiskLevel::Critical,
        applies: |c| c.adoption > 2.5 && c.governance < 1.5,
    },
    RiskRule {
        name: "high_adoption_weak_security",
        level: RiskLevel::High,
        applies: |c| c.adoption > 2.5 && c.security < 2.5,
    },
    RiskRule {
        name: "low_adoption_weak_governance",
        level: RiskLevel::Latent,
        applies: |c| c.adoption < 1.5 && c.governance < 1.5,
    },
    RiskRule {
        name: "high_adoption_controlled",
        level: RiskLevel::Controlled,
        applies: |c| c.adoption > 2.5 && c.security >= 2.5 && c.governance >= 2.0,
    },
    RiskRule {
        name: "growing_adoption_gaps",
        level: RiskLevel::High,
        applies: |c| c.adoption > 2.0 && (c.security < 2.0 || c.governance < 2.0),
    },
    RiskRule {
        name: "modest_adoption_covered",
        level: RiskLevel::Low,
        applies: |c| c.adoption <= 2.0 && c.governance >= 2.0 && c.security >= 2.0,
    },
];

pub const DEFAULT_RISK: RiskLevel = RiskLevel::Medium;

/// Classification result with the composites and the rule that fired.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskEvaluation {
    pub composites: RiskComposites,
    pub level: RiskLevel,
    /// `None` when no rule matched and the default applied.
    pub rule: Option<&'static str>,
}

/// Run the decision list over precomputed composites.
#[must_use]
pub fn evaluate_composites(composites: RiskComposites) -> RiskEvaluation {
    RISK_RULES
        .iter()
        .find(|rule| (rule.applies)(&composites))
        .map_or(
            RiskEvaluation {
                composites,
                level: DEFAULT_RISK,
                rule: None,
            },
            |rule| RiskEvaluation {
                composites,
                level: rule.level,
                rule: Some(rule.name),
            },
        )
}

/// Derive composites from pillar scores and classify.
#[must_use]
pub fn evaluate_risk(scores: &HashMap<String, f64>) -> RiskEvaluation {
    evaluate_composites(RiskComposites::from_pillar_scores(scores))
}
