//! Static question catalog: pillars, their EXPRESS/ADVANCED question sets,
//! and per-tier recommendation texts.
//!
//! The built-in catalog is embedded at compile time from
//! `catalog/default.toml`. Custom catalogs use the same TOML shape.

use serde::Deserialize;
use std::collections::HashSet;

use crate::enums::{AssessmentVariant, RecommendationTier};
use crate::errors::CoreError;
use crate::ids::question_id;

const DEFAULT_CATALOG: &str = include_str!("../catalog/default.toml");

/// Used when a catalog file sets no `generic_recommendation`.
pub const DEFAULT_GENERIC_RECOMMENDATION: &str =
    "Keep current practices in place and look for opportunities to keep improving.";

fn default_generic_recommendation() -> String {
    DEFAULT_GENERIC_RECOMMENDATION.to_string()
}

/// Recommendation texts for one pillar, one per tier.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PillarRecommendations {
    pub low: String,
    pub medium: String,
    pub high: String,
}

impl PillarRecommendations {
    #[must_use]
    pub fn for_tier(&self, tier: RecommendationTier) -> &str {
        match tier {
            RecommendationTier::Low => &self.low,
            RecommendationTier::Medium => &self.medium,
            RecommendationTier::High => &self.high,
        }
    }
}

/// A pillar definition with its question texts per variant.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CatalogPillar {
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_weight")]
    pub weight: f64,
    pub order: u32,
    #[serde(default)]
    pub express: Vec<String>,
    #[serde(default)]
    pub advanced: Vec<String>,
    #[serde(default)]
    pub recommendations: Option<PillarRecommendations>,
}

const fn default_weight() -> f64 {
    1.0
}

impl CatalogPillar {
    /// Question texts for one variant, in order.
    #[must_use]
    pub fn texts(&self, variant: AssessmentVariant) -> &[String] {
        match variant {
            AssessmentVariant::Express => &self.express,
            AssessmentVariant::Advanced => &self.advanced,
        }
    }
}

/// A question as laid out in the catalog, with its stable ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuestion<'a> {
    pub id: String,
    pub pillar_key: &'a str,
    pub variant: AssessmentVariant,
    pub order: u32,
    pub text: &'a str,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Catalog {
    #[serde(default = "default_generic_recommendation")]
    pub generic_recommendation: String,
    pub pillars: Vec<CatalogPillar>,
}

impl Catalog {
    /// The catalog shipped with the crate.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the embedded TOML is malformed.
    pub fn builtin() -> Result<Self, CoreError> {
        Self::from_toml_str(DEFAULT_CATALOG)
    }

    /// Parse and validate a catalog from TOML.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` for malformed TOML, duplicate pillar
    /// keys, or weights that are negative or not finite.
    pub fn from_toml_str(s: &str) -> Result<Self, CoreError> {
        let catalog: Self = toml::from_str(s)
            .map_err(|e| CoreError::Validation(format!("invalid catalog TOML: {e}")))?;
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CoreError> {
        let mut keys = HashSet::new();
        for pillar in &self.pillars {
            if pillar.key.is_empty() {
                return Err(CoreError::Validation("pillar key must not be empty".into()));
            }
            if !keys.insert(pillar.key.as_str()) {
                return Err(CoreError::Validation(format!(
                    "duplicate pillar key '{}'",
                    pillar.key
                )));
            }
            if !pillar.weight.is_finite() || pillar.weight < 0.0 {
                return Err(CoreError::Validation(format!(
                    "pillar '{}' has invalid weight {}",
                    pillar.key, pillar.weight
                )));
            }
        }
        Ok(())
    }

    /// All questions across pillars and variants, pillar order first.
    pub fn questions(&self) -> impl Iterator<Item = CatalogQuestion<'_>> {
        let mut pillars: Vec<&CatalogPillar> = self.pillars.iter().collect();
        pillars.sort_by_key(|p| p.order);
        pillars.into_iter().flat_map(|pillar| {
            [AssessmentVariant::Express, AssessmentVariant::Advanced]
                .into_iter()
                .flat_map(move |variant| {
                    pillar.texts(variant).iter().zip(1u32..).map(move |(text, order)| {
                        CatalogQuestion {
                            id: question_id(&pillar.key, variant, order),
                            pillar_key: &pillar.key,
                            variant,
                            order,
                            text,
                        }
                    })
                })
        })
    }

    #[must_use]
    pub fn pillar(&self, key: &str) -> Option<&CatalogPillar> {
        self.pillars.iter().find(|p| p.key == key)
    }

    /// Number of questions for a variant across all pillars.
    #[must_use]
    pub fn question_count(&self, variant: AssessmentVariant) -> usize {
        self.pillars.iter().map(|p| p.texts(variant).len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builtin_catalog_has_six_pillars() {
        let catalog = Catalog::builtin().unwrap();
        let keys: Vec<&str> = catalog.pillars.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(
            keys,
            [
                "strategy_governance",
                "employee_usage",
                "ai_development",
                "agents_integrations",
                "infrastructure",
                "ai_security",
            ]
        );
    }

    #[test]
    fn builtin_weights() {
        let catalog = Catalog::builtin().unwrap();
        let weights: Vec<f64> = catalog.pillars.iter().map(|p| p.weight).collect();
        assert_eq!(weights, [1.2, 1.0, 1.0, 0.8, 1.0, 1.5]);
    }

    #[test]
    fn builtin_question_counts() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.question_count(AssessmentVariant::Express), 20);
        assert_eq!(catalog.question_count(AssessmentVariant::Advanced), 62);
        assert_eq!(catalog.questions().count(), 82);
    }

    #[test]
    fn question_ids_are_unique_and_ordered_from_one() {
        let catalog = Catalog::builtin().unwrap();
        let mut seen = HashSet::new();
        for q in catalog.questions() {
            assert!(q.order >= 1);
            assert!(seen.insert(q.id.clone()), "duplicate question id {}", q.id);
        }
        let first = catalog.questions().next().unwrap();
        assert_eq!(first.id, "strategy_governance_express_1");
    }

    #[test]
    fn builtin_pillars_carry_all_three_recommendations() {
        let catalog = Catalog::builtin().unwrap();
        for pillar in &catalog.pillars {
            let recs = pillar
                .recommendations
                .as_ref()
                .unwrap_or_else(|| panic!("{} has no recommendations", pillar.key));
            for tier in [
                RecommendationTier::Low,
                RecommendationTier::Medium,
                RecommendationTier::High,
            ] {
                assert!(!recs.for_tier(tier).is_empty(), "{} {tier}", pillar.key);
            }
            assert_ne!(recs.low, recs.high);
        }
        assert_eq!(catalog.generic_recommendation, DEFAULT_GENERIC_RECOMMENDATION);
    }

    #[test]
    fn recommendations_are_optional() {
        let toml = r#"
[[pillars]]
key = "a"
name = "A"
order = 1
"#;
        let catalog = Catalog::from_toml_str(toml).unwrap();
        assert_eq!(catalog.pillar("a").unwrap().recommendations, None);
        assert_eq!(catalog.generic_recommendation, DEFAULT_GENERIC_RECOMMENDATION);
        assert!(catalog.pillar("b").is_none());
    }

    #[test]
    fn rejects_duplicate_keys() {
        let toml = r#"
[[pillars]]
key = "a"
name = "A"
order = 1

[[pillars]]
key = "a"
name = "A again"
order = 2
"#;
        let err = Catalog::from_toml_str(toml).unwrap_err();
        assert!(err.to_string().contains("duplicate pillar key 'a'"));
    }

    #[test]
    fn rejects_negative_weight() {
        let toml = r#"
[[pillars]]
key = "a"
name = "A"
order = 1
weight = -0.5
"#;
        assert!(Catalog::from_toml_str(toml).is_err());
    }

    #[test]
    fn weight_defaults_to_one() {
        let toml = r#"
[[pillars]]
key = "a"
name = "A"
order = 1
express = ["q1"]
"#;
        let catalog = Catalog::from_toml_str(toml).unwrap();
        assert_eq!(catalog.pillars[0].weight, 1.0);
        assert!(catalog.pillars[0].advanced.is_empty());
    }
}
