//! Pillar Aggregator: reduce an assessment's answers to one score per pillar.

use std::collections::HashMap;

use aim_core::entities::Pillar;

use crate::rounding::round2;

/// An answer as seen by the aggregator: owning pillar plus raw score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredAnswer {
    pub pillar_id: String,
    pub score: u8,
    pub not_applicable: bool,
}

/// Aggregated figures for one pillar of one assessment.
#[derive(Debug, Clone, PartialEq)]
pub struct PillarAggregate {
    pub pillar_id: String,
    pub pillar_key: String,
    /// Unrounded mean of applicable answers (0 when none).
    pub mean: f64,
    /// `mean` rounded to 2 decimals; the persisted and reported value.
    pub score: f64,
    pub answered_count: u32,
    pub total_count: u32,
}

/// Compute one aggregate per catalog pillar, in catalog order.
///
/// Pillars without answers still yield a zero row. Not-applicable answers
/// count toward `total_count` only. Answers whose pillar is not in `pillars`
/// are ignored.
#[must_use]
pub fn aggregate_pillars(pillars: &[Pillar], answers: &[ScoredAnswer]) -> Vec<PillarAggregate> {
    let mut by_pillar: HashMap<&str, Vec<&ScoredAnswer>> = HashMap::new();
    for answer in answers {
        by_pillar
            .entry(answer.pillar_id.as_str())
            .or_default()
            .push(answer);
    }

    pillars
        .iter()
        .map(|pillar| {
            let group = by_pillar
                .get(pillar.id.as_str())
                .map_or(&[][..], Vec::as_slice);
            let applicable: Vec<u8> = group
                .iter()
                .filter(|a| !a.not_applicable)
                .map(|a| a.score)
                .collect();

            let answered_count = saturating_count(applicable.len());
            let mean = if applicable.is_empty() {
                0.0
            } else {
                let sum: u32 = applicable.iter().copied().map(u32::from).sum();
                f64::from(sum) / f64::from(answered_count)
            };

            PillarAggregate {
                pillar_id: pillar.id.clone(),
                pillar_key: pillar.key.clone(),
                mean,
                score: round2(mean),
                answered_count,
                total_count: saturating_count(group.len()),
            }
        })
        .collect()
}

fn saturating_count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
