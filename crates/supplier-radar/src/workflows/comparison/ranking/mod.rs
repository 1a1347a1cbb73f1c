mod caveats;
mod summary;

pub use caveats::CaveatPolicy;

use super::domain::{AxisKind, NormalizedWeights, WeightSet};
use super::scoring::{round2, AxisScoreVector};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One supplier's place in a recommendation list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub weighted_score: f64,
    pub scores: AxisScoreVector,
}

/// Ranked cohort with the narrative shown in the recommendation panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub entries: Vec<RankedEntry>,
    pub summary: String,
    pub caveats: Vec<String>,
    /// Axes with a non-zero weight, heaviest first.
    pub priorities: Vec<AxisKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized_weights: Option<NormalizedWeights>,
}

impl Recommendation {
    pub fn top(&self) -> Option<&RankedEntry> {
        self.entries.first()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Combines per-axis scores with user weights into a ranked recommendation.
#[derive(Debug, Clone, Copy, Default)]
pub struct RankingEngine {
    caveat_policy: CaveatPolicy,
}

impl RankingEngine {
    pub fn new(caveat_policy: CaveatPolicy) -> Self {
        Self { caveat_policy }
    }

    pub fn caveat_policy(&self) -> CaveatPolicy {
        self.caveat_policy
    }

    /// Weighted score of one vector; 0 when every weight is zero.
    pub fn weighted_score(scores: &AxisScoreVector, weights: &WeightSet) -> f64 {
        weights
            .normalized()
            .map(|normalized| weighted_sum(scores, &normalized))
            .unwrap_or(0.0)
    }

    pub fn rank(&self, vectors: Vec<AxisScoreVector>, weights: &WeightSet) -> Recommendation {
        let normalized = weights.normalized();

        let mut entries: Vec<RankedEntry> = vectors
            .into_iter()
            .map(|scores| RankedEntry {
                weighted_score: normalized
                    .as_ref()
                    .map(|normalized| weighted_sum(&scores, normalized))
                    .unwrap_or(0.0),
                scores,
            })
            .collect();

        // `sort_by` is stable, so equal scores keep cohort order.
        entries.sort_by(|a, b| {
            b.weighted_score
                .partial_cmp(&a.weighted_score)
                .unwrap_or(Ordering::Equal)
        });

        let priorities = summary::priorities(weights);
        let summary = summary::compose(entries.first(), &priorities);
        let caveats = entries
            .first()
            .map(|top| self.caveat_policy.caveats(weights, &top.scores))
            .unwrap_or_default();

        Recommendation {
            entries,
            summary,
            caveats,
            priorities,
            normalized_weights: normalized,
        }
    }
}

fn weighted_sum(scores: &AxisScoreVector, weights: &NormalizedWeights) -> f64 {
    let total = AxisKind::ordered()
        .into_iter()
        .map(|axis| scores.score(axis) * weights.get(axis) / 100.0)
        .sum::<f64>();
    round2(total)
}
