mod certifications;
mod policy;
mod traceability;
mod transparency;

pub use certifications::{CertificationSummary, CertificationTiers};
pub use policy::{MinMax, MinMaxCentered, PercentFromBest, ScoringPolicy, ScoringPolicyKind};
pub use traceability::{UnknownMarkers, TRACEABLE_STEPS};
pub use transparency::TransparencyWeights;

use super::domain::{AxisKind, SupplierRecord, SupplierRef};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Score given when data is missing or the cohort has a single supplier.
pub const NEUTRAL_SCORE: f64 = 5.0;

/// Spread of the defined values on one relative axis within a cohort.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CohortStats {
    pub best: f64,
    pub worst: f64,
}

impl CohortStats {
    pub fn from_values<I: IntoIterator<Item = f64>>(values: I) -> Option<Self> {
        values
            .into_iter()
            .filter(|value| value.is_finite())
            .fold(None, |stats, value| match stats {
                None => Some(Self {
                    best: value,
                    worst: value,
                }),
                Some(Self { best, worst }) => Some(Self {
                    best: best.min(value),
                    worst: worst.max(value),
                }),
            })
    }

    /// Percentage by which `value` trails the best value, 0 when the best is 0.
    pub fn diff_percent(&self, value: f64) -> f64 {
        if self.best == 0.0 {
            0.0
        } else {
            (value - self.best) / self.best * 100.0
        }
    }

    /// Position of `value` between best (0.0) and worst (1.0), `None` without spread.
    pub fn position(&self, value: f64) -> Option<f64> {
        let spread = self.worst - self.best;
        if spread > 0.0 {
            Some((value - self.best) / spread)
        } else {
            None
        }
    }
}

/// Score on a cohort-relative axis plus the distance from the best value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RelativeAxisScore {
    pub score: f64,
    pub diff_percent: f64,
}

impl RelativeAxisScore {
    pub const NEUTRAL: Self = Self {
        score: NEUTRAL_SCORE,
        diff_percent: 0.0,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraceabilityScore {
    pub score: f64,
    pub known_steps: u8,
}

/// The five radar scores of one supplier plus display-only extras.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisScoreVector {
    pub supplier: SupplierRef,
    pub environmental_impact: RelativeAxisScore,
    pub traceability: TraceabilityScore,
    pub price: RelativeAxisScore,
    pub lead_time: RelativeAxisScore,
    pub minimum_order_quantity: RelativeAxisScore,
    pub certifications: CertificationSummary,
    /// Environmental score weighted by documentation level; `None` without an
    /// impact value. Display only.
    pub csr_score: Option<f64>,
}

impl AxisScoreVector {
    pub fn score(&self, axis: AxisKind) -> f64 {
        match axis {
            AxisKind::Traceability => self.traceability.score,
            relative => self.relative(relative).score,
        }
    }

    /// Relative axis detail; traceability reports its score with no diff.
    pub fn relative(&self, axis: AxisKind) -> RelativeAxisScore {
        match axis {
            AxisKind::EnvironmentalImpact => self.environmental_impact,
            AxisKind::Price => self.price,
            AxisKind::LeadTime => self.lead_time,
            AxisKind::MinimumOrderQuantity => self.minimum_order_quantity,
            AxisKind::Traceability => RelativeAxisScore {
                score: self.traceability.score,
                diff_percent: 0.0,
            },
        }
    }

    /// Scores in `AxisKind::ordered()` order, as plotted on the radar.
    pub fn radar_points(&self) -> [f64; 5] {
        AxisKind::ordered().map(|axis| self.score(axis))
    }

    fn relative_mut(&mut self, axis: AxisKind) -> Option<&mut RelativeAxisScore> {
        match axis {
            AxisKind::EnvironmentalImpact => Some(&mut self.environmental_impact),
            AxisKind::Price => Some(&mut self.price),
            AxisKind::LeadTime => Some(&mut self.lead_time),
            AxisKind::MinimumOrderQuantity => Some(&mut self.minimum_order_quantity),
            AxisKind::Traceability => None,
        }
    }
}

/// Computes radar scores for a cohort of suppliers sharing one category.
#[derive(Debug, Clone)]
pub struct AxisScorer {
    policy: Arc<dyn ScoringPolicy>,
    unknown_markers: UnknownMarkers,
    certification_tiers: Option<CertificationTiers>,
    transparency: TransparencyWeights,
}

impl Default for AxisScorer {
    fn default() -> Self {
        Self::new(ScoringPolicyKind::default().build(), UnknownMarkers::default())
    }
}

impl AxisScorer {
    pub fn new(policy: Arc<dyn ScoringPolicy>, unknown_markers: UnknownMarkers) -> Self {
        Self {
            policy,
            unknown_markers,
            certification_tiers: None,
            transparency: TransparencyWeights::default(),
        }
    }

    pub fn with_certification_tiers(mut self, tiers: Option<CertificationTiers>) -> Self {
        self.certification_tiers = tiers;
        self
    }

    pub fn with_transparency_weights(mut self, transparency: TransparencyWeights) -> Self {
        self.transparency = transparency;
        self
    }

    pub fn policy(&self) -> &dyn ScoringPolicy {
        self.policy.as_ref()
    }

    /// Scores every supplier in `cohort`; an empty cohort yields no vectors.
    pub fn score_cohort<'a, I>(&self, cohort: I) -> Vec<AxisScoreVector>
    where
        I: IntoIterator<Item = &'a SupplierRecord>,
    {
        let cohort: Vec<&SupplierRecord> = cohort.into_iter().collect();
        let mut vectors: Vec<AxisScoreVector> = cohort
            .iter()
            .map(|supplier| self.absolute_scores(supplier))
            .collect();

        // A lone supplier has nothing to be compared with and stays neutral.
        if cohort.len() >= 2 {
            self.score_relative_axes(&cohort, &mut vectors);
        }

        for (supplier, vector) in cohort.iter().zip(vectors.iter_mut()) {
            vector.csr_score = supplier
                .relative_value(AxisKind::EnvironmentalImpact)
                .map(|_| {
                    self.transparency.csr_score(
                        vector.environmental_impact.score,
                        supplier.documentation_level.as_deref(),
                    )
                });
        }

        vectors
    }

    fn score_relative_axes(&self, cohort: &[&SupplierRecord], vectors: &mut [AxisScoreVector]) {
        for axis in AxisKind::relative() {
            let Some(stats) =
                CohortStats::from_values(cohort.iter().filter_map(|s| s.relative_value(axis)))
            else {
                continue;
            };

            for (supplier, vector) in cohort.iter().zip(vectors.iter_mut()) {
                let Some(value) = supplier.relative_value(axis) else {
                    continue;
                };
                let Some(slot) = vector.relative_mut(axis) else {
                    continue;
                };
                *slot = RelativeAxisScore {
                    score: round2(self.policy.relative_score(value, &stats)),
                    diff_percent: round2(stats.diff_percent(value)),
                };
            }
        }
    }

    /// Traceability and certifications depend on the supplier alone.
    fn absolute_scores(&self, supplier: &SupplierRecord) -> AxisScoreVector {
        let known_steps = traceability::known_steps(supplier, &self.unknown_markers);

        AxisScoreVector {
            supplier: supplier.reference(),
            environmental_impact: RelativeAxisScore::NEUTRAL,
            traceability: TraceabilityScore {
                score: round2(self.policy.traceability_score(known_steps)),
                known_steps,
            },
            price: RelativeAxisScore::NEUTRAL,
            lead_time: RelativeAxisScore::NEUTRAL,
            minimum_order_quantity: RelativeAxisScore::NEUTRAL,
            certifications: certifications::summarize(
                &supplier.certifications,
                self.certification_tiers.as_ref(),
            ),
            csr_score: None,
        }
    }
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
