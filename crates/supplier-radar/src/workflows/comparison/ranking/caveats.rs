use serde::{Deserialize, Serialize};

use super::super::domain::{AxisKind, WeightSet};
use super::super::scoring::{AxisScoreVector, NEUTRAL_SCORE};

const LOW_WEIGHT_THRESHOLD: f64 = 20.0;

/// Which trade-offs the recommendation panel warns about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaveatPolicy {
    /// Every axis the user left at zero weight is reported as sacrificed.
    #[default]
    ZeroWeight,
    /// Axes weighted below 20 on which the top supplier scores below neutral.
    LowWeightLowScore,
}

impl CaveatPolicy {
    pub const fn name(self) -> &'static str {
        match self {
            Self::ZeroWeight => "zero-weight",
            Self::LowWeightLowScore => "low-weight-low-score",
        }
    }

    pub fn from_name(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "zero-weight" => Some(Self::ZeroWeight),
            "low-weight-low-score" | "low-weight" => Some(Self::LowWeightLowScore),
            _ => None,
        }
    }

    pub(crate) fn caveats(self, weights: &WeightSet, top: &AxisScoreVector) -> Vec<String> {
        match self {
            Self::ZeroWeight => {
                let sacrificed: Vec<&str> = AxisKind::ordered()
                    .into_iter()
                    .filter(|axis| weights.get(*axis) == 0.0)
                    .map(AxisKind::label)
                    .collect();
                if sacrificed.is_empty() {
                    Vec::new()
                } else {
                    vec![format!(
                        "The following metrics are being sacrificed: {}.",
                        sacrificed.join(", ")
                    )]
                }
            }
            Self::LowWeightLowScore => AxisKind::ordered()
                .into_iter()
                .filter(|axis| {
                    weights.get(*axis) < LOW_WEIGHT_THRESHOLD && top.score(*axis) < NEUTRAL_SCORE
                })
                .map(|axis| {
                    format!(
                        "{} scores {:.1} on {} (weight {:.0}).",
                        top.supplier.display_name(),
                        top.score(axis),
                        axis.label(),
                        weights.get(axis)
                    )
                })
                .collect(),
        }
    }
}
