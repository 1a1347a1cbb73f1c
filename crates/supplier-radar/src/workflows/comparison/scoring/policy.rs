use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use super::{CohortStats, NEUTRAL_SCORE, TRACEABLE_STEPS};

/// Normalization strategy turning raw lower-is-better values into radar scores.
///
/// Implementations only decide the arithmetic; cohort-of-one and missing-value
/// neutrality are enforced by the scorer for every policy.
pub trait ScoringPolicy: fmt::Debug + Send + Sync {
    fn name(&self) -> &'static str;

    /// Score for `value` on a relative axis, given the cohort's defined values.
    fn relative_score(&self, value: f64, stats: &CohortStats) -> f64;

    /// Score for a supplier with `known_steps` traceable production steps.
    fn traceability_score(&self, known_steps: u8) -> f64;
}

/// Percentage distance from the cohort best, square-root compressed so the
/// best supplier sits at 5 and anything 300% worse or more reaches 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct PercentFromBest;

const COMPRESSION_CEILING_PERCENT: f64 = 300.0;

impl ScoringPolicy for PercentFromBest {
    fn name(&self) -> &'static str {
        ScoringPolicyKind::PercentFromBest.name()
    }

    fn relative_score(&self, value: f64, stats: &CohortStats) -> f64 {
        let diff = stats.diff_percent(value).max(0.0);
        let score = NEUTRAL_SCORE * (1.0 - (diff / COMPRESSION_CEILING_PERCENT).sqrt());
        score.clamp(0.0, 10.0)
    }

    fn traceability_score(&self, known_steps: u8) -> f64 {
        rescale_to_one_nine(raw_traceability(known_steps))
    }
}

/// Linear min/max onto [0,10]: the cohort best scores 10 and the worst 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinMax;

impl ScoringPolicy for MinMax {
    fn name(&self) -> &'static str {
        ScoringPolicyKind::MinMax.name()
    }

    fn relative_score(&self, value: f64, stats: &CohortStats) -> f64 {
        match stats.position(value) {
            Some(position) => (10.0 * (1.0 - position)).clamp(0.0, 10.0),
            None => NEUTRAL_SCORE,
        }
    }

    fn traceability_score(&self, known_steps: u8) -> f64 {
        raw_traceability(known_steps)
    }
}

/// Linear min/max onto [1,9], keeping chart points off the rim and the centre.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinMaxCentered;

impl ScoringPolicy for MinMaxCentered {
    fn name(&self) -> &'static str {
        ScoringPolicyKind::MinMaxCentered.name()
    }

    fn relative_score(&self, value: f64, stats: &CohortStats) -> f64 {
        match stats.position(value) {
            Some(position) => (1.0 + (1.0 - position) * 8.0).clamp(1.0, 9.0),
            None => NEUTRAL_SCORE,
        }
    }

    fn traceability_score(&self, known_steps: u8) -> f64 {
        rescale_to_one_nine(raw_traceability(known_steps))
    }
}

fn raw_traceability(known_steps: u8) -> f64 {
    let steps = known_steps.min(TRACEABLE_STEPS) as f64;
    steps / TRACEABLE_STEPS as f64 * 10.0
}

fn rescale_to_one_nine(raw: f64) -> f64 {
    1.0 + (raw / 10.0) * 8.0
}

/// Configuration-facing selector for the available policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoringPolicyKind {
    #[default]
    PercentFromBest,
    MinMax,
    MinMaxCentered,
}

impl ScoringPolicyKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::PercentFromBest => "percent-from-best",
            Self::MinMax => "min-max",
            Self::MinMaxCentered => "min-max-centered",
        }
    }

    pub fn from_name(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "percent-from-best" | "percent" => Some(Self::PercentFromBest),
            "min-max" | "minmax" => Some(Self::MinMax),
            "min-max-centered" | "minmax-centered" => Some(Self::MinMaxCentered),
            _ => None,
        }
    }

    pub fn build(self) -> Arc<dyn ScoringPolicy> {
        match self {
            Self::PercentFromBest => Arc::new(PercentFromBest),
            Self::MinMax => Arc::new(MinMax),
            Self::MinMaxCentered => Arc::new(MinMaxCentered),
        }
    }
}
