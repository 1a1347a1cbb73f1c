//! Supplier comparison: material categories, radar scoring, and weighted
//! recommendations.
//!
//! Everything here is a pure transform from supplier records (and weights) to
//! scores and rankings. Missing data degrades to the neutral score and empty
//! cohorts produce empty results; nothing in this module returns an error
//! except the CSV exporter.

mod category;
mod colors;
mod config;
pub mod domain;
mod export;
mod grouping;
mod ranking;
mod scoring;
mod service;
pub mod views;

#[cfg(test)]
mod tests;

pub use category::{CategoryClassifier, ClassificationPolicy};
pub use colors::{ColorAssigner, SupplierColor};
pub use config::ComparisonConfig;
pub use domain::{
    AxisKind, CategoryLabel, MaterialShare, NormalizedWeights, SupplierRecord, SupplierRef,
    WeightParseError, WeightSet,
};
pub use export::{write_recommendations_csv, write_scores_csv, ExportError};
pub use grouping::{CategoryGroup, CategoryGroups};
pub use ranking::{CaveatPolicy, RankedEntry, RankingEngine, Recommendation};
pub use scoring::{
    AxisScoreVector, AxisScorer, CertificationSummary, CertificationTiers, CohortStats, MinMax,
    MinMaxCentered, PercentFromBest, RelativeAxisScore, ScoringPolicy, ScoringPolicyKind,
    TraceabilityScore, TransparencyWeights, UnknownMarkers, NEUTRAL_SCORE, TRACEABLE_STEPS,
};
pub use service::{CategoryRecommendation, CategoryScores, ComparisonService};
pub use views::{RadarChartView, RecommendationView};
