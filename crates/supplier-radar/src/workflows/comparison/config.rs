use serde::{Deserialize, Serialize};

use super::category::ClassificationPolicy;
use super::ranking::CaveatPolicy;
use super::scoring::{
    CertificationTiers, ScoringPolicyKind, TransparencyWeights, UnknownMarkers,
};

/// Policy choices handed to the comparison workflow.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonConfig {
    pub scoring_policy: ScoringPolicyKind,
    pub classification_policy: ClassificationPolicy,
    pub caveat_policy: CaveatPolicy,
    pub unknown_markers: UnknownMarkers,
    pub certification_tiers: Option<CertificationTiers>,
    pub transparency_weights: TransparencyWeights,
}
