use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const FALLBACK_WEIGHT: f64 = 0.7;

/// Transparency weights per documentation level, and the cap on the final CSR score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransparencyWeights {
    pub levels: BTreeMap<String, f64>,
    pub max_score: f64,
}

impl Default for TransparencyWeights {
    fn default() -> Self {
        let levels = [
            ("none", FALLBACK_WEIGHT),
            ("country_only", 0.8),
            ("factory_identified", 0.9),
            ("audits_verified", 1.0),
        ]
        .into_iter()
        .map(|(level, weight)| (level.to_string(), weight))
        .collect();

        Self {
            levels,
            max_score: 10.0,
        }
    }
}

impl TransparencyWeights {
    /// Unset or unlisted levels fall back to the `none` weight.
    pub fn weight(&self, documentation_level: Option<&str>) -> f64 {
        let level = documentation_level
            .map(|level| level.trim().to_ascii_lowercase())
            .filter(|level| !level.is_empty())
            .unwrap_or_else(|| "none".to_string());

        self.levels
            .get(&level)
            .or_else(|| self.levels.get("none"))
            .copied()
            .unwrap_or(FALLBACK_WEIGHT)
    }

    /// Environmental score discounted by how well the supply chain is documented.
    pub fn csr_score(&self, environmental_score: f64, documentation_level: Option<&str>) -> f64 {
        let raw = environmental_score * self.weight(documentation_level);
        super::round2(raw.min(self.max_score).max(0.0))
    }
}
