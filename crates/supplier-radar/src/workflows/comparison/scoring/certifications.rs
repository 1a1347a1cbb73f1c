use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Certifications shown next to a supplier; never part of the weighted score.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CertificationSummary {
    pub list: Vec<String>,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier_bonus: Option<f64>,
}

/// Tiered certification table with per-certificate points and per-tier caps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CertificationTiers {
    pub tier1: Vec<String>,
    pub tier2: Vec<String>,
    pub tier3: Vec<String>,
    pub points_per_cert: [f64; 3],
    pub max_bonus: [f64; 3],
}

impl Default for CertificationTiers {
    fn default() -> Self {
        Self {
            tier1: Vec::new(),
            tier2: Vec::new(),
            tier3: Vec::new(),
            points_per_cert: [1.2, 0.6, 0.2],
            max_bonus: [2.4, 1.2, 0.4],
        }
    }
}

impl CertificationTiers {
    pub fn bonus(&self, certifications: &[String]) -> f64 {
        let held: HashSet<&str> = certifications.iter().map(String::as_str).collect();
        [&self.tier1, &self.tier2, &self.tier3]
            .into_iter()
            .zip(self.points_per_cert.iter().zip(&self.max_bonus))
            .map(|(tier, (points, cap))| {
                let matched = tier
                    .iter()
                    .map(|name| name.trim())
                    .filter(|name| held.contains(name))
                    .collect::<HashSet<_>>()
                    .len();
                (matched as f64 * points).min(*cap)
            })
            .sum()
    }
}

pub(crate) fn summarize(
    certifications: &[String],
    tiers: Option<&CertificationTiers>,
) -> CertificationSummary {
    let mut seen = HashSet::new();
    let list: Vec<String> = certifications
        .iter()
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .filter(|name| seen.insert(name.to_string()))
        .map(str::to_string)
        .collect();

    let tier_bonus = tiers.map(|tiers| super::round2(tiers.bonus(&list)));

    CertificationSummary {
        count: list.len(),
        list,
        tier_bonus,
    }
}
