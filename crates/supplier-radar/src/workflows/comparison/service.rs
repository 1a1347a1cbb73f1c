use serde::Serialize;
use tracing::debug;

use super::category::CategoryClassifier;
use super::config::ComparisonConfig;
use super::domain::{CategoryLabel, SupplierRecord, WeightSet};
use super::grouping::{CategoryGroup, CategoryGroups};
use super::ranking::{RankingEngine, Recommendation};
use super::scoring::{AxisScoreVector, AxisScorer};

/// Radar scores of every supplier in one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryScores {
    pub category: CategoryLabel,
    pub vectors: Vec<AxisScoreVector>,
}

/// Ranked recommendation for one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryRecommendation {
    pub category: CategoryLabel,
    pub recommendation: Recommendation,
}

/// Stateless facade composing classification, scoring, and ranking.
///
/// Every call works on its own inputs only, so one service can be shared
/// across threads and repeated calls return identical results.
#[derive(Debug, Clone, Default)]
pub struct ComparisonService {
    classifier: CategoryClassifier,
    scorer: AxisScorer,
    ranking: RankingEngine,
}

impl ComparisonService {
    pub fn new(config: &ComparisonConfig) -> Self {
        let scorer = AxisScorer::new(
            config.scoring_policy.build(),
            config.unknown_markers.clone(),
        )
        .with_certification_tiers(config.certification_tiers.clone())
        .with_transparency_weights(config.transparency_weights.clone());

        Self::with_components(
            CategoryClassifier::new(config.classification_policy),
            scorer,
            RankingEngine::new(config.caveat_policy),
        )
    }

    pub fn with_components(
        classifier: CategoryClassifier,
        scorer: AxisScorer,
        ranking: RankingEngine,
    ) -> Self {
        Self {
            classifier,
            scorer,
            ranking,
        }
    }

    pub fn classifier(&self) -> &CategoryClassifier {
        &self.classifier
    }

    pub fn scorer(&self) -> &AxisScorer {
        &self.scorer
    }

    pub fn group(&self, suppliers: &[SupplierRecord]) -> CategoryGroups {
        let groups = CategoryGroups::partition(&self.classifier, suppliers);
        debug!(
            suppliers = suppliers.len(),
            categories = groups.len(),
            "grouped suppliers by material category"
        );
        groups
    }

    /// Radar scores per non-empty category, categories never mixing suppliers.
    pub fn score_all(&self, suppliers: &[SupplierRecord]) -> Vec<CategoryScores> {
        self.group(suppliers)
            .iter()
            .map(|group| self.score_group(group))
            .collect()
    }

    /// Ranks each non-empty category independently.
    pub fn compare_all(
        &self,
        suppliers: &[SupplierRecord],
        weights: &WeightSet,
    ) -> Vec<CategoryRecommendation> {
        self.group(suppliers)
            .iter()
            .map(|group| self.rank_group(group, weights))
            .collect()
    }

    /// Ranks only the requested category; `None` when no bucket matches.
    pub fn compare_category(
        &self,
        suppliers: &[SupplierRecord],
        requested: &str,
        weights: &WeightSet,
    ) -> Option<CategoryRecommendation> {
        let groups = self.group(suppliers);
        match groups.resolve(requested) {
            Some(group) => Some(self.rank_group(group, weights)),
            None => {
                debug!(requested, available = ?groups.labels(), "no suppliers for category");
                None
            }
        }
    }

    pub fn score_group(&self, group: &CategoryGroup) -> CategoryScores {
        debug!(category = %group.label, cohort = group.suppliers.len(), "scoring cohort");
        CategoryScores {
            category: group.label.clone(),
            vectors: self.scorer.score_cohort(&group.suppliers),
        }
    }

    pub fn rank_group(&self, group: &CategoryGroup, weights: &WeightSet) -> CategoryRecommendation {
        let scores = self.score_group(group);
        CategoryRecommendation {
            category: scores.category,
            recommendation: self.ranking.rank(scores.vectors, weights),
        }
    }
}
