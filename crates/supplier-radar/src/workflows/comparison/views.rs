use serde::Serialize;

use super::colors::{ColorAssigner, SupplierColor};
use super::domain::{AxisKind, CategoryLabel};
use super::ranking::RankedEntry;
use super::scoring::TRACEABLE_STEPS;
use super::service::{CategoryRecommendation, CategoryScores};

#[derive(Debug, Clone, Serialize)]
pub struct RadarDatasetView {
    pub label: String,
    pub color: SupplierColor,
    pub data: [f64; 5],
    pub tooltips: Vec<String>,
    pub traceable_steps: String,
    pub certifications: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub csr_score: Option<f64>,
}

/// One radar chart: a category and the polygons plotted on it.
#[derive(Debug, Clone, Serialize)]
pub struct RadarChartView {
    pub category: CategoryLabel,
    pub chart_id: String,
    pub title: String,
    pub axes: [&'static str; 5],
    pub datasets: Vec<RadarDatasetView>,
}

impl RadarChartView {
    /// `None` for a category without suppliers so no empty chart is drawn.
    pub fn build(scores: &CategoryScores, colors: &mut ColorAssigner) -> Option<Self> {
        if scores.vectors.is_empty() {
            return None;
        }

        let datasets = scores
            .vectors
            .iter()
            .map(|vector| {
                let label = vector.supplier.name.clone();
                RadarDatasetView {
                    color: colors.assign(&label),
                    data: vector.radar_points(),
                    tooltips: AxisKind::ordered()
                        .into_iter()
                        .map(|axis| axis.tooltip(&label, vector))
                        .collect(),
                    traceable_steps: format!(
                        "{}/{}",
                        vector.traceability.known_steps, TRACEABLE_STEPS
                    ),
                    certifications: vector.certifications.list.clone(),
                    csr_score: vector.csr_score,
                    label,
                }
            })
            .collect();

        Some(Self {
            chart_id: scores.category.chart_id(),
            title: scores.category.title(),
            category: scores.category.clone(),
            axes: AxisKind::ordered().map(AxisKind::label),
            datasets,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RankedEntryView {
    pub rank: usize,
    pub supplier: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fabric_label: Option<String>,
    pub weighted_score: f64,
    pub scores: [f64; 5],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub csr_score: Option<f64>,
}

impl RankedEntryView {
    fn from_entry(rank: usize, entry: &RankedEntry) -> Self {
        Self {
            rank,
            supplier: entry.scores.supplier.name.clone(),
            fabric_label: entry.scores.supplier.fabric_label.clone(),
            weighted_score: entry.weighted_score,
            scores: entry.scores.radar_points(),
            csr_score: entry.scores.csr_score,
        }
    }
}

/// Recommendation panel content for one category.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationView {
    pub category: CategoryLabel,
    pub title: String,
    pub entries: Vec<RankedEntryView>,
    pub summary: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub caveats: Vec<String>,
}

impl From<&CategoryRecommendation> for RecommendationView {
    fn from(value: &CategoryRecommendation) -> Self {
        let recommendation = &value.recommendation;
        Self {
            category: value.category.clone(),
            title: value.category.title(),
            entries: recommendation
                .entries
                .iter()
                .enumerate()
                .map(|(index, entry)| RankedEntryView::from_entry(index + 1, entry))
                .collect(),
            summary: recommendation.summary.clone(),
            caveats: recommendation.caveats.clone(),
        }
    }
}
