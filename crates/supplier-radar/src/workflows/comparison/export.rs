use serde::Serialize;
use std::io::Write;

use super::scoring::AxisScoreVector;
use super::service::{CategoryRecommendation, CategoryScores};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write CSV export: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to flush export: {0}")]
    Io(#[from] std::io::Error),
}

/// One exported supplier. Ranking columns stay empty in unweighted exports.
#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    category: &'a str,
    rank: Option<usize>,
    weighted_score: Option<f64>,
    supplier: &'a str,
    fabric_name: &'a str,
    environmental_impact: f64,
    environmental_impact_diff_percent: f64,
    traceability: f64,
    traceable_steps: u8,
    price: f64,
    price_diff_percent: f64,
    lead_time: f64,
    lead_time_diff_percent: f64,
    moq: f64,
    moq_diff_percent: f64,
    certifications: String,
    csr_score: Option<f64>,
}

impl<'a> ExportRow<'a> {
    fn new(category: &'a str, scores: &'a AxisScoreVector) -> Self {
        Self {
            category,
            rank: None,
            weighted_score: None,
            supplier: &scores.supplier.name,
            fabric_name: scores.supplier.fabric_label.as_deref().unwrap_or_default(),
            environmental_impact: scores.environmental_impact.score,
            environmental_impact_diff_percent: scores.environmental_impact.diff_percent,
            traceability: scores.traceability.score,
            traceable_steps: scores.traceability.known_steps,
            price: scores.price.score,
            price_diff_percent: scores.price.diff_percent,
            lead_time: scores.lead_time.score,
            lead_time_diff_percent: scores.lead_time.diff_percent,
            moq: scores.minimum_order_quantity.score,
            moq_diff_percent: scores.minimum_order_quantity.diff_percent,
            certifications: scores.certifications.list.join(";"),
            csr_score: scores.csr_score,
        }
    }
}

/// Writes one CSV row per ranked supplier across all given categories.
pub fn write_recommendations_csv<W: Write>(
    writer: W,
    recommendations: &[CategoryRecommendation],
) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for category in recommendations {
        for (index, entry) in category.recommendation.entries.iter().enumerate() {
            csv_writer.serialize(ExportRow {
                rank: Some(index + 1),
                weighted_score: Some(entry.weighted_score),
                ..ExportRow::new(category.category.as_str(), &entry.scores)
            })?;
        }
    }

    csv_writer.flush()?;
    Ok(())
}

/// Writes the unweighted radar scores, one row per supplier in cohort order.
pub fn write_scores_csv<W: Write>(writer: W, scores: &[CategoryScores]) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for category in scores {
        for vector in &category.vectors {
            csv_writer.serialize(ExportRow::new(category.category.as_str(), vector))?;
        }
    }

    csv_writer.flush()?;
    Ok(())
}
