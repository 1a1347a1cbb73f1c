use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::Serialize;
use std::io::Write;
use supplier_radar::error::AppError;
use supplier_radar::workflows::comparison::views::RankedEntryView;
use supplier_radar::workflows::comparison::{
    write_recommendations_csv, write_scores_csv, AxisKind, CategoryRecommendation,
    CategoryScores, RadarChartView, RecommendationView,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

#[derive(Debug, Serialize)]
struct Envelope<T: Serialize> {
    generated_at: DateTime<Utc>,
    #[serde(rename = "type")]
    kind: &'static str,
    data: T,
}

fn write_json<W: Write, T: Serialize>(
    out: &mut W,
    kind: &'static str,
    data: T,
) -> Result<(), AppError> {
    let envelope = Envelope {
        generated_at: Utc::now(),
        kind,
        data,
    };
    serde_json::to_writer_pretty(&mut *out, &envelope)?;
    writeln!(out)?;
    Ok(())
}

pub(crate) fn render_charts<W: Write>(
    out: &mut W,
    charts: &[RadarChartView],
    format: OutputFormat,
) -> Result<(), AppError> {
    if format == OutputFormat::Json {
        return write_json(out, "radar_charts", charts);
    }

    if charts.is_empty() {
        writeln!(out, "No suppliers available for comparison.")?;
    }
    for chart in charts {
        writeln!(out, "{} [{}]", chart.title, chart.chart_id)?;
        for dataset in &chart.datasets {
            let points = chart
                .axes
                .iter()
                .zip(dataset.data)
                .map(|(axis, score)| format!("{axis} {score:.2}"))
                .collect::<Vec<_>>()
                .join(" | ");
            writeln!(out, "  {} ({})", dataset.label, dataset.color.border)?;
            writeln!(out, "    {points}")?;
            for tooltip in &dataset.tooltips {
                writeln!(out, "    - {tooltip}")?;
            }
            if !dataset.certifications.is_empty() {
                writeln!(
                    out,
                    "    certifications: {}",
                    dataset.certifications.join(", ")
                )?;
            }
            if let Some(csr_score) = dataset.csr_score {
                writeln!(out, "    CSR score: {csr_score:.2}")?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

pub(crate) fn write_scores<W: Write>(
    out: &mut W,
    scores: &[CategoryScores],
) -> Result<(), AppError> {
    write_scores_csv(out, scores)?;
    Ok(())
}

pub(crate) fn render_recommendations<W: Write>(
    out: &mut W,
    recommendations: &[CategoryRecommendation],
    format: OutputFormat,
) -> Result<(), AppError> {
    match format {
        OutputFormat::Csv => {
            write_recommendations_csv(out, recommendations)?;
            Ok(())
        }
        OutputFormat::Json => {
            let views: Vec<RecommendationView> =
                recommendations.iter().map(RecommendationView::from).collect();
            write_json(out, "recommendations", views)
        }
        OutputFormat::Text => {
            for recommendation in recommendations {
                let view = RecommendationView::from(recommendation);
                writeln!(out, "{}", view.title)?;
                for entry in &view.entries {
                    write_entry(out, entry)?;
                }
                write_narrative(out, &view)?;
                writeln!(out)?;
            }
            Ok(())
        }
    }
}

/// Top supplier of one category with the narrative, as shown in the panel.
pub(crate) fn render_top<W: Write>(
    out: &mut W,
    recommendation: &CategoryRecommendation,
) -> Result<(), AppError> {
    let view = RecommendationView::from(recommendation);
    writeln!(out, "{}", view.title)?;
    if let Some(entry) = view.entries.first() {
        write_entry(out, entry)?;
    }
    write_narrative(out, &view)
}

pub(crate) fn render_no_suppliers<W: Write>(
    out: &mut W,
    category: Option<&str>,
) -> Result<(), AppError> {
    match category {
        Some(category) => writeln!(
            out,
            "No suppliers available for the selected category ({category})."
        )?,
        None => writeln!(out, "No suppliers available for comparison.")?,
    }
    Ok(())
}

fn write_entry<W: Write>(out: &mut W, entry: &RankedEntryView) -> Result<(), AppError> {
    let name = match entry.fabric_label.as_deref() {
        Some(fabric) => format!("{} ({})", entry.supplier, fabric),
        None => entry.supplier.clone(),
    };
    let axes = AxisKind::ordered()
        .iter()
        .zip(entry.scores)
        .map(|(axis, score)| format!("{} {:.2}", axis.label(), score))
        .collect::<Vec<_>>()
        .join(", ");
    writeln!(
        out,
        "  {}. {} | weighted {:.2} | {}",
        entry.rank, name, entry.weighted_score, axes
    )?;
    Ok(())
}

fn write_narrative<W: Write>(out: &mut W, view: &RecommendationView) -> Result<(), AppError> {
    writeln!(out, "  {}", view.summary)?;
    for caveat in &view.caveats {
        writeln!(out, "  ! {caveat}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use supplier_radar::workflows::comparison::{
        ColorAssigner, ComparisonService, MaterialShare, SupplierRecord, WeightSet,
    };

    fn cotton(name: &str, impact: f64) -> SupplierRecord {
        SupplierRecord {
            material_composition: vec![MaterialShare::new("ei-coton", 1.0)],
            environmental_impact_score: Some(impact),
            ..SupplierRecord::new(name)
        }
    }

    fn recommendations() -> Vec<CategoryRecommendation> {
        ComparisonService::default().compare_all(
            &[cotton("Filature Nord", 10.0), cotton("Tissage Sud", 20.0)],
            &WeightSet::new(100.0, 0.0, 0.0, 0.0, 0.0),
        )
    }

    #[test]
    fn text_report_lists_ranking_and_narrative() {
        let mut out = Vec::new();

        render_recommendations(&mut out, &recommendations(), OutputFormat::Text)
            .expect("render succeeds");

        let text = String::from_utf8(out).expect("utf-8");
        assert!(text.starts_with("COTTON\n"));
        assert!(text.contains("  1. Filature Nord | weighted 5.00"));
        assert!(text.contains("  2. Tissage Sud | weighted 2.11"));
        assert!(text.contains("Filature Nord is the best option."));
        assert!(text.contains("  ! The following metrics are being sacrificed"));
    }

    #[test]
    fn json_report_is_wrapped_with_timestamp() {
        let mut out = Vec::new();

        render_recommendations(&mut out, &recommendations(), OutputFormat::Json)
            .expect("render succeeds");

        let value: serde_json::Value = serde_json::from_slice(&out).expect("valid json");
        assert_eq!(value["type"], "recommendations");
        assert!(value["generated_at"].is_string());
        assert_eq!(value["data"][0]["entries"][0]["supplier"], "Filature Nord");
    }

    #[test]
    fn top_view_prints_only_the_winner() {
        let mut out = Vec::new();
        let recommendations = recommendations();

        render_top(&mut out, &recommendations[0]).expect("render succeeds");

        let text = String::from_utf8(out).expect("utf-8");
        assert!(text.contains("1. Filature Nord"));
        assert!(!text.contains("Tissage Sud |"));
    }

    #[test]
    fn chart_text_shows_csr_score() {
        let scores = ComparisonService::default().score_all(&[cotton("Filature Nord", 10.0)]);
        let charts: Vec<RadarChartView> = scores
            .iter()
            .filter_map(|category| RadarChartView::build(category, &mut ColorAssigner::new()))
            .collect();
        let mut out = Vec::new();

        render_charts(&mut out, &charts, OutputFormat::Text).expect("render succeeds");

        let text = String::from_utf8(out).expect("utf-8");
        assert!(text.starts_with("COTTON [cottonChart]\n"));
        assert!(text.contains("    CSR score: 3.50\n"));
    }

    #[test]
    fn missing_category_message_names_the_request() {
        let mut out = Vec::new();

        render_no_suppliers(&mut out, Some("silk")).expect("render succeeds");

        assert_eq!(
            String::from_utf8(out).expect("utf-8"),
            "No suppliers available for the selected category (silk).\n"
        );
    }
}
