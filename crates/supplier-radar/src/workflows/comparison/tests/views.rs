use super::common::*;
use crate::workflows::comparison::domain::{CategoryLabel, WeightSet};
use crate::workflows::comparison::{
    write_recommendations_csv, write_scores_csv, CategoryScores, ColorAssigner,
    ComparisonService, RadarChartView, RecommendationView,
};

#[test]
fn chart_carries_axes_colors_and_tooltips() {
    let service = ComparisonService::default();
    let suppliers = vec![cotton_with_impact("Coton A", 10.0), cotton_with_impact("Coton B", 20.0)];
    let scores = service.score_all(&suppliers);
    let mut colors = ColorAssigner::new();

    let chart = RadarChartView::build(&scores[0], &mut colors).expect("non-empty chart");

    assert_eq!(chart.chart_id, "cottonChart");
    assert_eq!(chart.title, "COTTON");
    assert_eq!(
        chart.axes,
        ["Environmental Impact", "Traceability", "Price", "Lead Time", "MOQ"]
    );
    assert_eq!(chart.datasets.len(), 2);
    assert_eq!(chart.datasets[0].color.slot, 0);
    assert_eq!(chart.datasets[1].data[0], 2.11);
    assert_eq!(chart.datasets[1].tooltips[0], "Coton B: 100.0% worse");
    assert_eq!(chart.datasets[1].traceable_steps, "5/5");
}

#[test]
fn colors_survive_re_render() {
    let service = ComparisonService::default();
    let mut colors = ColorAssigner::new();
    let first = service.score_all(&[cotton_with_impact("Coton A", 10.0)]);
    let second = service.score_all(&[
        cotton_with_impact("Coton B", 10.0),
        cotton_with_impact("Coton A", 12.0),
    ]);

    let before = RadarChartView::build(&first[0], &mut colors).expect("chart");
    let after = RadarChartView::build(&second[0], &mut colors).expect("chart");

    assert_eq!(before.datasets[0].color, after.datasets[1].color);
    assert_eq!(after.datasets[0].color.slot, 1);
}

#[test]
fn empty_category_draws_no_chart() {
    let scores = CategoryScores {
        category: CategoryLabel::Silk,
        vectors: Vec::new(),
    };
    assert!(RadarChartView::build(&scores, &mut ColorAssigner::new()).is_none());
}

#[test]
fn recommendation_view_numbers_entries() {
    let service = ComparisonService::default();
    let suppliers = vec![cotton_with_impact("Coton A", 20.0), cotton_with_impact("Coton B", 10.0)];
    let weights = WeightSet::new(100.0, 0.0, 0.0, 0.0, 0.0);
    let recommendations = service.compare_all(&suppliers, &weights);

    let view = RecommendationView::from(&recommendations[0]);

    assert_eq!(view.title, "COTTON");
    assert_eq!(view.entries[0].rank, 1);
    assert_eq!(view.entries[0].supplier, "Coton B");
    assert_eq!(view.entries[1].weighted_score, 2.11);
    assert_eq!(view.caveats.len(), 1);

    let json = serde_json::to_value(&view).expect("view serializes");
    assert_eq!(json["category"], "cotton");
}

#[test]
fn csv_export_writes_one_row_per_ranked_supplier() {
    let service = ComparisonService::default();
    let suppliers = vec![
        cotton_with_impact("Coton A", 20.0),
        cotton_with_impact("Coton B", 10.0),
        wool("Lainière", 50.0),
    ];
    let recommendations = service.compare_all(&suppliers, &WeightSet::balanced());
    let mut buffer = Vec::new();

    write_recommendations_csv(&mut buffer, &recommendations).expect("export succeeds");

    let output = String::from_utf8(buffer).expect("utf-8 output");
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("category,rank,weighted_score,supplier,fabric_name"));
    assert!(lines[1].starts_with("cotton,1,"));
    assert!(lines[1].contains(",Coton B,"));
    assert!(lines[3].starts_with("wool,1,"));
}

#[test]
fn score_export_leaves_ranking_columns_empty() {
    let service = ComparisonService::default();
    let scores = service.score_all(&[cotton_with_impact("Coton A", 20.0)]);
    let mut buffer = Vec::new();

    write_scores_csv(&mut buffer, &scores).expect("export succeeds");

    let output = String::from_utf8(buffer).expect("utf-8 output");
    let row = output.lines().nth(1).expect("one data row");
    assert!(row.starts_with("cotton,,,Coton A,,5.0,0.0,9.0,5,"));
    let header = output.lines().next().expect("header row");
    assert!(header.ends_with(",certifications,csr_score"));
    assert!(row.ends_with(",3.5"));
}
