use super::common::*;
use crate::workflows::comparison::domain::{CategoryLabel, SupplierRecord, WeightSet};
use crate::workflows::comparison::{
    CategoryClassifier, CategoryGroups, ComparisonConfig, ComparisonService, ScoringPolicyKind,
};

fn mixed_suppliers() -> Vec<SupplierRecord> {
    vec![
        wool("Lainière A", 40.0),
        cotton_with_impact("Coton A", 20.0),
        flagged(cotton_with_impact("Coton Broken", 1.0)),
        wool("Lainière B", 80.0),
        cotton_with_impact("Coton B", 10.0),
        blend("Mélange", &[("ei-coton", 0.5), ("ei-pet", 0.5)]),
    ]
}

#[test]
fn groups_keep_first_seen_order_and_skip_flagged() {
    let groups = CategoryGroups::partition(&CategoryClassifier::default(), &mixed_suppliers());

    assert_eq!(
        groups.labels(),
        vec![
            &CategoryLabel::Wool,
            &CategoryLabel::Cotton,
            &CategoryLabel::Composite
        ]
    );
    let cotton = groups.get(&CategoryLabel::Cotton).expect("cotton bucket");
    let names: Vec<&str> = cotton.suppliers.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Coton A", "Coton B"]);
}

#[test]
fn resolve_matches_label_or_title() {
    let mut suppliers = mixed_suppliers();
    suppliers.push(blend("Lin", &[("ei-lin-par-defaut", 1.0)]));
    let groups = CategoryGroups::partition(&CategoryClassifier::default(), &suppliers);

    let by_label = groups.resolve("cotton").expect("label resolves");
    assert_eq!(by_label.label, CategoryLabel::Cotton);
    let by_case = groups.resolve(" WOOL ").expect("case-insensitive label");
    assert_eq!(by_case.label, CategoryLabel::Wool);
    let by_title = groups.resolve("EI LIN PAR DEFAUT").expect("title resolves");
    assert_eq!(
        by_title.label,
        CategoryLabel::Material("ei-lin-par-defaut".to_string())
    );
    assert!(groups.resolve("silk").is_none());
    assert!(groups.resolve("").is_none());
}

#[test]
fn empty_input_produces_no_groups() {
    let groups = CategoryGroups::partition(&CategoryClassifier::default(), &[]);
    assert!(groups.is_empty());
    assert!(ComparisonService::default()
        .compare_all(&[], &WeightSet::balanced())
        .is_empty());
}

#[test]
fn categories_are_scored_independently() {
    let service = ComparisonService::default();

    let scores = service.score_all(&mixed_suppliers());

    let wool = scores
        .iter()
        .find(|category| category.category == CategoryLabel::Wool)
        .expect("wool scored");
    let cotton = scores
        .iter()
        .find(|category| category.category == CategoryLabel::Cotton)
        .expect("cotton scored");
    // Wool's best (40) is worse than cotton's worst, yet it still anchors at 5.
    assert_eq!(wool.vectors[0].environmental_impact.score, 5.0);
    assert_eq!(wool.vectors[1].environmental_impact.diff_percent, 100.0);
    assert_eq!(cotton.vectors[1].environmental_impact.score, 5.0);
    assert_eq!(cotton.vectors[0].environmental_impact.diff_percent, 100.0);
}

#[test]
fn compare_category_ranks_only_requested_bucket() {
    let service = ComparisonService::default();
    let weights = WeightSet::new(100.0, 0.0, 0.0, 0.0, 0.0);

    let result = service
        .compare_category(&mixed_suppliers(), "Cotton", &weights)
        .expect("cotton bucket exists");

    assert_eq!(result.category, CategoryLabel::Cotton);
    assert_eq!(result.recommendation.entries.len(), 2);
    assert_eq!(
        result
            .recommendation
            .top()
            .map(|top| top.scores.supplier.name.as_str()),
        Some("Coton B")
    );
    assert!(service
        .compare_category(&mixed_suppliers(), "silk", &weights)
        .is_none());
}

#[test]
fn repeated_comparisons_are_identical() {
    let service = ComparisonService::default();
    let suppliers = mixed_suppliers();
    let weights = WeightSet::new(40.0, 20.0, 20.0, 10.0, 10.0);

    let first = service.compare_all(&suppliers, &weights);
    let second = service.compare_all(&suppliers, &weights);

    assert_eq!(first, second);
}

#[test]
fn configured_policy_flows_into_service() {
    let config = ComparisonConfig {
        scoring_policy: ScoringPolicyKind::MinMax,
        ..ComparisonConfig::default()
    };
    let service = ComparisonService::new(&config);

    let scores = service.score_all(&mixed_suppliers());
    let cotton = scores
        .iter()
        .find(|category| category.category == CategoryLabel::Cotton)
        .expect("cotton scored");

    assert_eq!(service.scorer().policy().name(), "min-max");
    assert_eq!(cotton.vectors[1].environmental_impact.score, 10.0);
    assert_eq!(cotton.vectors[0].environmental_impact.score, 0.0);
}
