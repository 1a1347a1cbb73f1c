use std::cmp::Ordering;

use super::super::domain::{AxisKind, WeightSet};
use super::RankedEntry;

pub(crate) const EMPTY_COHORT_SUMMARY: &str = "No suppliers available for comparison.";

/// Axes carrying weight, heaviest first; equal weights keep radar order.
pub(crate) fn priorities(weights: &WeightSet) -> Vec<AxisKind> {
    let mut weighted: Vec<AxisKind> = AxisKind::ordered()
        .into_iter()
        .filter(|axis| weights.get(*axis) > 0.0)
        .collect();
    weighted.sort_by(|a, b| {
        weights
            .get(*b)
            .partial_cmp(&weights.get(*a))
            .unwrap_or(Ordering::Equal)
    });
    weighted
}

pub(crate) fn compose(top: Option<&RankedEntry>, priorities: &[AxisKind]) -> String {
    let Some(top) = top else {
        return EMPTY_COHORT_SUMMARY.to_string();
    };

    format!(
        "Based on {} as priority metrics, {} is the best option.",
        priority_phrase(priorities),
        top.scores.supplier.display_name()
    )
}

/// Natural-language list: "a", "a and b", "a, b, and c".
fn priority_phrase(priorities: &[AxisKind]) -> String {
    let phrases: Vec<&str> = priorities.iter().map(|axis| axis.phrase()).collect();
    match phrases.as_slice() {
        [] => "the selected criteria".to_string(),
        [only] => only.to_string(),
        [first, second] => format!("{first} and {second}"),
        [rest @ .., last] => format!("{}, and {last}", rest.join(", ")),
    }
}
