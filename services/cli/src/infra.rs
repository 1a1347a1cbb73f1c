use std::path::Path;
use supplier_radar::config::AppConfig;
use supplier_radar::error::AppError;
use supplier_radar::telemetry;
use supplier_radar::workflows::comparison::{ComparisonService, SupplierRecord, WeightSet};
use supplier_radar::workflows::intake::SupplierImporter;
use tracing::{info, warn};

/// Loads configuration, installs tracing, and builds the comparison service.
pub(crate) fn bootstrap() -> Result<ComparisonService, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let comparison = &config.comparison;
    info!(
        environment = ?config.environment,
        scoring = comparison.scoring_policy.name(),
        classification = comparison.classification_policy.name(),
        caveats = comparison.caveat_policy.name(),
        "configuration loaded"
    );

    Ok(ComparisonService::new(comparison))
}

pub(crate) fn load_suppliers(path: &Path) -> Result<Vec<SupplierRecord>, AppError> {
    let suppliers = SupplierImporter::from_path(path)?;
    let flagged = suppliers.iter().filter(|record| record.has_error()).count();
    info!(
        path = %path.display(),
        suppliers = suppliers.len(),
        flagged,
        "loaded supplier records"
    );
    Ok(suppliers)
}

pub(crate) fn parse_weights(raw: &str) -> Result<WeightSet, String> {
    raw.parse::<WeightSet>()
        .map_err(|err| format!("failed to parse '{raw}' as weights ({err})"))
}

/// The ranking still runs on normalized weights; this only tells the user.
pub(crate) fn warn_on_unbalanced_weights(weights: &WeightSet) {
    if weights.total() == 0.0 {
        warn!("all weights are zero; every supplier will score 0");
    } else if !weights.sums_to_hundred() {
        warn!(
            total = weights.total(),
            "weights do not sum to 100; ranking with normalized weights"
        );
    }
}
