use crate::workflows::comparison::domain::{MaterialShare, SupplierRecord};

pub(super) fn blend(name: &str, materials: &[(&str, f64)]) -> SupplierRecord {
    SupplierRecord {
        material_composition: materials
            .iter()
            .map(|(id, share)| MaterialShare::new(*id, *share))
            .collect(),
        ..SupplierRecord::new(name)
    }
}

/// Pure cotton supplier with every production step traced.
pub(super) fn cotton(name: &str, impact: f64, price: f64, lead: f64, moq: f64) -> SupplierRecord {
    SupplierRecord {
        environmental_impact_score: Some(impact),
        price_per_unit: Some(price),
        lead_time_weeks: Some(lead),
        minimum_order_quantity: Some(moq),
        spinning_country: Some("India".to_string()),
        fabric_country: Some("Portugal".to_string()),
        dyeing_country: Some("Portugal".to_string()),
        making_country: Some("France".to_string()),
        ..blend(name, &[("ei-coton", 1.0)])
    }
}

pub(super) fn cotton_with_impact(name: &str, impact: f64) -> SupplierRecord {
    cotton(name, impact, 10.0, 4.0, 300.0)
}

pub(super) fn wool(name: &str, impact: f64) -> SupplierRecord {
    SupplierRecord {
        environmental_impact_score: Some(impact),
        ..blend(name, &[("ei-laine-par-defaut", 1.0)])
    }
}

pub(super) fn untraced(name: &str) -> SupplierRecord {
    SupplierRecord {
        spinning_country: Some("Pays inconnu".to_string()),
        fabric_country: Some("---".to_string()),
        dyeing_country: Some("pays inconnu (par défaut)".to_string()),
        making_country: None,
        ..SupplierRecord::new(name)
    }
}

pub(super) fn flagged(mut record: SupplierRecord) -> SupplierRecord {
    record.error = Some("impact lookup failed".to_string());
    record
}

pub(super) fn approx(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
