use serde::{Deserialize, Serialize};

use super::super::domain::SupplierRecord;

pub const TRACEABLE_STEPS: u8 = 5;

/// Sentinel strings marking an origin field as filled in but unknown.
///
/// Matching is a case-insensitive substring test on the trimmed value, so
/// `Pays inconnu (par défaut)` is caught by the `pays inconnu` marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnknownMarkers {
    markers: Vec<String>,
}

impl Default for UnknownMarkers {
    fn default() -> Self {
        Self::new(["pays inconnu", "---"])
    }
}

impl UnknownMarkers {
    pub fn new<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let markers = markers
            .into_iter()
            .map(|marker| normalize(marker.as_ref()))
            .filter(|marker| !marker.is_empty())
            .collect();
        Self { markers }
    }

    /// Parses a comma-separated marker list such as `pays inconnu,---`.
    pub fn parse_list(raw: &str) -> Self {
        Self::new(raw.split(','))
    }

    pub fn markers(&self) -> &[String] {
        &self.markers
    }

    pub fn is_unknown(&self, value: Option<&str>) -> bool {
        let Some(value) = value else {
            return true;
        };
        let normalized = normalize(value);
        if normalized.is_empty() {
            return true;
        }

        self.markers
            .iter()
            .any(|marker| normalized.contains(marker.as_str()))
    }

    pub fn is_known(&self, value: Option<&str>) -> bool {
        !self.is_unknown(value)
    }
}

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Counts the traceable production steps: fibre, spinning, fabric, dyeing, making.
pub(crate) fn known_steps(supplier: &SupplierRecord, markers: &UnknownMarkers) -> u8 {
    let fibre = u8::from(!supplier.material_composition.is_empty());
    let origins = supplier
        .production_countries()
        .into_iter()
        .filter(|country| markers.is_known(*country))
        .count() as u8;

    (fibre + origins).min(TRACEABLE_STEPS)
}
