use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Supplier record as entered on the dashboard. Immutable input to the scoring core.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SupplierRecord {
    #[serde(alias = "supplier")]
    pub name: String,
    #[serde(
        default,
        alias = "fabricName",
        alias = "fabric_name",
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub fabric_label: Option<String>,
    #[serde(default, alias = "material_origin", deserialize_with = "null_as_default")]
    pub material_composition: Vec<MaterialShare>,
    #[serde(
        default,
        alias = "ecobalyse_score",
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub environmental_impact_score: Option<f64>,
    #[serde(
        default,
        alias = "price_eur_per_m",
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub price_per_unit: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub lead_time_weeks: Option<f64>,
    #[serde(
        default,
        alias = "moq_m",
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub minimum_order_quantity: Option<f64>,
    #[serde(
        default,
        alias = "countrySpinning",
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub spinning_country: Option<String>,
    #[serde(
        default,
        alias = "countryFabric",
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub fabric_country: Option<String>,
    #[serde(
        default,
        alias = "countryDyeing",
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub dyeing_country: Option<String>,
    #[serde(
        default,
        alias = "countryMaking",
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub making_country: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub certifications: Vec<String>,
    /// How far the supply chain is documented: `none`, `country_only`,
    /// `factory_identified` or `audits_verified`.
    #[serde(
        default,
        alias = "documentationLevel",
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub documentation_level: Option<String>,
    /// Annotation set by the data source when a record could not be enriched
    /// (e.g. the impact lookup failed). Flagged records never reach scoring.
    #[serde(
        default,
        deserialize_with = "error_annotation",
        skip_serializing_if = "Option::is_none"
    )]
    pub error: Option<String>,
}

impl SupplierRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn reference(&self) -> SupplierRef {
        SupplierRef {
            name: self.name.clone(),
            fabric_label: self.fabric_label.clone(),
        }
    }

    /// Raw value feeding one of the four relative axes, `None` for traceability.
    pub fn relative_value(&self, axis: AxisKind) -> Option<f64> {
        let value = match axis {
            AxisKind::EnvironmentalImpact => self.environmental_impact_score,
            AxisKind::Price => self.price_per_unit,
            AxisKind::LeadTime => self.lead_time_weeks,
            AxisKind::MinimumOrderQuantity => self.minimum_order_quantity,
            AxisKind::Traceability => None,
        };
        value.filter(|value| value.is_finite())
    }

    /// Origin fields in production order: spinning, fabric, dyeing, making.
    pub fn production_countries(&self) -> [Option<&str>; 4] {
        [
            self.spinning_country.as_deref(),
            self.fabric_country.as_deref(),
            self.dyeing_country.as_deref(),
            self.making_country.as_deref(),
        ]
    }
}

/// One fiber of a fabric blend.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MaterialShare {
    #[serde(alias = "id")]
    pub material_id: String,
    #[serde(default, alias = "share", deserialize_with = "share_or_zero")]
    pub share_fraction: f64,
    #[serde(
        default,
        alias = "country",
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub origin_country: Option<String>,
}

impl MaterialShare {
    pub fn new(material_id: impl Into<String>, share_fraction: f64) -> Self {
        Self {
            material_id: material_id.into(),
            share_fraction,
            origin_country: None,
        }
    }
}

/// Lightweight handle naming the supplier behind a score vector.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SupplierRef {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fabric_label: Option<String>,
}

impl SupplierRef {
    pub fn display_name(&self) -> String {
        match self.fabric_label.as_deref() {
            Some(fabric) if !fabric.trim().is_empty() => format!("{} ({})", self.name, fabric),
            _ => self.name.clone(),
        }
    }
}

/// The five radar dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisKind {
    EnvironmentalImpact,
    Traceability,
    Price,
    LeadTime,
    MinimumOrderQuantity,
}

impl AxisKind {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::EnvironmentalImpact,
            Self::Traceability,
            Self::Price,
            Self::LeadTime,
            Self::MinimumOrderQuantity,
        ]
    }

    /// Axes scored relative to the cohort's best value.
    pub const fn relative() -> [Self; 4] {
        [
            Self::EnvironmentalImpact,
            Self::Price,
            Self::LeadTime,
            Self::MinimumOrderQuantity,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::EnvironmentalImpact => "Environmental Impact",
            Self::Traceability => "Traceability",
            Self::Price => "Price",
            Self::LeadTime => "Lead Time",
            Self::MinimumOrderQuantity => "MOQ",
        }
    }

    /// Lower-case form used inside summary sentences.
    pub const fn phrase(self) -> &'static str {
        match self {
            Self::EnvironmentalImpact => "environmental impact",
            Self::Traceability => "traceability",
            Self::Price => "price",
            Self::LeadTime => "lead time",
            Self::MinimumOrderQuantity => "MOQ",
        }
    }

    pub const fn is_relative(self) -> bool {
        !matches!(self, Self::Traceability)
    }

    const fn worse_wording(self) -> &'static str {
        match self {
            Self::EnvironmentalImpact => "worse",
            Self::Price => "more expensive",
            Self::LeadTime => "longer",
            Self::MinimumOrderQuantity => "higher",
            Self::Traceability => "",
        }
    }

    /// Hover text for one supplier's point on this axis.
    pub fn tooltip(self, label: &str, scores: &super::AxisScoreVector) -> String {
        match self {
            Self::Traceability => format!(
                "{label}: {}/{} steps traceable",
                scores.traceability.known_steps,
                super::TRACEABLE_STEPS
            ),
            axis => {
                let relative = scores.relative(axis);
                if relative.diff_percent == 0.0 {
                    format!("{label}: best")
                } else {
                    format!(
                        "{label}: {:.1}% {}",
                        relative.diff_percent,
                        axis.worse_wording()
                    )
                }
            }
        }
    }
}

/// Material category a supplier is compared within.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CategoryLabel {
    Cotton,
    Wool,
    Synthetic,
    Silk,
    Composite,
    Other,
    /// Lower-cased material id that matched no canonical family.
    Material(String),
}

impl CategoryLabel {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Cotton => "cotton",
            Self::Wool => "wool",
            Self::Synthetic => "synthetic",
            Self::Silk => "silk",
            Self::Composite => "composite",
            Self::Other => "other",
            Self::Material(id) => id.as_str(),
        }
    }

    /// Display title, e.g. `ei-laine-par-defaut` becomes `EI LAINE PAR DEFAUT`.
    pub fn title(&self) -> String {
        self.as_str().replace('-', " ").to_uppercase()
    }

    /// Identifier safe for chart containers, e.g. `ei_laine_par_defautChart`.
    pub fn chart_id(&self) -> String {
        let sanitized: String = self
            .as_str()
            .chars()
            .map(|ch| {
                if ch.is_ascii_alphanumeric() || ch == '_' {
                    ch.to_ascii_lowercase()
                } else {
                    '_'
                }
            })
            .collect();
        format!("{sanitized}Chart")
    }
}

impl From<&str> for CategoryLabel {
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "cotton" => Self::Cotton,
            "wool" => Self::Wool,
            "synthetic" => Self::Synthetic,
            "silk" => Self::Silk,
            "composite" => Self::Composite,
            "" | "other" => Self::Other,
            other => Self::Material(other.to_string()),
        }
    }
}

impl fmt::Display for CategoryLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CategoryLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CategoryLabel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from(raw.as_str()))
    }
}

/// User priorities, one non-negative weight per axis. Callers are expected to
/// validate a total of 100 before ranking; the engine normalizes regardless.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WeightSet {
    #[serde(default, alias = "ecobalyse")]
    pub environmental_impact: f64,
    #[serde(default, alias = "transparency")]
    pub traceability: f64,
    #[serde(default)]
    pub price: f64,
    #[serde(default, alias = "leadTime")]
    pub lead_time: f64,
    #[serde(default, alias = "moq")]
    pub minimum_order_quantity: f64,
}

impl WeightSet {
    pub const fn new(
        environmental_impact: f64,
        traceability: f64,
        price: f64,
        lead_time: f64,
        minimum_order_quantity: f64,
    ) -> Self {
        Self {
            environmental_impact,
            traceability,
            price,
            lead_time,
            minimum_order_quantity,
        }
    }

    pub const fn balanced() -> Self {
        Self::new(20.0, 20.0, 20.0, 20.0, 20.0)
    }

    /// Weight for `axis`; negative or non-finite entries count as zero.
    pub fn get(&self, axis: AxisKind) -> f64 {
        let raw = match axis {
            AxisKind::EnvironmentalImpact => self.environmental_impact,
            AxisKind::Traceability => self.traceability,
            AxisKind::Price => self.price,
            AxisKind::LeadTime => self.lead_time,
            AxisKind::MinimumOrderQuantity => self.minimum_order_quantity,
        };
        if raw.is_finite() && raw > 0.0 {
            raw
        } else {
            0.0
        }
    }

    pub fn total(&self) -> f64 {
        AxisKind::ordered().into_iter().map(|axis| self.get(axis)).sum()
    }

    /// Whether the set passes the dashboard's "must sum to 100" validation.
    pub fn sums_to_hundred(&self) -> bool {
        (self.total() - 100.0).abs() < 1e-6
    }

    /// Weights rescaled to percentages, `None` when every weight is zero.
    pub fn normalized(&self) -> Option<NormalizedWeights> {
        let total = self.total();
        if total <= 0.0 {
            return None;
        }

        let mut percentages = [0.0; 5];
        for (slot, axis) in percentages.iter_mut().zip(AxisKind::ordered()) {
            *slot = self.get(axis) / total * 100.0;
        }
        Some(NormalizedWeights { percentages })
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum WeightParseError {
    #[error("expected 5 comma-separated weights, found {0}")]
    WrongArity(usize),
    #[error("weight '{0}' is not a non-negative number")]
    InvalidWeight(String),
}

impl FromStr for WeightSet {
    type Err = WeightParseError;

    /// Parses `impact,traceability,price,lead_time,moq`, e.g. `40,20,20,10,10`.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
        if parts.len() != 5 {
            return Err(WeightParseError::WrongArity(parts.len()));
        }

        let mut values = [0.0; 5];
        for (slot, part) in values.iter_mut().zip(&parts) {
            *slot = part
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite() && *value >= 0.0)
                .ok_or_else(|| WeightParseError::InvalidWeight(part.to_string()))?;
        }

        Ok(Self::new(values[0], values[1], values[2], values[3], values[4]))
    }
}

/// Percentage weights in `AxisKind::ordered()` order, summing to 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NormalizedWeights {
    percentages: [f64; 5],
}

impl NormalizedWeights {
    pub fn get(&self, axis: AxisKind) -> f64 {
        let index = AxisKind::ordered()
            .iter()
            .position(|candidate| *candidate == axis)
            .unwrap_or_default();
        self.percentages[index]
    }

    pub fn total(&self) -> f64 {
        self.percentages.iter().sum()
    }
}

/// Parses free-form numeric text, treating blanks and non-numbers as absent.
pub(crate) fn parse_lenient_number(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawNumber>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawNumber::Number(value)) if value.is_finite() => Some(value),
        Some(RawNumber::Text(text)) => parse_lenient_number(&text),
        _ => None,
    })
}

fn share_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_number(deserializer)?.unwrap_or(0.0))
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Reads an error annotation the way spreadsheets and the dashboard write it:
/// `false`/`no`/`0` and blanks are clean, `true`/`yes`/`1` flag the record,
/// and any other text is kept as the reason.
pub(crate) fn parse_error_flag(raw: &str) -> Option<String> {
    let text = raw.trim();
    match text.to_ascii_lowercase().as_str() {
        "" | "false" | "no" | "0" => None,
        "true" | "yes" | "1" => Some("flagged".to_string()),
        _ => Some(text.to_string()),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFlag {
    Flag(bool),
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

/// Falsy values (`false`, `0`, `""`, `null`) leave the record clean.
fn error_annotation<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawFlag>::deserialize(deserializer)?;
    Ok(match raw {
        None | Some(RawFlag::Flag(false)) => None,
        Some(RawFlag::Flag(true)) => Some("flagged".to_string()),
        Some(RawFlag::Number(value)) if value == 0.0 || value.is_nan() => None,
        Some(RawFlag::Number(_)) => Some("flagged".to_string()),
        Some(RawFlag::Text(text)) => parse_error_flag(&text),
        Some(RawFlag::Other(_)) => Some("flagged".to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_accepts_dashboard_field_names() {
        let raw = r#"{
            "supplier": "Filature Nord",
            "fabricName": "Oxford 140",
            "material_origin": [{"id": "ei-coton", "share": 0.8, "country": "IN"}],
            "ecobalyse_score": "412.5",
            "price_eur_per_m": 9,
            "lead_time_weeks": "n/a",
            "moq_m": null,
            "countrySpinning": "India",
            "countryFabric": "",
            "certifications": ["GOTS"]
        }"#;

        let record: SupplierRecord = serde_json::from_str(raw).expect("record parses");
        assert_eq!(record.name, "Filature Nord");
        assert_eq!(record.fabric_label.as_deref(), Some("Oxford 140"));
        assert_eq!(record.material_composition[0].material_id, "ei-coton");
        assert_eq!(record.material_composition[0].share_fraction, 0.8);
        assert_eq!(record.environmental_impact_score, Some(412.5));
        assert_eq!(record.price_per_unit, Some(9.0));
        assert_eq!(record.lead_time_weeks, None);
        assert_eq!(record.minimum_order_quantity, None);
        assert_eq!(record.fabric_country, None);
        assert!(!record.has_error());
    }

    #[test]
    fn error_flag_accepts_bool_or_text() {
        let flagged: SupplierRecord =
            serde_json::from_str(r#"{"name": "A", "error": true}"#).expect("parses");
        let described: SupplierRecord =
            serde_json::from_str(r#"{"name": "B", "error": "lookup failed"}"#).expect("parses");
        let clean: SupplierRecord =
            serde_json::from_str(r#"{"name": "C", "error": false}"#).expect("parses");

        assert!(flagged.has_error());
        assert_eq!(described.error.as_deref(), Some("lookup failed"));
        assert!(!clean.has_error());
    }

    #[test]
    fn falsy_error_values_leave_record_clean() {
        for raw in [
            r#"{"name": "A", "error": 0}"#,
            r#"{"name": "A", "error": 0.0}"#,
            r#"{"name": "A", "error": ""}"#,
            r#"{"name": "A", "error": null}"#,
            r#"{"name": "A", "error": "false"}"#,
            r#"{"name": "A", "error": " No "}"#,
        ] {
            let record: SupplierRecord = serde_json::from_str(raw).expect("parses");
            assert!(!record.has_error(), "{raw} should be clean");
        }

        let numeric: SupplierRecord =
            serde_json::from_str(r#"{"name": "B", "error": 1}"#).expect("parses");
        let textual: SupplierRecord =
            serde_json::from_str(r#"{"name": "B", "error": "TRUE"}"#).expect("parses");
        let nested: SupplierRecord =
            serde_json::from_str(r#"{"name": "B", "error": {"code": 502}}"#).expect("parses");
        assert_eq!(numeric.error.as_deref(), Some("flagged"));
        assert_eq!(textual.error.as_deref(), Some("flagged"));
        assert!(nested.has_error());
    }

    #[test]
    fn category_title_and_chart_id() {
        let label = CategoryLabel::from("ei-laine-par-defaut");
        assert_eq!(label.title(), "EI LAINE PAR DEFAUT");
        assert_eq!(label.chart_id(), "ei_laine_par_defautChart");
        assert_eq!(CategoryLabel::Cotton.chart_id(), "cottonChart");
        assert_eq!(CategoryLabel::from("Cotton"), CategoryLabel::Cotton);
    }

    #[test]
    fn weights_parse_from_cli_text() {
        let weights: WeightSet = "40, 20,20,10,10".parse().expect("weights parse");
        assert_eq!(weights.environmental_impact, 40.0);
        assert!(weights.sums_to_hundred());

        assert_eq!(
            "1,2,3".parse::<WeightSet>(),
            Err(WeightParseError::WrongArity(3))
        );
        assert_eq!(
            "1,2,3,4,-5".parse::<WeightSet>(),
            Err(WeightParseError::InvalidWeight("-5".to_string()))
        );
    }

    #[test]
    fn zero_weights_do_not_normalize() {
        assert!(WeightSet::default().normalized().is_none());
        let normalized = WeightSet::new(1.0, 1.0, 2.0, 0.0, 0.0)
            .normalized()
            .expect("positive weights normalize");
        assert!((normalized.get(AxisKind::Price) - 50.0).abs() < 1e-9);
        assert!((normalized.total() - 100.0).abs() < 1e-9);
    }
}
