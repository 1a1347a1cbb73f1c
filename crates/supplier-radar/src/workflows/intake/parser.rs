use serde::{Deserialize, Deserializer};
use std::io::Read;

use super::normalizer::{clean_cell, parse_materials, split_list};
use crate::workflows::comparison::domain::{
    parse_error_flag, parse_lenient_number, SupplierRecord,
};

pub(crate) fn parse_csv_records<R: Read>(reader: R) -> Result<Vec<SupplierRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let mut records = Vec::new();

    for row in csv_reader.deserialize::<SupplierRow>() {
        records.push(row?.into_record());
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct SupplierRow {
    #[serde(alias = "name")]
    supplier: String,
    #[serde(default, alias = "fabricName", deserialize_with = "empty_string_as_none")]
    fabric_name: Option<String>,
    #[serde(default, alias = "material_origin", deserialize_with = "empty_string_as_none")]
    materials: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    ecobalyse_score: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    price_eur_per_m: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    lead_time_weeks: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    moq_m: Option<String>,
    #[serde(default, alias = "countrySpinning", deserialize_with = "empty_string_as_none")]
    country_spinning: Option<String>,
    #[serde(default, alias = "countryFabric", deserialize_with = "empty_string_as_none")]
    country_fabric: Option<String>,
    #[serde(default, alias = "countryDyeing", deserialize_with = "empty_string_as_none")]
    country_dyeing: Option<String>,
    #[serde(default, alias = "countryMaking", deserialize_with = "empty_string_as_none")]
    country_making: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    certifications: Option<String>,
    #[serde(default, alias = "documentationLevel", deserialize_with = "empty_string_as_none")]
    documentation_level: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    error: Option<String>,
}

impl SupplierRow {
    fn into_record(self) -> SupplierRecord {
        let number = |cell: Option<String>| cell.as_deref().and_then(parse_lenient_number);
        let text = |cell: Option<String>| cell.as_deref().and_then(clean_cell);

        SupplierRecord {
            name: clean_cell(&self.supplier).unwrap_or_default(),
            fabric_label: text(self.fabric_name),
            material_composition: self
                .materials
                .as_deref()
                .map(parse_materials)
                .unwrap_or_default(),
            environmental_impact_score: number(self.ecobalyse_score),
            price_per_unit: number(self.price_eur_per_m),
            lead_time_weeks: number(self.lead_time_weeks),
            minimum_order_quantity: number(self.moq_m),
            spinning_country: text(self.country_spinning),
            fabric_country: text(self.country_fabric),
            dyeing_country: text(self.country_dyeing),
            making_country: text(self.country_making),
            certifications: self
                .certifications
                .as_deref()
                .map(split_list)
                .unwrap_or_default(),
            documentation_level: text(self.documentation_level),
            error: self.error.as_deref().and_then(parse_error_flag),
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
