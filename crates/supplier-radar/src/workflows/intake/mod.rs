//! Loading supplier records from dashboard JSON exports and spreadsheet CSVs.

mod normalizer;
mod parser;

use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::workflows::comparison::SupplierRecord;

#[derive(Debug, thiserror::Error)]
pub enum SupplierImportError {
    #[error("failed to read supplier file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid supplier JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid supplier CSV data: {0}")]
    Csv(#[from] csv::Error),
}

/// Either a bare array of suppliers or the dashboard's `{"suppliers": [...]}` payload.
#[derive(Deserialize)]
#[serde(untagged)]
enum SupplierDocument {
    List(Vec<SupplierRecord>),
    Wrapped { suppliers: Vec<SupplierRecord> },
}

impl SupplierDocument {
    fn into_records(self) -> Vec<SupplierRecord> {
        match self {
            SupplierDocument::List(records) => records,
            SupplierDocument::Wrapped { suppliers } => suppliers,
        }
    }
}

pub struct SupplierImporter;

impl SupplierImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<SupplierRecord>, SupplierImportError> {
        let path = path.as_ref();
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

        if is_csv {
            Self::from_csv_path(path)
        } else {
            Self::from_json_path(path)
        }
    }

    pub fn from_json_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<Vec<SupplierRecord>, SupplierImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_json_reader(std::io::BufReader::new(file))
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Vec<SupplierRecord>, SupplierImportError> {
        let document: SupplierDocument = serde_json::from_reader(reader)?;
        let records = document.into_records();
        debug!(count = records.len(), "parsed supplier JSON");
        Ok(records)
    }

    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Vec<SupplierRecord>, SupplierImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_csv_reader(file)
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Vec<SupplierRecord>, SupplierImportError> {
        let records = parser::parse_csv_records(reader)?;
        debug!(count = records.len(), "parsed supplier CSV");
        Ok(records)
    }
}
