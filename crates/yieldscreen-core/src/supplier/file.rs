use std::fs;
use std::path::{Path, PathBuf};

use super::{RecordSupplier, SupplierId, SupplyError};
use crate::InstrumentRecord;

/// Reads a JSON array of [`InstrumentRecord`]s from disk on every call.
#[derive(Debug, Clone)]
pub struct JsonFileSupplier {
    path: PathBuf,
    fractional_percentages: bool,
}

impl JsonFileSupplier {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            fractional_percentages: false,
        }
    }

    /// Treat ratios as fractions (`0.038`) and scale them to percent (`3.8`).
    pub fn with_fractional_percentages(mut self, enabled: bool) -> Self {
        self.fractional_percentages = enabled;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSupplier for JsonFileSupplier {
    fn id(&self) -> SupplierId {
        SupplierId::File
    }

    fn records(&self) -> Result<Vec<InstrumentRecord>, SupplyError> {
        let raw = fs::read_to_string(&self.path).map_err(|source| SupplyError::Io {
            path: self.path.clone(),
            source,
        })?;
        let mut records: Vec<InstrumentRecord> =
            serde_json::from_str(&raw).map_err(|source| SupplyError::Parse {
                path: self.path.clone(),
                source,
            })?;

        if self.fractional_percentages {
            for record in &mut records {
                record.roe *= 100.0;
                record.dividend_yield *= 100.0;
                record.payout_ratio *= 100.0;
            }
        }

        tracing::debug!(
            path = %self.path.display(),
            count = records.len(),
            fractional = self.fractional_percentages,
            "loaded universe file"
        );
        Ok(records)
    }
}
