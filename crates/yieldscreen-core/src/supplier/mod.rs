//! Instrument record suppliers.
//!
//! A supplier hands the engine a fresh `Vec<InstrumentRecord>` per call. Any
//! unit conversion (fractional yields to percent) happens here, never in the
//! engine. Failures are returned as [`SupplyError`]; there is no fallback to
//! placeholder numbers.

mod builtin;
mod file;

use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{InstrumentRecord, ValidationError};

pub use builtin::{BuiltinUniverse, FILLER_COUNT, NAMED_ISSUER_COUNT};
pub use file::JsonFileSupplier;

/// Source of instrument records.
pub trait RecordSupplier {
    fn id(&self) -> SupplierId;

    fn records(&self) -> Result<Vec<InstrumentRecord>, SupplyError>;
}

/// Canonical supplier identifiers used in envelope metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupplierId {
    Builtin,
    File,
}

impl SupplierId {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Builtin => "builtin",
            Self::File => "file",
        }
    }
}

impl Display for SupplierId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SupplierId {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "builtin" => Ok(Self::Builtin),
            "file" => Ok(Self::File),
            other => Err(ValidationError::InvalidSupplier {
                value: other.to_owned(),
            }),
        }
    }
}

#[derive(Debug, Error)]
pub enum SupplyError {
    #[error("failed to read universe '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid universe JSON in '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
