use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::normalize::MAX_ROUND_DECIMALS;
use crate::{RejectionPolicy, ScoreWeights, ScreenError, Thresholds};

/// Everything one ranking call depends on besides the records.
///
/// Missing JSON fields fall back to the defaults: recommended thresholds,
/// [`ScoreWeights::DEFAULT`], no normalization, no rounding, skip invalid rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    pub thresholds: Thresholds,
    pub weights: ScoreWeights,
    pub normalize: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round_decimals: Option<u32>,
    pub on_invalid: RejectionPolicy,
}

impl ScreenConfig {
    pub fn validate(&self) -> Result<(), ScreenError> {
        self.thresholds.validate()?;
        self.weights.validate()?;
        match self.round_decimals {
            Some(value) if value > MAX_ROUND_DECIMALS => Err(ScreenError::InvalidRounding {
                value,
                max: MAX_ROUND_DECIMALS,
            }),
            _ => Ok(()),
        }
    }

    /// Loads and validates a JSON configuration document.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;

        tracing::debug!(path = %path.display(), "loaded screen config");
        Ok(config)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON in '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Screen(#[from] ScreenError),
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::Preset;

    #[test]
    fn empty_document_yields_defaults() {
        let config: ScreenConfig = serde_json::from_str("{}").expect("deserialize");

        assert_eq!(config.thresholds, Preset::Recommended.thresholds());
        assert_eq!(config.weights, ScoreWeights::DEFAULT);
        assert!(!config.normalize);
        assert_eq!(config.round_decimals, None);
        assert_eq!(config.on_invalid, RejectionPolicy::SkipRecord);
    }

    #[test]
    fn loads_file_with_overrides() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"{{"thresholds": {{"min_roe": 8.0, "min_yield": 3.5, "max_payout": null}},
                "weights": {{"roe": 2.5, "bias": 10.0}},
                "normalize": true,
                "on_invalid": "fail_batch"}}"#
        )
        .expect("write config");

        let config = ScreenConfig::from_json_file(file.path()).expect("config should load");

        assert_eq!(config.thresholds.min_roe, 8.0);
        assert_eq!(config.thresholds.max_payout, f64::INFINITY);
        assert_eq!(config.weights, ScoreWeights::new(2.5, 7.5, 0.05, 10.0));
        assert!(config.normalize);
        assert_eq!(config.on_invalid, RejectionPolicy::FailBatch);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = ScreenConfig::from_json_file(dir.path().join("absent.json"))
            .expect_err("must fail");
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "{{\"normalize\": ").expect("write config");

        let err = ScreenConfig::from_json_file(file.path()).expect_err("must fail");
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn rounding_beyond_f64_precision_is_rejected() {
        let config = ScreenConfig {
            round_decimals: Some(40),
            ..ScreenConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ScreenError::InvalidRounding { value: 40, max: 15 })
        );

        let finest = ScreenConfig {
            round_decimals: Some(15),
            ..ScreenConfig::default()
        };
        assert_eq!(finest.validate(), Ok(()));
    }
}
