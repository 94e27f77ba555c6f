use thiserror::Error;
use yieldscreen_core::{ConfigError, CoreError, SupplyError};

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("strict mode failed: warnings={warning_count}, errors={error_count}")]
    StrictModeViolation {
        warning_count: usize,
        error_count: usize,
    },

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Core(CoreError::Supply(SupplyError::Io { .. }))
            | Self::Core(CoreError::Config(ConfigError::Io { .. })) => 10,
            Self::Core(CoreError::Serialization(_)) => 4,
            Self::Core(_) => 2,
            Self::StrictModeViolation { .. } => 5,
            Self::Serialization(_) => 4,
        }
    }
}

impl From<yieldscreen_core::ValidationError> for CliError {
    fn from(error: yieldscreen_core::ValidationError) -> Self {
        Self::Core(error.into())
    }
}
