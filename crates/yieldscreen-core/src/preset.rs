use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Thresholds, ValidationError};

/// Named threshold configurations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// ROE ≥ 6%, yield ≥ 3%, payout ≤ 120%.
    #[default]
    Recommended,
    /// Admits every well-formed record.
    Open,
    /// Tighter income screen: ROE ≥ 8%, yield ≥ 4%, payout ≤ 60%.
    Income,
}

impl Preset {
    pub const ALL: [Self; 3] = [Self::Recommended, Self::Open, Self::Income];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Recommended => "recommended",
            Self::Open => "open",
            Self::Income => "income",
        }
    }

    pub const fn thresholds(self) -> Thresholds {
        match self {
            Self::Recommended => Thresholds::new(6.0, 3.0, 120.0),
            Self::Open => Thresholds::new(0.0, 0.0, f64::INFINITY),
            Self::Income => Thresholds::new(8.0, 4.0, 60.0),
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Recommended => {
                "yield above bank deposits, payout covered by earnings, average TSE capital efficiency"
            }
            Self::Open => "no filtering; rank the whole universe",
            Self::Income => "higher yield floor with conservative payout for dividend durability",
        }
    }
}

impl Display for Preset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Preset {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "recommended" => Ok(Self::Recommended),
            "open" => Ok(Self::Open),
            "income" => Ok(Self::Income),
            other => Err(ValidationError::InvalidPreset {
                value: other.to_owned(),
            }),
        }
    }
}
