use serde::{Deserialize, Serialize};

use super::ScreenError;
use crate::InstrumentRecord;

/// Caller-supplied screening bounds, all in percent units.
///
/// `max_payout` may be `+inf` to admit every payout ratio and the two floors
/// may be `-inf`. In JSON an unbounded side is written as `null`; an absent
/// field takes the recommended preset's value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    #[serde(with = "lower_bound")]
    pub min_roe: f64,
    #[serde(with = "lower_bound")]
    pub min_yield: f64,
    #[serde(with = "upper_bound")]
    pub max_payout: f64,
}

impl Thresholds {
    /// Slider domains offered by the dashboard; informational, never enforced.
    pub const SLIDER_ROE: (f64, f64) = (0.0, 30.0);
    pub const SLIDER_YIELD: (f64, f64) = (0.0, 10.0);
    pub const SLIDER_PAYOUT: (f64, f64) = (0.0, 250.0);

    pub const fn new(min_roe: f64, min_yield: f64, max_payout: f64) -> Self {
        Self {
            min_roe,
            min_yield,
            max_payout,
        }
    }

    /// Bounds that admit every well-formed record.
    pub const fn unbounded() -> Self {
        Self::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::INFINITY)
    }

    pub fn validate(&self) -> Result<(), ScreenError> {
        check_bound("min_roe", self.min_roe, f64::NEG_INFINITY)?;
        check_bound("min_yield", self.min_yield, f64::NEG_INFINITY)?;
        check_bound("max_payout", self.max_payout, f64::INFINITY)
    }

    /// All three conditions must hold.
    pub fn admits(&self, record: &InstrumentRecord) -> bool {
        record.roe >= self.min_roe
            && record.dividend_yield >= self.min_yield
            && record.payout_ratio <= self.max_payout
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        crate::Preset::Recommended.thresholds()
    }
}

fn check_bound(field: &'static str, value: f64, open_end: f64) -> Result<(), ScreenError> {
    if value.is_finite() || value == open_end {
        return Ok(());
    }
    Err(ScreenError::InvalidThreshold { field, value })
}

mod lower_bound {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if *value == f64::NEG_INFINITY {
            serializer.serialize_none()
        } else {
            serializer.serialize_some(value)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NEG_INFINITY))
    }
}

mod upper_bound {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if *value == f64::INFINITY {
            serializer.serialize_none()
        } else {
            serializer.serialize_some(value)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_nan_threshold() {
        let err = Thresholds::new(f64::NAN, 3.0, 120.0)
            .validate()
            .expect_err("must fail");
        assert!(matches!(
            err,
            ScreenError::InvalidThreshold {
                field: "min_roe",
                ..
            }
        ));
    }

    #[test]
    fn rejects_infinite_floor_in_wrong_direction() {
        let err = Thresholds::new(6.0, f64::INFINITY, 120.0)
            .validate()
            .expect_err("must fail");
        assert!(matches!(
            err,
            ScreenError::InvalidThreshold {
                field: "min_yield",
                ..
            }
        ));
    }

    #[test]
    fn accepts_open_ended_payout() {
        Thresholds::new(0.0, 0.0, f64::INFINITY)
            .validate()
            .expect("+inf payout cap is allowed");
        Thresholds::unbounded()
            .validate()
            .expect("fully unbounded is allowed");
    }

    #[test]
    fn unbounded_sides_serialize_as_null() {
        let json = serde_json::to_value(Thresholds::new(6.0, 3.0, f64::INFINITY))
            .expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({"min_roe": 6.0, "min_yield": 3.0, "max_payout": null})
        );

        let parsed: Thresholds =
            serde_json::from_value(json).expect("null payout should read back");
        assert_eq!(parsed.max_payout, f64::INFINITY);
    }
}
