use serde::{Deserialize, Serialize};

use super::ScreenError;
use crate::InstrumentRecord;

/// Coefficients of the linear composite score:
/// `roe * roe_w + yield * yield_w - payout * payout_w + bias`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    pub roe: f64,
    pub dividend_yield: f64,
    pub payout_ratio: f64,
    pub bias: f64,
}

impl ScoreWeights {
    pub const DEFAULT: Self = Self::new(2.0, 7.5, 0.05, 15.0);

    pub const fn new(roe: f64, dividend_yield: f64, payout_ratio: f64, bias: f64) -> Self {
        Self {
            roe,
            dividend_yield,
            payout_ratio,
            bias,
        }
    }

    pub fn validate(&self) -> Result<(), ScreenError> {
        for (field, value) in [
            ("roe", self.roe),
            ("dividend_yield", self.dividend_yield),
            ("payout_ratio", self.payout_ratio),
            ("bias", self.bias),
        ] {
            if !value.is_finite() {
                return Err(ScreenError::InvalidWeight { field, value });
            }
        }
        Ok(())
    }

    /// Raw composite score. Depends on the three ratio fields only.
    pub fn score(&self, record: &InstrumentRecord) -> f64 {
        self.breakdown(record).total()
    }

    pub fn breakdown(&self, record: &InstrumentRecord) -> ScoreBreakdown {
        ScoreBreakdown {
            roe: record.roe * self.roe,
            dividend_yield: record.dividend_yield * self.dividend_yield,
            payout_ratio: -(record.payout_ratio * self.payout_ratio),
            bias: self.bias,
        }
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Signed per-term contributions to a raw score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub roe: f64,
    pub dividend_yield: f64,
    pub payout_ratio: f64,
    pub bias: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.roe + self.dividend_yield + self.payout_ratio + self.bias
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Ticker;

    fn record(roe: f64, dividend_yield: f64, payout_ratio: f64) -> InstrumentRecord {
        InstrumentRecord {
            id: Ticker::parse("8001.T").expect("valid ticker"),
            name: "ITOCHU".to_owned(),
            name_localized: String::new(),
            sector: "Trading".to_owned(),
            roe,
            dividend_yield,
            payout_ratio,
            price: 6620.0,
        }
    }

    #[test]
    fn default_weights_score_itochu() {
        let score = ScoreWeights::default().score(&record(17.0, 3.1, 28.0));
        assert!((score - 70.85).abs() < 1e-9, "got {score}");
    }

    #[test]
    fn breakdown_sums_to_score() {
        let weights = ScoreWeights::new(2.2, 7.8, 0.1, 12.0);
        let sample = record(9.5, 4.1, 35.0);
        let breakdown = weights.breakdown(&sample);

        assert!((breakdown.payout_ratio + 3.5).abs() < 1e-9);
        assert_eq!(breakdown.bias, 12.0);
        assert_eq!(breakdown.total(), weights.score(&sample));
    }

    #[test]
    fn partial_weights_fill_from_defaults() {
        let weights: ScoreWeights =
            serde_json::from_str(r#"{"dividend_yield": 7.0}"#).expect("deserialize");
        assert_eq!(weights, ScoreWeights::new(2.0, 7.0, 0.05, 15.0));
    }

    #[test]
    fn rejects_infinite_bias() {
        let err = ScoreWeights::new(2.0, 7.5, 0.05, f64::INFINITY)
            .validate()
            .expect_err("must fail");
        assert!(matches!(err, ScreenError::InvalidWeight { field: "bias", .. }));
    }
}
