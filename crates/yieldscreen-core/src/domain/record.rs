use serde::{Deserialize, Serialize};

use crate::{Ticker, ValidationError};

/// One instrument row as delivered by a record supplier.
///
/// All ratio fields are expressed in percent units: `3.8` means 3.8%.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstrumentRecord {
    pub id: Ticker,
    pub name: String,
    #[serde(default, alias = "nameLocalized")]
    pub name_localized: String,
    #[serde(default)]
    pub sector: String,
    pub roe: f64,
    #[serde(alias = "dividendYield")]
    pub dividend_yield: f64,
    #[serde(alias = "payoutRatio")]
    pub payout_ratio: f64,
    pub price: f64,
}

impl InstrumentRecord {
    /// Builds a record and checks the numeric fields.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: Ticker,
        name: impl Into<String>,
        name_localized: impl Into<String>,
        sector: impl Into<String>,
        roe: f64,
        dividend_yield: f64,
        payout_ratio: f64,
        price: f64,
    ) -> Result<Self, ValidationError> {
        let record = Self {
            id,
            name: name.into(),
            name_localized: name_localized.into(),
            sector: sector.into(),
            roe,
            dividend_yield,
            payout_ratio,
            price,
        };
        record.validate()?;
        Ok(record)
    }

    /// Checks the invariants the screening engine relies on.
    ///
    /// Fields are public, so the engine re-runs this on every record it sees.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_finite("roe", self.roe)?;
        validate_finite("dividend_yield", self.dividend_yield)?;
        validate_finite("payout_ratio", self.payout_ratio)?;
        validate_finite("price", self.price)?;
        if self.price <= 0.0 {
            return Err(ValidationError::NonPositivePrice);
        }
        Ok(())
    }
}

fn validate_finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticker(raw: &str) -> Ticker {
        Ticker::parse(raw).expect("valid ticker")
    }

    #[test]
    fn rejects_nan_yield() {
        let err = InstrumentRecord::new(
            ticker("9432.T"),
            "NTT",
            "日本電信電話",
            "Telecom",
            12.5,
            f64::NAN,
            35.0,
            180.0,
        )
        .expect_err("must fail");
        assert_eq!(
            err,
            ValidationError::NonFiniteValue {
                field: "dividend_yield"
            }
        );
    }

    #[test]
    fn rejects_zero_price() {
        let err = InstrumentRecord::new(ticker("9432.T"), "NTT", "", "", 12.5, 3.2, 35.0, 0.0)
            .expect_err("must fail");
        assert_eq!(err, ValidationError::NonPositivePrice);
    }

    #[test]
    fn accepts_camel_case_aliases() {
        let record: InstrumentRecord = serde_json::from_str(
            r#"{"id":"8058.t","name":"Mitsubishi Corp","nameLocalized":"三菱商事",
                "sector":"Trading","roe":15.5,"dividendYield":3.5,"payoutRatio":25.0,"price":2860}"#,
        )
        .expect("record should deserialize");

        assert_eq!(record.id.as_str(), "8058.T");
        assert_eq!(record.name_localized, "三菱商事");
        assert_eq!(record.dividend_yield, 3.5);
        assert_eq!(record.payout_ratio, 25.0);
    }
}
