//! # Domain Models
//!
//! Canonical domain types for screening input.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`InstrumentRecord`] | One equity row: identity, display strings, ratios, price |
//! | [`Ticker`] | Validated exchange ticker |
//! | [`UtcDateTime`] | UTC timestamp for envelope metadata |
//!
//! Construction through [`InstrumentRecord::new`] rejects non-finite ratios and
//! non-positive prices. Records deserialized from JSON are checked again by the
//! engine before scoring.

mod record;
mod ticker;
mod timestamp;

pub use record::InstrumentRecord;
pub use ticker::Ticker;
pub use timestamp::UtcDateTime;
