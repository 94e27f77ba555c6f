//! # yieldscreen core
//!
//! Dividend/quality screening for a small universe of TSE Prime equities.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`domain`] | Instrument records, tickers, timestamps |
//! | [`engine`] | Threshold filter, composite score, ranking |
//! | [`supplier`] | Record suppliers (built-in universe, JSON file) |
//! | [`config`] | Serializable screening configuration |
//! | [`preset`] | Named threshold presets |
//! | [`envelope`] | Response envelope with metadata |
//! | [`error`] | Core error types |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use yieldscreen_core::{rank, BuiltinUniverse, Preset, RecordSupplier, ScreenConfig};
//!
//! let records = BuiltinUniverse::default().records()?;
//! let config = ScreenConfig {
//!     thresholds: Preset::Income.thresholds(),
//!     ..ScreenConfig::default()
//! };
//! let ranking = rank(&records, &config)?;
//! for entry in &ranking.entries {
//!     println!("{:>3} {:<8} {:>6.2}", entry.rank, entry.record.id, entry.score);
//! }
//! ```

pub mod config;
pub mod domain;
pub mod engine;
pub mod envelope;
pub mod error;
pub mod preset;
pub mod supplier;

pub use config::{ConfigError, ScreenConfig};
pub use domain::{InstrumentRecord, Ticker, UtcDateTime};
pub use engine::{
    rank, rank_with, Ranking, RejectedRecord, RejectionPolicy, RejectionReason, ScoreBreakdown,
    ScoreWeights, ScoredRecord, ScreenError, Thresholds,
};
pub use envelope::{Envelope, EnvelopeError, EnvelopeMeta, SCHEMA_VERSION};
pub use error::{CoreError, ValidationError};
pub use preset::Preset;
pub use supplier::{BuiltinUniverse, JsonFileSupplier, RecordSupplier, SupplierId, SupplyError};
