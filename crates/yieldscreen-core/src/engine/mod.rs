//! # Screening & Ranking Engine
//!
//! Stateless filter-and-rank over a borrowed slice of [`InstrumentRecord`]s.
//!
//! ```text
//! records ──▶ validate ──▶ threshold filter ──▶ raw score ──▶ [normalize] ──▶ [round] ──▶ sort
//!               │
//!               └──▶ rejected (non-finite field, non-positive price, duplicate id,
//!                              score overflowing f64)
//! ```
//!
//! Ordering is by score descending, ties broken by ticker ascending. The
//! engine never mutates its input and keeps nothing between calls, so the same
//! universe can be re-ranked under any number of configurations.

pub mod normalize;
mod score;
mod thresholds;

use std::collections::HashSet;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::{InstrumentRecord, ScreenConfig, Ticker, ValidationError};

pub use score::{ScoreBreakdown, ScoreWeights};
pub use thresholds::Thresholds;

/// What to do with a malformed record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionPolicy {
    /// Drop the record, report it in [`Ranking::rejected`], keep going.
    #[default]
    SkipRecord,
    /// Abort the whole call with [`ScreenError::InvalidRecord`].
    FailBatch,
}

/// Why a record was excluded before filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RejectionReason {
    NonFinite { field: &'static str },
    NonPositivePrice,
    DuplicateId,
    /// Every field is finite but the weighted sum is not.
    NonFiniteScore,
    Malformed { message: String },
}

impl Display for RejectionReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonFinite { field } => write!(f, "field '{field}' must be finite"),
            Self::NonPositivePrice => f.write_str("price must be positive"),
            Self::DuplicateId => f.write_str("id already seen earlier in the batch"),
            Self::NonFiniteScore => f.write_str("weighted score overflows f64"),
            Self::Malformed { message } => f.write_str(message),
        }
    }
}

impl From<ValidationError> for RejectionReason {
    fn from(error: ValidationError) -> Self {
        match error {
            ValidationError::NonFiniteValue { field } => Self::NonFinite { field },
            ValidationError::NonPositivePrice => Self::NonPositivePrice,
            other => Self::Malformed {
                message: other.to_string(),
            },
        }
    }
}

/// Engine errors. Zero matches is not an error.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScreenError {
    #[error("threshold '{field}' must be finite, got {value}")]
    InvalidThreshold { field: &'static str, value: f64 },

    #[error("score weight '{field}' must be finite, got {value}")]
    InvalidWeight { field: &'static str, value: f64 },

    #[error("round_decimals must be at most {max}, got {value}")]
    InvalidRounding { value: u32, max: u32 },

    #[error("record '{id}' rejected: {reason}")]
    InvalidRecord { id: Ticker, reason: RejectionReason },
}

/// A record that passed every threshold, annotated with its score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredRecord {
    /// 1-based position in the ranking.
    pub rank: usize,
    #[serde(flatten)]
    pub record: InstrumentRecord,
    pub raw_score: f64,
    /// Ordering key: `raw_score` after optional normalization and rounding.
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RejectedRecord {
    pub id: Ticker,
    pub reason: RejectionReason,
}

/// Result of one [`rank`] call.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Ranking {
    pub entries: Vec<ScoredRecord>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rejected: Vec<RejectedRecord>,
    /// Well-formed records evaluated against the thresholds.
    pub screened: usize,
}

impl Ranking {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Filters, scores, and sorts `records` under `config`.
pub fn rank(records: &[InstrumentRecord], config: &ScreenConfig) -> Result<Ranking, ScreenError> {
    config.validate()?;

    let mut seen: HashSet<&Ticker> = HashSet::with_capacity(records.len());
    let mut rejected = Vec::new();
    let mut admitted: Vec<(&InstrumentRecord, f64)> = Vec::new();
    let mut screened = 0_usize;

    for record in records {
        let verdict = match record.validate() {
            Err(error) => Err(RejectionReason::from(error)),
            Ok(()) if !seen.insert(&record.id) => Err(RejectionReason::DuplicateId),
            Ok(()) => {
                let raw_score = config.weights.score(record);
                if raw_score.is_finite() {
                    Ok(raw_score)
                } else {
                    Err(RejectionReason::NonFiniteScore)
                }
            }
        };

        let raw_score = match verdict {
            Ok(raw_score) => raw_score,
            Err(reason) => {
                reject(config.on_invalid, record, reason, &mut rejected)?;
                continue;
            }
        };

        screened += 1;
        if config.thresholds.admits(record) {
            admitted.push((record, raw_score));
        }
    }

    let mut scores: Vec<f64> = admitted.iter().map(|(_, raw_score)| *raw_score).collect();
    if config.normalize {
        normalize::min_max(&mut scores);
    }
    if let Some(decimals) = config.round_decimals {
        for score in &mut scores {
            *score = normalize::round_to(*score, decimals);
        }
    }

    let mut entries: Vec<ScoredRecord> = admitted
        .into_iter()
        .zip(scores)
        .map(|((record, raw_score), score)| ScoredRecord {
            rank: 0,
            record: record.clone(),
            raw_score,
            score,
        })
        .collect();

    entries.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.record.id.cmp(&b.record.id))
    });
    for (index, entry) in entries.iter_mut().enumerate() {
        entry.rank = index + 1;
    }

    debug!(
        input = records.len(),
        screened,
        matched = entries.len(),
        rejected = rejected.len(),
        normalize = config.normalize,
        "ranking complete"
    );

    Ok(Ranking {
        entries,
        rejected,
        screened,
    })
}

fn reject(
    policy: RejectionPolicy,
    record: &InstrumentRecord,
    reason: RejectionReason,
    rejected: &mut Vec<RejectedRecord>,
) -> Result<(), ScreenError> {
    match policy {
        RejectionPolicy::FailBatch => Err(ScreenError::InvalidRecord {
            id: record.id.clone(),
            reason,
        }),
        RejectionPolicy::SkipRecord => {
            warn!(id = %record.id, %reason, "skipping invalid record");
            rejected.push(RejectedRecord {
                id: record.id.clone(),
                reason,
            });
            Ok(())
        }
    }
}

/// [`rank`] with default weights, no normalization, and skipped invalid rows.
pub fn rank_with(
    records: &[InstrumentRecord],
    min_roe: f64,
    min_yield: f64,
    max_payout: f64,
) -> Result<Ranking, ScreenError> {
    let config = ScreenConfig {
        thresholds: Thresholds::new(min_roe, min_yield, max_payout),
        ..ScreenConfig::default()
    };
    rank(records, &config)
}
