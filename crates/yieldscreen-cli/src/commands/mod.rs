mod presets;
mod rank;
mod score;
mod universe;

use std::time::Instant;

use serde_json::Value;
use uuid::Uuid;
use yieldscreen_core::{
    BuiltinUniverse, CoreError, Envelope, EnvelopeError, EnvelopeMeta, InstrumentRecord,
    JsonFileSupplier, RecordSupplier, ScoreWeights, SupplierId,
};

use crate::cli::{Cli, Command, SourceArgs, WeightArgs};
use crate::error::CliError;

pub struct CommandResult {
    pub data: Value,
    pub warnings: Vec<String>,
    pub errors: Vec<EnvelopeError>,
    pub source: SupplierId,
}

impl CommandResult {
    pub fn ok(data: Value, source: SupplierId) -> Self {
        Self {
            data,
            warnings: Vec::new(),
            errors: Vec::new(),
            source,
        }
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    pub fn with_errors(mut self, errors: Vec<EnvelopeError>) -> Self {
        self.errors.extend(errors);
        self
    }
}

pub fn run(cli: &Cli) -> Result<Envelope<Value>, CliError> {
    let started = Instant::now();

    let command_result = match &cli.command {
        Command::Rank(args) => rank::run(args)?,
        Command::Universe(args) => universe::run(args)?,
        Command::Score(args) => score::run(args)?,
        Command::Presets => presets::run()?,
    };

    let CommandResult {
        data,
        warnings,
        errors,
        source,
    } = command_result;

    let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    let mut meta = EnvelopeMeta::new(Uuid::new_v4().to_string(), source, latency_ms)?;
    for warning in warnings {
        meta.push_warning(warning);
    }

    Envelope::with_errors(meta, data, errors).map_err(CliError::from)
}

/// Resolves the supplier selected by `--universe` and loads its records.
fn load_records(source: &SourceArgs) -> Result<(SupplierId, Vec<InstrumentRecord>), CoreError> {
    let supplier: Box<dyn RecordSupplier> = match &source.universe {
        Some(path) => {
            Box::new(JsonFileSupplier::new(path).with_fractional_percentages(source.fractional))
        }
        None => Box::new(BuiltinUniverse::default()),
    };

    let records = supplier.records()?;
    Ok((supplier.id(), records))
}

fn apply_weight_overrides(mut weights: ScoreWeights, overrides: &WeightArgs) -> ScoreWeights {
    if let Some(value) = overrides.w_roe {
        weights.roe = value;
    }
    if let Some(value) = overrides.w_yield {
        weights.dividend_yield = value;
    }
    if let Some(value) = overrides.w_payout {
        weights.payout_ratio = value;
    }
    if let Some(value) = overrides.bias {
        weights.bias = value;
    }
    weights
}
