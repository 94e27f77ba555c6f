use serde::Serialize;
use yieldscreen_core::InstrumentRecord;

use crate::cli::UniverseArgs;
use crate::error::CliError;

use super::{load_records, CommandResult};

#[derive(Debug, Serialize)]
struct UniverseResponseData {
    total: usize,
    records: Vec<InstrumentRecord>,
}

pub fn run(args: &UniverseArgs) -> Result<CommandResult, CliError> {
    let (source, mut records) = load_records(&args.source)?;
    let total = records.len();
    if let Some(limit) = args.limit {
        records.truncate(limit);
    }

    let data = serde_json::to_value(UniverseResponseData { total, records })?;
    Ok(CommandResult::ok(data, source))
}
