use serde::Serialize;
use yieldscreen_core::{EnvelopeError, ScoreBreakdown, ScoreWeights, Ticker};

use crate::cli::ScoreArgs;
use crate::error::CliError;

use super::{apply_weight_overrides, load_records, CommandResult};

#[derive(Debug, Serialize)]
struct ScoreResponseData {
    weights: ScoreWeights,
    scores: Vec<TickerScore>,
}

#[derive(Debug, Serialize)]
struct TickerScore {
    id: Ticker,
    name: String,
    raw_score: f64,
    breakdown: ScoreBreakdown,
}

pub fn run(args: &ScoreArgs) -> Result<CommandResult, CliError> {
    let tickers = args
        .tickers
        .iter()
        .map(|raw| Ticker::parse(raw))
        .collect::<Result<Vec<_>, _>>()?;

    let weights = apply_weight_overrides(ScoreWeights::DEFAULT, &args.weights);
    weights.validate().map_err(yieldscreen_core::CoreError::from)?;

    let (source, records) = load_records(&args.source)?;

    let mut scores = Vec::with_capacity(tickers.len());
    let mut errors = Vec::new();
    for ticker in tickers {
        match records.iter().find(|record| record.id == ticker) {
            Some(record) => {
                let breakdown = weights.breakdown(record);
                scores.push(TickerScore {
                    id: ticker,
                    name: record.name.clone(),
                    raw_score: breakdown.total(),
                    breakdown,
                });
            }
            None => errors.push(
                EnvelopeError::new("unknown_ticker", format!("'{ticker}' is not in the universe"))?
                    .with_subject(ticker.as_str()),
            ),
        }
    }

    let data = serde_json::to_value(ScoreResponseData { weights, scores })?;
    Ok(CommandResult::ok(data, source).with_errors(errors))
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::cli::{Cli, Command};

    fn score_args(argv: &[&str]) -> ScoreArgs {
        let cli = Cli::try_parse_from(argv).expect("arguments should parse");
        match cli.command {
            Command::Score(args) => args,
            other => panic!("expected score command, got {other:?}"),
        }
    }

    #[test]
    fn breaks_down_itochu_with_default_weights() {
        let result = run(&score_args(&["yieldscreen", "score", "8001.t"])).expect("score");

        let entry = &result.data["scores"][0];
        assert_eq!(entry["id"], "8001.T");
        assert_eq!(entry["breakdown"]["roe"], 34.0);
        assert_eq!(entry["breakdown"]["dividend_yield"], 23.25);
        let raw = entry["raw_score"].as_f64().expect("numeric score");
        assert!((raw - 70.85).abs() < 1e-9);
    }

    #[test]
    fn unknown_ticker_is_reported_not_fatal() {
        let result =
            run(&score_args(&["yieldscreen", "score", "8306.T", "9999.T"])).expect("score");

        assert_eq!(result.data["scores"].as_array().map(Vec::len), Some(1));
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].code, "unknown_ticker");
    }
}
