use serde::Serialize;
use yieldscreen_core::{
    rank, CoreError, EnvelopeError, Preset, RejectedRecord, RejectionPolicy, ScoreWeights,
    ScoredRecord, ScreenConfig, Thresholds,
};

use crate::cli::RankArgs;
use crate::error::CliError;

use super::{apply_weight_overrides, load_records, CommandResult};

#[derive(Debug, Serialize)]
struct RankResponseData {
    thresholds: Thresholds,
    weights: ScoreWeights,
    normalize: bool,
    screened: usize,
    matched: usize,
    entries: Vec<ScoredRecord>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    rejected: Vec<RejectedRecord>,
}

pub fn run(args: &RankArgs) -> Result<CommandResult, CliError> {
    let config = resolve_config(args)?;
    let (source, records) = load_records(&args.source)?;

    let ranking = rank(&records, &config).map_err(CoreError::from)?;
    let matched = ranking.len();
    let mut entries = ranking.entries;
    if let Some(limit) = args.limit {
        entries.truncate(limit);
    }

    let errors = ranking
        .rejected
        .iter()
        .map(|rejected| {
            EnvelopeError::new(
                "invalid_record",
                format!("record '{}' skipped: {}", rejected.id, rejected.reason),
            )
            .map(|error| error.with_subject(rejected.id.as_str()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let data = serde_json::to_value(RankResponseData {
        thresholds: config.thresholds,
        weights: config.weights,
        normalize: config.normalize,
        screened: ranking.screened,
        matched,
        entries,
        rejected: ranking.rejected,
    })?;

    let mut result = CommandResult::ok(data, source).with_errors(errors);
    if matched == 0 {
        result = result.with_warning("no records matched the thresholds");
    }
    Ok(result)
}

/// Defaults, then `--config`, then `--preset`, then individual flags.
fn resolve_config(args: &RankArgs) -> Result<ScreenConfig, CoreError> {
    let mut config = match &args.config {
        Some(path) => ScreenConfig::from_json_file(path)?,
        None => ScreenConfig::default(),
    };

    if let Some(preset) = args.preset {
        config.thresholds = Preset::from(preset).thresholds();
    }
    if let Some(min_roe) = args.min_roe {
        config.thresholds.min_roe = min_roe;
    }
    if let Some(min_yield) = args.min_yield {
        config.thresholds.min_yield = min_yield;
    }
    if let Some(max_payout) = args.max_payout {
        config.thresholds.max_payout = max_payout;
    }

    config.weights = apply_weight_overrides(config.weights, &args.weights);
    if args.normalize {
        config.normalize = true;
    }
    if args.round.is_some() {
        config.round_decimals = args.round;
    }
    if args.fail_on_invalid {
        config.on_invalid = RejectionPolicy::FailBatch;
    }

    config.validate()?;
    tracing::debug!(?config, "resolved screen config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;

    use super::*;
    use crate::cli::{Cli, Command};

    fn rank_args(argv: &[&str]) -> RankArgs {
        let cli = Cli::try_parse_from(argv).expect("arguments should parse");
        match cli.command {
            Command::Rank(args) => args,
            other => panic!("expected rank command, got {other:?}"),
        }
    }

    #[test]
    fn flags_override_preset_thresholds() {
        let args = rank_args(&["yieldscreen", "rank", "--preset", "income", "--min-roe", "10"]);
        let config = resolve_config(&args).expect("config");

        assert_eq!(config.thresholds, Thresholds::new(10.0, 4.0, 60.0));
    }

    #[test]
    fn default_rank_uses_recommended_preset() {
        let args = rank_args(&["yieldscreen", "rank"]);
        let result = run(&args).expect("rank should succeed");

        assert_eq!(result.data["thresholds"]["min_roe"], 6.0);
        assert_eq!(result.data["screened"], 200);
        assert!(result.errors.is_empty());

        let entries = result.data["entries"].as_array().expect("entries array");
        assert!(!entries.is_empty());
        assert_eq!(entries[0]["rank"], 1);
    }

    #[test]
    fn impossible_thresholds_warn_instead_of_failing() {
        let args = rank_args(&["yieldscreen", "rank", "--min-roe", "1000"]);
        let result = run(&args).expect("empty result is not an error");

        assert_eq!(result.data["matched"], 0);
        assert_eq!(result.warnings, vec!["no records matched the thresholds"]);
    }

    #[test]
    fn limit_truncates_entries_but_not_match_count() {
        let args = rank_args(&["yieldscreen", "rank", "--preset", "open", "--limit", "5"]);
        let result = run(&args).expect("rank");

        assert_eq!(result.data["entries"].as_array().map(Vec::len), Some(5));
        assert_eq!(result.data["matched"], 200);
    }

    #[test]
    fn duplicate_rows_in_file_become_envelope_errors() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"[
                {{"id":"8306.T","name":"MUFG","roe":8.5,"dividend_yield":3.8,"payout_ratio":38.0,"price":1460}},
                {{"id":"8306.T","name":"MUFG copy","roe":9.0,"dividend_yield":4.0,"payout_ratio":30.0,"price":1500}}
            ]"#
        )
        .expect("write universe");
        let path = file.path().to_str().expect("utf-8 path");

        let args = rank_args(&["yieldscreen", "rank", "--universe", path, "--preset", "open"]);
        let result = run(&args).expect("rank");

        assert_eq!(result.data["matched"], 1);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].code, "invalid_record");
        assert_eq!(result.errors[0].subject.as_deref(), Some("8306.T"));
    }
}
