//! CLI argument definitions for yieldscreen.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `rank` | Filter and rank the universe |
//! | `universe` | List the records a supplier provides |
//! | `score` | Show the score breakdown for tickers |
//! | `presets` | List named threshold presets |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `json` | Output format (json, ndjson, table) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--strict` | `false` | Treat warnings and errors as failures |
//! | `--log-level` | `warn` | Log level for stderr diagnostics |
//! | `--log-format` | `pretty` | Log format (pretty, json) |
//!
//! # Examples
//!
//! ```bash
//! yieldscreen rank --preset recommended --pretty
//! yieldscreen rank --min-roe 8 --min-yield 4 --max-payout 60 --limit 10
//! yieldscreen rank --universe holdings.json --fractional --normalize
//! yieldscreen score 8306.T 2914.T --w-yield 7.0
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use yieldscreen_core::Preset;

/// Dividend and quality screener for TSE Prime equities.
#[derive(Debug, Parser)]
#[command(
    name = "yieldscreen",
    author,
    version,
    about = "Dividend/quality equity screener",
    long_about = "yieldscreen filters a universe of equities by minimum ROE, minimum dividend \
yield, and maximum payout ratio, then ranks the survivors by a configurable linear score.\n\
\n\
Results are wrapped in a JSON envelope with request metadata, warnings, and structured \
errors. Use 'yieldscreen <command> --help' for command-specific help."
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Treat warnings and errors as failures (exit code 5).
    #[arg(long, global = true, default_value_t = false)]
    pub strict: bool,

    /// Log level for diagnostics on stderr. `RUST_LOG` takes precedence.
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Log line format.
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Envelope metadata plus an aligned row listing.
    Table,
    /// Single JSON object output.
    Json,
    /// Newline-delimited JSON (one object per line).
    Ndjson,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Named threshold presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PresetSelector {
    /// ROE >= 6%, yield >= 3%, payout <= 120%.
    Recommended,
    /// No filtering.
    Open,
    /// ROE >= 8%, yield >= 4%, payout <= 60%.
    Income,
}

impl From<PresetSelector> for Preset {
    fn from(value: PresetSelector) -> Self {
        match value {
            PresetSelector::Recommended => Preset::Recommended,
            PresetSelector::Open => Preset::Open,
            PresetSelector::Income => Preset::Income,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Filter the universe by thresholds and rank survivors by score.
    ///
    /// Precedence: built-in defaults, then --config, then --preset, then
    /// individual flags.
    ///
    /// # Examples
    ///
    ///   yieldscreen rank
    ///   yieldscreen rank --preset income --limit 10
    ///   yieldscreen rank --min-roe 0 --min-yield 0 --max-payout inf --normalize
    Rank(RankArgs),

    /// List the records a supplier provides, unfiltered.
    Universe(UniverseArgs),

    /// Show the per-term score breakdown for one or more tickers.
    ///
    /// # Examples
    ///
    ///   yieldscreen score 8306.T
    ///   yieldscreen score 2914.T 9101.T --bias 10
    Score(ScoreArgs),

    /// List named threshold presets.
    Presets,
}

/// Where records come from.
#[derive(Debug, Clone, Args)]
pub struct SourceArgs {
    /// JSON file containing an array of records. Defaults to the built-in universe.
    #[arg(long, value_name = "FILE")]
    pub universe: Option<PathBuf>,

    /// Ratios in --universe are fractions (0.038) rather than percent (3.8).
    #[arg(long, default_value_t = false, requires = "universe")]
    pub fractional: bool,
}

/// Score formula overrides.
#[derive(Debug, Clone, Args)]
pub struct WeightArgs {
    /// Weight applied to ROE.
    #[arg(long)]
    pub w_roe: Option<f64>,

    /// Weight applied to dividend yield.
    #[arg(long)]
    pub w_yield: Option<f64>,

    /// Penalty weight applied to payout ratio.
    #[arg(long)]
    pub w_payout: Option<f64>,

    /// Constant added to every score.
    #[arg(long, allow_hyphen_values = true)]
    pub bias: Option<f64>,
}

#[derive(Debug, Args)]
pub struct RankArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub weights: WeightArgs,

    /// JSON screen configuration file.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Threshold preset applied before individual threshold flags.
    #[arg(long, value_enum)]
    pub preset: Option<PresetSelector>,

    /// Minimum ROE in percent.
    #[arg(long, allow_hyphen_values = true)]
    pub min_roe: Option<f64>,

    /// Minimum dividend yield in percent.
    #[arg(long, allow_hyphen_values = true)]
    pub min_yield: Option<f64>,

    /// Maximum payout ratio in percent (`inf` for no cap).
    #[arg(long)]
    pub max_payout: Option<f64>,

    /// Min-max normalize scores onto 0-100.
    #[arg(long, default_value_t = false)]
    pub normalize: bool,

    /// Round scores to N decimals (0-15) before sorting.
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(0..=15))]
    pub round: Option<u32>,

    /// Return at most N entries.
    #[arg(long)]
    pub limit: Option<usize>,

    /// Abort on the first malformed record instead of skipping it.
    #[arg(long, default_value_t = false)]
    pub fail_on_invalid: bool,
}

#[derive(Debug, Args)]
pub struct UniverseArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Return at most N records.
    #[arg(long)]
    pub limit: Option<usize>,
}

#[derive(Debug, Args)]
pub struct ScoreArgs {
    /// One or more tickers (e.g., 8306.T 2914.T).
    #[arg(required = true, num_args = 1..)]
    pub tickers: Vec<String>,

    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub weights: WeightArgs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_rank_overrides() {
        let cli = Cli::try_parse_from([
            "yieldscreen",
            "rank",
            "--preset",
            "income",
            "--max-payout",
            "inf",
            "--w-yield",
            "7.0",
            "--pretty",
        ])
        .expect("arguments should parse");

        let Command::Rank(args) = cli.command else {
            panic!("expected rank command");
        };
        assert_eq!(args.preset, Some(PresetSelector::Income));
        assert_eq!(args.max_payout, Some(f64::INFINITY));
        assert_eq!(args.weights.w_yield, Some(7.0));
        assert!(cli.pretty);
    }

    #[test]
    fn fractional_requires_universe_file() {
        let err = Cli::try_parse_from(["yieldscreen", "universe", "--fractional"])
            .expect_err("must fail");
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn round_is_limited_to_f64_precision() {
        let err = Cli::try_parse_from(["yieldscreen", "rank", "--round", "40"])
            .expect_err("must fail");
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);

        let cli = Cli::try_parse_from(["yieldscreen", "rank", "--round", "1"])
            .expect("arguments should parse");
        let Command::Rank(args) = cli.command else {
            panic!("expected rank command");
        };
        assert_eq!(args.round, Some(1));
    }
}
