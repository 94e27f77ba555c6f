use serde::Serialize;
use yieldscreen_core::{Preset, SupplierId, Thresholds};

use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct PresetsResponseData {
    presets: Vec<PresetEntry>,
    slider_domains: SliderDomains,
}

#[derive(Debug, Serialize)]
struct PresetEntry {
    name: Preset,
    description: &'static str,
    thresholds: Thresholds,
}

#[derive(Debug, Serialize)]
struct SliderDomains {
    roe: (f64, f64),
    dividend_yield: (f64, f64),
    payout_ratio: (f64, f64),
}

pub fn run() -> Result<CommandResult, CliError> {
    let presets = Preset::ALL
        .into_iter()
        .map(|preset| PresetEntry {
            name: preset,
            description: preset.description(),
            thresholds: preset.thresholds(),
        })
        .collect();

    let data = serde_json::to_value(PresetsResponseData {
        presets,
        slider_domains: SliderDomains {
            roe: Thresholds::SLIDER_ROE,
            dividend_yield: Thresholds::SLIDER_YIELD,
            payout_ratio: Thresholds::SLIDER_PAYOUT,
        },
    })?;
    Ok(CommandResult::ok(data, SupplierId::Builtin))
}
