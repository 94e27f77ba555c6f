use serde_json::Value;
use yieldscreen_core::Envelope;

use crate::cli::OutputFormat;
use crate::error::CliError;

pub fn render(
    envelope: &Envelope<Value>,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(envelope)?
            } else {
                serde_json::to_string(envelope)?
            };
            println!("{payload}");
        }
        OutputFormat::Ndjson => render_ndjson(envelope)?,
        OutputFormat::Table => render_table(envelope)?,
    }

    Ok(())
}

/// One line of metadata, then one line per ranked entry or record.
fn render_ndjson(envelope: &Envelope<Value>) -> Result<(), CliError> {
    println!("{}", serde_json::to_string(&envelope.meta)?);
    match rows(&envelope.data) {
        Some(rows) => {
            for row in rows {
                println!("{}", serde_json::to_string(row)?);
            }
        }
        None => println!("{}", serde_json::to_string(&envelope.data)?),
    }
    for error in &envelope.errors {
        println!("{}", serde_json::to_string(error)?);
    }
    Ok(())
}

fn render_table(envelope: &Envelope<Value>) -> Result<(), CliError> {
    println!("request_id  : {}", envelope.meta.request_id);
    println!("schema      : {}", envelope.meta.schema_version);
    println!("generated_at: {}", envelope.meta.generated_at);
    println!("source      : {}", envelope.meta.source);
    println!("latency_ms  : {}", envelope.meta.latency_ms);

    if !envelope.meta.warnings.is_empty() {
        println!("warnings:");
        for warning in &envelope.meta.warnings {
            println!("  - {warning}");
        }
    }

    match rows(&envelope.data) {
        Some(rows) => {
            println!(
                "{:>4}  {:<10} {:<28} {:>7} {:>8} {:>8} {:>9}",
                "rank", "id", "name", "roe", "yield", "payout", "score"
            );
            for (index, row) in rows.iter().enumerate() {
                let rank = row["rank"].as_u64().unwrap_or(index as u64 + 1);
                println!(
                    "{:>4}  {:<10} {:<28} {:>7.1} {:>8.1} {:>8.1} {:>9}",
                    rank,
                    row["id"].as_str().unwrap_or("-"),
                    truncate(row["name"].as_str().unwrap_or("-"), 28),
                    row["roe"].as_f64().unwrap_or(f64::NAN),
                    row["dividend_yield"].as_f64().unwrap_or(f64::NAN),
                    row["payout_ratio"].as_f64().unwrap_or(f64::NAN),
                    row["score"]
                        .as_f64()
                        .map(|score| format!("{score:.2}"))
                        .unwrap_or_else(|| String::from("-")),
                );
            }
        }
        None => {
            println!("data:");
            let pretty_data = serde_json::to_string_pretty(&envelope.data)?;
            for line in pretty_data.lines() {
                println!("  {line}");
            }
        }
    }

    if !envelope.errors.is_empty() {
        println!("errors:");
        for error in &envelope.errors {
            println!("  - {}: {}", error.code, error.message);
        }
    }

    Ok(())
}

/// Row-shaped payloads: ranked `entries` or raw `records`.
fn rows(data: &Value) -> Option<&Vec<Value>> {
    data.get("entries")
        .or_else(|| data.get("records"))
        .and_then(Value::as_array)
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_owned();
    }
    let mut shortened: String = value.chars().take(width.saturating_sub(1)).collect();
    shortened.push('…');
    shortened
}
