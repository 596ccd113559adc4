//! Summarize command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{OutputFormat, SummarizeArgs};
use crate::error::{Error, Result};
use crate::train::{AverageMeter, MeterSummary};
use std::fs::File;
use std::io::{self, BufRead, BufReader};

/// Parse one input line; blank lines and `#` comments yield `None`
///
/// Only finite numbers are accepted.
pub fn parse_value(line_no: usize, line: &str) -> Result<Option<f64>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    let value = trimmed
        .parse::<f64>()
        .map_err(|e| Error::Parse(format!("line {line_no}: '{trimmed}': {e}")))?;
    if !value.is_finite() {
        return Err(Error::Parse(format!("line {line_no}: '{trimmed}': value must be finite")));
    }
    Ok(Some(value))
}

/// Stream values from `reader` into a fresh meter, one line at a time
pub fn summarize_reader<R: BufRead>(
    reader: R,
    weight: u64,
    name: Option<String>,
) -> Result<AverageMeter> {
    let mut meter = match name {
        Some(name) => AverageMeter::named(name),
        None => AverageMeter::new(),
    };
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| Error::io("reading values", e))?;
        if let Some(value) = parse_value(idx + 1, &line)? {
            meter.try_update_weighted(value, weight)?;
        }
    }
    Ok(meter)
}

/// Render a meter summary
pub fn format_summary(summary: &MeterSummary, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(summary)?),
        OutputFormat::Text => {
            let extremum = |v: Option<f64>| v.map_or_else(|| "-".to_string(), |v| format!("{v}"));
            let mut lines = Vec::new();
            if let Some(name) = &summary.name {
                lines.push(format!("Meter: {name}"));
            }
            lines.push(format!("  Count: {}", summary.count));
            lines.push(format!("  Sum: {}", summary.sum));
            lines.push(format!("  Average: {}", summary.average));
            lines.push(format!("  Current: {}", summary.current));
            lines.push(format!("  Min: {}", extremum(summary.min)));
            lines.push(format!("  Max: {}", extremum(summary.max)));
            Ok(lines.join("\n"))
        }
    }
}

pub fn run_summarize(args: SummarizeArgs, level: LogLevel) -> Result<()> {
    let meter = match &args.input {
        Some(path) => {
            let file = File::open(path)
                .map_err(|e| Error::io(format!("opening {}", path.display()), e))?;
            summarize_reader(BufReader::new(file), args.weight, args.name)?
        }
        None => summarize_reader(io::stdin().lock(), args.weight, args.name)?,
    };
    tracing::info!(count = meter.count(), weight = args.weight, "summarized");

    log(level, LogLevel::Normal, &format_summary(&meter.summary(), args.format)?);
    Ok(())
}
