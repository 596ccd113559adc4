//! Curve command implementation

use crate::cli::LogLevel;
use crate::config::{load_schedule_spec, CurveArgs, OutputFormat};
use crate::error::{Error, Result};
use crate::optim::WarmupCosineSchedule;
use serde::Serialize;
use std::io::{self, Write};

/// One sampled point of a schedule
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurvePoint {
    pub step: u64,
    pub phase: String,
    pub factor: f64,
    pub lr: f64,
}

impl CurvePoint {
    fn at(schedule: &WarmupCosineSchedule, step: u64) -> Self {
        Self {
            step,
            phase: schedule.phase(step).to_string(),
            factor: schedule.factor(step),
            lr: schedule.lr(step),
        }
    }
}

/// Lazily sample the schedule every `every` steps from 0 through `until`
///
/// `until` itself is always included. Points are computed on demand, so any
/// `u64` bound is accepted.
pub fn sample_curve(
    schedule: &WarmupCosineSchedule,
    every: u64,
    until: u64,
) -> impl Iterator<Item = CurvePoint> + '_ {
    let every = every.max(1);
    let endpoint = (until % every != 0).then_some(until);
    (0..=until / every)
        .map(move |i| i * every)
        .chain(endpoint)
        .map(move |step| CurvePoint::at(schedule, step))
}

/// Write sampled points row by row
///
/// JSON output is a single array, emitted element by element.
pub fn write_curve<W, I>(mut out: W, points: I, format: OutputFormat) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = CurvePoint>,
{
    let io_err = |e| Error::io("writing curve", e);
    match format {
        OutputFormat::Json => {
            write!(out, "[").map_err(io_err)?;
            for (idx, point) in points.into_iter().enumerate() {
                let sep = if idx == 0 { "\n  " } else { ",\n  " };
                out.write_all(sep.as_bytes()).map_err(io_err)?;
                serde_json::to_writer(&mut out, &point)?;
            }
            writeln!(out, "\n]").map_err(io_err)?;
        }
        OutputFormat::Text => {
            writeln!(out, "{:>10}  {:<6}  {:>12}  {:>12}", "step", "phase", "factor", "lr")
                .map_err(io_err)?;
            for p in points {
                writeln!(out, "{:>10}  {:<6}  {:>12.6}  {:>12.6e}", p.step, p.phase, p.factor, p.lr)
                    .map_err(io_err)?;
            }
        }
    }
    out.flush().map_err(io_err)
}

pub fn run_curve(args: CurveArgs, level: LogLevel) -> Result<()> {
    let schedule = load_schedule_spec(&args.config)?.build()?;
    let until = args.until.unwrap_or(schedule.total_steps());
    tracing::info!(every = args.every, until, "sampling schedule");

    if level == LogLevel::Quiet {
        return Ok(());
    }
    let points = sample_curve(&schedule, args.every, until);
    write_curve(io::BufWriter::new(io::stdout().lock()), points, args.format)
}
