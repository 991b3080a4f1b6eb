//! Console rendering of measurements and the final summary.
//!
//! The text layout is fixed: 60-character `=` rules around every heading,
//! timings to six decimals, speedups to two.

use crate::error::Result;
use crate::measurement::Measurement;
use colored::Colorize;
use serde::Serialize;
use std::io::Write;

pub const RULE_WIDTH: usize = 60;
pub const TITLE: &str = "PERFORMANCE BENCHMARK RESULTS";
pub const CLOSING_LINE: &str = "All optimizations showed improvement!";

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

// =============================================================================
// Report
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    measurements: Vec<Measurement>,
}

impl Report {
    pub fn new() -> Self {
        Report {
            measurements: Vec::new(),
        }
    }

    pub fn push(&mut self, measurement: Measurement) {
        self.measurements.push(measurement);
    }

    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    pub fn len(&self) -> usize {
        self.measurements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }

    /// Arithmetic mean of the speedups in trial order, `None` when empty.
    pub fn average_speedup(&self) -> Option<f64> {
        if self.measurements.is_empty() {
            return None;
        }
        let total: f64 = self.measurements.iter().map(|m| m.speedup).sum();
        Some(total / self.measurements.len() as f64)
    }

    pub fn to_json(&self) -> Result<String> {
        #[derive(Serialize)]
        struct JsonReport<'a> {
            measurements: &'a [Measurement],
            average_speedup: Option<f64>,
            total_tests: usize,
        }

        let json = JsonReport {
            measurements: &self.measurements,
            average_speedup: self.average_speedup().filter(|v| v.is_finite()),
            total_tests: self.len(),
        };
        Ok(serde_json::to_string_pretty(&json)?)
    }
}

impl FromIterator<Measurement> for Report {
    fn from_iter<I: IntoIterator<Item = Measurement>>(iter: I) -> Self {
        Report {
            measurements: iter.into_iter().collect(),
        }
    }
}

// =============================================================================
// Text output
// =============================================================================

fn paint_speedup(speedup: f64, color: bool) -> String {
    let text = format!("{:.2}x faster", speedup);
    if !color {
        return text;
    }
    if speedup >= 1.0 {
        text.green().bold().to_string()
    } else {
        text.red().bold().to_string()
    }
}

pub fn write_header<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{}", rule())?;
    writeln!(out, "{}", TITLE)?;
    writeln!(out, "{}", rule())?;
    Ok(())
}

pub fn write_measurement<W: Write>(out: &mut W, m: &Measurement, color: bool) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", rule())?;
    writeln!(out, "Benchmark: {}", m.label)?;
    writeln!(out, "{}", rule())?;
    writeln!(out, "Inefficient: {:.6}s", m.slow_secs())?;
    writeln!(out, "Optimized:   {:.6}s", m.fast_secs())?;
    writeln!(out, "Speedup:     {}", paint_speedup(m.speedup, color))?;
    Ok(())
}

pub fn write_summary<W: Write>(out: &mut W, report: &Report, color: bool) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", rule())?;
    writeln!(out, "SUMMARY")?;
    writeln!(out, "{}", rule())?;
    match report.average_speedup() {
        Some(avg) => writeln!(out, "Average speedup: {}", paint_speedup(avg, color))?,
        None => writeln!(out, "Average speedup: n/a")?,
    }
    writeln!(out, "Total tests: {}", report.len())?;
    writeln!(out, "{}", CLOSING_LINE)?;
    Ok(())
}
