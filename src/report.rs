//! Result summaries
//!
//! Throughput is `bytes / seconds` over whole elapsed milliseconds; the
//! normalized figure divides that by the number of grid cells. Magnitudes use 1024-based scaling with the
//! labels `bytes`, `KB`, `MB` and `GB`.

use crate::benchmark::{BenchmarkConfig, TestResult};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::time::Duration;

const KIB: f64 = 1024.0;
const MIB: f64 = KIB * 1024.0;
const GIB: f64 = MIB * 1024.0;

/// Render a byte magnitude with three decimals, e.g. `  1.500 MB`
#[must_use]
pub fn size_str(value: f64) -> String {
    if value >= GIB {
        format!("{:7.3} GB", value / GIB)
    } else if value >= MIB {
        format!("{:7.3} MB", value / MIB)
    } else if value >= KIB {
        format!("{:7.3} KB", value / KIB)
    } else {
        format!("{value:7.3} bytes")
    }
}

/// Elapsed time in whole milliseconds, the resolution results are reported at
#[must_use]
pub fn elapsed_ms(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

/// Bytes per second over whole milliseconds, `None` below one millisecond
#[must_use]
pub fn throughput(bytes: u64, elapsed: Duration) -> Option<f64> {
    let millis = elapsed_ms(elapsed);
    (millis > 0).then(|| bytes as f64 * 1000.0 / millis as f64)
}

/// Bytes per second per grid cell, `None` when the screen has no cells
#[must_use]
pub fn normalized(bytes_per_second: f64, config: &BenchmarkConfig) -> Option<f64> {
    config
        .terminal_size
        .cells()
        .map(|cells| bytes_per_second / f64::from(cells))
}

fn rate(bytes_per_second: Option<f64>) -> String {
    bytes_per_second.map_or_else(|| String::from("n/a"), |bps| format!("{}/s", size_str(bps)))
}

/// One entry of the structured report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub name: String,
    #[serde(rename = "bytes written")]
    pub bytes_written: u64,
    /// Elapsed milliseconds
    #[serde(rename = "time")]
    pub time_ms: u64,
    /// `None` when the test took less than a millisecond
    #[serde(rename = "MB/s")]
    pub mb_per_s: Option<f64>,
}

impl From<&TestResult> for ResultRecord {
    fn from(result: &TestResult) -> Self {
        let time_ms = elapsed_ms(result.elapsed);
        let mb_per_s = throughput(result.bytes_written, result.elapsed).map(|bps| bps / MIB);
        Self {
            name: result.name.clone(),
            bytes_written: result.bytes_written,
            time_ms,
            mb_per_s,
        }
    }
}

/// Renders the results of a finished run
pub struct Report<'a> {
    results: &'a [TestResult],
    config: BenchmarkConfig,
}

impl<'a> Report<'a> {
    #[must_use]
    pub fn new(results: &'a [TestResult], config: BenchmarkConfig) -> Self {
        Self { results, config }
    }

    fn write_line<W: Write + ?Sized>(
        &self,
        out: &mut W,
        name: &str,
        bytes: u64,
        millis: u64,
    ) -> io::Result<()> {
        let bps = throughput(bytes, Duration::from_millis(millis));
        let per_cell = bps.and_then(|bps| normalized(bps, &self.config));
        writeln!(
            out,
            "{:>40}: {:>3}.{:03} seconds, {} (normalized: {})",
            name,
            millis / 1000,
            millis % 1000,
            rate(bps),
            rate(per_cell)
        )
    }

    /// Human readable summary: one line per test, an aggregate line, and the run parameters
    ///
    /// # Errors
    /// Returns an error if the sink cannot be written
    pub fn summarize_text<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "All {} tests finished.", self.results.len())?;
        writeln!(out, "---------------------")?;
        writeln!(out)?;

        let mut total_bytes = 0u64;
        let mut total_ms = 0u64;
        for result in self.results {
            let millis = elapsed_ms(result.elapsed);
            total_bytes += result.bytes_written;
            total_ms = total_ms.saturating_add(millis);
            self.write_line(out, &result.name, result.bytes_written, millis)?;
        }
        self.write_line(out, "all tests", total_bytes, total_ms)?;

        writeln!(out)?;
        writeln!(out, " screen size: {}", self.config.terminal_size)?;
        writeln!(out, "   data size: {}", size_str(self.config.total_bytes() as f64))?;
        if self.config.terminal_size.cells().is_none() {
            writeln!(out, "  normalized: cannot normalize a zero-sized screen")?;
        }
        Ok(())
    }

    /// The records of the structured report, in run order
    #[must_use]
    pub fn records(&self) -> Vec<ResultRecord> {
        self.results.iter().map(ResultRecord::from).collect()
    }

    /// JSON array with one record per test and no aggregate entry
    ///
    /// # Errors
    /// Returns an error if serialization or the sink fails
    pub fn summarize_structured<W: Write>(&self, out: &mut W) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, &self.records())?;
        writeln!(out)?;
        Ok(())
    }
}
