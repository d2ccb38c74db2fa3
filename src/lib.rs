//! Termbench - terminal output throughput benchmark
//!
//! Streams synthetic payloads (plain text, long lines, true-color SGR
//! frames, raw bytes) to a sink, times the transfer and reports throughput
//! in absolute terms and per screen cell.
//!
//! # Modules
//!
//! - [`buffer`]: Bounded staging buffer
//! - [`encoder`]: Decimal and escape-sequence emitters
//! - [`colors`]: 24-bit true color values
//! - [`generators`]: The benchmark tests and their payloads
//! - [`benchmark`]: Run loop and timing
//! - [`report`]: Text and JSON summaries
//! - [`title`]: Rate-limited window title updates
//! - [`sink`]: Stdout, fast-path and null sinks
//! - [`terminal`]: Terminal size discovery and resizing
//! - [`config`]: Configuration management and serialization

pub mod benchmark;
pub mod buffer;
pub mod colors;
pub mod config;
pub mod encoder;
pub mod error;
pub mod generators;
pub mod report;
pub mod sink;
pub mod terminal;
pub mod title;

pub use benchmark::{Benchmark, BenchmarkConfig, TestResult};
pub use buffer::Buffer;
pub use error::BenchError;
pub use generators::Test;
pub use report::Report;
pub use terminal::TerminalSize;
