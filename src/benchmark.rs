//! Benchmark orchestration
//!
//! Runs every registered [`Test`] in order against one shared [`Buffer`]:
//! setup, fill until the buffer is full, stream the buffer to the writer
//! until the configured byte budget is spent, teardown. Only the streaming
//! loop is timed.

use crate::buffer::{Buffer, MIB};
use crate::error::{BenchError, Result};
use crate::generators::Test;
use crate::terminal::TerminalSize;
use std::io::{self, Write};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Called once per test before its setup, with the benchmark's writer
pub type BeforeTest = Box<dyn FnMut(&dyn Test, &mut dyn Write) -> io::Result<()>>;

/// Parameters fixed for the whole run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkConfig {
    /// Megabytes (MiB) streamed per test
    pub test_size_mb: usize,
    pub terminal_size: TerminalSize,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new(test_size_mb: usize, terminal_size: TerminalSize) -> Self {
        Self {
            test_size_mb,
            terminal_size,
        }
    }

    /// Bytes streamed per test, saturating at `u64::MAX`
    #[must_use]
    pub fn total_bytes(&self) -> u64 {
        (self.test_size_mb as u64).saturating_mul(MIB as u64)
    }
}

/// Outcome of one test
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestResult {
    pub name: String,
    pub elapsed: Duration,
    pub bytes_written: u64,
}

pub struct Benchmark<W: Write> {
    writer: W,
    config: BenchmarkConfig,
    before_test: Option<BeforeTest>,
    tests: Vec<Box<dyn Test>>,
    results: Vec<TestResult>,
}

impl<W: Write> Benchmark<W> {
    #[must_use]
    pub fn new(writer: W, config: BenchmarkConfig) -> Self {
        Self {
            writer,
            config,
            before_test: None,
            tests: Vec::new(),
            results: Vec::new(),
        }
    }

    /// Install the hook invoked before each test's setup
    #[must_use]
    pub fn with_before_test(mut self, hook: BeforeTest) -> Self {
        self.before_test = Some(hook);
        self
    }

    /// Append a test to the run order
    pub fn add(&mut self, test: Box<dyn Test>) {
        self.tests.push(test);
    }

    pub fn extend(&mut self, tests: impl IntoIterator<Item = Box<dyn Test>>) {
        self.tests.extend(tests);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tests.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    #[must_use]
    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Results in run order, complete after [`Benchmark::run_all`]
    #[must_use]
    pub fn results(&self) -> &[TestResult] {
        &self.results
    }

    #[must_use]
    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Run every test in insertion order
    ///
    /// # Errors
    /// Any writer failure aborts the run. A test that stops appending
    /// before the buffer is full is reported instead of looping forever.
    pub fn run_all(&mut self) -> Result<()> {
        let Self {
            writer,
            config,
            before_test,
            tests,
            results,
        } = self;

        let mut buffer = Buffer::for_test_size(config.test_size_mb);
        let total_bytes = config.total_bytes();
        results.clear();

        info!(
            "Running {} tests, {} MB each, on a {} terminal",
            tests.len(),
            config.test_size_mb,
            config.terminal_size
        );

        for test in tests.iter_mut() {
            if let Some(hook) = before_test.as_mut() {
                hook(&**test, &mut *writer)?;
            }

            test.setup(config.terminal_size);
            fill(&mut **test, &mut buffer)?;
            debug!("{}: buffered {} bytes", test.name(), buffer.size());

            let begin = Instant::now();
            stream(&mut *writer, buffer.output(), total_bytes)?;
            let elapsed = begin.elapsed();
            buffer.clear();

            test.teardown(&mut buffer);
            if !buffer.empty() {
                writer.write_all(buffer.output())?;
                writer.flush()?;
                buffer.clear();
            }

            info!("{}: {} ms", test.name(), elapsed.as_millis());
            results.push(TestResult {
                name: test.name().to_string(),
                elapsed,
                bytes_written: total_bytes,
            });
        }

        Ok(())
    }
}

/// Fill `buffer` until it stops accepting writes
fn fill(test: &mut dyn Test, buffer: &mut Buffer) -> Result<()> {
    while buffer.good() {
        let before = buffer.size();
        test.fill(buffer);
        if buffer.size() == before {
            return Err(BenchError::StalledGenerator {
                test: test.name().to_string(),
            });
        }
    }
    Ok(())
}

/// Write `payload` repeatedly until exactly `total` bytes have been sent
fn stream<W: Write + ?Sized>(writer: &mut W, payload: &[u8], total: u64) -> io::Result<()> {
    let mut remaining = total;
    while remaining > 0 {
        let n = usize::try_from(remaining).map_or(payload.len(), |r| r.min(payload.len()));
        writer.write_all(&payload[..n])?;
        remaining -= n as u64;
    }
    writer.flush()
}
