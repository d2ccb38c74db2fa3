use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use termbench::config::Config;
use termbench::sink::{Output, SinkKind};
use termbench::terminal::size::{discover, ScopedTerminalSize};
use termbench::terminal::TerminalSize;
use termbench::title::WindowTitle;
use termbench::{Benchmark, BenchmarkConfig, Report};

/// Termbench - measures how fast a terminal consumes text, SGR and binary output
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Discard output instead of writing it to the terminal
    #[arg(long)]
    null_sink: bool,

    /// Run on a 100x30 terminal, resizing it for the duration of the run
    #[arg(long)]
    fixed_size: bool,

    /// Write payloads to file descriptor 3 instead of stdout
    #[arg(long)]
    stdout_fastpath: bool,

    /// Only run the per-width line tests
    #[arg(long)]
    column_by_column: bool,

    /// Megabytes streamed per test
    #[arg(long, value_name = "MB")]
    size: Option<usize>,

    /// Replay a file's contents as an additional test (repeatable)
    #[arg(long, value_name = "FILE")]
    from_file: Vec<PathBuf>,

    /// Write a JSON summary to FILE instead of printing the text summary
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Do not show the running test in the window title
    #[arg(long)]
    no_window_title: bool,
}

impl Args {
    /// Apply command line overrides on top of the loaded configuration
    fn apply(self, config: &mut Config) {
        if self.null_sink {
            config.sink = SinkKind::Null;
        } else if self.stdout_fastpath {
            config.sink = SinkKind::Fastpath;
        }
        if self.fixed_size {
            config.terminal_size = Some(TerminalSize::FIXED);
        }
        if self.column_by_column {
            config.tests.only_column_by_column();
        }
        if let Some(size) = self.size {
            config.size_mb = size;
        }
        config.crafted.extend(self.from_file);
        if self.output.is_some() {
            config.output = self.output;
        }
        if self.no_window_title {
            config.window_title = false;
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Log to stderr; stdout is the sink being measured
    let log_level = if args.debug {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.as_str().to_lowercase()));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set global default subscriber")?;

    // Load configuration
    let mut config = if let Some(config_path) = &args.config {
        Config::load_from_file(config_path)?
    } else {
        Config::load_default()?
    };
    args.apply(&mut config);
    config.validate()?;

    #[cfg(windows)]
    if !crossterm::ansi_support::supports_ansi() {
        tracing::warn!("Console does not report ANSI support; results may be meaningless");
    }

    let initial_size = discover();
    let terminal_size = config.terminal_size.unwrap_or(initial_size);
    let bench_config = BenchmarkConfig::new(config.size_mb, terminal_size);

    let output = Output::open(config.sink).context("Failed to open benchmark output")?;
    let mut bench = Benchmark::new(output, bench_config);
    if config.window_title {
        bench = bench.with_before_test(WindowTitle::default().into_hook());
    }
    bench.extend(config.build_tests(terminal_size)?);
    info!("{} tests queued", bench.len());

    {
        let _resize = ScopedTerminalSize::new(io::stdout(), initial_size, terminal_size)
            .context("Failed to resize terminal")?;
        bench.run_all().context("Benchmark run failed")?;
    }

    let mut stdout = io::stdout().lock();
    stdout.write_all(b"\x1b[m\x1b[H\x1b[J")?;
    stdout.flush()?;

    let report = Report::new(bench.results(), *bench.config());
    match &config.output {
        None => report.summarize_text(&mut stdout)?,
        Some(path) => {
            writeln!(stdout, "Writing summary into {}", path.display())?;
            let mut file = File::create(path)
                .with_context(|| format!("Failed to create '{}'", path.display()))?;
            report
                .summarize_structured(&mut file)
                .context("Failed to write summary")?;
        }
    }

    Ok(())
}
