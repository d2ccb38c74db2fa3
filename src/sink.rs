//! Byte sinks the benchmark streams into

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, Write};
use tracing::{info, warn};

/// Largest single write handed to the underlying sink
pub const PAGE_SIZE: usize = 4096;

/// Where benchmark payloads go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    /// The process's standard output
    #[default]
    Stdout,
    /// Discard everything. Spelled `discard` in YAML, where `null` is taken.
    #[serde(rename = "discard")]
    Null,
    /// File descriptor 3, for terminals offering a separate output channel
    Fastpath,
}

/// Splits writes into [`PAGE_SIZE`] pages and writes each one fully
pub struct ChunkedWriter<W: Write> {
    inner: W,
}

impl<W: Write> ChunkedWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for ChunkedWriter<W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        let n = data.len().min(PAGE_SIZE);
        self.inner.write(&data[..n])
    }

    fn write_all(&mut self, data: &[u8]) -> io::Result<()> {
        for page in data.chunks(PAGE_SIZE) {
            self.inner.write_all(page)?;
        }
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// The sink selected for a run
///
/// Both terminal sinks write through an unbuffered `File`, so every page
/// becomes exactly one `write` on the descriptor.
pub enum Output {
    Stdout(ChunkedWriter<File>),
    FastPath(ChunkedWriter<File>),
    Null(io::Sink),
}

impl Output {
    /// Open the sink for `kind`
    ///
    /// The fast path falls back to stdout when file descriptor 3 is not available.
    ///
    /// # Errors
    /// Returns an error if the standard output descriptor cannot be duplicated
    pub fn open(kind: SinkKind) -> io::Result<Self> {
        match kind {
            SinkKind::Null => {
                info!("Using null sink");
                Ok(Self::Null(io::sink()))
            }
            SinkKind::Stdout => Self::stdout(),
            SinkKind::Fastpath => match open_fast_path() {
                Ok(file) => {
                    info!("Using stdout fast path (fd 3)");
                    Ok(Self::FastPath(ChunkedWriter::new(file)))
                }
                Err(e) => {
                    warn!("Stdout fast path unavailable, using stdout: {}", e);
                    Self::stdout()
                }
            },
        }
    }

    fn stdout() -> io::Result<Self> {
        Ok(Self::Stdout(ChunkedWriter::new(raw_stdout()?)))
    }
}

/// A duplicate of the standard output descriptor, bypassing `Stdout`'s line buffering
#[cfg(unix)]
fn raw_stdout() -> io::Result<File> {
    use std::os::fd::AsFd;
    Ok(File::from(io::stdout().as_fd().try_clone_to_owned()?))
}

#[cfg(windows)]
fn raw_stdout() -> io::Result<File> {
    use std::os::windows::io::AsHandle;
    Ok(File::from(io::stdout().as_handle().try_clone_to_owned()?))
}

#[cfg(not(any(unix, windows)))]
fn raw_stdout() -> io::Result<File> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "unbuffered stdout is not available on this platform",
    ))
}

#[cfg(unix)]
fn open_fast_path() -> io::Result<File> {
    std::fs::OpenOptions::new().write(true).open("/dev/fd/3")
}

#[cfg(not(unix))]
fn open_fast_path() -> io::Result<File> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "the stdout fast path is only available on Unix",
    ))
}

impl Write for Output {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        match self {
            Self::Stdout(w) => w.write(data),
            Self::FastPath(w) => w.write(data),
            Self::Null(w) => w.write(data),
        }
    }

    fn write_all(&mut self, data: &[u8]) -> io::Result<()> {
        match self {
            Self::Stdout(w) => w.write_all(data),
            Self::FastPath(w) => w.write_all(data),
            Self::Null(w) => w.write_all(data),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::FastPath(w) => w.flush(),
            Self::Null(w) => w.flush(),
        }
    }
}
