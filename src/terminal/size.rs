//! Querying and temporarily resizing the real terminal

use super::TerminalSize;
use std::io::{self, Write};
use tracing::{debug, warn};

/// Query the current terminal size, falling back to 80x24
#[must_use]
pub fn discover() -> TerminalSize {
    match crossterm::terminal::size() {
        Ok((columns, lines)) if columns > 0 && lines > 0 => TerminalSize::new(columns, lines),
        Ok((columns, lines)) => {
            warn!("Terminal reported {}x{}, using default size", columns, lines);
            TerminalSize::DEFAULT
        }
        Err(e) => {
            debug!("Could not query terminal size: {}", e);
            TerminalSize::DEFAULT
        }
    }
}

/// Write the xterm window-manipulation request `ESC [ 8 ; lines ; columns t`
///
/// # Errors
/// Returns an error if the output cannot be written or flushed
pub fn request_resize<W: Write + ?Sized>(out: &mut W, size: TerminalSize) -> io::Result<()> {
    write!(out, "\x1b[8;{};{}t", size.lines, size.columns)?;
    out.flush()
}

/// Resizes the terminal for the lifetime of the guard and restores it on drop
///
/// Nothing is written when the requested size equals the initial one.
pub struct ScopedTerminalSize<W: Write> {
    out: W,
    initial: TerminalSize,
    requested: TerminalSize,
}

impl<W: Write> ScopedTerminalSize<W> {
    /// Apply `requested` if it differs from `initial`
    ///
    /// # Errors
    /// Returns an error if the resize request cannot be written
    pub fn new(mut out: W, initial: TerminalSize, requested: TerminalSize) -> io::Result<Self> {
        if requested != initial {
            debug!("Resizing terminal from {} to {}", initial, requested);
            request_resize(&mut out, requested)?;
        }
        Ok(Self {
            out,
            initial,
            requested,
        })
    }
}

impl<W: Write> Drop for ScopedTerminalSize<W> {
    fn drop(&mut self) {
        if self.requested != self.initial {
            if let Err(e) = request_resize(&mut self.out, self.initial) {
                warn!("Failed to restore terminal size {}: {}", self.initial, e);
            }
        }
    }
}
