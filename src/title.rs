//! Window title updates
//!
//! Shows the running test's name in the terminal title. Updates are
//! cosmetic, so they are throttled to one per interval across the run.

use crate::benchmark::BeforeTest;
use crate::generators::Test;
use std::io::{self, Write};
use std::time::{Duration, Instant};

/// Minimum time between two title updates
pub const TITLE_UPDATE_INTERVAL: Duration = Duration::from_millis(100);

/// Rate-limited writer of `ESC ] 2 ; <title> BEL`
#[derive(Debug, Clone)]
pub struct WindowTitle {
    interval: Duration,
    last_update: Option<Instant>,
}

impl WindowTitle {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_update: None,
        }
    }

    /// Write the title unless the previous update was less than one interval before `now`
    ///
    /// Returns whether the title was written.
    ///
    /// # Errors
    /// Returns an error if the output cannot be written
    pub fn update<W: Write + ?Sized>(
        &mut self,
        now: Instant,
        title: &str,
        out: &mut W,
    ) -> io::Result<bool> {
        if let Some(last) = self.last_update {
            if now.saturating_duration_since(last) < self.interval {
                return Ok(false);
            }
        }
        write!(out, "\x1b]2;{}\x07", sanitize(title))?;
        out.flush()?;
        self.last_update = Some(now);
        Ok(true)
    }

    /// Wrap into a benchmark before-test hook
    #[must_use]
    pub fn into_hook(mut self) -> BeforeTest {
        Box::new(move |test: &dyn Test, out: &mut dyn Write| -> io::Result<()> {
            self.update(Instant::now(), test.name(), out).map(|_| ())
        })
    }
}

impl Default for WindowTitle {
    fn default() -> Self {
        Self::new(TITLE_UPDATE_INTERVAL)
    }
}

/// Strip control characters that would terminate the OSC early
fn sanitize(title: &str) -> String {
    title.chars().filter(|c| !c.is_control()).collect()
}
