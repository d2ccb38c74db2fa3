//! Terminal geometry
//!
//! [`TerminalSize`] sizes the cursor-addressed payloads and normalizes
//! throughput per grid cell. Discovery and resizing of the real terminal
//! live in [`size`].

pub mod size;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Columns and lines of the terminal under test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TerminalSize {
    pub columns: u16,
    pub lines: u16,
}

impl TerminalSize {
    /// Size assumed when the terminal cannot be queried
    pub const DEFAULT: Self = Self::new(80, 24);

    /// Size forced by `--fixed-size`
    pub const FIXED: Self = Self::new(100, 30);

    #[must_use]
    pub const fn new(columns: u16, lines: u16) -> Self {
        Self { columns, lines }
    }

    /// Number of grid cells, `None` if either dimension is zero
    #[must_use]
    pub fn cells(self) -> Option<u32> {
        let cells = u32::from(self.columns) * u32::from(self.lines);
        (cells > 0).then_some(cells)
    }
}

impl Default for TerminalSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for TerminalSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.columns, self.lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells() {
        assert_eq!(TerminalSize::new(80, 24).cells(), Some(1920));
        assert_eq!(TerminalSize::new(0, 24).cells(), None);
        assert_eq!(TerminalSize::new(80, 0).cells(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(TerminalSize::FIXED.to_string(), "100x30");
    }
}
