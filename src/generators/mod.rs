//! Content generators
//!
//! Each generator is a [`Test`]: the benchmark calls [`Test::setup`] once,
//! [`Test::fill`] until the buffer is full, and [`Test::teardown`] once the
//! payload has been streamed.
//!
//! # Generators
//!
//! - [`many_lines`], [`binary`]: pseudo-random lowercase text broken into lines
//! - [`long_lines`]: one unbroken line of pseudo-random letters
//! - [`sgr_fg_lines`], [`sgr_fg_bg_lines`]: full-screen true-color frames
//! - [`ascii_line`], [`sgr_line`], [`sgrbg_line`] and the `unicode_*`
//!   family: a fixed line of `N` cells, repeated
//! - [`crafted`]: user supplied bytes, repeated verbatim

pub mod line;
pub mod random;
pub mod sgr;
pub mod text;

use crate::buffer::Buffer;
use crate::terminal::TerminalSize;

pub use line::{
    ascii_line, crafted, sgr_line, sgrbg_line, unicode_fire, unicode_fire_as_text, unicode_flag,
    unicode_simple, unicode_three_codepoints, unicode_two_codepoints, Line, UnicodeCluster,
};
pub use random::Lcg;
pub use sgr::{sgr_fg_bg_lines, sgr_fg_lines, SgrFrames};
pub use text::{binary, long_lines, many_lines, LongLines, RandomLines};

/// A named payload producer driven by the benchmark
pub trait Test {
    fn name(&self) -> &str;

    fn description(&self) -> &str {
        ""
    }

    /// Prepare state for a run on a terminal of `size`
    fn setup(&mut self, _size: TerminalSize) {}

    /// Append one unit of payload (a block, a character, a frame)
    fn fill(&mut self, sink: &mut Buffer);

    /// Append anything that must reach the terminal after streaming
    fn teardown(&mut self, _sink: &mut Buffer) {}
}

/// Factory for a fixed-width line test
pub type LineFactory = fn(usize) -> Box<dyn Test>;

/// Line families added by column-by-column mode, in run order
pub const COLUMN_FAMILIES: [LineFactory; 9] = [
    ascii_line,
    unicode_simple,
    unicode_two_codepoints,
    unicode_three_codepoints,
    unicode_fire_as_text,
    unicode_fire,
    unicode_flag,
    sgr_line,
    sgrbg_line,
];

/// Every line family at every width in `[0, max_columns)`
#[must_use]
pub fn column_by_column(max_columns: usize) -> Vec<Box<dyn Test>> {
    COLUMN_FAMILIES
        .iter()
        .flat_map(|family| (0..max_columns).map(move |width| family(width)))
        .collect()
}
