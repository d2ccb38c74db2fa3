//! Animated true-color frames covering the whole screen

use super::Test;
use crate::buffer::Buffer;
use crate::encoder::{move_cursor, set_background, set_foreground};
use crate::terminal::TerminalSize;

/// Draws one full frame of colored letters per fill
///
/// Every cell gets its own foreground (and optionally background) color
/// derived from the frame counter and the cell position, so consecutive
/// frames differ in every cell.
pub struct SgrFrames {
    name: &'static str,
    description: &'static str,
    with_background: bool,
    size: TerminalSize,
    frame_id: u32,
}

impl SgrFrames {
    #[must_use]
    pub fn new(name: &'static str, description: &'static str, with_background: bool) -> Self {
        Self {
            name,
            description,
            with_background,
            size: TerminalSize::DEFAULT,
            frame_id: 0,
        }
    }

    /// Frames drawn since the last setup
    #[must_use]
    pub fn frame_id(&self) -> u32 {
        self.frame_id
    }

    fn draw_frame(&self, sink: &mut Buffer) {
        let frame = self.frame_id;
        for y in 0..u32::from(self.size.lines) {
            move_cursor(sink, 1, y + 1);
            for x in 0..u32::from(self.size.columns) {
                let row = frame.wrapping_add(y);
                let cell = row.wrapping_add(x);
                set_foreground(sink, frame, row, cell);
                if self.with_background {
                    set_background(sink, cell, row, frame);
                }
                sink.push(b'a' + (cell % 25) as u8);
            }
        }
    }
}

impl Test for SgrFrames {
    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        self.description
    }

    fn setup(&mut self, size: TerminalSize) {
        self.size = size;
        self.frame_id = 0;
    }

    fn fill(&mut self, sink: &mut Buffer) {
        self.draw_frame(sink);
        self.frame_id = self.frame_id.wrapping_add(1);
    }
}

#[must_use]
pub fn sgr_fg_lines() -> Box<dyn Test> {
    Box::new(SgrFrames::new(
        "sgr_fg_lines",
        "full-screen frames with a true-color foreground per cell",
        false,
    ))
}

#[must_use]
pub fn sgr_fg_bg_lines() -> Box<dyn Test> {
    Box::new(SgrFrames::new(
        "sgr_fg_bg_lines",
        "full-screen frames with true-color foreground and background per cell",
        true,
    ))
}
