//! Fixed single-line payloads
//!
//! Each test holds one pre-built line and repeats it, which isolates the
//! per-line cost of a given width and character class from frame building.

use super::Test;
use crate::buffer::Buffer;
use crate::colors::{ColorLayer, TrueColor};
use crate::encoder::color_sequence;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Repeats a fixed blob
pub struct Line {
    name: String,
    description: String,
    text: Vec<u8>,
}

impl Line {
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>, text: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            text,
        }
    }

    #[must_use]
    pub fn text(&self) -> &[u8] {
        &self.text
    }
}

impl Test for Line {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn fill(&mut self, sink: &mut Buffer) {
        sink.write(&self.text);
    }
}

/// Grapheme clusters used by the unicode line tests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnicodeCluster {
    /// Precomposed `ä`
    Simple,
    /// `a` + combining diaeresis
    TwoCodepoints,
    /// `a` + combining diaeresis + combining acute
    ThreeCodepoints,
    /// Regional indicator pair (German flag)
    Flag,
    /// Fire emoji forced to text presentation
    FireAsText,
    /// Fire emoji
    Fire,
}

impl UnicodeCluster {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Simple => "\u{00E4}",
            Self::TwoCodepoints => "\u{0061}\u{0308}",
            Self::ThreeCodepoints => "\u{0061}\u{0308}\u{0301}",
            Self::Flag => "\u{1F1E9}\u{1F1EA}",
            Self::FireAsText => "\u{1F525}\u{FE0E}",
            Self::Fire => "\u{1F525}",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Simple => "simple unicode chars",
            Self::TwoCodepoints => "two-codepoint clusters",
            Self::ThreeCodepoints => "three-codepoint clusters",
            Self::Flag => "flags",
            Self::FireAsText => "text-presentation emoji",
            Self::Fire => "emoji",
        }
    }

    /// `count` copies of the cluster followed by a newline
    #[must_use]
    pub fn line(self, count: usize) -> Box<dyn Test> {
        let content = self.as_str().repeat(count);
        let description = format!(
            "{} graphemes, {} cells",
            content.graphemes(true).count(),
            content.width()
        );
        let mut text = content.into_bytes();
        text.push(b'\n');
        Box::new(Line::new(
            format!("{count} {} per line", self.label()),
            description,
            text,
        ))
    }
}

fn filler(count: usize) -> Vec<u8> {
    vec![b'a'; count]
}

/// `N` ASCII letters and a newline
#[must_use]
pub fn ascii_line(count: usize) -> Box<dyn Test> {
    let mut text = filler(count);
    text.push(b'\n');
    Box::new(Line::new(format!("{count} chars per line"), "", text))
}

/// `N` letters in a teal foreground, then back to white
#[must_use]
pub fn sgr_line(count: usize) -> Box<dyn Test> {
    let mut text = color_sequence(ColorLayer::Foreground, TrueColor::TEAL);
    text.extend(filler(count));
    text.push(b'\n');
    text.extend(color_sequence(ColorLayer::Foreground, TrueColor::WHITE));
    Box::new(Line::new(format!("{count} chars with sgr per line"), "", text))
}

/// `N` letters on a gray background, then back to white on black
#[must_use]
pub fn sgrbg_line(count: usize) -> Box<dyn Test> {
    let mut text = color_sequence(ColorLayer::Foreground, TrueColor::TEAL);
    text.extend(color_sequence(ColorLayer::Background, TrueColor::GRAY));
    text.extend(filler(count));
    text.extend(color_sequence(ColorLayer::Foreground, TrueColor::WHITE));
    text.extend(color_sequence(ColorLayer::Background, TrueColor::BLACK));
    text.push(b'\n');
    Box::new(Line::new(
        format!("{count} chars with sgr and bg per line"),
        "",
        text,
    ))
}

#[must_use]
pub fn unicode_simple(count: usize) -> Box<dyn Test> {
    UnicodeCluster::Simple.line(count)
}

#[must_use]
pub fn unicode_two_codepoints(count: usize) -> Box<dyn Test> {
    UnicodeCluster::TwoCodepoints.line(count)
}

#[must_use]
pub fn unicode_three_codepoints(count: usize) -> Box<dyn Test> {
    UnicodeCluster::ThreeCodepoints.line(count)
}

#[must_use]
pub fn unicode_flag(count: usize) -> Box<dyn Test> {
    UnicodeCluster::Flag.line(count)
}

#[must_use]
pub fn unicode_fire_as_text(count: usize) -> Box<dyn Test> {
    UnicodeCluster::FireAsText.line(count)
}

#[must_use]
pub fn unicode_fire(count: usize) -> Box<dyn Test> {
    UnicodeCluster::Fire.line(count)
}

/// Replays externally supplied bytes verbatim
#[must_use]
pub fn crafted(
    name: impl Into<String>,
    description: impl Into<String>,
    text: Vec<u8>,
) -> Box<dyn Test> {
    Box::new(Line::new(name, description, text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blob(mut test: Box<dyn Test>) -> Vec<u8> {
        let mut buffer = Buffer::with_capacity(4096);
        test.fill(&mut buffer);
        buffer.output().to_vec()
    }

    #[test]
    fn test_ascii_line() {
        let test = ascii_line(3);
        assert_eq!(test.name(), "3 chars per line");
        assert_eq!(blob(test), b"aaa\n");
        assert_eq!(blob(ascii_line(0)), b"\n");
    }

    #[test]
    fn test_sgr_line() {
        let test = sgr_line(2);
        assert_eq!(test.name(), "2 chars with sgr per line");
        assert_eq!(
            blob(test),
            b"\x1b[38;2;20;200;200maa\n\x1b[38;2;255;255;255m"
        );
    }

    #[test]
    fn test_sgrbg_line() {
        let test = sgrbg_line(1);
        assert_eq!(test.name(), "1 chars with sgr and bg per line");
        assert_eq!(
            blob(test),
            b"\x1b[38;2;20;200;200m\x1b[48;2;100;100;100ma\x1b[38;2;255;255;255m\x1b[48;2;0;0;0m\n"
        );
    }

    #[test]
    fn test_unicode_lines() {
        let test = unicode_two_codepoints(2);
        assert_eq!(test.name(), "2 two-codepoint clusters per line");
        assert_eq!(test.description(), "2 graphemes, 2 cells");
        assert_eq!(blob(test), "a\u{308}a\u{308}\n".as_bytes());

        let fire = unicode_fire(3);
        assert_eq!(fire.description(), "3 graphemes, 6 cells");

        let flags = unicode_flag(2);
        assert_eq!(blob(flags), "\u{1F1E9}\u{1F1EA}\u{1F1E9}\u{1F1EA}\n".as_bytes());
    }

    #[test]
    fn test_crafted_is_verbatim() {
        let test = crafted("dump.vt", "", b"\x1b[31mred\x1b[m".to_vec());
        assert_eq!(test.name(), "dump.vt");
        assert_eq!(blob(test), b"\x1b[31mred\x1b[m");
    }
}
