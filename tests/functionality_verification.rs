//! Payload verification tests
//!
//! These tests check that the generated payloads are well formed escape
//! streams and that the generators are reproducible.

/// Escape sequence validation through a VTE parser
#[cfg(test)]
mod escape_sequence_tests {
    use termbench::generators::{self, Test};
    use termbench::{Buffer, TerminalSize};
    use vte::{Params, Parser, Perform};

    /// Collects what a terminal would see
    #[derive(Default)]
    struct Recorder {
        printed: Vec<char>,
        cursor_moves: Vec<(u16, u16)>,
        foreground: Vec<[u16; 3]>,
        background: Vec<[u16; 3]>,
        other_csi: usize,
    }

    impl Perform for Recorder {
        fn print(&mut self, c: char) {
            self.printed.push(c);
        }

        fn csi_dispatch(&mut self, params: &Params, _intermediates: &[u8], _ignore: bool, action: char) {
            let values: Vec<u16> = params.iter().flat_map(|p| p.iter().copied()).collect();
            match (action, values.as_slice()) {
                ('H', [y, x]) => self.cursor_moves.push((*x, *y)),
                ('m', [38, 2, r, g, b]) => self.foreground.push([*r, *g, *b]),
                ('m', [48, 2, r, g, b]) => self.background.push([*r, *g, *b]),
                _ => self.other_csi += 1,
            }
        }
    }

    fn parse_frame(test: &mut dyn Test, size: TerminalSize) -> Recorder {
        let mut buffer = Buffer::with_capacity(1 << 20);
        test.setup(size);
        test.fill(&mut buffer);

        let mut parser = Parser::new();
        let mut recorder = Recorder::default();
        parser.advance(&mut recorder, buffer.output());
        recorder
    }

    #[test]
    fn test_sgr_fg_frame_is_well_formed() {
        let size = TerminalSize::new(12, 4);
        let mut test = generators::sgr_fg_lines();
        let frame = parse_frame(test.as_mut(), size);

        assert_eq!(frame.printed.len(), 48);
        assert_eq!(frame.foreground.len(), 48);
        assert!(frame.background.is_empty());
        assert_eq!(frame.other_csi, 0);
        assert_eq!(frame.cursor_moves, vec![(1, 1), (1, 2), (1, 3), (1, 4)]);
        assert_eq!(frame.foreground[13], [0, 1, 2]);
    }

    #[test]
    fn test_sgr_fg_bg_frame_is_well_formed() {
        let size = TerminalSize::new(7, 3);
        let mut test = generators::sgr_fg_bg_lines();
        let frame = parse_frame(test.as_mut(), size);

        assert_eq!(frame.printed.len(), 21);
        assert_eq!(frame.foreground.len(), 21);
        assert_eq!(frame.background.len(), 21);
        for (fg, bg) in frame.foreground.iter().zip(&frame.background) {
            assert_eq!(fg[0], bg[2]);
            assert_eq!(fg[1], bg[1]);
            assert_eq!(fg[2], bg[0]);
        }
    }

    #[test]
    fn test_unicode_lines_print_expected_clusters() {
        let mut test = generators::unicode_three_codepoints(4);
        let frame = parse_frame(test.as_mut(), TerminalSize::DEFAULT);
        assert_eq!(frame.printed.len(), 12);
        assert_eq!(test.description(), "4 graphemes, 4 cells");
    }

    #[test]
    fn test_sgrbg_line_resets_colors() {
        let mut test = generators::sgrbg_line(5);
        let frame = parse_frame(test.as_mut(), TerminalSize::DEFAULT);
        assert_eq!(frame.printed, vec!['a'; 5]);
        assert_eq!(frame.foreground, vec![[20, 200, 200], [255, 255, 255]]);
        assert_eq!(frame.background, vec![[100, 100, 100], [0, 0, 0]]);
    }
}

/// Reproducibility of the random payloads
#[cfg(test)]
mod determinism_tests {
    use termbench::generators::{self, Test};
    use termbench::{Buffer, TerminalSize};

    fn payload(mut test: Box<dyn Test>, capacity: usize) -> Vec<u8> {
        let mut buffer = Buffer::with_capacity(capacity);
        test.setup(TerminalSize::DEFAULT);
        while buffer.good() {
            test.fill(&mut buffer);
        }
        buffer.output().to_vec()
    }

    #[test]
    fn test_many_lines_byte_identical_across_instances() {
        let first = payload(generators::many_lines(), 1 << 20);
        let second = payload(generators::many_lines(), 1 << 20);
        assert_eq!(first, second);
    }

    #[test]
    fn test_binary_and_many_lines_share_payload() {
        assert_eq!(
            payload(generators::binary(), 1 << 16),
            payload(generators::many_lines(), 1 << 16)
        );
    }

    #[test]
    fn test_long_lines_reproducible() {
        assert_eq!(
            payload(generators::long_lines(), 10_000),
            payload(generators::long_lines(), 10_000)
        );
    }
}
