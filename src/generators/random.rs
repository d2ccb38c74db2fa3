//! Seeded pseudo-random text
//!
//! Payloads must be byte-identical across runs of the same build, so the
//! generator is a plain linear congruential step owned by each test.

/// Linear congruential generator with the classic `rand()` constants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    pub const DEFAULT_SEED: u32 = 1;

    #[must_use]
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Next value in `[0, 32768)`
    #[inline]
    pub fn next_u15(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        (self.state >> 16) & 0x7FFF
    }

    /// Uniform-ish letter in `a..=z`
    #[inline]
    pub fn lowercase(&mut self) -> u8 {
        b'a' + (self.next_u15() % 26) as u8
    }
}

impl Default for Lcg {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEED)
    }
}

/// `len` random letters where every letter divisible by 26 becomes a newline
///
/// Only `'h'` (104) qualifies, so roughly one byte in 26 ends a line.
#[must_use]
pub fn random_lines(rng: &mut Lcg, len: usize) -> Vec<u8> {
    (0..len)
        .map(|_| {
            let ch = rng.lowercase();
            if ch % 26 != 0 {
                ch
            } else {
                b'\n'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = Lcg::new(7);
        let mut b = Lcg::new(7);
        for _ in 0..1000 {
            assert_eq!(a.next_u15(), b.next_u15());
        }
    }

    #[test]
    fn test_lowercase_range() {
        let mut rng = Lcg::default();
        for _ in 0..10_000 {
            assert!(rng.lowercase().is_ascii_lowercase());
        }
    }

    #[test]
    fn test_random_lines_alphabet() {
        let text = random_lines(&mut Lcg::default(), 26 * 1000);
        assert!(text.iter().all(|&b| b == b'\n' || b.is_ascii_lowercase()));
        assert!(!text.contains(&b'h'));

        let newlines = text.iter().filter(|&&b| b == b'\n').count();
        assert!(newlines > 500 && newlines < 1500, "newlines: {newlines}");
    }
}
