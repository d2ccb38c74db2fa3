/// 24-bit true color as written into SGR sequences
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrueColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl TrueColor {
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Teal foreground used by the fixed-color line tests
    pub const TEAL: Self = Self::new(20, 200, 200);
    /// Gray background used by the fixed-color line tests
    pub const GRAY: Self = Self::new(100, 100, 100);

    /// Create a new true color from RGB values
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from wide channel values, keeping the low 8 bits of each
    ///
    /// Frame-counter derived channels routinely exceed 255.
    #[must_use]
    #[inline]
    pub const fn wrapping(r: u32, g: u32, b: u32) -> Self {
        Self::new((r & 0xFF) as u8, (g & 0xFF) as u8, (b & 0xFF) as u8)
    }
}

/// Which color a true-color SGR sequence sets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorLayer {
    Foreground,
    Background,
}

impl ColorLayer {
    /// Sequence prefix up to and including the separator before the red channel
    #[must_use]
    pub const fn introducer(self) -> &'static [u8] {
        match self {
            Self::Foreground => b"\x1b[38;2;",
            Self::Background => b"\x1b[48;2;",
        }
    }
}
