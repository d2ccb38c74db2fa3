//! Integer and escape-sequence emitters shared by all content generators.
//!
//! These run once per color channel per cell per frame in the SGR tests,
//! so they write straight into the [`Buffer`] without allocating.

use crate::buffer::Buffer;
use crate::colors::{ColorLayer, TrueColor};

const ESC: u8 = 0x1b;

/// Terminal reset (RIS)
pub const RESET_TERMINAL: &[u8] = b"\x1bc";

const POW10: [u32; 10] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
];

/// "00" "01" ... "99" packed back to back
const DIGIT_PAIRS: [u8; 200] = digit_pairs();

const fn digit_pairs() -> [u8; 200] {
    let mut table = [0u8; 200];
    let mut i = 0;
    while i < 100 {
        table[i * 2] = b'0' + (i / 10) as u8;
        table[i * 2 + 1] = b'0' + (i % 10) as u8;
        i += 1;
    }
    table
}

/// Number of decimal digits of `value` (1 for zero)
#[inline]
#[must_use]
pub fn decimal_digits(value: u32) -> usize {
    let value = value | 1;
    let log2 = 31 - value.leading_zeros();
    // floor(log10) estimate from floor(log2): 1233 / 4096 ~= log10(2)
    let estimate = (((log2 + 1) * 1233) >> 12) as usize;
    estimate + 1 - usize::from(value < POW10[estimate])
}

/// Append the decimal representation of `value`
#[inline]
pub fn write_uint(sink: &mut Buffer, value: u32) {
    let mut digits = [0u8; 10];
    let len = decimal_digits(value);
    let mut pos = len;
    let mut rest = value;

    while rest >= 100 {
        let pair = (rest % 100) as usize * 2;
        rest /= 100;
        pos -= 2;
        digits[pos..pos + 2].copy_from_slice(&DIGIT_PAIRS[pair..pair + 2]);
    }
    if rest >= 10 {
        let pair = rest as usize * 2;
        pos -= 2;
        digits[pos..pos + 2].copy_from_slice(&DIGIT_PAIRS[pair..pair + 2]);
    } else {
        pos -= 1;
        digits[pos] = b'0' + rest as u8;
    }
    debug_assert_eq!(pos, 0);

    sink.write(&digits[..len]);
}

/// Append `ESC [ <y> ; <x> H`
#[inline]
pub fn move_cursor(sink: &mut Buffer, x: u32, y: u32) {
    sink.write(&[ESC, b'[']);
    write_uint(sink, y);
    sink.push(b';');
    write_uint(sink, x);
    sink.push(b'H');
}

/// Append a true-color SGR sequence for `layer`
#[inline]
pub fn set_color(sink: &mut Buffer, layer: ColorLayer, color: TrueColor) {
    sink.write(layer.introducer());
    write_uint(sink, u32::from(color.r));
    sink.push(b';');
    write_uint(sink, u32::from(color.g));
    sink.push(b';');
    write_uint(sink, u32::from(color.b));
    sink.push(b'm');
}

/// Append `ESC [ 38 ; 2 ; r ; g ; b m`, each channel taken mod 256
#[inline]
pub fn set_foreground(sink: &mut Buffer, r: u32, g: u32, b: u32) {
    set_color(sink, ColorLayer::Foreground, TrueColor::wrapping(r, g, b));
}

/// Append `ESC [ 48 ; 2 ; r ; g ; b m`, each channel taken mod 256
#[inline]
pub fn set_background(sink: &mut Buffer, r: u32, g: u32, b: u32) {
    set_color(sink, ColorLayer::Background, TrueColor::wrapping(r, g, b));
}

/// Append the full terminal reset `ESC c`
pub fn reset_terminal(sink: &mut Buffer) {
    sink.write(RESET_TERMINAL);
}

/// Render a true-color SGR sequence into an owned byte string
///
/// Used to assemble fixed payloads at construction time.
#[must_use]
pub fn color_sequence(layer: ColorLayer, color: TrueColor) -> Vec<u8> {
    let mut buffer = Buffer::with_capacity(32);
    set_color(&mut buffer, layer, color);
    buffer.output().to_vec()
}
