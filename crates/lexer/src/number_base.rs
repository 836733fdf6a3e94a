//! Radix descriptors for integer literals.

use crate::cursor::SourceCursor;

const fn digit_value(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        b'A'..=b'F' => b - b'A' + 10,
        _ => 0xff,
    }
}

// One canonical digit LUT for the whole lexer; 0xff marks a non-digit.
// Membership in any radix is a single compare: DIGIT_LUT[b] < radix.
pub(crate) const DIGIT_LUT: [u8; 256] = {
    let mut t = [0xffu8; 256];
    let mut i = 0usize;
    while i < 256 {
        t[i] = digit_value(i as u8);
        i += 1;
    }
    t
};

/// Compile-time-selected radix descriptor. Only 2, 10, and 16 are used by the
/// integer rule.
pub struct NumberBase<const RADIX: u8>;

pub type Binary = NumberBase<2>;
pub type Decimal = NumberBase<10>;
pub type Hexadecimal = NumberBase<16>;

impl<const RADIX: u8> NumberBase<RADIX> {
    /// Characters consumed by the radix prefix: 2 for `0x`/`0b`, 0 for
    /// decimal.
    pub const PREFIX_LEN: usize = if RADIX == 10 { 0 } else { 2 };

    /// Case-insensitive prefix test; trivially true for decimal (nothing is
    /// consumed).
    #[inline]
    pub fn has_prefix(cursor: &SourceCursor<'_>) -> bool {
        match RADIX {
            16 => cursor.peek(0) == b'0' && matches!(cursor.peek(1), b'x' | b'X'),
            2 => cursor.peek(0) == b'0' && matches!(cursor.peek(1), b'b' | b'B'),
            _ => true,
        }
    }

    /// Digit-membership test for this radix.
    #[inline]
    pub const fn in_range(byte: u8) -> bool {
        DIGIT_LUT[byte as usize] < RADIX
    }

    /// Digit character to numeric value; hex letters are case-insensitive.
    /// Only meaningful when `in_range` holds.
    #[inline]
    pub const fn to_value(byte: u8) -> u64 {
        DIGIT_LUT[byte as usize] as u64
    }
}
