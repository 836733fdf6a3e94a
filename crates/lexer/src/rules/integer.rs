use smallvec::SmallVec;

use super::RuleMatch;
use crate::cursor::SourceCursor;
use crate::diag::{DiagnosticId, LexicalError};
use crate::number_base::{Binary, Hexadecimal, NumberBase};
use crate::token::{TokenKind, TokenPayload};

const KIBI: u64 = 1024;
const MEBI: u64 = KIBI * KIBI;
const GIBI: u64 = KIBI * KIBI * KIBI;

/// Integer-literal rule: multi-radix, overflow-checked, suffix-aware.
///
/// The radix is committed by prefix, hex before binary before decimal, so a
/// bare `0` followed by `x`/`b` is always read as a prefixed literal and
/// never as decimal zero plus an identifier-shaped tail. A prefix with no
/// digits after it is not a match at all.
#[derive(Debug, Default)]
pub struct IntegerRule;

impl IntegerRule {
    pub fn lex(&self, cursor: &SourceCursor<'_>) -> RuleMatch {
        if Hexadecimal::has_prefix(cursor) {
            self.lex_radix::<16>(cursor)
        } else if Binary::has_prefix(cursor) {
            self.lex_radix::<2>(cursor)
        } else {
            self.lex_radix::<10>(cursor)
        }
    }

    pub fn execute(&mut self, cursor: &SourceCursor<'_>, result: &RuleMatch) -> TokenPayload {
        let (_, value) = if Hexadecimal::has_prefix(cursor) {
            to_int::<16>(cursor, result.match_length)
        } else if Binary::has_prefix(cursor) {
            to_int::<2>(cursor, result.match_length)
        } else {
            to_int::<10>(cursor, result.match_length)
        };
        TokenPayload::Int(value)
    }

    fn lex_radix<const RADIX: u8>(&self, cursor: &SourceCursor<'_>) -> RuleMatch {
        let prefix_len = NumberBase::<RADIX>::PREFIX_LEN;

        let mut len = prefix_len;
        while !cursor.is_out_of_bounds(len) && NumberBase::<RADIX>::in_range(cursor.peek(len)) {
            len += 1;
        }

        // Zero digits consumed (prefix-only, or nothing at all): no token.
        if len == prefix_len {
            return RuleMatch::default();
        }

        let options = cursor.options();

        let (end, suffix_valid) = if options.strict_integer_suffixes {
            lex_suffix_strict(cursor, len)
        } else {
            (lex_suffix_legacy(cursor, len), true)
        };

        let (overflowed, value) = to_int::<RADIX>(cursor, end);

        let mut result = RuleMatch::new(classify_value(value), end);

        if overflowed && options.warn_integer_overflow {
            result.errors.push(LexicalError {
                id: DiagnosticId::IntegerOverflow,
            });
        }
        if !suffix_valid {
            result.errors.push(LexicalError {
                id: DiagnosticId::InvalidIntegerSuffix,
            });
        }

        result
    }
}

/// Legacy (default) suffix grammar: unlimited case-insensitive `u`/`l`
/// repeats plus the exact-case multipliers `k`, `M`, `G`; consumption stops
/// at the first other character. The `u`/`l` occurrences are consumed but,
/// matching the legacy scanner, deliberately do not feed into the value or
/// the kind; only the multipliers do, rediscovered by `to_int`.
fn lex_suffix_legacy(cursor: &SourceCursor<'_>, mut index: usize) -> usize {
    while !cursor.is_out_of_bounds(index) {
        match cursor.peek(index) {
            b'u' | b'U' | b'l' | b'L' | b'k' | b'M' | b'G' => index += 1,
            _ => break,
        }
    }
    index
}

/// Strict suffix mode consumes the whole identifier-shaped tail and fails
/// closed: the suffix must be empty, exactly one multiplier, or a standard C
/// integer suffix. Anything else still lexes but is diagnosed.
fn lex_suffix_strict(cursor: &SourceCursor<'_>, digits_end: usize) -> (usize, bool) {
    let mut raw: SmallVec<[u8; 8]> = SmallVec::new();
    let mut index = digits_end;

    while !cursor.is_out_of_bounds(index) {
        let c = cursor.peek(index);
        if !matches!(c, b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'_') {
            break;
        }
        raw.push(c);
        index += 1;
    }

    let valid = match raw.as_slice() {
        [] | [b'k'] | [b'M'] | [b'G'] => true,
        other => is_c_integer_suffix(other),
    };

    (index, valid)
}

#[inline(always)]
const fn is_unsigned_char(b: u8) -> bool {
    matches!(b, b'u' | b'U')
}

#[inline(always)]
const fn is_long_char(b: u8) -> bool {
    matches!(b, b'l' | b'L')
}

// `ll` must be homogeneous in case, as in C.
#[inline(always)]
const fn is_long_long(a: u8, b: u8) -> bool {
    (a == b'l' && b == b'l') || (a == b'L' && b == b'L')
}

/// `u|U` and `l|L|ll|LL`, either order, at most one of each.
fn is_c_integer_suffix(s: &[u8]) -> bool {
    match s {
        &[c] => is_unsigned_char(c) || is_long_char(c),
        &[a, b] => {
            is_long_long(a, b)
                || (is_unsigned_char(a) && is_long_char(b))
                || (is_long_char(a) && is_unsigned_char(b))
        }
        &[a, b, c] => {
            (is_unsigned_char(a) && is_long_long(b, c))
                || (is_long_long(a, b) && is_unsigned_char(c))
        }
        _ => false,
    }
}

/// Reduce the literal at the cursor to its value: `(overflowed, value)`.
///
/// Digits are folded left to right with checked 64-bit arithmetic; scanning
/// continues past an overflow so the caller's match length stays intact.
/// Multiplier suffixes then apply in the fixed order k, M, G, each checked.
/// Whenever the flag is set the value saturates to `u64::MAX`; it never
/// wraps.
fn to_int<const RADIX: u8>(cursor: &SourceCursor<'_>, token_length: usize) -> (bool, u64) {
    let mut value: u64 = 0;
    let mut overflowed = false;

    let mut index = NumberBase::<RADIX>::PREFIX_LEN;
    while index < token_length {
        let c = cursor.peek(index);
        if !NumberBase::<RADIX>::in_range(c) {
            break;
        }
        let (scaled, mul_overflow) = value.overflowing_mul(RADIX as u64);
        let (next, add_overflow) = scaled.overflowing_add(NumberBase::<RADIX>::to_value(c));
        overflowed |= mul_overflow | add_overflow;
        value = next;
        index += 1;
    }

    let mut kibi = false;
    let mut mebi = false;
    let mut gibi = false;
    while index < token_length {
        match cursor.peek(index) {
            b'k' => kibi = true,
            b'M' => mebi = true,
            b'G' => gibi = true,
            _ => {}
        }
        index += 1;
    }

    for (flag, multiplier) in [(kibi, KIBI), (mebi, MEBI), (gibi, GIBI)] {
        if flag {
            let (scaled, mul_overflow) = value.overflowing_mul(multiplier);
            overflowed |= mul_overflow;
            value = scaled;
        }
    }

    if overflowed {
        (true, u64::MAX)
    } else {
        (false, value)
    }
}

/// Token kind from the final value alone, by ascending threshold. Suffixes do
/// not participate, and neither (yet) does the configured lane width: the
/// 8/16-bit kinds stay reserved.
const fn classify_value(value: u64) -> TokenKind {
    if value <= 0x7fff_ffff {
        TokenKind::Int32Constant
    } else if value <= 0xffff_ffff {
        TokenKind::UInt32Constant
    } else if value <= 0x7fff_ffff_ffff_ffff {
        TokenKind::Int64Constant
    } else {
        TokenKind::UInt64Constant
    }
}
