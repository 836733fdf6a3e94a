//! Legacy reference scanner, used only as a differential-testing oracle.
//!
//! An independent implementation of the same token grammar, generated by
//! Logos instead of hand-written rules, playing the role the previous
//! generated scanner plays in the regression harness. Callbacks extend the
//! single-character seed patterns to the full maximal munch, so the token
//! boundaries agree with the rule engine byte for byte; the wrapper then
//! drains the stream trivia-filtered and stops at the first position no
//! pattern matches, mirroring the engine's terminal failure.

use std::rc::Rc;

use logos::{Lexer as LogosLexer, Logos};
use thiserror::Error;

use crate::options::LexerOptions;
use crate::token::{SourcePos, SourceRange, Token, TokenKind, TokenPayload};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefScanError {
    /// No pattern matched; the scan stops here.
    #[default]
    #[error("no rule matched")]
    NoMatch,
    /// A radix prefix with no digits after it; the scan stops here.
    #[error("integer literal has no digits")]
    NoDigits,
}

/// Value and width classification computed while matching a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RefInt {
    value: u64,
    kind: TokenKind,
}

#[inline(always)]
const fn is_blank(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | 0x0b | 0x0c)
}

fn digit_of(byte: u8, radix: u64) -> Option<u64> {
    let digit = match byte {
        b'0'..=b'9' => u64::from(byte - b'0'),
        b'a'..=b'f' => u64::from(byte - b'a') + 10,
        b'A'..=b'F' => u64::from(byte - b'A') + 10,
        _ => return None,
    };
    (digit < radix).then_some(digit)
}

const fn width_kind(value: u64) -> TokenKind {
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

/// Extend the matched digit to the full literal: radix prefix, digits,
/// suffix run. Checked arithmetic throughout; `None` means overflow and
/// saturates to `u64::MAX` at the end.
fn lex_number(lex: &mut LogosLexer<'_, RefTok>) -> Result<RefInt, RefScanError> {
    let src = lex.source();
    let n = src.len();
    let start = lex.span().start;

    let (radix, prefix): (u64, usize) =
        if src[start] == b'0' && start + 1 < n && matches!(src[start + 1], b'x' | b'X') {
            (16, 2)
        } else if src[start] == b'0' && start + 1 < n && matches!(src[start + 1], b'b' | b'B') {
            (2, 2)
        } else {
            (10, 0)
        };

    let mut i = start + prefix;
    let mut digits = 0usize;
    let mut value: Option<u64> = Some(0);
    while i < n {
        let Some(digit) = digit_of(src[i], radix) else {
            break;
        };
        value = value
            .and_then(|v| v.checked_mul(radix))
            .and_then(|v| v.checked_add(digit));
        digits += 1;
        i += 1;
    }

    if digits == 0 {
        // Prefix-only literal: the engine's integer rule refuses it too, and
        // nothing else can match at the leading zero.
        return Err(RefScanError::NoDigits);
    }

    let strict = lex.extras.strict_integer_suffixes;
    let mut kibi = false;
    let mut mebi = false;
    let mut gibi = false;
    while i < n {
        let c = src[i];
        let consumed = if strict {
            c.is_ascii_alphanumeric() || c == b'_'
        } else {
            matches!(c, b'u' | b'U' | b'l' | b'L' | b'k' | b'M' | b'G')
        };
        if !consumed {
            break;
        }
        match c {
            b'k' => kibi = true,
            b'M' => mebi = true,
            b'G' => gibi = true,
            _ => {}
        }
        i += 1;
    }

    for (flag, multiplier) in [(kibi, 1u64 << 10), (mebi, 1 << 20), (gibi, 1 << 30)] {
        if flag {
            value = value.and_then(|v| v.checked_mul(multiplier));
        }
    }

    let value = value.unwrap_or(u64::MAX);

    let already = lex.span().end;
    if i > already {
        lex.bump(i - already);
    }

    Ok(RefInt {
        value,
        kind: width_kind(value),
    })
}

/// Extend the matched blank to the whole run. Returns true when the match is
/// actually a CRLF pair that must surface as a newline token.
fn lex_blank_run(lex: &mut LogosLexer<'_, RefTok>) -> bool {
    let check_crlf = lex.extras.check_crlf;

    if check_crlf && matches!(lex.slice(), [b'\r']) && lex.remainder().first() == Some(&b'\n') {
        lex.bump(1);
        return true;
    }

    let remainder = lex.remainder();
    let mut extend = 0;
    while extend < remainder.len() {
        let c = remainder[extend];
        if !is_blank(c) {
            break;
        }
        if check_crlf && c == b'\r' && remainder.get(extend + 1) == Some(&b'\n') {
            break;
        }
        extend += 1;
    }
    lex.bump(extend);

    false
}

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(error = RefScanError)]
#[logos(extras = LexerOptions)]
enum RefTok {
    #[regex(br"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,

    #[regex(br"[0-9]", lex_number)]
    Number(RefInt),

    #[token(b"\n")]
    Newline,

    // The payload flags a CRLF pair promoted to a newline token.
    #[regex(br"[ \t\r\x0b\x0c]", lex_blank_run)]
    Whitespace(bool),
}

/// Line/column accounting for the reference stream, same model as the
/// engine: `\n` starts a new line, non-continuation bytes advance the
/// column. Columns before a newline never survive it, so the tracker can
/// jump newline to newline with memchr and only count columns on the last
/// line of a hop.
struct PositionTracker<'src> {
    source: &'src [u8],
    offset: usize,
    line: u32,
    column: u32,
}

impl<'src> PositionTracker<'src> {
    fn new(source: &'src [u8]) -> Self {
        Self {
            source,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    fn advance_to(&mut self, target: usize) -> SourcePos {
        while self.offset < target {
            let window = &self.source[self.offset..target];
            match memchr::memchr(b'\n', window) {
                Some(newline) => {
                    self.line += 1;
                    self.column = 1;
                    self.offset += newline + 1;
                }
                None => {
                    let columns = window.iter().filter(|&&b| (b & 0xc0) != 0x80).count();
                    self.column += columns as u32;
                    self.offset = target;
                }
            }
        }

        SourcePos {
            line: self.line,
            column: self.column,
        }
    }
}

/// The legacy scanner behind the differential harness.
///
/// Same observable contract as the engine's filtered stream: `set_input`,
/// then `scan_tokens` drains every non-trivia token until end of input or the
/// first unmatched position.
#[derive(Debug, Default)]
pub struct ReferenceLexer {
    source: Vec<u8>,
    options: LexerOptions,
}

impl ReferenceLexer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_input(&mut self, input: impl Into<Vec<u8>>) {
        self.source = input.into();
    }

    pub fn options(&self) -> &LexerOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut LexerOptions {
        &mut self.options
    }

    pub fn scan_tokens(&self) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut lexer = RefTok::lexer_with_extras(self.source.as_slice(), self.options);
        let mut tracker = PositionTracker::new(&self.source);

        while let Some(item) = lexer.next() {
            let Ok(tok) = item else {
                break;
            };

            let span = lexer.span();
            let first = tracker.advance_to(span.start);
            let last = tracker.advance_to(span.end);
            let range = SourceRange { first, last };

            match tok {
                RefTok::Ident => {
                    let spelling = String::from_utf8_lossy(lexer.slice()).into_owned();
                    tokens.push(Token {
                        kind: TokenKind::Identifier,
                        payload: TokenPayload::Ident(Rc::from(spelling)),
                        range,
                    });
                }
                RefTok::Number(number) => {
                    tokens.push(Token {
                        kind: number.kind,
                        payload: TokenPayload::Int(number.value),
                        range,
                    });
                }
                // Trivia is filtered out of the printed stream.
                RefTok::Newline | RefTok::Whitespace(_) => {}
            }
        }

        tokens
    }
}
