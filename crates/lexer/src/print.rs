//! Canonical token rendering.
//!
//! One line per token: `<kind> '<payload>' from <line>:<col> to <line>:<col>`.
//! This is the only externally observed wire format; the differential harness
//! byte-compares the streams both scanners render through it, so both must
//! agree on every character.

use std::fmt::Write;

use crate::lexer::Lexer;
use crate::token::{Token, TokenKind, TokenPayload};

/// Append one rendered token line to `out`.
pub fn render_token(out: &mut String, token: &Token) {
    out.push_str(token.kind.name());
    out.push_str(" '");

    match token.kind {
        TokenKind::Newline => out.push_str("\\n"),
        TokenKind::Identifier => {
            if let TokenPayload::Ident(spelling) = &token.payload {
                out.push_str(spelling);
            }
        }
        kind if kind.is_integer_constant() => {
            if let TokenPayload::Int(value) = token.payload {
                write!(out, "{value}").ok();
            }
        }
        _ => {}
    }

    let range = token.range;
    write!(
        out,
        "' from {}:{} to {}:{}",
        range.first.line, range.first.column, range.last.line, range.last.column
    )
    .ok();
    out.push('\n');
}

/// Render a whole stream.
pub fn render_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        render_token(&mut out, token);
    }
    out
}

/// Drain the lexer to completion in its current filtering mode, collecting
/// every token before end of input or terminal failure. EndOfFile results are
/// not collected, mirroring the regression harness.
pub fn scan_tokens(lexer: &mut Lexer) -> Vec<Token> {
    let mut tokens = Vec::new();
    while !lexer.at_end() {
        let result = lexer.lex();
        if result.token.kind == TokenKind::EndOfFile {
            break;
        }
        tokens.push(result.token);
    }
    tokens
}
