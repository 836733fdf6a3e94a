use super::RuleMatch;
use crate::cursor::SourceCursor;
use crate::token::{TokenKind, TokenPayload};

/// Newline rule. Only line feeds form newline tokens; with `check_crlf` a
/// `\r\n` pair becomes one two-character newline, while a bare `\r` is left
/// to the whitespace rule.
#[derive(Debug, Default)]
pub struct NewlineRule;

impl NewlineRule {
    pub fn lex(&self, cursor: &SourceCursor<'_>) -> RuleMatch {
        if cursor.peek(0) == b'\n' {
            return RuleMatch::new(TokenKind::Newline, 1);
        }

        if cursor.options().check_crlf && cursor.peek(0) == b'\r' && cursor.peek(1) == b'\n' {
            return RuleMatch::new(TokenKind::Newline, 2);
        }

        RuleMatch::default()
    }

    pub fn execute(&mut self, _cursor: &SourceCursor<'_>, _result: &RuleMatch) -> TokenPayload {
        TokenPayload::None
    }
}
