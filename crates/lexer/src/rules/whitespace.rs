use super::RuleMatch;
use crate::cursor::SourceCursor;
use crate::token::{TokenKind, TokenPayload};

// ASCII blank class: space, tab, CR, vertical tab, form feed. `\n` belongs to
// the newline rule.
#[inline(always)]
pub(crate) const fn is_blank(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | 0x0b | 0x0c)
}

/// Whitespace rule: greedy runs of ASCII blanks. With `check_crlf`, a run
/// stops before a `\r` that starts a `\r\n` pair — that pair belongs to the
/// newline rule.
#[derive(Debug, Default)]
pub struct WhitespaceRule;

impl WhitespaceRule {
    pub fn lex(&self, cursor: &SourceCursor<'_>) -> RuleMatch {
        let check_crlf = cursor.options().check_crlf;

        let mut len = 0;
        while !cursor.is_out_of_bounds(len) {
            let c = cursor.peek(len);
            if !is_blank(c) {
                break;
            }
            if check_crlf && c == b'\r' && cursor.peek(len + 1) == b'\n' {
                break;
            }
            len += 1;
        }

        if len == 0 {
            return RuleMatch::default();
        }
        RuleMatch::new(TokenKind::Whitespace, len)
    }

    pub fn execute(&mut self, _cursor: &SourceCursor<'_>, _result: &RuleMatch) -> TokenPayload {
        TokenPayload::None
    }
}
