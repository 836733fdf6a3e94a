use super::RuleMatch;
use crate::cursor::SourceCursor;
use crate::intern::IdentifierPool;
use crate::token::{TokenKind, TokenPayload};

#[inline(always)]
pub(crate) const fn is_ident_start(b: u8) -> bool {
    matches!(b, b'a'..=b'z' | b'A'..=b'Z' | b'_')
}

#[inline(always)]
pub(crate) const fn is_ident_continue(b: u8) -> bool {
    is_ident_start(b) || matches!(b, b'0'..=b'9')
}

/// Identifier rule: `[A-Za-z_][A-Za-z0-9_]*`, matched greedily.
///
/// Selected spellings are interned in a per-lexer pool so repeated
/// identifiers share one stored copy.
#[derive(Debug, Default)]
pub struct IdentifierRule {
    pool: IdentifierPool,
}

impl IdentifierRule {
    pub fn lex(&self, cursor: &SourceCursor<'_>) -> RuleMatch {
        if !is_ident_start(cursor.peek(0)) {
            return RuleMatch::default();
        }

        let mut len = 1;
        while !cursor.is_out_of_bounds(len) && is_ident_continue(cursor.peek(len)) {
            len += 1;
        }

        RuleMatch::new(TokenKind::Identifier, len)
    }

    pub fn execute(&mut self, cursor: &SourceCursor<'_>, result: &RuleMatch) -> TokenPayload {
        let spelling = cursor.copy_string(result.match_length);
        TokenPayload::Ident(self.pool.intern(&spelling))
    }

    pub fn pool(&self) -> &IdentifierPool {
        &self.pool
    }
}
