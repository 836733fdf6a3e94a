//! Rule composition and selection.
//!
//! Every configured rule runs against the same cursor position, in a fixed,
//! statically declared order, producing one [`RuleMatch`] each. A
//! [`RuleSelector`] then picks the winner; the default policy takes the
//! strictly longest match and breaks ties in favor of the earliest-declared
//! rule.

use crate::cursor::SourceCursor;
use crate::rules::{IdentifierRule, IntegerRule, NewlineRule, RuleMatch, WhitespaceRule};
use crate::token::TokenPayload;

/// Number of rules in the fixed grammar.
pub const RULE_COUNT: usize = 4;

/// One match result per rule, in declaration order.
pub type RuleMatches = [RuleMatch; RULE_COUNT];

/// The fixed, ordered rule list.
///
/// Declaration order is part of the grammar: Identifier before Integer before
/// Newline before Whitespace. In practice the rules are disjoint by first
/// character class, so ties mainly matter to custom selectors.
#[derive(Debug, Default)]
pub struct RuleSet {
    identifier: IdentifierRule,
    integer: IntegerRule,
    newline: NewlineRule,
    whitespace: WhitespaceRule,
}

impl RuleSet {
    /// Run every rule at the cursor position. Rules never observe each
    /// other's results.
    pub fn run(&self, cursor: &SourceCursor<'_>) -> RuleMatches {
        [
            self.identifier.lex(cursor),
            self.integer.lex(cursor),
            self.newline.lex(cursor),
            self.whitespace.lex(cursor),
        ]
    }

    /// Materialize the payload for the selected rule. Only the winner's
    /// action runs; an out-of-range index yields an empty payload.
    pub fn execute(
        &mut self,
        rule_index: usize,
        cursor: &SourceCursor<'_>,
        result: &RuleMatch,
    ) -> TokenPayload {
        match rule_index {
            0 => self.identifier.execute(cursor, result),
            1 => self.integer.execute(cursor, result),
            2 => self.newline.execute(cursor, result),
            3 => self.whitespace.execute(cursor, result),
            _ => TokenPayload::None,
        }
    }

    pub fn identifier(&self) -> &IdentifierRule {
        &self.identifier
    }
}

/// Selection policy: given the per-rule match results, return the index of
/// the winning rule. Returning an index `>= RULE_COUNT` is treated by the
/// lexer exactly like total match failure.
///
/// Implemented by any `Fn(&RuleMatches) -> usize`, so context-sensitive
/// grammars can inject a closure.
pub trait RuleSelector {
    fn select(&self, results: &RuleMatches) -> usize;
}

impl<F: Fn(&RuleMatches) -> usize> RuleSelector for F {
    fn select(&self, results: &RuleMatches) -> usize {
        self(results)
    }
}

/// Default policy: strictly longest match wins; the first-declared rule wins
/// ties.
#[derive(Debug, Clone, Copy, Default)]
pub struct LongestMatch;

impl RuleSelector for LongestMatch {
    fn select(&self, results: &RuleMatches) -> usize {
        let mut winner = 0;
        let mut length = 0;

        for (index, result) in results.iter().enumerate() {
            if result.match_length > length {
                winner = index;
                length = result.match_length;
            }
        }

        winner
    }
}
