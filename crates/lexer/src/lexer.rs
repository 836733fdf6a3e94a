//! Lexer orchestration: engine pass, selection, payload materialization,
//! position tracking, trivia filtering, and diagnostic packaging.

use crate::cursor::SourceCursor;
use crate::diag::Diagnostic;
use crate::engine::{LongestMatch, RuleSelector, RuleSet, RULE_COUNT};
use crate::intern::IdentifierPool;
use crate::options::LexerOptions;
use crate::rules::RuleMatch;
use crate::token::{SourcePos, SourceRange, Token};

/// The result of one lexer call: exactly one token plus any diagnostics
/// found while scanning it.
#[derive(Debug, Clone, Default)]
pub struct LexResult {
    pub token: Token,
    pub diagnostics: Vec<Diagnostic>,
}

/// A generic lexer over the fixed rule set.
///
/// Each call to [`lex`](Self::lex) runs every rule at the current position,
/// lets the selector pick a winner, materializes that rule's payload,
/// advances line/column accounting, and returns the token together with any
/// diagnostics. If no rule matches (or a custom selector returns an
/// out-of-range index) the lexer enters a terminal failed state: there is no
/// skip-and-resynchronize recovery, and [`at_end`](Self::at_end) stays true
/// until the next [`set_input`](Self::set_input).
pub struct Lexer {
    options: LexerOptions,
    rules: RuleSet,
    /// When set (the default), Newline/Whitespace tokens without diagnostics
    /// are consumed internally and never returned.
    filter_tokens: bool,
    all_rules_failed: bool,
    source: Vec<u8>,
    index: usize,
    line: u32,
    column: u32,
}

impl Default for Lexer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexer {
    pub fn new() -> Self {
        Self {
            options: LexerOptions::default(),
            rules: RuleSet::default(),
            filter_tokens: true,
            all_rules_failed: false,
            source: Vec::new(),
            index: 0,
            line: 1,
            column: 1,
        }
    }

    /// Replace the input buffer and reset the scan state, including a
    /// previous terminal failure. The identifier intern pool survives:
    /// spellings interned from an earlier input stay valid and keep
    /// deduplicating against new ones.
    pub fn set_input(&mut self, input: impl Into<Vec<u8>>) {
        self.source = input.into();
        self.index = 0;
        self.line = 1;
        self.column = 1;
        self.all_rules_failed = false;
    }

    /// True once the input is exhausted or a terminal match failure occurred.
    pub fn at_end(&self) -> bool {
        self.index >= self.source.len() || self.all_rules_failed
    }

    pub fn options(&self) -> &LexerOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut LexerOptions {
        &mut self.options
    }

    /// Disable (or re-enable) the default trivia filtering.
    pub fn set_filter_tokens(&mut self, filter: bool) {
        self.filter_tokens = filter;
    }

    pub fn identifier_pool(&self) -> &IdentifierPool {
        self.rules.identifier().pool()
    }

    /// Lex one token with the default longest-match selector.
    pub fn lex(&mut self) -> LexResult {
        self.lex_with(&LongestMatch)
    }

    /// Lex one token with a caller-supplied selection policy.
    ///
    /// In filtered mode this repeats the unfiltered step until a non-trivia
    /// token is produced, a token carries diagnostics (returned immediately,
    /// even if it is trivia), or the end of input is reached, in which case a
    /// default EndOfFile result is returned.
    pub fn lex_with<S: RuleSelector>(&mut self, selector: &S) -> LexResult {
        if !self.filter_tokens {
            return self.lex_unfiltered(selector);
        }

        while !self.at_end() {
            let result = self.lex_unfiltered(selector);
            if !result.diagnostics.is_empty() {
                return result;
            }
            if !result.token.kind.is_trivia() {
                return result;
            }
        }

        LexResult::default()
    }

    fn lex_unfiltered<S: RuleSelector>(&mut self, selector: &S) -> LexResult {
        let mut results = self
            .rules
            .run(&SourceCursor::new(&self.source, self.index, &self.options));

        if results.iter().all(|r| !r.matched()) {
            self.all_rules_failed = true;
            return LexResult::default();
        }

        let rule_index = selector.select(&results);
        if rule_index >= RULE_COUNT {
            self.all_rules_failed = true;
            return LexResult::default();
        }

        let winner = std::mem::take(&mut results[rule_index]);
        self.produce(rule_index, winner)
    }

    /// Run the winning rule's action, stamp the token's range, advance, and
    /// package rule errors as diagnostics spanning the token.
    fn produce(&mut self, rule_index: usize, winner: RuleMatch) -> LexResult {
        let cursor = SourceCursor::new(&self.source, self.index, &self.options);
        let payload = self.rules.execute(rule_index, &cursor, &winner);

        let first = SourcePos {
            line: self.line,
            column: self.column,
        };
        self.advance(winner.match_length);
        let last = SourcePos {
            line: self.line,
            column: self.column,
        };
        let range = SourceRange { first, last };

        let diagnostics = winner
            .errors
            .iter()
            .map(|error| Diagnostic {
                id: error.id,
                severity: error.id.default_severity(),
                range,
            })
            .collect();

        LexResult {
            token: Token {
                kind: winner.token_kind,
                payload,
                range,
            },
            diagnostics,
        }
    }

    /// Walk the consumed bytes one at a time: `\n` starts a new line; any
    /// byte that is not a UTF-8 continuation byte (top two bits != `10`)
    /// advances the column, so a multi-byte code point counts as one column.
    fn advance(&mut self, count: usize) {
        for offset in 0..count {
            let c = self.source[self.index + offset];
            if c == b'\n' {
                self.line += 1;
                self.column = 1;
            } else if (c & 0xc0) != 0x80 {
                self.column += 1;
            }
        }

        self.index += count;
    }
}
