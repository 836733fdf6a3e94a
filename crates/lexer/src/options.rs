/// Lexer configuration. Immutable during a scan; mutate between scans through
/// [`Lexer::options_mut`](crate::Lexer::options_mut).
#[derive(Debug, Clone, Copy)]
pub struct LexerOptions {
    /// Stricter integer-suffix checking than the legacy scanner. The legacy
    /// grammar accepts suffixes like `uulllkG` (unlimited `u`/`l` repeats,
    /// stacked multipliers); with this option the whole identifier-shaped
    /// tail is taken as the suffix and anything beyond one optional
    /// multiplier or a standard C integer suffix is diagnosed.
    pub strict_integer_suffixes: bool,
    /// Emit a warning when an integer constant overflows 64 bits (including
    /// overflow caused by multiplier characters). The legacy behavior, and
    /// the default, is to saturate silently.
    pub warn_integer_overflow: bool,
    /// Treat a carriage return followed by a line feed as a single newline
    /// token, and keep such carriage returns out of whitespace tokens. A bare
    /// carriage return stays whitespace either way.
    pub check_crlf: bool,
    /// Number of bits per SIMD lane: 8, 16, 32 (default), or 64. Reserved for
    /// lane-width-driven constant classification.
    pub lane_bits: u32,
}

impl Default for LexerOptions {
    fn default() -> Self {
        Self {
            strict_integer_suffixes: false,
            warn_integer_overflow: false,
            check_crlf: false,
            lane_bits: 32,
        }
    }
}
