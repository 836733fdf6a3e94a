use crate::options::LexerOptions;

/// Read-only view of the input at the lexer's current offset.
///
/// Rules examine the source exclusively through this view: bounds-checked
/// lookahead, a raw substring copy, and the active options. A cursor is
/// constructed fresh for every engine pass and never outlives it.
#[derive(Clone, Copy)]
pub struct SourceCursor<'src> {
    source: &'src [u8],
    index: usize,
    options: &'src LexerOptions,
}

impl<'src> SourceCursor<'src> {
    pub(crate) const fn new(source: &'src [u8], index: usize, options: &'src LexerOptions) -> Self {
        Self {
            source,
            index,
            options,
        }
    }

    /// Byte at `offset` from the current position, or zero past the end.
    /// Never panics.
    #[inline]
    pub fn peek(&self, offset: usize) -> u8 {
        self.source
            .get(self.index.saturating_add(offset))
            .copied()
            .unwrap_or(0)
    }

    /// Whether `offset` from the current position is past the end.
    #[inline]
    pub fn is_out_of_bounds(&self, offset: usize) -> bool {
        self.index.saturating_add(offset) >= self.source.len()
    }

    /// Owned copy of the next `n` bytes, clamped to the end of the buffer.
    pub fn copy_string(&self, n: usize) -> String {
        let start = self.index.min(self.source.len());
        let end = self.index.saturating_add(n).min(self.source.len());
        String::from_utf8_lossy(&self.source[start..end]).into_owned()
    }

    #[inline]
    pub const fn options(&self) -> &LexerOptions {
        self.options
    }
}
