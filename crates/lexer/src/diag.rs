use thiserror::Error;

use crate::token::SourceRange;

/// Diagnostic severity, ordered by increasing compile-blocking strength.
///
/// The lexer itself never escalates or halts on severity; it is metadata for
/// downstream rendering and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Remark,
    Warning,
    Error,
    Fatal,
}

/// Unique diagnostic types.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticId {
    /// An integer constant exceeded 64 bits; its value saturated.
    #[error("integer constant overflows 64 bits")]
    IntegerOverflow,
    /// An integer suffix did not match the strict suffix grammar.
    #[error("unrecognized integer suffix")]
    InvalidIntegerSuffix,
}

impl DiagnosticId {
    /// Severity attached when the lexer packages a rule error.
    pub const fn default_severity(self) -> Severity {
        match self {
            Self::IntegerOverflow | Self::InvalidIntegerSuffix => Severity::Warning,
        }
    }
}

/// A diagnostic reported alongside a token. Diagnostics never mutate the
/// token they accompany.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Diagnostic {
    pub id: DiagnosticId,
    pub severity: Severity,
    /// Range of the token that caused the diagnostic.
    pub range: SourceRange,
}

/// Rule-level error record. Rules know what went wrong but not where the
/// token sits in the file; the lexer fills in severity and range when it
/// packages the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexicalError {
    pub id: DiagnosticId,
}
