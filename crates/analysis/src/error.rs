use thiserror::Error;

/// Errors produced while deriving properties from an input string.
///
/// All errors are typed, cloneable, and comparable so callers can map them to
/// transport-level responses and assert on them precisely in tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyzeError {
    /// The value is empty, or contains nothing but whitespace. Raised by
    /// [`analyze`](crate::analyze) before any record is built; the individual
    /// property functions accept blank input.
    #[error("value is blank after whitespace stripping")]
    BlankValue,
}
