use thiserror::Error;

use crate::Span;

/// The result type for the `strscan` crate.
pub type Result<T> = std::result::Result<T, StrScanError>;

/// The error type for the `strscan` crate.
///
/// Note that a scan operation that finds nothing is not an error. Scan operations return
/// `None` in that case. Errors are only raised by checked cursor moves and by conversions of
/// matched text.
#[derive(Error, Debug)]
pub struct StrScanError {
    /// The source of the error.
    pub source: Box<StrScanErrorKind>,
}

impl StrScanError {
    /// Create a new `StrScanError`.
    pub fn new(kind: StrScanErrorKind) -> Self {
        StrScanError {
            source: Box::new(kind),
        }
    }

    /// Get the kind of the error.
    #[inline]
    pub fn kind(&self) -> &StrScanErrorKind {
        &self.source
    }
}

impl std::fmt::Display for StrScanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}

/// The error kind type.
#[derive(Error, Debug, PartialEq)]
pub enum StrScanErrorKind {
    /// A checked cursor move targeted a position beyond the end of the buffer.
    #[error("Position {position} is out of bounds for a buffer of length {length}")]
    PositionOutOfBounds {
        /// The rejected position.
        position: usize,
        /// The length of the buffer.
        length: usize,
    },

    /// A match does not lie inside the buffer of the scanner it was used with.
    #[error("Match {span} is out of bounds for a buffer of length {length}")]
    MatchOutOfBounds {
        /// The span of the rejected match.
        span: Span,
        /// The length of the buffer.
        length: usize,
    },

    /// The matched text is not valid UTF-8.
    #[error(transparent)]
    InvalidUtf8(#[from] std::str::Utf8Error),
}

impl From<std::str::Utf8Error> for StrScanError {
    fn from(error: std::str::Utf8Error) -> Self {
        StrScanError::new(StrScanErrorKind::InvalidUtf8(error))
    }
}

impl From<StrScanErrorKind> for StrScanError {
    fn from(kind: StrScanErrorKind) -> Self {
        StrScanError::new(kind)
    }
}
