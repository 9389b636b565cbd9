//! Module with the position type and functions.
//! A position is a struct that contains a line and column number.

use std::fmt;

/// A position in the scanned buffer.
/// The position is represented by a line and column number.
/// The line and column numbers are 1-based.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// The line number of the position.
    pub line: usize,
    /// The column number of the position.
    pub column: usize,
}

impl Position {
    /// Create a new position.
    pub fn new(line: usize, column: usize) -> Self {
        debug_assert!(line > 0, "line number must be greater than 0");
        debug_assert!(column > 0, "column number must be greater than 0");
        Self { line, column }
    }

    /// Get the line number of the position.
    #[inline]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Get the column number of the position.
    #[inline]
    pub fn column(&self) -> usize {
        self.column
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line: {}, column: {}", self.line, self.column)
    }
}

/// A trait for providing the line and column information of a given byte offset in the
/// scanned buffer.
pub trait PositionProvider {
    /// Returns the line and column of the given offset.
    fn line_column(&self, offset: usize) -> Position;
}

/// Computes the line and column of `offset` in `buffer`.
///
/// Lines are separated by `\n`, so a `\r\n` pair counts as a single line break. An offset
/// beyond the end of the buffer is reported on the last line with the column counted past
/// its end. The column saturates at `usize::MAX`.
pub(crate) fn line_column_of(buffer: &[u8], offset: usize) -> Position {
    let head = &buffer[..offset.min(buffer.len())];
    let line = memchr::memchr_iter(b'\n', head).count() + 1;
    // `line_start <= head.len() <= offset`
    let line_start = memchr::memrchr(b'\n', head).map_or(0, |i| i + 1);
    Position::new(line, (offset - line_start).saturating_add(1))
}
