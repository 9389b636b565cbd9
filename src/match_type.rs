use crate::Span;

/// A match in the scanned buffer.
///
/// A match is a view into the buffer of the scanner that produced it. It does not hold the
/// matched text itself, use [`crate::Scanner::text`] to borrow the text or
/// [`crate::Scanner::copy_match`] to obtain an owned copy.
///
/// A match may be empty. This happens when a scan-upto operation finds its delimiter right at
/// the cursor, which is a success and must not be confused with a failed search.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Match {
    /// The underlying match span.
    span: Span,
}

impl Match {
    /// Create a new match.
    pub fn new(span: Span) -> Self {
        Self { span }
    }

    /// Create a match from an offset and a length.
    #[inline]
    pub(crate) fn at(offset: usize, len: usize) -> Self {
        Self {
            span: Span::new(offset, offset + len),
        }
    }

    /// Get the start of the match.
    #[inline]
    pub fn start(&self) -> usize {
        self.span.start
    }

    /// Get the end of the match.
    #[inline]
    pub fn end(&self) -> usize {
        self.span.end
    }

    /// Get the span of the match.
    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    /// Get the span as range
    #[inline]
    pub fn range(&self) -> std::ops::Range<usize> {
        self.span.range()
    }

    /// Get the length of the match.
    #[inline]
    pub fn len(&self) -> usize {
        self.span.len()
    }

    /// Check if the match is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }
}

impl From<Span> for Match {
    fn from(span: Span) -> Self {
        Match::new(span)
    }
}

impl std::fmt::Display for Match {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Match({})", self.span)
    }
}
