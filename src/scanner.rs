use log::{debug, trace, warn};

use crate::{
    internal::{
        literal_search::{self, Compare},
        ClassCache,
    },
    position::line_column_of,
    Buffer, CharPredicate, CharSet, ClassSet, Match, Position, PositionProvider, Result,
    ScannerBuilder, ScannerOptions, StrScanErrorKind,
};

/// A cursor over an in-memory character buffer.
///
/// The scanner owns a position into its buffer and offers lookahead, greedy matching of
/// character runs and literals, and search for delimiters ahead of the cursor. It is meant as
/// the lexical layer below hand-written parsers.
///
/// All scan operations return `Some(Match)` on success and advance the cursor. On failure they
/// return `None` and leave the cursor exactly where it was.
///
/// * `'a` is the lifetime of a borrowed buffer. Scanners over an owned copy are
///   `Scanner<'static>`.
///
/// ```
/// use strscan::Scanner;
///
/// let mut scanner = Scanner::new("hello, world!");
/// let word = scanner.scan_upto_charset(",").unwrap();
/// assert_eq!(scanner.text(word), b"hello");
/// assert_eq!(scanner.peek(0), Some(b','));
/// assert!(scanner.scan_charset(", ").is_some());
/// assert_eq!(scanner.current_pointer(), b"world!");
/// ```
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    buffer: Buffer<'a>,
    position: usize,
    options: ScannerOptions,
    class_cache: ClassCache,
}

impl Scanner<'static> {
    /// Creates a scanner over a private copy of the input.
    pub fn new(input: impl AsRef<[u8]>) -> Self {
        ScannerBuilder::new().build(input)
    }
}

impl<'a> Scanner<'a> {
    /// Creates a scanner that borrows the input without copying it.
    pub fn new_borrowed<T>(input: &'a T) -> Self
    where
        T: AsRef<[u8]> + ?Sized,
    {
        ScannerBuilder::new().build_borrowed(input)
    }

    pub(crate) fn with_buffer(buffer: Buffer<'a>, options: ScannerOptions) -> Self {
        debug!(
            "New scanner over {} buffer of length {}, {:?}",
            if buffer.is_owned() { "owned" } else { "borrowed" },
            buffer.len(),
            options
        );
        Self {
            buffer,
            position: 0,
            options,
            class_cache: ClassCache::new(),
        }
    }

    // ---------------------------------------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------------------------------------

    /// The complete buffer, independent of the cursor.
    #[inline]
    pub fn underlying_buffer(&self) -> &[u8] {
        self.buffer.as_bytes()
    }

    /// The buffer together with its ownership mode.
    #[inline]
    pub fn buffer(&self) -> &Buffer<'a> {
        &self.buffer
    }

    /// Returns true if the scanner holds its own copy of the input.
    #[inline]
    pub fn is_owned(&self) -> bool {
        self.buffer.is_owned()
    }

    /// The options the scanner was created with.
    #[inline]
    pub fn options(&self) -> ScannerOptions {
        self.options
    }

    /// Total number of characters in the buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns true if the buffer contains no characters.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    // ---------------------------------------------------------------------------------------------
    // Cursor
    // ---------------------------------------------------------------------------------------------

    /// The current cursor offset.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Moves the cursor to the given offset.
    ///
    /// By default the offset is not checked. An offset beyond the end of the buffer is
    /// accepted and makes the scanner behave as if it were at the end. With the
    /// `strict_positions` option such offsets are ignored instead.
    /// Use [`Scanner::try_set_position`] to get an error for them.
    pub fn set_position(&mut self, position: usize) {
        if self.options.strict_positions && position > self.len() {
            warn!(
                "Ignoring position {} beyond buffer length {}",
                position,
                self.len()
            );
            return;
        }
        self.position = position;
    }

    /// Moves the cursor to the given offset if it lies within the buffer.
    pub fn try_set_position(&mut self, position: usize) -> Result<()> {
        if position > self.len() {
            return Err(StrScanErrorKind::PositionOutOfBounds {
                position,
                length: self.len(),
            }
            .into());
        }
        self.position = position;
        Ok(())
    }

    /// Advances the cursor by `n` characters.
    ///
    /// Like [`Scanner::set_position`] this does not check the target unless the scanner was
    /// built with `strict_positions`.
    pub fn forward(&mut self, n: usize) {
        self.set_position(self.position.saturating_add(n));
    }

    /// Advances the cursor by `n` characters if the target lies within the buffer.
    pub fn try_forward(&mut self, n: usize) -> Result<()> {
        self.try_set_position(self.position.saturating_add(n))
    }

    /// Moves the cursor back to the start of the buffer.
    #[inline]
    pub fn reset(&mut self) {
        self.position = 0;
    }

    /// Number of characters between the cursor and the end of the buffer.
    #[inline]
    pub fn remaining_length(&self) -> usize {
        self.len().saturating_sub(self.position)
    }

    /// Returns true if there are no characters left at the cursor.
    #[inline]
    pub fn at_end(&self) -> bool {
        self.position >= self.len()
    }

    /// The rest of the buffer starting at the cursor. Empty if the cursor is at or beyond the
    /// end.
    #[inline]
    pub fn current_pointer(&self) -> &[u8] {
        self.underlying_buffer()
            .get(self.position..)
            .unwrap_or_default()
    }

    /// Line and column of the cursor.
    pub fn cursor_line_column(&self) -> Position {
        self.line_column(self.position)
    }

    /// Returns the character `i` places after the cursor without consuming it.
    #[inline]
    pub fn peek(&self, i: usize) -> Option<u8> {
        let at = self.position.checked_add(i)?;
        self.underlying_buffer().get(at).copied()
    }

    /// Returns the character at the cursor and advances the cursor by one.
    /// Returns `None` without moving the cursor at the end of the buffer.
    #[inline]
    pub fn next_char(&mut self) -> Option<u8> {
        let c = self.peek(0)?;
        self.position += 1;
        Some(c)
    }

    // ---------------------------------------------------------------------------------------------
    // Matched text
    // ---------------------------------------------------------------------------------------------

    /// The text of a match, borrowed from the buffer.
    ///
    /// # Panics
    /// Panics if the match does not lie within the buffer, which can only happen for a match
    /// that was produced by a different scanner.
    pub fn text(&self, matched: Match) -> &[u8] {
        &self.underlying_buffer()[matched.range()]
    }

    /// The text of a match, borrowed from the buffer, or an error if the match does not lie
    /// within the buffer.
    pub fn try_text(&self, matched: Match) -> Result<&[u8]> {
        self.underlying_buffer().get(matched.range()).ok_or_else(|| {
            StrScanErrorKind::MatchOutOfBounds {
                span: matched.span(),
                length: self.len(),
            }
            .into()
        })
    }

    /// The text of a match as a string slice.
    pub fn text_str(&self, matched: Match) -> Result<&str> {
        Ok(std::str::from_utf8(self.try_text(matched)?)?)
    }

    /// An owned copy of the text of a match.
    pub fn copy_match(&self, matched: Match) -> Result<Vec<u8>> {
        Ok(self.try_text(matched)?.to_vec())
    }

    /// An owned copy of the text of a match as a string.
    pub fn copy_match_string(&self, matched: Match) -> Result<String> {
        Ok(self.text_str(matched)?.to_string())
    }

    // ---------------------------------------------------------------------------------------------
    // Greedy scans
    // ---------------------------------------------------------------------------------------------

    /// Consumes the longest run of characters at the cursor that satisfy the predicate.
    ///
    /// Fails without moving the cursor if the character at the cursor doesn't satisfy it.
    pub fn scan_while<P: CharPredicate>(&mut self, predicate: P) -> Option<Match> {
        let len = self.run_length(&predicate);
        self.consume(len, "scan_while")
    }

    /// Consumes the longest run of the character `c`.
    pub fn scan_char(&mut self, c: u8) -> Option<Match> {
        let len = self.run_length(&c);
        self.consume(len, "scan_char")
    }

    /// Consumes the longest run of characters listed in `chars`.
    pub fn scan_charset(&mut self, chars: impl AsRef<[u8]>) -> Option<Match> {
        self.scan_char_set(&CharSet::new(chars))
    }

    /// Consumes the longest run of members of a prebuilt set.
    pub fn scan_char_set(&mut self, set: &CharSet) -> Option<Match> {
        let len = self.run_length(set);
        self.consume(len, "scan_charset")
    }

    /// Consumes the longest run of characters that satisfy the class sequence `codes`.
    ///
    /// ```
    /// use strscan::Scanner;
    ///
    /// let mut scanner = Scanner::new("lowerUPPER123");
    /// let lower = scanner.scan_charclass("l").unwrap();
    /// assert_eq!(scanner.text(lower), b"lower");
    /// assert!(scanner.scan_charclass("d").is_none());
    /// assert_eq!(scanner.scan_charclass("ud").map(|m| m.len()), Some(8));
    /// ```
    pub fn scan_charclass(&mut self, codes: impl AsRef<[u8]>) -> Option<Match> {
        let codes = codes.as_ref();
        let len = if self.options.class_cache {
            let set = self.class_cache.get(codes, self.options.legacy_non_word);
            self.run_length(&set)
        } else {
            self.run_length(&self.class_set(codes))
        };
        self.consume(len, "scan_charclass")
    }

    /// Consumes the longest run of characters that satisfy a prebuilt class sequence.
    pub fn scan_class_set(&mut self, set: &ClassSet) -> Option<Match> {
        let len = self.run_length(set);
        self.consume(len, "scan_charclass")
    }

    /// Consumes `literal` if the buffer continues with it at the cursor.
    ///
    /// The match is all or nothing. An empty literal never matches.
    pub fn scan_literal(&mut self, literal: impl AsRef<[u8]>) -> Option<Match> {
        self.scan_literal_by(literal.as_ref(), Compare::Exact)
    }

    /// Consumes the first `n` characters of `literal` if the buffer continues with them.
    ///
    /// Fails if `literal` is shorter than `n`.
    pub fn scan_literal_n(&mut self, literal: impl AsRef<[u8]>, n: usize) -> Option<Match> {
        let literal = Self::literal_prefix(literal.as_ref(), n)?;
        self.scan_literal_by(literal, Compare::Exact)
    }

    /// Like [`Scanner::scan_literal`] but ASCII letters are compared case-insensitively.
    pub fn scan_literal_ci(&mut self, literal: impl AsRef<[u8]>) -> Option<Match> {
        self.scan_literal_by(literal.as_ref(), Compare::Folded)
    }

    /// Like [`Scanner::scan_literal_n`] but ASCII letters are compared case-insensitively.
    pub fn scan_literal_ci_n(&mut self, literal: impl AsRef<[u8]>, n: usize) -> Option<Match> {
        let literal = Self::literal_prefix(literal.as_ref(), n)?;
        self.scan_literal_by(literal, Compare::Folded)
    }

    // ---------------------------------------------------------------------------------------------
    // Scan-upto
    // ---------------------------------------------------------------------------------------------

    /// Searches for the first character at or after the cursor that satisfies the predicate.
    ///
    /// On success the cursor is moved onto that character, which is not consumed, and the
    /// returned match covers the characters that were skipped. The match is empty if the
    /// cursor already was on such a character. Fails without moving the cursor if no
    /// character up to the end of the buffer satisfies the predicate.
    pub fn scan_upto<P: CharPredicate>(&mut self, predicate: P) -> Option<Match> {
        let distance = self.distance_to(&predicate)?;
        Some(self.step_over(distance, "scan_upto"))
    }

    /// Searches for the next occurrence of the character `c`.
    pub fn scan_upto_char(&mut self, c: u8) -> Option<Match> {
        let distance = memchr::memchr(c, self.current_pointer())?;
        Some(self.step_over(distance, "scan_upto_char"))
    }

    /// Searches for the next character listed in `chars`.
    pub fn scan_upto_charset(&mut self, chars: impl AsRef<[u8]>) -> Option<Match> {
        self.scan_upto_char_set(&CharSet::new(chars))
    }

    /// Searches for the next member of a prebuilt set.
    pub fn scan_upto_char_set(&mut self, set: &CharSet) -> Option<Match> {
        let distance = self.distance_to(set)?;
        Some(self.step_over(distance, "scan_upto_charset"))
    }

    /// Searches for the next character that satisfies the class sequence `codes`.
    pub fn scan_upto_charclass(&mut self, codes: impl AsRef<[u8]>) -> Option<Match> {
        let codes = codes.as_ref();
        let distance = if self.options.class_cache {
            let set = self.class_cache.get(codes, self.options.legacy_non_word);
            self.distance_to(&set)
        } else {
            self.distance_to(&self.class_set(codes))
        }?;
        Some(self.step_over(distance, "scan_upto_charclass"))
    }

    /// Searches for the next character that satisfies a prebuilt class sequence.
    pub fn scan_upto_class_set(&mut self, set: &ClassSet) -> Option<Match> {
        let distance = self.distance_to(set)?;
        Some(self.step_over(distance, "scan_upto_charclass"))
    }

    /// Searches for the next occurrence of `literal`.
    ///
    /// The cursor is moved onto the start of the occurrence. An empty literal is never found.
    pub fn scan_upto_literal(&mut self, literal: impl AsRef<[u8]>) -> Option<Match> {
        self.scan_upto_literal_by(literal.as_ref(), Compare::Exact)
    }

    /// Searches for the next occurrence of the first `n` characters of `literal`.
    pub fn scan_upto_literal_n(&mut self, literal: impl AsRef<[u8]>, n: usize) -> Option<Match> {
        let literal = Self::literal_prefix(literal.as_ref(), n)?;
        self.scan_upto_literal_by(literal, Compare::Exact)
    }

    /// Like [`Scanner::scan_upto_literal`] but ASCII letters are compared case-insensitively.
    pub fn scan_upto_literal_ci(&mut self, literal: impl AsRef<[u8]>) -> Option<Match> {
        self.scan_upto_literal_by(literal.as_ref(), Compare::Folded)
    }

    /// Like [`Scanner::scan_upto_literal_n`] but ASCII letters are compared
    /// case-insensitively.
    pub fn scan_upto_literal_ci_n(
        &mut self,
        literal: impl AsRef<[u8]>,
        n: usize,
    ) -> Option<Match> {
        let literal = Self::literal_prefix(literal.as_ref(), n)?;
        self.scan_upto_literal_by(literal, Compare::Folded)
    }

    // ---------------------------------------------------------------------------------------------
    // Helpers
    // ---------------------------------------------------------------------------------------------

    fn class_set(&self, codes: &[u8]) -> ClassSet {
        ClassSet::parse(codes, self.options.legacy_non_word)
    }

    /// Length of the run at the cursor that satisfies the predicate.
    #[inline]
    fn run_length<P: CharPredicate + ?Sized>(&self, predicate: &P) -> usize {
        self.current_pointer()
            .iter()
            .take_while(|&&c| predicate.matches(c))
            .count()
    }

    /// Distance from the cursor to the first character that satisfies the predicate.
    #[inline]
    fn distance_to<P: CharPredicate + ?Sized>(&self, predicate: &P) -> Option<usize> {
        self.current_pointer()
            .iter()
            .position(|&c| predicate.matches(c))
    }

    fn literal_prefix(literal: &[u8], n: usize) -> Option<&[u8]> {
        let prefix = literal.get(..n);
        if prefix.is_none() {
            warn!(
                "Literal '{}' is shorter than the requested length {}",
                literal.escape_ascii(),
                n
            );
        }
        prefix
    }

    fn scan_literal_by(&mut self, literal: &[u8], compare: Compare) -> Option<Match> {
        if literal.is_empty()
            || !literal_search::starts_with(self.current_pointer(), literal, compare)
        {
            return None;
        }
        self.consume(literal.len(), "scan_literal")
    }

    fn scan_upto_literal_by(&mut self, literal: &[u8], compare: Compare) -> Option<Match> {
        let distance = literal_search::find(self.current_pointer(), literal, compare)?;
        Some(self.step_over(distance, "scan_upto_literal"))
    }

    /// Consumes `len` characters as a match. A zero length is a failed scan.
    fn consume(&mut self, len: usize, operation: &str) -> Option<Match> {
        if len == 0 {
            return None;
        }
        Some(self.step_over(len, operation))
    }

    /// Moves the cursor by `len` characters and returns the skipped span.
    fn step_over(&mut self, len: usize, operation: &str) -> Match {
        let matched = Match::at(self.position, len);
        self.position += len;
        trace!("{} matched {}", operation, matched.span());
        matched
    }
}

impl PositionProvider for Scanner<'_> {
    /// Returns the line and column numbers of the given offset.
    /// Lines are counted by `\n` characters, both numbers start at 1.
    fn line_column(&self, offset: usize) -> Position {
        line_column_of(self.underlying_buffer(), offset)
    }
}
