//! Character class codes and sequences of them.
//!
//! A class sequence like `"d_-"` or `"sS"` is a list of tokens. Each token is either one of the
//! single letter class codes of [`ClassCode`] or a literal character. A character matches the
//! sequence if it satisfies any of its tokens. The tokens are tried in the listed order and the
//! first one that is satisfied decides.

use std::fmt;

use crate::{CharPredicate, CharSet};

/// A named character class. All classes use ASCII semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassCode {
    /// `a`: alphabetic
    Alpha,
    /// `A`: not alphabetic
    NonAlpha,
    /// `d`: digit
    Digit,
    /// `D`: not a digit
    NonDigit,
    /// `h`: alphanumeric or `-`
    Hyphenated,
    /// `H`: neither alphanumeric nor `-`
    NonHyphenated,
    /// `l`: lowercase letter
    Lower,
    /// `L`: not a lowercase letter
    NonLower,
    /// `n`: alphanumeric
    Alnum,
    /// `N`: not alphanumeric
    NonAlnum,
    /// `s`: space, tab, carriage return, line feed or form feed
    Space,
    /// `S`: not a space character
    NonSpace,
    /// `u`: uppercase letter
    Upper,
    /// `U`: not an uppercase letter
    NonUpper,
    /// `w`: alphanumeric or `_`
    Word,
    /// `W`: neither alphanumeric nor `_`
    NonWord,
}

const fn build_code_table() -> [Option<ClassCode>; 128] {
    let mut table = [None; 128];
    table[b'a' as usize] = Some(ClassCode::Alpha);
    table[b'A' as usize] = Some(ClassCode::NonAlpha);
    table[b'd' as usize] = Some(ClassCode::Digit);
    table[b'D' as usize] = Some(ClassCode::NonDigit);
    table[b'h' as usize] = Some(ClassCode::Hyphenated);
    table[b'H' as usize] = Some(ClassCode::NonHyphenated);
    table[b'l' as usize] = Some(ClassCode::Lower);
    table[b'L' as usize] = Some(ClassCode::NonLower);
    table[b'n' as usize] = Some(ClassCode::Alnum);
    table[b'N' as usize] = Some(ClassCode::NonAlnum);
    table[b's' as usize] = Some(ClassCode::Space);
    table[b'S' as usize] = Some(ClassCode::NonSpace);
    table[b'u' as usize] = Some(ClassCode::Upper);
    table[b'U' as usize] = Some(ClassCode::NonUpper);
    table[b'w' as usize] = Some(ClassCode::Word);
    table[b'W' as usize] = Some(ClassCode::NonWord);
    table
}

static CODE_TABLE: [Option<ClassCode>; 128] = build_code_table();

#[inline]
fn is_space(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\r' | b'\n' | b'\x0c')
}

impl ClassCode {
    /// Looks up the class denoted by a code letter.
    /// Returns `None` for characters that are not class codes.
    #[inline]
    pub fn from_code(code: u8) -> Option<ClassCode> {
        CODE_TABLE.get(usize::from(code)).copied().flatten()
    }

    /// The code letter of the class.
    pub fn code(self) -> u8 {
        match self {
            ClassCode::Alpha => b'a',
            ClassCode::NonAlpha => b'A',
            ClassCode::Digit => b'd',
            ClassCode::NonDigit => b'D',
            ClassCode::Hyphenated => b'h',
            ClassCode::NonHyphenated => b'H',
            ClassCode::Lower => b'l',
            ClassCode::NonLower => b'L',
            ClassCode::Alnum => b'n',
            ClassCode::NonAlnum => b'N',
            ClassCode::Space => b's',
            ClassCode::NonSpace => b'S',
            ClassCode::Upper => b'u',
            ClassCode::NonUpper => b'U',
            ClassCode::Word => b'w',
            ClassCode::NonWord => b'W',
        }
    }

    /// Tests a character against the class.
    #[inline]
    pub fn matches(self, c: u8) -> bool {
        match self {
            ClassCode::Alpha => c.is_ascii_alphabetic(),
            ClassCode::NonAlpha => !c.is_ascii_alphabetic(),
            ClassCode::Digit => c.is_ascii_digit(),
            ClassCode::NonDigit => !c.is_ascii_digit(),
            ClassCode::Hyphenated => c.is_ascii_alphanumeric() || c == b'-',
            ClassCode::NonHyphenated => !(c.is_ascii_alphanumeric() || c == b'-'),
            ClassCode::Lower => c.is_ascii_lowercase(),
            ClassCode::NonLower => !c.is_ascii_lowercase(),
            ClassCode::Alnum => c.is_ascii_alphanumeric(),
            ClassCode::NonAlnum => !c.is_ascii_alphanumeric(),
            ClassCode::Space => is_space(c),
            ClassCode::NonSpace => !is_space(c),
            ClassCode::Upper => c.is_ascii_uppercase(),
            ClassCode::NonUpper => !c.is_ascii_uppercase(),
            ClassCode::Word => c.is_ascii_alphanumeric() || c == b'_',
            ClassCode::NonWord => !(c.is_ascii_alphanumeric() || c == b'_'),
        }
    }
}

/// A single entry of a class sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassToken {
    /// A named class.
    Code(ClassCode),
    /// Any character that is not a class code stands for itself.
    Literal(u8),
}

impl ClassToken {
    /// Tests a character against the token.
    #[inline]
    pub fn matches(self, c: u8) -> bool {
        match self {
            ClassToken::Code(code) => code.matches(c),
            ClassToken::Literal(l) => l == c,
        }
    }
}

/// An ordered sequence of class tokens combined with logical OR.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ClassSet {
    tokens: Vec<ClassToken>,
}

impl ClassSet {
    /// Parses a class sequence.
    ///
    /// ```
    /// use strscan::ClassSet;
    ///
    /// let ident = ClassSet::new("w-");
    /// assert!(ident.contains(b'_'));
    /// assert!(ident.contains(b'-'));
    /// assert!(!ident.contains(b' '));
    /// ```
    pub fn new(codes: impl AsRef<[u8]>) -> Self {
        Self::parse(codes.as_ref(), false)
    }

    /// Parses a class sequence in which `W` behaves like `w`.
    ///
    /// Scanners created with the `legacy_non_word` option use this to stay compatible with
    /// class strings written for the original C implementation.
    pub fn legacy(codes: impl AsRef<[u8]>) -> Self {
        Self::parse(codes.as_ref(), true)
    }

    pub(crate) fn parse(codes: &[u8], legacy_non_word: bool) -> Self {
        let tokens = codes
            .iter()
            .map(|&c| match ClassCode::from_code(c) {
                Some(ClassCode::NonWord) if legacy_non_word => ClassToken::Code(ClassCode::Word),
                Some(code) => ClassToken::Code(code),
                None => ClassToken::Literal(c),
            })
            .collect();
        Self { tokens }
    }

    /// The tokens of the sequence in evaluation order.
    pub fn tokens(&self) -> &[ClassToken] {
        &self.tokens
    }

    /// Returns true if the character satisfies any token of the sequence.
    #[inline]
    pub fn contains(&self, c: u8) -> bool {
        self.tokens.iter().any(|t| t.matches(c))
    }

    /// Compiles the sequence into a membership table.
    pub fn to_char_set(&self) -> CharSet {
        CharSet::from_predicate(|c: u8| self.contains(c))
    }
}

impl CharPredicate for ClassSet {
    #[inline]
    fn matches(&self, c: u8) -> bool {
        self.contains(c)
    }
}

impl From<&str> for ClassSet {
    fn from(codes: &str) -> Self {
        ClassSet::new(codes)
    }
}

impl fmt::Display for ClassSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            let c = match token {
                ClassToken::Code(code) => code.code(),
                ClassToken::Literal(l) => *l,
            };
            write!(f, "{}", std::ascii::escape_default(c))?;
        }
        Ok(())
    }
}
