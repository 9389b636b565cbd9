use std::fmt;

/// A predicate over single characters.
///
/// All set-style scan operations of the [`crate::Scanner`] are driven by a predicate. It is
/// implemented for a single literal `u8`, [`CharSet`], [`crate::ClassSet`] and for any closure
/// `Fn(u8) -> bool`.
pub trait CharPredicate {
    /// Returns true if the character satisfies the predicate.
    fn matches(&self, c: u8) -> bool;
}

impl<F> CharPredicate for F
where
    F: Fn(u8) -> bool,
{
    #[inline]
    fn matches(&self, c: u8) -> bool {
        self(c)
    }
}

impl CharPredicate for u8 {
    #[inline]
    fn matches(&self, c: u8) -> bool {
        *self == c
    }
}

/// An unordered set of literal characters.
///
/// Membership is stored as a 256 bit table so that testing a character is a single lookup
/// regardless of the size of the set.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CharSet {
    bits: [u64; 4],
}

impl CharSet {
    /// Creates a set containing all the given characters.
    pub fn new(chars: impl AsRef<[u8]>) -> Self {
        let mut set = Self::default();
        for &c in chars.as_ref() {
            set.insert(c);
        }
        set
    }

    /// Creates a set from all characters that satisfy the given predicate.
    pub fn from_predicate<P: CharPredicate>(predicate: P) -> Self {
        let mut set = Self::default();
        for c in 0..=u8::MAX {
            if predicate.matches(c) {
                set.insert(c);
            }
        }
        set
    }

    /// Adds a character to the set.
    #[inline]
    pub fn insert(&mut self, c: u8) {
        self.bits[usize::from(c >> 6)] |= 1 << (c & 63);
    }

    /// Returns true if the character is a member of the set.
    #[inline]
    pub fn contains(&self, c: u8) -> bool {
        self.bits[usize::from(c >> 6)] & (1 << (c & 63)) != 0
    }

    /// Number of characters in the set.
    pub fn len(&self) -> usize {
        self.bits.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns true if the set contains no characters.
    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|w| *w == 0)
    }

    /// Returns the union of both sets.
    pub fn union(&self, other: &CharSet) -> CharSet {
        let mut bits = self.bits;
        for (w, o) in bits.iter_mut().zip(other.bits.iter()) {
            *w |= o;
        }
        CharSet { bits }
    }

    /// Returns the set of all characters that are not members of this set.
    pub fn negated(&self) -> CharSet {
        CharSet {
            bits: self.bits.map(|w| !w),
        }
    }

    /// Iterates over the members of the set in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..=u8::MAX).filter(move |c| self.contains(*c))
    }
}

impl CharPredicate for CharSet {
    #[inline]
    fn matches(&self, c: u8) -> bool {
        self.contains(c)
    }
}

impl From<&str> for CharSet {
    fn from(chars: &str) -> Self {
        CharSet::new(chars)
    }
}

impl From<&[u8]> for CharSet {
    fn from(chars: &[u8]) -> Self {
        CharSet::new(chars)
    }
}

impl FromIterator<u8> for CharSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = CharSet::default();
        for c in iter {
            set.insert(c);
        }
        set
    }
}

impl fmt::Debug for CharSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.iter().map(|c| std::ascii::escape_default(c).to_string()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership() {
        let set = CharSet::new(", ;");
        assert!(set.contains(b','));
        assert!(set.contains(b' '));
        assert!(set.contains(b';'));
        assert!(!set.contains(b'a'));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_high_characters() {
        let set: CharSet = [0x00u8, 0x7f, 0x80, 0xff].into_iter().collect();
        assert!(set.contains(0x00));
        assert!(set.contains(0xff));
        assert!(!set.contains(0xfe));
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn test_union_and_negation() {
        let digits = CharSet::new("0123456789");
        let letters = CharSet::from_predicate(|c: u8| c.is_ascii_lowercase());
        let both = digits.union(&letters);
        assert_eq!(both.len(), 36);
        let rest = both.negated();
        assert_eq!(rest.len(), 256 - 36);
        assert!(!rest.contains(b'5'));
        assert!(rest.contains(b'A'));
        assert!(CharSet::default().is_empty());
    }

    #[test]
    fn test_predicate_impls() {
        let is_digit = |c: u8| c.is_ascii_digit();
        assert!(is_digit.matches(b'7'));
        assert!(!is_digit.matches(b'x'));
        assert!(CharSet::new("ab").matches(b'b'));
        assert!(b'x'.matches(b'x'));
        assert!(!b'x'.matches(b'X'));
    }

    #[test]
    fn test_debug_output() {
        assert_eq!(format!("{:?}", CharSet::new("\nb")), r#"{"\\n", "b"}"#);
    }
}
