//! Forward search for literal delimiters.
//!
//! The search walks the haystack start by start and compares the delimiter character by
//! character. After a partial match it skips ahead to the first start that can still match,
//! which is the mismatch point unless the first delimiter character recurs inside the part
//! that already matched.

/// How characters of a literal are compared with the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Compare {
    /// Characters must be equal.
    Exact,
    /// ASCII letters are compared case-insensitively, all other characters exactly.
    Folded,
}

impl Compare {
    #[inline]
    pub(crate) fn chars_eq(self, a: u8, b: u8) -> bool {
        match self {
            Compare::Exact => a == b,
            Compare::Folded => a.eq_ignore_ascii_case(&b),
        }
    }
}

/// Returns true if `haystack` starts with `needle`.
pub(crate) fn starts_with(haystack: &[u8], needle: &[u8], compare: Compare) -> bool {
    haystack.len() >= needle.len()
        && haystack
            .iter()
            .zip(needle)
            .all(|(&h, &n)| compare.chars_eq(h, n))
}

/// Returns the offset of the first occurrence of `needle` in `haystack`.
///
/// An empty needle is never found.
pub(crate) fn find(haystack: &[u8], needle: &[u8], compare: Compare) -> Option<usize> {
    let (&first, tail) = needle.split_first()?;
    // Distance from the start of a candidate to the next place the first character recurs
    // in the needle. Starts before that can be skipped after a partial match.
    let recurrence = tail
        .iter()
        .position(|&c| compare.chars_eq(c, first))
        .map_or(needle.len(), |p| p + 1);

    let mut i = 0;
    while i < haystack.len() {
        match compare {
            Compare::Exact => i += memchr::memchr(first, &haystack[i..])?,
            Compare::Folded if !compare.chars_eq(haystack[i], first) => {
                i += 1;
                continue;
            }
            Compare::Folded => {}
        }

        let mut j = 1;
        while j < needle.len() {
            match haystack.get(i + j) {
                Some(&c) if compare.chars_eq(c, needle[j]) => j += 1,
                Some(_) => break,
                // Later starts have even less room left.
                None => return None,
            }
        }
        if j == needle.len() {
            return Some(i);
        }
        i += j.min(recurrence);
    }
    None
}
