//! Module with the class cache.
//!
//! Parsers built on a scanner usually call `scan_charclass` with the same few class strings
//! over and over. The cache maps each class string to the membership table compiled from it,
//! so that the string is parsed and evaluated only once per scanner.

use log::debug;
use rustc_hash::FxHashMap;

use crate::{CharSet, ClassSet};

/// Upper bound of cached entries. The cache is cleared when it is exceeded.
const MAX_ENTRIES: usize = 64;

/// The cache is a `FxHashMap` that maps class strings to their compiled `CharSet`.
#[derive(Debug, Clone, Default)]
pub(crate) struct ClassCache {
    cache: FxHashMap<Box<[u8]>, CharSet>,
}

impl ClassCache {
    /// Creates a new class cache.
    pub(crate) fn new() -> Self {
        Self {
            cache: FxHashMap::default(),
        }
    }

    /// Returns the compiled class sequence from the cache or compiles and inserts it.
    pub(crate) fn get(&mut self, codes: &[u8], legacy_non_word: bool) -> CharSet {
        if let Some(set) = self.cache.get(codes) {
            return *set;
        }
        if self.cache.len() >= MAX_ENTRIES {
            debug!("Class cache full, dropping {} entries", self.cache.len());
            self.cache.clear();
        }
        let set = ClassSet::parse(codes, legacy_non_word).to_char_set();
        debug!(
            "Compiled class sequence '{}' into {} characters",
            codes.escape_ascii(),
            set.len()
        );
        self.cache.insert(codes.into(), set);
        set
    }

    /// Number of cached class sequences.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.cache.len()
    }
}
