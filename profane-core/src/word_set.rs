//! word_set.rs - The deduplicated set of canonical forbidden words.
//!
//! License: MIT OR APACHE 2.0

use std::collections::HashSet;

use crate::normalizer::canonical_word;

/// A set of canonical words. Raw words are canonicalized on the way in, so
/// nothing unnormalized is ever stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSet {
    words: HashSet<String>,
}

impl WordSet {
    /// Builds the initial set, dropping entries that canonicalize to `""`.
    pub fn from_raw<I, S>(raw_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = raw_words
            .into_iter()
            .map(|w| canonical_word(w.as_ref()))
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Canonicalizes and inserts `raw`. Returns `true` if it was not present.
    ///
    /// Unlike [`WordSet::from_raw`], an empty canonical word is kept here.
    pub fn insert_raw(&mut self, raw: &str) -> bool {
        self.words.insert(canonical_word(raw))
    }

    /// Canonicalizes and removes `raw`. Returns `true` if it was present.
    pub fn remove_raw(&mut self, raw: &str) -> bool {
        self.words.remove(&canonical_word(raw))
    }

    /// Literal membership test; `word` is not canonicalized.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates the stored words in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Stored words in lexicographic order.
    pub fn sorted(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.iter().collect();
        words.sort_unstable();
        words
    }
}
