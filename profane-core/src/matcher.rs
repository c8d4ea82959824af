//! matcher.rs - Compiles a word set into a single whole-word alternation.
//!
//! The compiled pattern has the shape
//! `\b{start-half}(?:longest|...|shortest)\b{end-half}` with case folding
//! enabled. The half boundaries only require that no word character sits
//! directly outside the match, so words that begin or end with a symbol
//! (`a$$`, `f.u.`) still match standalone while `hellos` and `ahello` are
//! still rejected for `hello`.
//!
//! The `regex` crate resolves alternations leftmost-first, so ordering
//! alternatives by descending length makes `hello` win over `hell` when both
//! start at the same position.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use regex::{Captures, Match, Regex, RegexBuilder};
use std::cmp::Reverse;

use crate::errors::ProfaneError;

/// Upper bound on the compiled program size. Large word lists produce large
/// alternations, so this sits well above the `regex` default.
pub const MATCHER_SIZE_LIMIT: usize = 64 * (1 << 20);

/// A compiled, read-only matcher over a snapshot of a word set.
///
/// Cloning is cheap and yields an independent handle; nothing on this type
/// mutates the pattern.
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    /// `None` when there are no usable words: such a matcher matches nothing.
    regex: Option<Regex>,
    word_count: usize,
}

impl Matcher {
    /// A matcher that never matches.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Compiles `words` (already canonical) into a single alternation.
    ///
    /// Each word is escaped, so metacharacters are matched literally and can
    /// never widen the pattern. Empty words are left out of the alternation
    /// since an empty alternative would match at every word boundary.
    pub fn compile<'a, I>(words: I) -> Result<Self, ProfaneError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut sorted: Vec<&str> = words.into_iter().filter(|w| !w.is_empty()).collect();
        // Ties are broken lexicographically to keep the pattern deterministic.
        sorted.sort_unstable_by(|a, b| (Reverse(a.len()), *a).cmp(&(Reverse(b.len()), *b)));
        sorted.dedup();

        if sorted.is_empty() {
            debug!("No words to compile; matcher will match nothing.");
            return Ok(Self::empty());
        }

        let alternation = sorted
            .iter()
            .map(|w| regex::escape(w))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = format!(r"\b{{start-half}}(?:{})\b{{end-half}}", alternation);

        debug!(
            "Compiling matcher over {} word(s), pattern length {}.",
            sorted.len(),
            pattern.len()
        );

        let regex = RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .size_limit(MATCHER_SIZE_LIMIT)
            .build()
            .map_err(|e| ProfaneError::MatcherCompilation(sorted.len(), e))?;

        Ok(Self {
            regex: Some(regex),
            word_count: sorted.len(),
        })
    }

    /// True if the matcher can never match anything.
    pub fn is_empty(&self) -> bool {
        self.regex.is_none()
    }

    /// Number of alternatives in the compiled pattern.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// The compiled pattern source, if any.
    pub fn as_str(&self) -> Option<&str> {
        self.regex.as_ref().map(Regex::as_str)
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.as_ref().is_some_and(|re| re.is_match(text))
    }

    /// All non-overlapping matches in `text`, left to right.
    pub fn find_all<'t>(&self, text: &'t str) -> Vec<Match<'t>> {
        match &self.regex {
            Some(re) => re.find_iter(text).collect(),
            None => Vec::new(),
        }
    }

    /// Rewrites every match with the output of `rewrite`, which receives the
    /// matched text. The result is used literally; `$` is not expanded.
    pub fn replace_all_with<F>(&self, text: &str, mut rewrite: F) -> String
    where
        F: FnMut(&str) -> String,
    {
        match &self.regex {
            Some(re) => re
                .replace_all(text, |caps: &Captures| rewrite(&caps[0]))
                .into_owned(),
            None => text.to_string(),
        }
    }
}
