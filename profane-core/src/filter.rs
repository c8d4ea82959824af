// profane-core/src/filter.rs
//! The profanity filter engine: a word set paired with its compiled matcher.
//!
//! Every query normalizes the whole input once, then runs the compiled
//! matcher over the normalized text. Transforms therefore return normalized
//! text: `replace_stars("H3LL0 there")` gives `H***o there`, since `0` is
//! folded to `o` before the match is rewritten.
//!
//! Mutations (`add`/`remove`) rebuild the matcher before returning. A rebuild
//! is computed on a copy of the word set and only committed once compilation
//! succeeds, so a failed rebuild leaves the filter exactly as it was.
//!
//! License: MIT OR APACHE 2.0

use log::debug;

use crate::errors::ProfaneError;
use crate::matcher::Matcher;
use crate::normalizer::normalize;
use crate::profanity_match::{log_match_debug, ProfanityMatch};
use crate::redaction::{self, Redaction};
use crate::word_list::parse_word_list;
use crate::word_set::WordSet;

#[derive(Debug, Clone, Default)]
pub struct ProfanityFilter {
    words: WordSet,
    matcher: Matcher,
}

impl ProfanityFilter {
    /// Builds a filter from an initial word source. Words that canonicalize
    /// to the empty string are dropped.
    pub fn new<I, S>(initial_words: I) -> Result<Self, ProfaneError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = WordSet::from_raw(initial_words);
        let matcher = Matcher::compile(words.iter())?;
        debug!("Profanity filter created with {} word(s).", words.len());
        Ok(Self { words, matcher })
    }

    /// Builds a filter from line-delimited text, one word per line.
    pub fn from_word_list(text: &str) -> Result<Self, ProfaneError> {
        Self::new(parse_word_list(text))
    }

    /// Literal membership test against the stored canonical words.
    ///
    /// `word` is *not* canonicalized: `has("hello")` is true after
    /// `add(["HELLO"])`, but `has("HELLO")` is not.
    pub fn has(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Canonicalizes and adds `words`, then recompiles the matcher.
    pub fn add<I, S>(&mut self, words: I) -> Result<(), ProfaneError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut next = self.words.clone();
        let mut added = 0usize;
        for word in words {
            if next.insert_raw(word.as_ref()) {
                added += 1;
            }
        }
        debug!("Adding {} new word(s).", added);
        self.commit(next)
    }

    /// Canonicalizes and removes `words`, then recompiles the matcher.
    /// Words that are not present are ignored.
    pub fn remove<I, S>(&mut self, words: I) -> Result<(), ProfaneError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut next = self.words.clone();
        let mut removed = 0usize;
        for word in words {
            if next.remove_raw(word.as_ref()) {
                removed += 1;
            }
        }
        debug!("Removing {} word(s).", removed);
        self.commit(next)
    }

    fn commit(&mut self, words: WordSet) -> Result<(), ProfaneError> {
        let matcher = Matcher::compile(words.iter())?;
        self.words = words;
        self.matcher = matcher;
        Ok(())
    }

    /// True if the normalized `text` contains at least one listed word.
    pub fn is_match(&self, text: &str) -> bool {
        self.matcher.is_match(&normalize(text))
    }

    /// Replaces every match with `$@!#%`.
    pub fn replace_garbled(&self, text: &str) -> String {
        self.matcher.replace_all_with(&normalize(text), redaction::garble)
    }

    /// Stars out every match, keeping first and last character when the match
    /// is at least three characters long.
    pub fn replace_stars(&self, text: &str) -> String {
        self.matcher.replace_all_with(&normalize(text), redaction::star_out)
    }

    /// Replaces each run of vowels inside a match with a single `*`.
    pub fn replace_vowels(&self, text: &str) -> String {
        self.matcher.replace_all_with(&normalize(text), redaction::mask_vowels)
    }

    /// Replaces every match with `replacement`, taken literally.
    pub fn replace_custom(&self, text: &str, replacement: &str) -> String {
        self.matcher.replace_all_with(&normalize(text), |_| replacement.to_string())
    }

    /// Applies `redaction` to every match.
    pub fn censor(&self, text: &str, redaction: &Redaction) -> String {
        self.matcher.replace_all_with(&normalize(text), |m| redaction.apply(m))
    }

    /// Lists every match in the normalized `text`, left to right.
    pub fn find_matches(&self, text: &str) -> Vec<ProfanityMatch> {
        let normalized = normalize(text);
        let found: Vec<ProfanityMatch> = self
            .matcher
            .find_all(&normalized)
            .into_iter()
            .map(|m| ProfanityMatch {
                matched: m.as_str().to_string(),
                start: m.start(),
                end: m.end(),
                replacement: None,
            })
            .collect();
        for m in &found {
            log_match_debug(module_path!(), m);
        }
        found
    }

    /// Like [`find_matches`](Self::find_matches), with each match's
    /// replacement under `redaction` filled in.
    pub fn find_matches_with(&self, text: &str, redaction: &Redaction) -> Vec<ProfanityMatch> {
        let mut found = self.find_matches(text);
        for m in &mut found {
            m.replacement = Some(redaction.apply(&m.matched));
        }
        found
    }

    /// A copy of the compiled matcher. Changes to the filter after this call
    /// are not reflected in the copy.
    pub fn matcher(&self) -> Matcher {
        self.matcher.clone()
    }

    /// Stored canonical words, sorted.
    pub fn words(&self) -> Vec<&str> {
        self.words.sorted()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
