//! shared.rs - A thread-safe handle around [`ProfanityFilter`].
//!
//! `ProfanityFilter` itself carries no synchronization. `SharedFilter` puts it
//! behind an `Arc<RwLock<..>>`: rebuilds take the write lock, queries take the
//! read lock, so a query always sees a word set and matcher that belong
//! together.
//!
//! A poisoned lock is recovered rather than reported. The filter only commits
//! a new word set after its matcher compiled, so the state behind a poisoned
//! lock is still consistent.
//!
//! License: MIT OR APACHE 2.0

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::errors::ProfaneError;
use crate::filter::ProfanityFilter;
use crate::matcher::Matcher;
use crate::redaction::Redaction;

#[derive(Debug, Clone, Default)]
pub struct SharedFilter {
    inner: Arc<RwLock<ProfanityFilter>>,
}

impl SharedFilter {
    pub fn new(filter: ProfanityFilter) -> Self {
        Self {
            inner: Arc::new(RwLock::new(filter)),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, ProfanityFilter> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ProfanityFilter> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn add<I, S>(&self, words: I) -> Result<(), ProfaneError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.write().add(words)
    }

    pub fn remove<I, S>(&self, words: I) -> Result<(), ProfaneError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.write().remove(words)
    }

    pub fn has(&self, word: &str) -> bool {
        self.read().has(word)
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.read().is_match(text)
    }

    pub fn censor(&self, text: &str, redaction: &Redaction) -> String {
        self.read().censor(text, redaction)
    }

    /// The matcher as of now. Later rebuilds do not affect the returned copy,
    /// so it can be used without holding any lock.
    pub fn snapshot(&self) -> Matcher {
        self.read().matcher()
    }

    /// A full copy of the current filter.
    pub fn to_filter(&self) -> ProfanityFilter {
        self.read().clone()
    }
}

impl From<ProfanityFilter> for SharedFilter {
    fn from(filter: ProfanityFilter) -> Self {
        Self::new(filter)
    }
}
