//! Configuration management for `profane-core`.
//!
//! This module defines the YAML-backed [`FilterConfig`] and the utilities for
//! loading it, merging a user config over a base config, and turning it into a
//! ready [`ProfanityFilter`].
//!
//! ```yaml
//! words: ["hello", "six"]
//! word_lists: ["words/en.txt"]
//! exclude: ["scunthorpe"]
//! redaction: custom
//! replace_with: "[BEEP]"
//! ```
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::filter::ProfanityFilter;
use crate::normalizer::canonical_word;
use crate::redaction::{Redaction, RedactionStyle, DEFAULT_CUSTOM_REPLACEMENT};
use crate::word_list::load_word_list;

fn default_replace_with() -> String {
    DEFAULT_CUSTOM_REPLACEMENT.to_string()
}

/// Top-level configuration for a profanity filter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Words listed inline.
    pub words: Vec<String>,
    /// Line-delimited word list files.
    pub word_lists: Vec<PathBuf>,
    /// Words removed after everything else is loaded.
    pub exclude: Vec<String>,
    pub redaction: RedactionStyle,
    /// Replacement text for `redaction: custom`.
    pub replace_with: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            words: Vec::new(),
            word_lists: Vec::new(),
            exclude: Vec::new(),
            redaction: RedactionStyle::default(),
            replace_with: default_replace_with(),
        }
    }
}

impl FilterConfig {
    /// Loads a config from a YAML file. Relative `word_lists` entries are
    /// resolved against the file's directory.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading filter config from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config = Self::from_yaml_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        if let Some(base) = path.parent() {
            for list in config.word_lists.iter_mut() {
                if list.is_relative() {
                    *list = base.join(&*list);
                }
            }
        }

        info!(
            "Loaded config from {}: {} inline word(s), {} word list(s).",
            path.display(),
            config.words.len(),
            config.word_lists.len()
        );
        Ok(config)
    }

    /// Parses a config from YAML text. Relative paths are left untouched.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        // An empty document deserializes to unit, not to a defaulted struct.
        if yaml.trim().is_empty() {
            warn!("Filter config is empty; using defaults.");
            return Ok(Self::default());
        }
        let config: FilterConfig =
            serde_yml::from_str(yaml).context("Failed to parse filter config")?;
        Ok(config)
    }

    /// Inline words followed by the contents of every word list.
    pub fn collect_words(&self) -> Result<Vec<String>> {
        let mut words = self.words.clone();
        for list in &self.word_lists {
            let loaded = load_word_list(list)
                .with_context(|| format!("Failed to load word list {}", list.display()))?;
            words.extend(loaded);
        }
        debug!("Collected {} raw word(s) from config.", words.len());
        Ok(words)
    }

    /// The configured redaction policy.
    pub fn redaction(&self) -> Redaction {
        self.redaction.into_redaction(&self.replace_with)
    }

    /// Builds a filter from every configured source, then applies `exclude`.
    pub fn build_filter(&self) -> Result<ProfanityFilter> {
        let mut filter = ProfanityFilter::new(self.collect_words()?)
            .context("Failed to build profanity filter")?;
        if !self.exclude.is_empty() {
            let missing = self
                .exclude
                .iter()
                .filter(|w| !filter.has(&canonical_word(w)))
                .count();
            if missing > 0 {
                debug!("{} excluded word(s) were not in the word set.", missing);
            }
            filter
                .remove(&self.exclude)
                .context("Failed to apply excluded words")?;
        }
        info!("Profanity filter ready with {} word(s).", filter.len());
        Ok(filter)
    }
}

/// Merges a user config over a base config.
///
/// Word sources and exclusions are unioned. The user's redaction settings
/// replace the base's when a user config is given.
pub fn merge_configs(base: FilterConfig, user: Option<FilterConfig>) -> FilterConfig {
    let Some(user) = user else {
        debug!("No user config provided; using base config.");
        return base;
    };
    debug!(
        "Merging user config ({} word(s), {} list(s)) over base ({} word(s), {} list(s)).",
        user.words.len(),
        user.word_lists.len(),
        base.words.len(),
        base.word_lists.len()
    );

    let mut merged = base;
    merged.words.extend(user.words);
    for list in user.word_lists {
        if !merged.word_lists.contains(&list) {
            merged.word_lists.push(list);
        }
    }
    merged.exclude.extend(user.exclude);
    merged.redaction = user.redaction;
    merged.replace_with = user.replace_with;
    merged
}
