//! word_list.rs - Reading line-delimited word lists.
//!
//! A word list is plain text with one word per line. Lines are returned raw;
//! canonicalization (and dropping lines that end up empty) happens when the
//! words enter a [`WordSet`](crate::WordSet).
//!
//! License: MIT OR APACHE 2.0

use log::{debug, warn};
use std::path::Path;

use crate::errors::ProfaneError;

/// Splits a line-delimited word list into raw words. Handles `\r\n` endings.
pub fn parse_word_list(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}

/// Reads and splits a word list file.
pub fn load_word_list<P: AsRef<Path>>(path: P) -> Result<Vec<String>, ProfaneError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| ProfaneError::WordListIo {
        path: path.to_path_buf(),
        source,
    })?;
    let words = parse_word_list(&text);
    if words.iter().all(|w| w.trim().is_empty()) {
        warn!("Word list {} contains no words.", path.display());
    }
    debug!("Read {} line(s) from word list {}.", words.len(), path.display());
    Ok(words)
}
