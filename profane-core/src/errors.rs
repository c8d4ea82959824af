//! errors.rs - Custom error types for the profane-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific error types that can be handled programmatically.
//!
//! License: MIT OR APACHE 2.0

use std::path::PathBuf;
use thiserror::Error;

/// This enum represents all possible error types in the `profane-core` library.
///
/// Marked `#[non_exhaustive]` so new variants can be added without breaking
/// downstream matches.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ProfaneError {
    /// The alternation over the word set could not be compiled. Words are
    /// always escaped, so in practice this means the regex size limit was hit.
    #[error("Failed to compile matcher over {0} word(s): {1}")]
    MatcherCompilation(usize, regex::Error),

    #[error("Failed to read word list '{}': {source}", .path.display())]
    WordListIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
