// profane-core/src/lib.rs
//! # profane Core Library
//!
//! `profane-core` detects and censors forbidden words in text. A word list is
//! compiled into a single case-insensitive, whole-word matcher; query text is
//! normalized through a fixed leetspeak table first, so `h3ll0` is caught by
//! the word `hello`.
//!
//! ## Modules
//!
//! * `normalizer`: The substitution table and the canonicalization functions.
//! * `word_set`: The deduplicated set of canonical words.
//! * `matcher`: Compiles a word set into a longest-first, word-bounded alternation.
//! * `filter`: [`ProfanityFilter`], the engine tying the word set and matcher together.
//! * `redaction`: Redaction policies and the per-match rewrites.
//! * `profanity_match`: Match reporting and log masking.
//! * `word_list`: Reading line-delimited word lists.
//! * `config`: YAML configuration for building filters.
//! * `shared`: [`SharedFilter`], a thread-safe handle for concurrent use.
//! * `oneshot`: A one-call helper for censoring a single string.
//!
//! ## Usage Example
//!
//! ```rust
//! use profane_core::ProfanityFilter;
//!
//! # fn main() -> Result<(), profane_core::ProfaneError> {
//! let mut filter = ProfanityFilter::new(["hello"])?;
//! filter.add(["six"])?;
//!
//! assert!(filter.is_match("H3LL0 world"));
//! assert!(!filter.is_match("hellos"));
//!
//! assert_eq!(filter.replace_garbled("hello world"), "$@!#% world");
//! assert_eq!(filter.replace_stars("six"), "s*x");
//! assert_eq!(filter.replace_vowels("H3LL0"), "H*LL*");
//! assert_eq!(filter.replace_custom("h3ll0 world", "[CENSORED]"), "[CENSORED] world");
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Engine operations return [`ProfaneError`]. Configuration loading uses
//! `anyhow::Result` with context attached.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod errors;
pub mod filter;
pub mod matcher;
pub mod normalizer;
pub mod oneshot;
pub mod profanity_match;
pub mod redaction;
pub mod shared;
pub mod word_list;
pub mod word_set;

/// Re-exports the configuration types and functions.
pub use config::{merge_configs, FilterConfig};

/// Re-exports the custom error type for clear error reporting.
pub use errors::ProfaneError;

/// Re-exports the engine and its building blocks.
pub use filter::ProfanityFilter;
pub use matcher::{Matcher, MATCHER_SIZE_LIMIT};
pub use normalizer::{canonical_word, normalize, SUBSTITUTIONS};
pub use word_set::WordSet;

/// Re-exports redaction policies and the per-match rewrites.
pub use redaction::{
    garble, mask_vowels, star_out, Redaction, RedactionStyle, DEFAULT_CUSTOM_REPLACEMENT, GARBLED,
};

/// Re-exports match reporting types.
pub use profanity_match::{mask_for_log, ProfanityMatch};

pub use oneshot::censor_string;
pub use shared::SharedFilter;
pub use word_list::{load_word_list, parse_word_list};
