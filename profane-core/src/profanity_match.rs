// profane-core/src/profanity_match.rs
//! Data structures for reporting individual matches, plus helpers that keep
//! matched words out of debug logs unless explicitly allowed.

use log::debug;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Set `PROFANE_ALLOW_DEBUG_WORDS=true` to log matched words verbatim.
static WORDS_DEBUG_ALLOWED: Lazy<bool> = Lazy::new(|| {
    std::env::var("PROFANE_ALLOW_DEBUG_WORDS")
        .map(|s| s.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
});

/// A single match found in normalized text.
///
/// Offsets are byte offsets into the *normalized* text, which is also the
/// text every transform returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ProfanityMatch {
    /// The matched span as it appears in the normalized text.
    pub matched: String,
    pub start: usize,
    pub end: usize,
    /// What the span would be rewritten to, when a policy was applied.
    #[serde(default)]
    pub replacement: Option<String>,
}

impl ProfanityMatch {
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn mask_for_log(s: &str) -> String {
    format!("[MASKED: {} chars]", s.chars().count())
}

fn get_loggable_content(word: &str) -> String {
    if *WORDS_DEBUG_ALLOWED {
        word.to_string()
    } else {
        mask_for_log(word)
    }
}

pub fn log_match_debug(module_path: &str, m: &ProfanityMatch) {
    debug!(
        "{} Found match at {}..{}: '{}'",
        module_path,
        m.start,
        m.end,
        get_loggable_content(&m.matched)
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_for_log_hides_content() {
        assert_eq!(mask_for_log("hello"), "[MASKED: 5 chars]");
    }

    #[test]
    fn test_match_len() {
        let m = ProfanityMatch {
            matched: "six".into(),
            start: 4,
            end: 7,
            replacement: None,
        };
        assert_eq!(m.len(), 3);
        assert!(!m.is_empty());
    }

    #[test]
    fn test_match_len_with_inverted_offsets() -> Result<(), serde_json::Error> {
        let m: ProfanityMatch =
            serde_json::from_str(r#"{"matched": "six", "start": 7, "end": 4}"#)?;
        assert_eq!(m.len(), 0);
        assert!(m.is_empty());
        Ok(())
    }
}
