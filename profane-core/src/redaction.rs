//! redaction.rs - Redaction policies and the per-match rewrites behind them.
//!
//! Each function here receives one matched span (already normalized) and
//! returns its replacement. [`ProfanityFilter`](crate::ProfanityFilter) wires
//! them to the compiled matcher.
//!
//! License: MIT OR APACHE 2.0

use serde::{Deserialize, Serialize};

/// Fixed replacement used by [`Redaction::Garbled`].
pub const GARBLED: &str = "$@!#%";

/// Replacement used by [`Redaction::Custom`] when a config does not name one.
pub const DEFAULT_CUSTOM_REPLACEMENT: &str = "[CENSORED]";

/// How matched words are rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Redaction {
    /// Every match becomes [`GARBLED`].
    Garbled,
    /// Interior characters become `*`; see [`star_out`].
    #[default]
    Stars,
    /// Each run of vowels becomes one `*`; see [`mask_vowels`].
    Vowels,
    /// Every match becomes the given string, verbatim.
    Custom(String),
}

impl Redaction {
    /// Rewrites a single matched span under this policy.
    pub fn apply(&self, matched: &str) -> String {
        match self {
            Redaction::Garbled => garble(matched),
            Redaction::Stars => star_out(matched),
            Redaction::Vowels => mask_vowels(matched),
            Redaction::Custom(replacement) => replacement.clone(),
        }
    }
}

/// Serializable selector for a [`Redaction`], as written in config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RedactionStyle {
    Garbled,
    #[default]
    Stars,
    Vowels,
    Custom,
}

impl RedactionStyle {
    /// Resolves the style into a policy; `replace_with` is only read for `Custom`.
    pub fn into_redaction(self, replace_with: &str) -> Redaction {
        match self {
            RedactionStyle::Garbled => Redaction::Garbled,
            RedactionStyle::Stars => Redaction::Stars,
            RedactionStyle::Vowels => Redaction::Vowels,
            RedactionStyle::Custom => Redaction::Custom(replace_with.to_string()),
        }
    }
}

pub fn garble(_matched: &str) -> String {
    GARBLED.to_string()
}

/// Keeps the first and last character and stars the rest. Spans shorter than
/// three characters are starred completely. Length is counted in characters.
pub fn star_out(matched: &str) -> String {
    let len = matched.chars().count();
    if len < 3 {
        return "*".repeat(len);
    }
    let mut chars = matched.chars();
    let (Some(head), Some(tail)) = (chars.next(), chars.next_back()) else {
        return "*".repeat(len);
    };
    let mut out = String::with_capacity(matched.len());
    out.push(head);
    out.push_str(&"*".repeat(len - 2));
    out.push(tail);
    out
}

fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Collapses every maximal run of vowels into a single `*`.
pub fn mask_vowels(matched: &str) -> String {
    let mut out = String::with_capacity(matched.len());
    let mut in_run = false;
    for c in matched.chars() {
        if is_vowel(c) {
            if !in_run {
                out.push('*');
                in_run = true;
            }
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_out_short_spans() {
        assert_eq!(star_out(""), "");
        assert_eq!(star_out("a"), "*");
        assert_eq!(star_out("ab"), "**");
    }

    #[test]
    fn test_star_out_keeps_ends() {
        assert_eq!(star_out("six"), "s*x");
        assert_eq!(star_out("HELLO"), "H***O");
    }

    #[test]
    fn test_star_out_counts_chars() {
        let out = star_out("déjà");
        assert_eq!(out, "d**à");
        assert_eq!(out.chars().count(), 4);
    }

    #[test]
    fn test_mask_vowels_collapses_runs() {
        assert_eq!(mask_vowels("hello"), "h*ll*");
        assert_eq!(mask_vowels("HELLO"), "H*LL*");
        assert_eq!(mask_vowels("queue"), "q*");
        assert_eq!(mask_vowels("rhythm"), "rhythm");
        assert_eq!(mask_vowels("a-b"), "*-b");
    }

    #[test]
    fn test_apply_dispatch() {
        assert_eq!(Redaction::Garbled.apply("hello"), GARBLED);
        assert_eq!(Redaction::Stars.apply("hello"), "h***o");
        assert_eq!(Redaction::Vowels.apply("hello"), "h*ll*");
        assert_eq!(Redaction::Custom("[X]".into()).apply("hello"), "[X]");
    }

    #[test]
    fn test_style_into_redaction() {
        assert_eq!(
            RedactionStyle::Custom.into_redaction("[BEEP]"),
            Redaction::Custom("[BEEP]".into())
        );
        assert_eq!(
            RedactionStyle::Vowels.into_redaction("ignored"),
            Redaction::Vowels
        );
        assert_eq!(Redaction::default(), Redaction::Stars);
        assert_eq!(RedactionStyle::default(), RedactionStyle::Stars);
    }
}
