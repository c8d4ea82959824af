//! normalizer.rs - Leetspeak folding applied to words and query text.
//!
//! Both the word list and every piece of text scanned by a
//! [`ProfanityFilter`](crate::ProfanityFilter) go through [`normalize`], so an
//! obfuscated spelling such as `h3ll0` lands on the same canonical form as
//! `hello` before the matcher ever sees it.
//!
//! License: MIT OR APACHE 2.0

/// Fixed obfuscation table: each key character is replaced by its value.
///
/// Every key is a single character, so one left-to-right pass is enough and a
/// replacement is never rescanned. The period becomes an escaped literal period.
pub const SUBSTITUTIONS: [(char, &str); 12] = [
    ('0', "o"),
    ('1', "i"),
    ('2', "z"),
    ('3', "e"),
    ('4', "a"),
    ('5', "s"),
    ('6', "b"),
    ('7', "t"),
    ('8', "b"),
    ('9', "g"),
    ('@', "a"),
    ('.', r"\."),
];

fn substitute(c: char) -> Option<&'static str> {
    SUBSTITUTIONS
        .iter()
        .find(|(from, _)| *from == c)
        .map(|(_, to)| *to)
}

/// Applies [`SUBSTITUTIONS`] to `text` in a single pass.
///
/// Case is preserved; every character not in the table is copied through.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match substitute(c) {
            Some(replacement) => out.push_str(replacement),
            None => out.push(c),
        }
    }
    out
}

/// Canonical form of a single word: lowercased, trimmed, then normalized.
pub fn canonical_word(raw: &str) -> String {
    normalize(raw.to_lowercase().trim())
}
