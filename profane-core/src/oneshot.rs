// profane-core/src/oneshot.rs
//! Convenience wrapper for one-shot censoring: build a filter from a config,
//! apply its configured redaction to a string, and throw the filter away.
//!
//! Callers censoring many strings should build a
//! [`ProfanityFilter`](crate::ProfanityFilter) once and reuse it instead.

use anyhow::Result;

use crate::config::FilterConfig;

/// Censors `content` with a filter built from `config`, using the config's
/// redaction policy.
pub fn censor_string(config: &FilterConfig, content: &str) -> Result<String> {
    let filter = config.build_filter()?;
    Ok(filter.censor(content, &config.redaction()))
}
