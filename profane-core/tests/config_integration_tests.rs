// profane-core/tests/config_integration_tests.rs
use anyhow::Result;
use std::fs;
use std::io::Write;
use tempfile::{tempdir, NamedTempFile};
use test_log::test;

use profane_core::config::{merge_configs, FilterConfig};
use profane_core::{censor_string, Redaction, RedactionStyle};

#[test]
fn test_load_from_file() -> Result<()> {
    let yaml_content = r#"
words:
  - hello
  - "  SIX  "
exclude:
  - nothing
redaction: vowels
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;
    let config = FilterConfig::load_from_file(file.path())?;
    assert_eq!(config.words.len(), 2);
    assert_eq!(config.redaction, RedactionStyle::Vowels);
    assert_eq!(config.replace_with, "[CENSORED]");

    let filter = config.build_filter()?;
    assert_eq!(filter.words(), vec!["hello", "six"]);
    assert_eq!(filter.censor("HELLO six", &config.redaction()), "H*LL* s*x");
    Ok(())
}

#[test]
fn test_load_from_file_resolves_relative_word_lists() -> Result<()> {
    let dir = tempdir()?;
    fs::create_dir(dir.path().join("lists"))?;
    fs::write(dir.path().join("lists/en.txt"), "hello\n\nsix\r\n")?;
    fs::write(
        dir.path().join("profane.yaml"),
        "word_lists:\n  - lists/en.txt\nredaction: garbled\n",
    )?;

    let config = FilterConfig::load_from_file(dir.path().join("profane.yaml"))?;
    assert_eq!(config.word_lists, vec![dir.path().join("lists/en.txt")]);

    let filter = config.build_filter()?;
    assert_eq!(filter.len(), 2);
    assert_eq!(filter.censor("six hello", &config.redaction()), "$@!#% $@!#%");
    Ok(())
}

#[test]
fn test_missing_word_list_is_an_error() -> Result<()> {
    let config = FilterConfig::from_yaml_str("word_lists: [/no/such/list.txt]\n")?;
    let err = config.build_filter().unwrap_err();
    assert!(format!("{:#}", err).contains("/no/such/list.txt"));
    Ok(())
}

#[test]
fn test_load_from_file_invalid_yaml() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(b"words: [unterminated\n")?;
    assert!(FilterConfig::load_from_file(file.path()).is_err());
    Ok(())
}

#[test]
fn test_merge_then_build() -> Result<()> {
    let base = FilterConfig::from_yaml_str("words: [hello, six]\n")?;
    let user = FilterConfig::from_yaml_str(
        "words: [darn]\nexclude: [six]\nredaction: custom\nreplace_with: \"***\"\n",
    )?;
    let merged = merge_configs(base, Some(user));
    assert_eq!(merged.redaction(), Redaction::Custom("***".to_string()));

    let filter = merged.build_filter()?;
    assert!(filter.is_match("darn"));
    assert!(filter.is_match("hello"));
    assert!(!filter.is_match("six"));
    Ok(())
}

#[test]
fn test_censor_string_one_shot() -> Result<()> {
    let config = FilterConfig::from_yaml_str("words: [hello]\nredaction: stars\n")?;
    assert_eq!(censor_string(&config, "H3LL0 world")?, "H***o world");
    Ok(())
}
