// profane-core/tests/match_report_tests.rs
use anyhow::Result;
use test_log::test;

use profane_core::{ProfanityFilter, ProfanityMatch, Redaction, SharedFilter};

#[test]
fn test_find_matches_serializes() -> Result<()> {
    let filter = ProfanityFilter::new(["six"])?;
    let found = filter.find_matches_with("one SIX two", &Redaction::Garbled);
    assert_eq!(found.len(), 1);

    let json = serde_json::to_value(&found[0])?;
    assert_eq!(json["matched"], "SIX");
    assert_eq!(json["start"], 4);
    assert_eq!(json["end"], 7);
    assert_eq!(json["replacement"], "$@!#%");

    let back: ProfanityMatch = serde_json::from_value(json)?;
    assert_eq!(back, found[0]);
    Ok(())
}

#[test]
fn test_find_matches_on_normalized_offsets() -> Result<()> {
    let filter = ProfanityFilter::new(["hello"])?;
    // "x.y" normalizes to "x\.y", shifting later offsets by one byte.
    let found = filter.find_matches("x.y h3ll0");
    assert_eq!(found.len(), 1);
    assert_eq!((found[0].start, found[0].end), (5, 10));
    assert_eq!(found[0].len(), 5);
    Ok(())
}

#[test]
fn test_shared_filter_round_trip() -> Result<()> {
    let shared = SharedFilter::from(ProfanityFilter::new(["hello"])?);
    shared.add(["six"])?;
    assert!(shared.is_match("SIX"));
    assert_eq!(shared.censor("hello six", &Redaction::Vowels), "h*ll* s*x");
    let snapshot = shared.snapshot();
    assert_eq!(snapshot.word_count(), 2);
    Ok(())
}
