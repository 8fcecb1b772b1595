use proptest::collection::vec;
use proptest::prelude::*;
use proptest::test_runner::{TestCaseError, TestCaseResult};
use unifind::{segment, Finder, SearchMode, TransformOptions, UnicodeTables};

/// Small building blocks biased toward cluster-forming sequences.
fn unit_strategy() -> BoxedStrategy<String> {
    prop_oneof![
        "[a-z]{1,4}",
        Just(" ".to_string()),
        Just("\r\n".to_string()),
        Just("e\u{301}".to_string()),
        Just("x\u{308}\u{301}".to_string()),
        Just("\u{304B}\u{3099}".to_string()),
        Just("\u{30AB}\u{309A}".to_string()),
        Just("\u{AC00}".to_string()),
        Just("\u{1100}\u{1161}\u{11A8}".to_string()),
        Just("\u{1F1E8}\u{1F1E6}".to_string()),
        Just("\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F466}".to_string()),
        Just("\u{915}\u{94D}\u{915}".to_string()),
        Just("\u{600}1".to_string()),
        Just("\u{FF76}\u{FF9E}".to_string()),
        Just("\u{2460}".to_string()),
        Just("\u{3000}".to_string()),
    ]
    .boxed()
}

fn text_strategy() -> BoxedStrategy<String> {
    vec(unit_strategy(), 0..8).prop_map(|units| units.concat()).boxed()
}

fn check_round_trip(text: &str) -> TestCaseResult {
    let tables = UnicodeTables::bundled();
    let mut offset = 0;
    let mut joined = String::new();
    for grapheme in segment(&tables, text) {
        prop_assert_eq!(grapheme.offset, offset);
        prop_assert!(!grapheme.text.is_empty());
        offset += grapheme.text.len();
        joined.push_str(grapheme.text);
    }
    prop_assert_eq!(joined, text);
    Ok(())
}

fn check_unify_idempotent(text: &str) -> TestCaseResult {
    let finder = Finder::new();
    let once = finder.unify(text);
    let twice = finder.unify(&once);
    prop_assert_eq!(&twice, &once, "input {:?}", text);
    Ok(())
}

fn check_literal_self_match(query: &str) -> TestCaseResult {
    let finder = Finder::new();
    let re = finder
        .compile(query, None, &TransformOptions::default())
        .map_err(|e| TestCaseError::fail(format!("compile failed for {query:?}: {e}")))?;
    let unified = finder.unify(query);
    prop_assert!(
        re.is_match(&unified).unwrap_or(false),
        "pattern {:?} missed its own source {:?}",
        re.as_str(),
        unified
    );
    Ok(())
}

proptest! {
    #[test]
    fn segmentation_round_trips(text in text_strategy()) {
        check_round_trip(&text)?;
    }

    #[test]
    fn unification_is_idempotent(text in text_strategy()) {
        check_unify_idempotent(&text)?;
    }

    #[test]
    fn literal_transform_matches_its_own_text(query in text_strategy()) {
        check_literal_self_match(&query)?;
    }

    #[test]
    fn migemo_fragments_always_compile(word in "[a-z]{1,8}") {
        let finder = Finder::new();
        let options = TransformOptions {
            mode: SearchMode::Migemo,
            ..Default::default()
        };
        let re = finder.compile(&word, None, &options);
        prop_assert!(re.is_ok(), "query {:?} failed: {:?}", word, re.err());
    }

    #[test]
    fn unified_text_never_grows_cluster_count(text in text_strategy()) {
        let tables = UnicodeTables::bundled();
        let finder = Finder::new();
        let unified = finder.unify(&text);
        let before = segment(&tables, &text).count();
        let after = segment(&tables, &unified).count();
        prop_assert!(after <= before, "{:?} -> {:?}", text, unified);
    }
}
