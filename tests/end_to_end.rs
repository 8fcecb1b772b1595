//! Full-pipeline scenarios: unify the document, transform the query,
//! compile, search.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use unifind::{
    CompactDictionary, CompactDictionaryBuilder, Finder, SearchMode, TransformOptions,
};

fn dictionary() -> CompactDictionary {
    let mut entries: BTreeMap<String, Vec<String>> = BTreeMap::new();
    entries.insert("きゃく".to_string(), vec!["客".to_string()]);
    entries.insert("きゅう".to_string(), vec!["九".to_string(), "球".to_string()]);
    entries.insert("きょう".to_string(), vec!["京".to_string(), "今日".to_string()]);
    entries.insert("けんさく".to_string(), vec!["検索".to_string()]);
    let (bytes, skipped) = CompactDictionaryBuilder::build(&entries);
    assert!(skipped.is_empty());
    CompactDictionary::from_bytes(&bytes).unwrap()
}

#[test]
fn accented_document_matches_a_plain_query() {
    let finder = Finder::new();
    let doc = finder.unify("The o\u{00FC}ter paragraph #1 wraps the inner one.");
    assert!(doc.contains("outer paragraph #1"));

    let re = finder
        .compile("outer", None, &TransformOptions::default())
        .unwrap();
    let hit = re.find(&doc).unwrap().expect("no match");
    assert_eq!(hit.as_str(), "outer");

    // Fullwidth query text lands on the same halfwidth document.
    let re = finder
        .compile("\u{FF03}\u{FF11}", None, &TransformOptions::default())
        .unwrap();
    assert!(re.is_match(&doc).unwrap());
}

#[test]
fn strict_mode_demands_the_exact_spelling() {
    let finder = Finder::new();
    let strict = TransformOptions {
        strict: true,
        ..Default::default()
    };
    let re = finder.compile("outer", None, &strict).unwrap();
    assert!(!re.is_match("The o\u{00FC}ter paragraph").unwrap());
    assert!(!re.is_match("The OUTER paragraph").unwrap());
    assert!(re.is_match("the outer paragraph").unwrap());
}

#[test]
fn migemo_completes_a_truncated_romaji_query() {
    let finder = Finder::with_dictionary(dictionary());
    let options = TransformOptions {
        mode: SearchMode::Migemo,
        ..Default::default()
    };
    let re = finder.compile("ky", None, &options).unwrap();
    for doc in ["客室", "九州", "京都", "きょう", "キュー", "kyabetsu"] {
        let doc = finder.unify(doc);
        assert!(re.is_match(&doc).unwrap(), "missed {doc:?}");
    }
    assert!(!re.is_match(&finder.unify("検索")).unwrap());

    let re = finder.compile("kensaku", None, &options).unwrap();
    assert!(re.is_match(&finder.unify("全文検索エンジン")).unwrap());
}

#[test]
fn dictionary_round_trips_through_the_binary_format() {
    let mut entries: BTreeMap<String, Vec<String>> = BTreeMap::new();
    entries.insert("あい".to_string(), vec!["愛".to_string(), "藍".to_string()]);
    entries.insert("あいさつ".to_string(), vec!["挨拶".to_string()]);
    entries.insert("じしょ".to_string(), vec!["辞書".to_string()]);
    entries.insert("げんき".to_string(), vec!["元気".to_string()]);
    let (bytes, skipped) = CompactDictionaryBuilder::build(&entries);
    assert!(skipped.is_empty());
    let dict = CompactDictionary::from_bytes(&bytes).unwrap();
    for (key, values) in &entries {
        let mut hits = dict.search(key);
        hits.sort();
        let mut expected = values.clone();
        expected.sort();
        assert_eq!(&hits, &expected, "key {key}");
    }
    let mut prefix_hits = dict.predictive_search("あい");
    prefix_hits.sort();
    assert_eq!(prefix_hits, ["愛", "挨拶", "藍"]);
}

#[test]
fn long_mark_runs_match_in_linear_time() {
    let finder = Finder::new();
    let options = TransformOptions {
        mode: SearchMode::Regex,
        extend_dot: true,
        ..Default::default()
    };
    let re = finder.compile("a.b", None, &options).unwrap();

    assert!(re.is_match("ax\u{308}\u{301}b").unwrap());

    let mut text = String::from("a");
    text.push('x');
    for _ in 0..2000 {
        text.push('\u{301}');
    }
    text.push('c');
    let started = Instant::now();
    assert!(!re.is_match(&text).unwrap());
    assert!(
        started.elapsed() < Duration::from_secs(5),
        "backtracking blowup: {:?}",
        started.elapsed()
    );
}
