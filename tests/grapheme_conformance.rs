//! Segmentation conformance against the official UAX #29 break test.
//!
//! `data/GraphemeBreakTest.txt` is the unmodified GraphemeBreakTest file
//! from the Unicode Character Database snapshot the bundled tables were
//! generated from. Every test line is parsed and checked; the second fixture
//! table adds longer mixed-script sequences the pairwise official lines do
//! not cover.

use unifind::{segment, UnicodeTables};

static BREAK_TEST: &str = include_str!("data/GraphemeBreakTest.txt");

/// One parsed test line: the input string and its expected clusters.
struct BreakCase {
    line: usize,
    input: String,
    clusters: Vec<String>,
}

/// Parses the `÷ XXXX × XXXX ÷` line format, one case per non-comment line.
fn official_cases() -> Vec<BreakCase> {
    let mut cases = Vec::new();
    for (idx, raw) in BREAK_TEST.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        let mut input = String::new();
        let mut clusters = Vec::new();
        let mut current = String::new();
        for token in line.split_whitespace() {
            match token {
                "÷" => {
                    if !current.is_empty() {
                        clusters.push(std::mem::take(&mut current));
                    }
                }
                "×" => {}
                hex => {
                    let cp = u32::from_str_radix(hex, 16)
                        .unwrap_or_else(|_| panic!("bad token {hex:?} on line {}", idx + 1));
                    let c = char::from_u32(cp)
                        .unwrap_or_else(|| panic!("bad code point {cp:X} on line {}", idx + 1));
                    current.push(c);
                    input.push(c);
                }
            }
        }
        assert!(current.is_empty(), "line {} does not end in ÷", idx + 1);
        cases.push(BreakCase {
            line: idx + 1,
            input,
            clusters,
        });
    }
    assert!(cases.len() > 1000, "break test file looks truncated");
    cases
}

#[rustfmt::skip]
static MIXED_CASES: &[(&str, &[&str])] = &[
    (
        "",
        &[],
    ),
    (
        "a\u{D}\u{A}\u{D}b\u{A}\u{A}",
        &["a", "\u{D}\u{A}", "\u{D}", "b", "\u{A}", "\u{A}"],
    ),
    (
        "e\u{301}\u{302} x\u{308}",
        &["e\u{301}\u{302}", " ", "x\u{308}"],
    ),
    (
        "\u{304B}\u{3099}\u{304D}\u{309A}",
        &["\u{304B}\u{3099}", "\u{304D}\u{309A}"],
    ),
    (
        "\u{1100}\u{1161}\u{11A8}\u{1100}\u{1100}\u{1161}",
        &["\u{1100}\u{1161}\u{11A8}", "\u{1100}\u{1100}\u{1161}"],
    ),
    (
        "\u{AC00}\u{1161}\u{AC01}\u{1161}",
        &["\u{AC00}\u{1161}", "\u{AC01}", "\u{1161}"],
    ),
    (
        "\u{1F1E8}\u{1F1E6}\u{1F1EF}\u{1F1F5}\u{1F1E8}",
        &["\u{1F1E8}\u{1F1E6}", "\u{1F1EF}\u{1F1F5}", "\u{1F1E8}"],
    ),
    (
        "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}\u{200D}\u{1F466}",
        &["\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}\u{200D}\u{1F466}"],
    ),
    (
        "\u{1F469}\u{1F3FD}\u{200D}\u{1F692}x",
        &["\u{1F469}\u{1F3FD}\u{200D}\u{1F692}", "x"],
    ),
    (
        "\u{915}\u{94D}\u{915}\u{93F}",
        &["\u{915}\u{94D}\u{915}\u{93F}"],
    ),
    (
        "\u{915}\u{94D}\u{200D}\u{915}",
        &["\u{915}\u{94D}\u{200D}\u{915}"],
    ),
    (
        "\u{600}123",
        &["\u{600}1", "2", "3"],
    ),
    (
        "a\u{301}\u{D}\u{A}\u{AC00}\u{1F1E8}\u{1F1E6}\u{915}\u{94D}\u{915} \u{304C}",
        &["a\u{301}", "\u{D}\u{A}", "\u{AC00}", "\u{1F1E8}\u{1F1E6}", "\u{915}\u{94D}\u{915}", " ", "\u{304C}"],
    ),
    (
        "\u{A9}\u{FE0F}!",
        &["\u{A9}\u{FE0F}", "!"],
    ),
];

#[test]
fn every_official_break_test_line_passes() {
    let tables = UnicodeTables::bundled();
    for case in official_cases() {
        let clusters: Vec<&str> = segment(&tables, &case.input).map(|g| g.text).collect();
        assert_eq!(
            clusters, case.clusters,
            "GraphemeBreakTest.txt line {}",
            case.line
        );
    }
}

#[test]
fn mixed_sequences_segment_as_expected() {
    let tables = UnicodeTables::bundled();
    for (input, expected) in MIXED_CASES {
        let clusters: Vec<&str> = segment(&tables, input).map(|g| g.text).collect();
        assert_eq!(&clusters, expected, "input {input:?}");
    }
}

#[test]
fn offsets_are_monotone_and_exhaustive() {
    let tables = UnicodeTables::bundled();
    let mut inputs: Vec<String> = official_cases().into_iter().map(|c| c.input).collect();
    inputs.extend(MIXED_CASES.iter().map(|(input, _)| input.to_string()));
    for input in inputs {
        let mut expected_offset = 0;
        for grapheme in segment(&tables, &input) {
            assert_eq!(grapheme.offset, expected_offset, "input {input:?}");
            assert!(!grapheme.text.is_empty());
            expected_offset += grapheme.text.len();
        }
        assert_eq!(expected_offset, input.len(), "input {input:?}");
    }
}
