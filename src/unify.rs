//! Canonical folding of grapheme clusters.
//!
//! Unification maps visually or orthographically equivalent character
//! sequences to one comparable form so that a query typed one way matches a
//! document written another way: precomposed vs. decomposed accents,
//! half-width and enclosed forms, compatibility ideographs, and so on.
//!
//! Folding is directional for kana: the precomposed voiced form (ガ) folds
//! to the base kana plus the combining voicing mark (カ U+3099), never the
//! reverse, so the decomposed form is the fixed point.
//!
//! Regional-indicator pairs are never folded to their Latin letters; a
//! folded 🇨🇦 would produce spurious substring hits against every "CA" in
//! the document.

use std::borrow::Cow;

use crate::grapheme;
use crate::tables::{self, GraphemeClass, UnicodeTables};
use unicode_normalization::UnicodeNormalization;

/// Shape classification of a fold-table entry, assigned when the table is
/// generated. The folded string is precomputed to its fixed point, so at
/// run time the kind is informational (tests and tooling read it).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoldKind {
    /// Single code point substitution (half-width forms, compatibility
    /// ideographs, enclosed alphanumerics, ...).
    Simple,
    /// Precomposed voiced/semi-voiced kana; folds to the decomposed form.
    KanaVoiced,
    /// Letter followed by combining marks; folds to the bare letter.
    LetterMarks,
    /// Letter plus middle dot (U+00B7); folds to the letter.
    MiddleDot,
    /// Degree sign plus letter; folds to the letter.
    DegreeLetter,
    /// Modifier letter/apostrophe plus letter; folds to the letter.
    ModifierLetter,
    /// Multi-code-point compatibility decomposition; folds to its first
    /// element, recursively.
    Complex,
}

const VOICING_MARKS: [char; 2] = ['\u{3099}', '\u{309A}'];

fn is_kana(c: char) -> bool {
    let cp = c as u32;
    (0x3041..=0x3096).contains(&cp)
        || (0x309D..=0x309F).contains(&cp)
        || (0x30A1..=0x30FA).contains(&cp)
        || (0x30FC..=0x30FF).contains(&cp)
        || (0xFF66..=0xFF9D).contains(&cp)
}

/// Folds one grapheme cluster to its unified form.
///
/// The lookup ladder tries the NFKC form, then the NFC form, then the raw
/// cluster against the fold table; Hangul syllables decompose
/// arithmetically; multi-code-point clusters without a table entry fall
/// back to structural core extraction. Total over all valid input.
pub fn unify_grapheme<'a>(tables: &UnicodeTables, cluster: &'a str) -> Cow<'a, str> {
    if cluster.is_empty() {
        return Cow::Borrowed(cluster);
    }

    if let Some(folded) = lookup_normalized(tables, cluster) {
        return folded;
    }

    let mut chars = cluster.chars();
    let Some(first) = chars.next() else {
        return Cow::Borrowed(cluster);
    };
    if chars.next().is_none() {
        // Single code point with no table entry and no Hangul decomposition.
        return Cow::Borrowed(cluster);
    }

    extract_core(tables, cluster, first)
}

/// Unifies a whole string grapheme cluster by grapheme cluster.
pub fn unify_string(tables: &UnicodeTables, text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for g in grapheme::segment(tables, text) {
        out.push_str(&unify_grapheme(tables, g.text));
    }
    out
}

/// Table/Hangul lookup of `key` after normalizing, when the normalized form
/// is a single code point.
fn lookup_normalized<'a>(tables: &UnicodeTables, cluster: &'a str) -> Option<Cow<'a, str>> {
    if let Some(folded) = lookup_single(tables, cluster.chars().nfkc()) {
        return Some(folded);
    }
    if let Some(folded) = lookup_single(tables, cluster.chars().nfc()) {
        return Some(folded);
    }
    let mut raw = cluster.chars();
    let first = raw.next()?;
    if raw.next().is_none() {
        return lookup_char(tables, first);
    }
    None
}

fn lookup_single<'a>(
    tables: &UnicodeTables,
    mut normalized: impl Iterator<Item = char>,
) -> Option<Cow<'a, str>> {
    let first = normalized.next()?;
    if normalized.next().is_some() {
        return None;
    }
    lookup_char(tables, first)
}

fn lookup_char<'a>(tables: &UnicodeTables, c: char) -> Option<Cow<'a, str>> {
    if let Some(jamo) = tables::decompose_hangul(c as u32) {
        return Some(Cow::Owned(jamo));
    }
    tables
        .fold_of(c)
        .map(|(_, folded)| Cow::Owned(folded.to_string()))
}

/// Structural fallback for multi-code-point clusters with no table entry:
/// reduce the cluster to its semantically core code point, except for the
/// shapes that are deliberate fixed points.
fn extract_core<'a>(tables: &UnicodeTables, cluster: &'a str, first: char) -> Cow<'a, str> {
    let chars: Vec<char> = cluster.chars().collect();

    // Regional-indicator pairs stay as flags.
    if chars
        .iter()
        .all(|&c| tables.class(c) == GraphemeClass::RegionalIndicator)
    {
        return Cow::Borrowed(cluster);
    }

    // Kana with combining voicing marks is the canonical decomposed form.
    if is_kana(first) && chars[1..].iter().all(|c| VOICING_MARKS.contains(c)) {
        return Cow::Borrowed(cluster);
    }

    // A cluster of nothing but combining marks carries no base letter.
    if chars.iter().all(|&c| is_mark_class(tables, c)) {
        return Cow::Borrowed(cluster);
    }

    // Emoji ZWJ sequences reduce to their leading pictograph.
    if tables.is_extended_pictographic(first) {
        return fold_core_char(tables, first);
    }

    // Letter plus trailing marks reduces to the letter; a mark-led cluster
    // (reversed order) reduces to its first non-mark code point.
    let core = if is_mark_class(tables, first) {
        match chars.iter().copied().find(|&c| !is_mark_class(tables, c)) {
            Some(c) => c,
            None => return Cow::Borrowed(cluster),
        }
    } else if chars[1..].iter().all(|&c| is_mark_class(tables, c)) {
        first
    } else {
        // No recognized shape (degenerate mixed cluster): keep it.
        return Cow::Borrowed(cluster);
    };
    fold_core_char(tables, core)
}

fn is_mark_class(tables: &UnicodeTables, c: char) -> bool {
    matches!(
        tables.class(c),
        GraphemeClass::Extend | GraphemeClass::SpacingMark | GraphemeClass::Zwj
    )
}

fn fold_core_char<'a>(tables: &UnicodeTables, core: char) -> Cow<'a, str> {
    match lookup_char(tables, core) {
        Some(folded) => folded,
        None => Cow::Owned(core.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unify(s: &str) -> String {
        unify_string(&UnicodeTables::bundled(), s)
    }

    #[test]
    fn precomposed_and_decomposed_accents_agree() {
        assert_eq!(unify("\u{E9}"), "e");
        assert_eq!(unify("e\u{301}"), "e");
        assert_eq!(unify("caf\u{E9}"), "cafe");
    }

    #[test]
    fn kana_voicing_folds_toward_decomposed() {
        assert_eq!(unify("\u{30AC}"), "\u{30AB}\u{3099}");
        assert_eq!(unify("\u{30AB}\u{3099}"), "\u{30AB}\u{3099}");
        // Semi-voiced: パ folds to ハ + U+309A.
        assert_eq!(unify("\u{30D1}"), "\u{30CF}\u{309A}");
    }

    #[test]
    fn voiced_kana_without_precomposed_form_is_kept() {
        // あ゙ has no precomposed code point; the cluster is a fixed point.
        assert_eq!(unify("\u{3042}\u{3099}"), "\u{3042}\u{3099}");
    }

    #[test]
    fn hangul_syllable_decomposes_to_jamo_only() {
        assert_eq!(unify("\u{AC00}"), "\u{1100}\u{1161}");
        assert_eq!(unify("\u{1100}\u{1161}"), "\u{1100}\u{1161}");
    }

    #[test]
    fn regional_indicator_pairs_do_not_fold() {
        let flag = "\u{1F1E8}\u{1F1E6}";
        assert_eq!(unify(flag), flag);
    }

    #[test]
    fn emoji_zwj_sequence_folds_to_first_pictograph() {
        let seq = "\u{1F469}\u{200D}\u{1F3EB}";
        assert_eq!(unify(seq), "\u{1F469}");
    }

    #[test]
    fn enclosed_and_width_variants_fold() {
        assert_eq!(unify("\u{2460}"), "1");
        assert_eq!(unify("\u{FF21}"), "A");
        assert_eq!(unify("\u{FF76}"), "\u{30AB}");
        assert_eq!(unify("\u{2103}"), "C");
    }

    #[test]
    fn combining_mark_only_cluster_is_kept() {
        assert_eq!(unify_grapheme(&UnicodeTables::bundled(), "\u{301}"), "\u{301}");
    }

    #[test]
    fn unification_is_idempotent_on_samples() {
        let samples = [
            "o\u{FC}ter paragraph #1",
            "\u{30AC}\u{30AE}\u{30B0}",
            "\u{AC00}\u{AC01}",
            "\u{1F1E8}\u{1F1E6} flags",
            "x\u{301}\u{302}",
            "\u{FF8A}\u{FF9F}",
        ];
        for s in samples {
            let once = unify(s);
            assert_eq!(unify(&once), once, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn letter_with_unencoded_marks_reduces_to_letter() {
        // x + combining acute has no precomposed form.
        assert_eq!(unify("x\u{301}"), "x");
    }
}
