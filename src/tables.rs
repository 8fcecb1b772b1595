//! Static Unicode table access.
//!
//! All segmentation, unification, and pattern generation run against an
//! explicit [`UnicodeTables`] context instead of process globals, so callers
//! can hold several independent table sets (for example, different Unicode
//! versions) side by side. The bundled data lives in the machine-generated
//! `unicode_data` module.

use crate::unify::FoldKind;
use crate::unicode_data;

/// Zero-width joiner, used by grapheme rules GB9/GB11.
pub(crate) const ZWJ: char = '\u{200D}';

/// First and last Hangul syllable code points (U+AC00..=U+D7A3).
pub(crate) const HANGUL_S_BASE: u32 = 0xAC00;
pub(crate) const HANGUL_S_LAST: u32 = 0xD7A3;
const HANGUL_T_COUNT: u32 = 28;

/// Grapheme_Cluster_Break value of a single code point, as used by the
/// segmenter. Incb properties overlap these classes and are exposed as
/// separate predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GraphemeClass {
    Cr,
    Lf,
    Control,
    Extend,
    SpacingMark,
    Prepend,
    Zwj,
    RegionalIndicator,
    HangulL,
    HangulV,
    HangulT,
    HangulLv,
    HangulLvt,
    Other,
}

/// One named code-point class, as a sorted list of inclusive ranges.
#[derive(Debug, Clone, Copy)]
pub struct ClassRanges(pub &'static [(u32, u32)]);

impl ClassRanges {
    pub(crate) fn contains(&self, c: char) -> bool {
        let cp = c as u32;
        self.0
            .binary_search_by(|&(lo, hi)| {
                if hi < cp {
                    std::cmp::Ordering::Less
                } else if lo > cp {
                    std::cmp::Ordering::Greater
                } else {
                    std::cmp::Ordering::Equal
                }
            })
            .is_ok()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.0.iter().copied()
    }
}

/// The raw derived data one table set is built from.
#[derive(Debug, Clone, Copy)]
pub struct TableData {
    pub control: ClassRanges,
    pub extend: ClassRanges,
    pub spacing_mark: ClassRanges,
    pub prepend: ClassRanges,
    pub hangul_l: ClassRanges,
    pub hangul_v: ClassRanges,
    pub hangul_t: ClassRanges,
    pub regional_indicator: ClassRanges,
    pub extended_pictographic: ClassRanges,
    pub incb_consonant: ClassRanges,
    pub incb_linker: ClassRanges,
    pub incb_extend: ClassRanges,
    /// Sorted by source code point; folded strings are fixed points.
    pub folds: &'static [(u32, FoldKind, &'static str)],
}

/// Table data generated from the bundled Unicode Character Database
/// snapshot.
pub static BUNDLED: TableData = TableData {
    control: ClassRanges(unicode_data::CONTROL),
    extend: ClassRanges(unicode_data::EXTEND),
    spacing_mark: ClassRanges(unicode_data::SPACING_MARK),
    prepend: ClassRanges(unicode_data::PREPEND),
    hangul_l: ClassRanges(unicode_data::HANGUL_L),
    hangul_v: ClassRanges(unicode_data::HANGUL_V),
    hangul_t: ClassRanges(unicode_data::HANGUL_T),
    regional_indicator: ClassRanges(unicode_data::REGIONAL_INDICATOR),
    extended_pictographic: ClassRanges(unicode_data::EXTENDED_PICTOGRAPHIC),
    incb_consonant: ClassRanges(unicode_data::INCB_CONSONANT),
    incb_linker: ClassRanges(unicode_data::INCB_LINKER),
    incb_extend: ClassRanges(unicode_data::INCB_EXTEND),
    folds: unicode_data::FOLD_TABLE,
};

/// Immutable lookup context shared by the segmenter, the unifier, and the
/// pattern transformer. Cheap to copy around by reference; all methods are
/// pure and safe to call concurrently.
#[derive(Debug, Clone, Copy)]
pub struct UnicodeTables {
    data: &'static TableData,
}

impl UnicodeTables {
    pub fn new(data: &'static TableData) -> Self {
        Self { data }
    }

    /// The table set over the bundled Unicode data.
    pub fn bundled() -> Self {
        Self::new(&BUNDLED)
    }

    pub(crate) fn data(&self) -> &'static TableData {
        self.data
    }

    pub(crate) fn class(&self, c: char) -> GraphemeClass {
        match c {
            '\r' => return GraphemeClass::Cr,
            '\n' => return GraphemeClass::Lf,
            ZWJ => return GraphemeClass::Zwj,
            _ => {}
        }
        let d = self.data;
        if let Some(kind) = hangul_syllable_class(c as u32) {
            return kind;
        }
        if d.control.contains(c) {
            GraphemeClass::Control
        } else if d.extend.contains(c) {
            GraphemeClass::Extend
        } else if d.spacing_mark.contains(c) {
            GraphemeClass::SpacingMark
        } else if d.prepend.contains(c) {
            GraphemeClass::Prepend
        } else if d.regional_indicator.contains(c) {
            GraphemeClass::RegionalIndicator
        } else if d.hangul_l.contains(c) {
            GraphemeClass::HangulL
        } else if d.hangul_v.contains(c) {
            GraphemeClass::HangulV
        } else if d.hangul_t.contains(c) {
            GraphemeClass::HangulT
        } else {
            GraphemeClass::Other
        }
    }

    pub(crate) fn is_extended_pictographic(&self, c: char) -> bool {
        self.data.extended_pictographic.contains(c)
    }

    pub(crate) fn is_incb_consonant(&self, c: char) -> bool {
        self.data.incb_consonant.contains(c)
    }

    pub(crate) fn is_incb_linker(&self, c: char) -> bool {
        self.data.incb_linker.contains(c)
    }

    pub(crate) fn is_incb_extend(&self, c: char) -> bool {
        self.data.incb_extend.contains(c)
    }

    /// Fold-table lookup for a single code point. Hangul syllables are
    /// decomposed arithmetically and have no table entries.
    pub(crate) fn fold_of(&self, c: char) -> Option<(FoldKind, &'static str)> {
        let cp = c as u32;
        self.data
            .folds
            .binary_search_by_key(&cp, |&(source, _, _)| source)
            .ok()
            .map(|idx| {
                let (_, kind, folded) = self.data.folds[idx];
                (kind, folded)
            })
    }
}

/// LV/LVT classification of a precomposed Hangul syllable; LV syllables sit
/// at multiples of the trailing-jamo count within the block.
fn hangul_syllable_class(cp: u32) -> Option<GraphemeClass> {
    if !(HANGUL_S_BASE..=HANGUL_S_LAST).contains(&cp) {
        return None;
    }
    if (cp - HANGUL_S_BASE) % HANGUL_T_COUNT == 0 {
        Some(GraphemeClass::HangulLv)
    } else {
        Some(GraphemeClass::HangulLvt)
    }
}

/// Decomposes a precomposed Hangul syllable into its jamo sequence
/// (L V, or L V T), per the arithmetic of UAX #15 section "Hangul".
pub(crate) fn decompose_hangul(cp: u32) -> Option<String> {
    const L_BASE: u32 = 0x1100;
    const V_BASE: u32 = 0x1161;
    const T_BASE: u32 = 0x11A7;
    const V_COUNT: u32 = 21;

    if !(HANGUL_S_BASE..=HANGUL_S_LAST).contains(&cp) {
        return None;
    }
    let index = cp - HANGUL_S_BASE;
    let l = L_BASE + index / (V_COUNT * HANGUL_T_COUNT);
    let v = V_BASE + (index % (V_COUNT * HANGUL_T_COUNT)) / HANGUL_T_COUNT;
    let t = index % HANGUL_T_COUNT;
    let mut out = String::with_capacity(9);
    // Jamo code points are all three bytes in UTF-8 and always valid chars.
    out.push(char::from_u32(l)?);
    out.push(char::from_u32(v)?);
    if t != 0 {
        out.push(char::from_u32(T_BASE + t)?);
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_lookup_basics() {
        let t = UnicodeTables::bundled();
        assert_eq!(t.class('\r'), GraphemeClass::Cr);
        assert_eq!(t.class('\n'), GraphemeClass::Lf);
        assert_eq!(t.class('\u{0}'), GraphemeClass::Control);
        assert_eq!(t.class('\u{301}'), GraphemeClass::Extend);
        assert_eq!(t.class('a'), GraphemeClass::Other);
        assert_eq!(t.class('\u{200D}'), GraphemeClass::Zwj);
        assert_eq!(t.class('\u{1F1E8}'), GraphemeClass::RegionalIndicator);
        assert_eq!(t.class('\u{1100}'), GraphemeClass::HangulL);
        assert_eq!(t.class('\u{1161}'), GraphemeClass::HangulV);
        assert_eq!(t.class('\u{11A8}'), GraphemeClass::HangulT);
        // U+AC00 (가) has no trailing jamo, U+AC01 (각) has one.
        assert_eq!(t.class('\u{AC00}'), GraphemeClass::HangulLv);
        assert_eq!(t.class('\u{AC01}'), GraphemeClass::HangulLvt);
    }

    #[test]
    fn incb_predicates() {
        let t = UnicodeTables::bundled();
        // Devanagari KA is a conjunct consonant, virama is the linker.
        assert!(t.is_incb_consonant('\u{915}'));
        assert!(t.is_incb_linker('\u{94D}'));
        assert!(!t.is_incb_consonant('a'));
    }

    #[test]
    fn hangul_decomposition_arithmetic() {
        assert_eq!(decompose_hangul(0xAC00).unwrap(), "\u{1100}\u{1161}");
        assert_eq!(decompose_hangul(0xAC01).unwrap(), "\u{1100}\u{1161}\u{11A8}");
        assert_eq!(decompose_hangul(0xD7A3).unwrap(), "\u{1112}\u{1175}\u{11C2}");
        assert_eq!(decompose_hangul(0x41), None);
    }

    #[test]
    fn fold_lookup_hits_and_misses() {
        let t = UnicodeTables::bundled();
        let (kind, folded) = t.fold_of('\u{E9}').unwrap();
        assert_eq!(kind, FoldKind::LetterMarks);
        assert_eq!(folded, "e");
        assert!(t.fold_of('a').is_none());
        assert!(t.fold_of('\u{AC00}').is_none());
    }
}
