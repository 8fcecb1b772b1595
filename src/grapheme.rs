//! Extended grapheme cluster segmentation and pattern generation.
//!
//! The segmenter partitions text into extended grapheme clusters following
//! the UAX #29 grammar (`CRLF | Control | precore* core postcore*`),
//! evaluated longest-match over the derived property tables. The same
//! grammar can be rendered as regular-expression source via
//! [`grapheme_pattern`] / [`core_pattern`], so a search pattern's `.` can be
//! made to match one user-perceived character instead of one code point.
//!
//! Every unbounded quantifier in the generated source is emitted in the
//! lookahead-captured-then-backreferenced form `(?=(?<g>X*))\k<g>`. A plain
//! greedy `X*` nested inside the cluster alternation backtracks
//! exponentially on long runs of combining marks; the capture/backreference
//! form commits to the greedy match and keeps matching linear.

use crate::tables::{GraphemeClass, HANGUL_S_BASE, UnicodeTables};

/// One segment of the input: the cluster text and its byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grapheme<'a> {
    pub offset: usize,
    pub text: &'a str,
}

/// Iterator over the extended grapheme clusters of a string.
///
/// Concatenating the `text` of every yielded item reconstructs the input
/// exactly. Restartable: `segment` may be called on any substring.
pub struct Graphemes<'a> {
    text: &'a str,
    chars: Vec<(usize, char, GraphemeClass)>,
    tables: UnicodeTables,
    pos: usize,
}

/// Segments `text` into extended grapheme clusters.
pub fn segment<'a>(tables: &UnicodeTables, text: &'a str) -> Graphemes<'a> {
    let chars = text
        .char_indices()
        .map(|(offset, c)| (offset, c, tables.class(c)))
        .collect();
    Graphemes {
        text,
        chars,
        tables: *tables,
        pos: 0,
    }
}

impl<'a> Iterator for Graphemes<'a> {
    type Item = Grapheme<'a>;

    fn next(&mut self) -> Option<Grapheme<'a>> {
        if self.pos >= self.chars.len() {
            return None;
        }
        let start = self.pos;
        let end = self.cluster_end(start);
        self.pos = end;
        let byte_start = self.chars[start].0;
        let byte_end = match self.chars.get(end) {
            Some(&(offset, _, _)) => offset,
            None => self.text.len(),
        };
        Some(Grapheme {
            offset: byte_start,
            text: &self.text[byte_start..byte_end],
        })
    }
}

impl Graphemes<'_> {
    fn class(&self, i: usize) -> Option<GraphemeClass> {
        self.chars.get(i).map(|&(_, _, class)| class)
    }

    fn char_at(&self, i: usize) -> Option<char> {
        self.chars.get(i).map(|&(_, c, _)| c)
    }

    /// Index one past the cluster starting at `start`.
    fn cluster_end(&self, start: usize) -> usize {
        match self.chars[start].2 {
            GraphemeClass::Cr => {
                if self.class(start + 1) == Some(GraphemeClass::Lf) {
                    start + 2
                } else {
                    start + 1
                }
            }
            GraphemeClass::Lf | GraphemeClass::Control => start + 1,
            _ => {
                let mut i = start;
                while self.class(i) == Some(GraphemeClass::Prepend) {
                    i += 1;
                }
                match self.class(i) {
                    None | Some(GraphemeClass::Cr | GraphemeClass::Lf | GraphemeClass::Control) => {
                        // Prepend run with no core to attach to.
                        return i.max(start + 1);
                    }
                    _ => {}
                }
                let core_end = self
                    .hangul_end(i)
                    .max(self.regional_pair_end(i))
                    .max(self.pictographic_end(i))
                    .max(self.conjunct_end(i))
                    .max(i + 1);
                let mut j = core_end;
                while matches!(
                    self.class(j),
                    Some(GraphemeClass::Extend | GraphemeClass::Zwj | GraphemeClass::SpacingMark)
                ) {
                    j += 1;
                }
                j
            }
        }
    }

    /// `L* (V+ | LV V* | LVT) T* | L+ | T+`, or `i` when no Hangul matches.
    fn hangul_end(&self, i: usize) -> usize {
        let mut k = i;
        while self.class(k) == Some(GraphemeClass::HangulL) {
            k += 1;
        }
        match self.class(k) {
            Some(GraphemeClass::HangulV) => {
                while self.class(k) == Some(GraphemeClass::HangulV) {
                    k += 1;
                }
            }
            Some(GraphemeClass::HangulLv) => {
                k += 1;
                while self.class(k) == Some(GraphemeClass::HangulV) {
                    k += 1;
                }
            }
            Some(GraphemeClass::HangulLvt) => {
                k += 1;
            }
            _ => {
                if k > i {
                    return k; // L+
                }
                if self.class(i) == Some(GraphemeClass::HangulT) {
                    let mut t = i;
                    while self.class(t) == Some(GraphemeClass::HangulT) {
                        t += 1;
                    }
                    return t; // T+
                }
                return i;
            }
        }
        while self.class(k) == Some(GraphemeClass::HangulT) {
            k += 1;
        }
        k
    }

    fn regional_pair_end(&self, i: usize) -> usize {
        if self.class(i) == Some(GraphemeClass::RegionalIndicator)
            && self.class(i + 1) == Some(GraphemeClass::RegionalIndicator)
        {
            i + 2
        } else {
            i
        }
    }

    /// `ExtPict (Extend* ZWJ ExtPict)*`, or `i` when the first code point is
    /// not pictographic.
    fn pictographic_end(&self, i: usize) -> usize {
        let is_pict = |k: usize| {
            self.char_at(k)
                .is_some_and(|c| self.tables.is_extended_pictographic(c))
        };
        if !is_pict(i) {
            return i;
        }
        let mut k = i + 1;
        loop {
            let mut m = k;
            while self.class(m) == Some(GraphemeClass::Extend) {
                m += 1;
            }
            if self.class(m) == Some(GraphemeClass::Zwj) && is_pict(m + 1) {
                k = m + 2;
            } else {
                return k;
            }
        }
    }

    /// GB9c Indic conjunct cluster: consonant joined through at least one
    /// linker to each following consonant. Returns `i` unless the chain
    /// reaches a second consonant.
    fn conjunct_end(&self, i: usize) -> usize {
        let consonant = |k: usize| {
            self.char_at(k)
                .is_some_and(|c| self.tables.is_incb_consonant(c))
        };
        let joiner = |k: usize| {
            self.char_at(k).is_some_and(|c| {
                self.tables.is_incb_extend(c) || self.tables.is_incb_linker(c)
            })
        };
        if !consonant(i) {
            return i;
        }
        let mut k = i + 1;
        let mut matched = i;
        loop {
            let mut m = k;
            let mut seen_linker = false;
            while joiner(m) {
                seen_linker |= self
                    .char_at(m)
                    .is_some_and(|c| self.tables.is_incb_linker(c));
                m += 1;
            }
            if seen_linker && consonant(m) {
                k = m + 1;
                matched = k;
            } else {
                break;
            }
        }
        if matched > i + 1 { matched } else { i }
    }
}

/// Allocator for the named groups that guard generated quantifiers. One
/// instance per top-level pattern-generation call; never shared.
#[derive(Debug, Default)]
pub struct GroupNames {
    counter: usize,
}

impl GroupNames {
    pub fn new() -> Self {
        Self::default()
    }

    fn next(&mut self) -> String {
        self.counter += 1;
        format!("ug{}", self.counter)
    }
}

/// Which grammar branches a generated pattern needs. Derived from a sample
/// string when branch pruning is requested, otherwise everything is on.
#[derive(Debug, Clone, Copy)]
struct Branches {
    crlf: bool,
    control: bool,
    prepend: bool,
    hangul: bool,
    regional: bool,
    pictographic: bool,
    conjunct: bool,
    extend: bool,
    spacing_mark: bool,
    zwj: bool,
}

impl Branches {
    fn all() -> Self {
        Self {
            crlf: true,
            control: true,
            prepend: true,
            hangul: true,
            regional: true,
            pictographic: true,
            conjunct: true,
            extend: true,
            spacing_mark: true,
            zwj: true,
        }
    }

    /// Branch set observed in `sample`. A pattern pruned this way is only
    /// valid against that sample (or substrings of it).
    fn observed(tables: &UnicodeTables, sample: &str) -> Self {
        let mut b = Self {
            crlf: false,
            control: false,
            prepend: false,
            hangul: false,
            regional: false,
            pictographic: false,
            conjunct: false,
            extend: false,
            spacing_mark: false,
            zwj: false,
        };
        for c in sample.chars() {
            match tables.class(c) {
                GraphemeClass::Cr | GraphemeClass::Lf => b.crlf = true,
                GraphemeClass::Control => b.control = true,
                GraphemeClass::Prepend => b.prepend = true,
                GraphemeClass::Extend => b.extend = true,
                GraphemeClass::SpacingMark => b.spacing_mark = true,
                GraphemeClass::Zwj => b.zwj = true,
                GraphemeClass::RegionalIndicator => b.regional = true,
                GraphemeClass::HangulL
                | GraphemeClass::HangulV
                | GraphemeClass::HangulT
                | GraphemeClass::HangulLv
                | GraphemeClass::HangulLvt => b.hangul = true,
                GraphemeClass::Other => {}
            }
            if tables.is_extended_pictographic(c) {
                b.pictographic = true;
            }
            if tables.is_incb_consonant(c) {
                b.conjunct = true;
            }
        }
        b
    }
}

/// Source of a pattern matching exactly one extended grapheme cluster.
///
/// Passing a `sample` prunes grammar branches whose character classes do not
/// occur in that sample; the pruned pattern must only ever be applied to the
/// same sample or substrings of it. `None` generates the full pattern.
pub fn grapheme_pattern(tables: &UnicodeTables, sample: Option<&str>) -> String {
    let mut names = GroupNames::new();
    grapheme_pattern_with(tables, sample, &mut names)
}

/// As [`grapheme_pattern`], threading an external group-name allocator so
/// several generated patterns can be combined into one larger expression
/// without colliding group names.
pub fn grapheme_pattern_with(
    tables: &UnicodeTables,
    sample: Option<&str>,
    names: &mut GroupNames,
) -> String {
    build_pattern(tables, false, sample, names)
}

/// Cluster pattern with one named capture group per grammar branch (`crlf`,
/// `ctrl`, `hangul`, `regional`, `pict`, `conjunct`, `plain`), for callers
/// that must know which branch matched. Capturing patterns use fixed branch
/// names and cannot be embedded twice in one expression.
pub fn core_pattern(
    tables: &UnicodeTables,
    sample: Option<&str>,
    names: &mut GroupNames,
) -> String {
    build_pattern(tables, true, sample, names)
}

fn build_pattern(
    tables: &UnicodeTables,
    capture: bool,
    sample: Option<&str>,
    names: &mut GroupNames,
) -> String {
    let branches = match sample {
        Some(sample) => Branches::observed(tables, sample),
        None => Branches::all(),
    };
    let d = tables.data();
    let wrap = |name: &str, source: String| {
        if capture {
            format!("(?<{name}>{source})")
        } else {
            format!("(?:{source})")
        }
    };

    let mut alternatives = Vec::new();
    if branches.crlf {
        alternatives.push(wrap("crlf", "\\r\\n|[\\r\\n]".to_string()));
    }
    if branches.control && !d.control.is_empty() {
        alternatives.push(wrap("ctrl", class_of(&[d.control])));
    }

    let mut cores = Vec::new();
    if branches.hangul {
        cores.push(wrap("hangul", hangul_source(tables, names)));
    }
    if branches.regional {
        let ri = class_of(&[d.regional_indicator]);
        cores.push(wrap("regional", format!("{ri}{ri}")));
    }
    if branches.pictographic {
        cores.push(wrap("pict", pictographic_source(tables, names)));
    }
    if branches.conjunct {
        cores.push(wrap("conjunct", conjunct_source(tables, names)));
    }
    // Any single code point that is not a control, CR, or LF.
    cores.push(wrap("plain", negated_control_class(tables)));

    let mut cluster = String::new();
    if branches.prepend {
        let precore = class_of(&[d.prepend]);
        cluster.push_str(&guarded_star(&precore, names));
    }
    cluster.push_str(&format!("(?:{})", cores.join("|")));
    let postcore = postcore_class(tables, &branches);
    if let Some(postcore) = postcore {
        cluster.push_str(&guarded_star(&postcore, names));
    }
    alternatives.push(cluster);

    format!("(?:{})", alternatives.join("|"))
}

/// `X*` in the backtracking-safe form `(?=(?<g>(?:X)*))\k<g>`.
fn guarded_star(inner: &str, names: &mut GroupNames) -> String {
    let g = names.next();
    format!("(?=(?<{g}>(?:{inner})*))\\k<{g}>")
}

/// `X+` as one `X` followed by a guarded `X*`.
fn guarded_plus(inner: &str, names: &mut GroupNames) -> String {
    format!("(?:{inner}){}", guarded_star(inner, names))
}

fn hangul_source(tables: &UnicodeTables, names: &mut GroupNames) -> String {
    let d = tables.data();
    let l = class_of(&[d.hangul_l]);
    let v = class_of(&[d.hangul_v]);
    let t = class_of(&[d.hangul_t]);
    let lv = hangul_lv_class();
    let lvt = hangul_lvt_class();
    let l_star = guarded_star(&l, names);
    let v_plus = guarded_plus(&v, names);
    let v_star = guarded_star(&v, names);
    let t_star = guarded_star(&t, names);
    let l_plus = guarded_plus(&l, names);
    let t_plus = guarded_plus(&t, names);
    format!("{l_star}(?:{v_plus}|{lv}{v_star}|{lvt}){t_star}|{l_plus}|{t_plus}")
}

fn pictographic_source(tables: &UnicodeTables, names: &mut GroupNames) -> String {
    let d = tables.data();
    let pict = class_of(&[d.extended_pictographic]);
    let extend = class_of(&[d.extend]);
    let link = format!("{}\\u{{200D}}{pict}", guarded_star(&extend, names));
    format!("{pict}{}", guarded_star(&link, names))
}

fn conjunct_source(tables: &UnicodeTables, names: &mut GroupNames) -> String {
    let d = tables.data();
    let consonant = class_of(&[d.incb_consonant]);
    let joiner = class_of(&[d.incb_extend, d.incb_linker]);
    let linker = class_of(&[d.incb_linker]);
    let j1 = guarded_star(&joiner, names);
    let j2 = guarded_star(&joiner, names);
    let chain = format!("{j1}{linker}{j2}{consonant}");
    format!("{consonant}{}", guarded_plus(&chain, names))
}

fn postcore_class(tables: &UnicodeTables, branches: &Branches) -> Option<String> {
    let d = tables.data();
    let mut body = String::new();
    if branches.extend {
        push_ranges(&mut body, d.extend.iter());
    }
    if branches.zwj {
        body.push_str("\\u{200D}");
    }
    if branches.spacing_mark {
        push_ranges(&mut body, d.spacing_mark.iter());
    }
    if body.is_empty() {
        None
    } else {
        Some(format!("[{body}]"))
    }
}

/// `[^ \r \n Control]` built from the control ranges.
fn negated_control_class(tables: &UnicodeTables) -> String {
    let mut body = String::from("\\r\\n");
    push_ranges(&mut body, tables.data().control.iter());
    format!("[^{body}]")
}

fn class_of(parts: &[crate::tables::ClassRanges]) -> String {
    let mut body = String::new();
    for ranges in parts {
        push_ranges(&mut body, ranges.iter());
    }
    format!("[{body}]")
}

fn push_ranges(body: &mut String, ranges: impl Iterator<Item = (u32, u32)>) {
    use std::fmt::Write;
    for (lo, hi) in ranges {
        if lo == hi {
            let _ = write!(body, "\\u{{{lo:X}}}");
        } else {
            let _ = write!(body, "\\u{{{lo:X}}}-\\u{{{hi:X}}}");
        }
    }
}

/// LV syllables are the 399 block positions with no trailing jamo.
fn hangul_lv_class() -> String {
    use std::fmt::Write;
    let mut body = String::new();
    for k in 0..399u32 {
        let _ = write!(body, "\\u{{{:X}}}", HANGUL_S_BASE + k * 28);
    }
    format!("[{body}]")
}

/// Everything in the syllable block between consecutive LV positions.
fn hangul_lvt_class() -> String {
    use std::fmt::Write;
    let mut body = String::new();
    for k in 0..399u32 {
        let lo = HANGUL_S_BASE + k * 28 + 1;
        let hi = HANGUL_S_BASE + k * 28 + 27;
        let _ = write!(body, "\\u{{{lo:X}}}-\\u{{{hi:X}}}");
    }
    format!("[{body}]")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regex::SearchRegexBuilder;

    fn clusters(text: &str) -> Vec<&str> {
        segment(&UnicodeTables::bundled(), text)
            .map(|g| g.text)
            .collect()
    }

    #[test]
    fn ascii_and_crlf() {
        assert_eq!(clusters("ab"), ["a", "b"]);
        assert_eq!(clusters("a\r\nb"), ["a", "\r\n", "b"]);
        assert_eq!(clusters("\r\r\n\n"), ["\r", "\r\n", "\n"]);
    }

    #[test]
    fn combining_marks_attach() {
        assert_eq!(clusters("e\u{301}x"), ["e\u{301}", "x"]);
        assert_eq!(clusters("x\u{301}\u{302}\u{303}"), ["x\u{301}\u{302}\u{303}"]);
    }

    #[test]
    fn hangul_sequences() {
        assert_eq!(clusters("\u{1100}\u{1161}\u{11A8}"), ["\u{1100}\u{1161}\u{11A8}"]);
        assert_eq!(clusters("\u{AC00}\u{AC01}"), ["\u{AC00}", "\u{AC01}"]);
        // LV followed by V stays joined, LVT followed by V breaks.
        assert_eq!(clusters("\u{AC00}\u{1161}"), ["\u{AC00}\u{1161}"]);
        assert_eq!(clusters("\u{AC01}\u{1161}"), ["\u{AC01}", "\u{1161}"]);
    }

    #[test]
    fn regional_indicators_pair_up() {
        let four = "\u{1F1E8}\u{1F1E6}\u{1F1EF}\u{1F1F5}";
        assert_eq!(
            clusters(four),
            ["\u{1F1E8}\u{1F1E6}", "\u{1F1EF}\u{1F1F5}"]
        );
        assert_eq!(clusters("\u{1F1E8}x"), ["\u{1F1E8}", "x"]);
    }

    #[test]
    fn emoji_zwj_chain_is_one_cluster() {
        let family = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F466}";
        assert_eq!(clusters(family), [family]);
        let with_tone = "\u{1F469}\u{1F3FD}\u{200D}\u{1F692}";
        assert_eq!(clusters(with_tone), [with_tone]);
    }

    #[test]
    fn indic_conjunct_clusters() {
        // KA + virama + KA joins, KA + KA does not.
        assert_eq!(clusters("\u{915}\u{94D}\u{915}"), ["\u{915}\u{94D}\u{915}"]);
        assert_eq!(clusters("\u{915}\u{915}"), ["\u{915}", "\u{915}"]);
        // Virama alone extends the preceding consonant.
        assert_eq!(clusters("\u{915}\u{94D}"), ["\u{915}\u{94D}"]);
    }

    #[test]
    fn prepend_attaches_forward() {
        // Arabic number sign is a Prepend character.
        assert_eq!(clusters("\u{600}1"), ["\u{600}1"]);
        assert_eq!(clusters("\u{600}\r"), ["\u{600}", "\r"]);
    }

    #[test]
    fn round_trip_reconstructs_input() {
        let samples = [
            "",
            "plain ascii",
            "e\u{301}\u{302}",
            "\u{1F1E8}\u{1F1E6}\u{1F1EF}",
            "\u{AC00}\u{1100}\u{1161}",
            "\u{915}\u{94D}\u{915}\u{94D}",
        ];
        for s in samples {
            let joined: String = clusters(s).concat();
            assert_eq!(joined, s);
        }
    }

    #[test]
    fn generated_pattern_matches_each_cluster() {
        let tables = UnicodeTables::bundled();
        let source = grapheme_pattern(&tables, None);
        let re = SearchRegexBuilder::new(&format!("^{source}$"))
            .build()
            .unwrap();
        for text in [
            "a",
            "\r\n",
            "e\u{301}",
            "\u{AC01}",
            "\u{1100}\u{1161}\u{11A8}",
            "\u{1F1E8}\u{1F1E6}",
            "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F466}",
            "\u{915}\u{94D}\u{915}",
            "\u{30AB}\u{3099}",
        ] {
            assert!(re.is_match(text).unwrap(), "pattern rejects {text:?}");
        }
    }

    #[test]
    fn generated_pattern_segments_like_the_iterator() {
        let tables = UnicodeTables::bundled();
        let source = grapheme_pattern(&tables, None);
        let re = SearchRegexBuilder::new(&source).build().unwrap();
        let text = "a\u{301}b\r\n\u{1F1E8}\u{1F1E6}\u{AC00}\u{915}\u{94D}\u{915}!";
        let by_regex: Vec<String> = re
            .find_all(text)
            .unwrap()
            .into_iter()
            .map(|m| m.as_str().to_string())
            .collect();
        let by_iter: Vec<&str> = clusters(text);
        assert_eq!(by_regex, by_iter);
    }

    #[test]
    fn pruned_pattern_still_covers_its_sample() {
        let tables = UnicodeTables::bundled();
        let sample = "abc e\u{301}";
        let source = grapheme_pattern(&tables, Some(sample));
        // Pruning removes branches entirely absent from the sample.
        assert!(!source.contains("\\u{1F1E6}"));
        let re = SearchRegexBuilder::new(&source).build().unwrap();
        let by_regex: Vec<String> = re
            .find_all(sample)
            .unwrap()
            .into_iter()
            .map(|m| m.as_str().to_string())
            .collect();
        assert_eq!(by_regex, clusters(sample));
    }

    #[test]
    fn capture_pattern_reports_the_branch() {
        let tables = UnicodeTables::bundled();
        let mut names = GroupNames::new();
        let source = core_pattern(&tables, None, &mut names);
        let re = SearchRegexBuilder::new(&source).build().unwrap();
        let captures = re.captures("\r\n").unwrap().unwrap();
        assert!(captures.name("crlf").is_some());
        let captures = re.captures("\u{AC00}").unwrap().unwrap();
        assert!(captures.name("hangul").is_some());
        let captures = re.captures("x").unwrap().unwrap();
        assert!(captures.name("plain").is_some());
    }
}
