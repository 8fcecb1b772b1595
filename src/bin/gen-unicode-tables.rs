//! Regenerates `src/unicode_data.rs` from a local Unicode Character
//! Database checkout.
//!
//! ```text
//! gen-unicode-tables --ucd-dir path/to/ucd --out src/unicode_data.rs
//! ```
//!
//! Fetching the UCD is out of scope; point `--ucd-dir` at an extracted
//! copy. Missing or malformed files are fatal.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

type DynError = Box<dyn std::error::Error>;
type Result<T> = std::result::Result<T, DynError>;

const HANGUL_S_BASE: u32 = 0xAC00;
const HANGUL_S_LAST: u32 = 0xD7A3;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("gen-unicode-tables: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args = Args::parse()?;
    let ucd = UcdData::load(&args.ucd_dir)?;
    let output = emit(&ucd)?;
    std::fs::write(&args.out, output)?;
    Ok(())
}

struct Args {
    ucd_dir: PathBuf,
    out: PathBuf,
}

impl Args {
    fn parse() -> Result<Self> {
        let mut ucd_dir = None;
        let mut out = None;
        let mut argv = std::env::args().skip(1);
        while let Some(arg) = argv.next() {
            match arg.as_str() {
                "--ucd-dir" => ucd_dir = argv.next().map(PathBuf::from),
                "--out" => out = argv.next().map(PathBuf::from),
                other => return Err(format!("unknown argument {other}").into()),
            }
        }
        match (ucd_dir, out) {
            (Some(ucd_dir), Some(out)) => Ok(Self { ucd_dir, out }),
            _ => Err("usage: gen-unicode-tables --ucd-dir DIR --out FILE".into()),
        }
    }
}

#[derive(Default, Clone)]
struct CharInfo {
    general_category: String,
    combining_class: u8,
    /// Decomposition mapping; `compat` when tagged (`<wide>` etc).
    decomposition: Vec<u32>,
    compat: bool,
}

struct UcdData {
    chars: HashMap<u32, CharInfo>,
    grapheme_classes: HashMap<String, Vec<(u32, u32)>>,
    incb: HashMap<String, Vec<(u32, u32)>>,
    extended_pictographic: Vec<(u32, u32)>,
}

impl UcdData {
    fn load(dir: &Path) -> Result<Self> {
        let chars = parse_unicode_data(&dir.join("UnicodeData.txt"))?;
        let grapheme_classes =
            parse_property_file(&dir.join("auxiliary/GraphemeBreakProperty.txt"))?;
        let derived = parse_property_file(&dir.join("DerivedCoreProperties.txt"))?;
        let emoji = parse_property_file(&dir.join("emoji/emoji-data.txt"))?;
        let incb = derived
            .into_iter()
            .filter_map(|(key, ranges)| {
                key.strip_prefix("InCB=")
                    .map(|name| (name.to_string(), ranges))
            })
            .collect();
        let extended_pictographic = emoji
            .get("Extended_Pictographic")
            .cloned()
            .ok_or("emoji-data.txt lacks Extended_Pictographic")?;
        Ok(Self {
            chars,
            grapheme_classes,
            incb,
            extended_pictographic,
        })
    }

    fn class_ranges(&self, name: &str) -> Result<&[(u32, u32)]> {
        self.grapheme_classes
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| format!("GraphemeBreakProperty.txt lacks {name}").into())
    }
}

/// `UnicodeData.txt` is one code point (or a First/Last range pair) per
/// line, fields separated by `;`.
fn parse_unicode_data(path: &Path) -> Result<HashMap<u32, CharInfo>> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("{}: {e}", path.display()))?;
    let mut chars = HashMap::new();
    let mut range_first: Option<u32> = None;
    for line in text.lines() {
        let fields: Vec<&str> = line.split(';').collect();
        if fields.len() < 6 {
            continue;
        }
        let cp = u32::from_str_radix(fields[0], 16)
            .map_err(|_| format!("bad code point in {line}"))?;
        let mut info = CharInfo {
            general_category: fields[2].to_string(),
            combining_class: fields[3].parse().unwrap_or(0),
            decomposition: Vec::new(),
            compat: false,
        };
        let decomp = fields[5];
        if !decomp.is_empty() {
            for part in decomp.split_whitespace() {
                if part.starts_with('<') {
                    info.compat = true;
                } else {
                    info.decomposition.push(
                        u32::from_str_radix(part, 16)
                            .map_err(|_| format!("bad decomposition in {line}"))?,
                    );
                }
            }
        }
        if fields[1].ends_with(", First>") {
            range_first = Some(cp);
        } else if fields[1].ends_with(", Last>") {
            let first = range_first.take().unwrap_or(cp);
            for c in first..=cp {
                chars.insert(c, info.clone());
            }
        } else {
            chars.insert(cp, info);
        }
    }
    Ok(chars)
}

/// Parses the `XXXX..YYYY ; PropName` shape shared by the property files.
/// Files carrying `Prop=Value` pairs key the map as `Prop=Value`.
fn parse_property_file(path: &Path) -> Result<HashMap<String, Vec<(u32, u32)>>> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("{}: {e}", path.display()))?;
    let mut map: HashMap<String, Vec<(u32, u32)>> = HashMap::new();
    for line in text.lines() {
        let line = line.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        let mut fields = line.split(';').map(str::trim);
        let range = fields.next().ok_or_else(|| format!("bad line {line}"))?;
        let prop = match (fields.next(), fields.next()) {
            (Some(name), Some(value)) if !value.is_empty() => format!("{name}={value}"),
            (Some(name), _) => name.to_string(),
            _ => continue,
        };
        let (lo, hi) = match range.split_once("..") {
            Some((lo, hi)) => (
                u32::from_str_radix(lo, 16).map_err(|_| format!("bad range {range}"))?,
                u32::from_str_radix(hi, 16).map_err(|_| format!("bad range {range}"))?,
            ),
            None => {
                let cp = u32::from_str_radix(range, 16)
                    .map_err(|_| format!("bad code point {range}"))?;
                (cp, cp)
            }
        };
        map.entry(prop).or_default().push((lo, hi));
    }
    for ranges in map.values_mut() {
        ranges.sort_unstable();
        let mut merged: Vec<(u32, u32)> = Vec::with_capacity(ranges.len());
        for &(lo, hi) in ranges.iter() {
            match merged.last_mut() {
                Some(last) if lo <= last.1 + 1 => last.1 = last.1.max(hi),
                _ => merged.push((lo, hi)),
            }
        }
        *ranges = merged;
    }
    Ok(map)
}

/// Fold classification mirrors the decomposition shape: one entry per code
/// point whose folded form differs from itself, folded strings taken to
/// their fixed point. Hangul syllables stay out of the table; the runtime
/// decomposes them arithmetically.
struct FoldBuilder<'a> {
    ucd: &'a UcdData,
    memo: HashMap<u32, Option<String>>,
}

const VOICING_MARKS: [u32; 2] = [0x3099, 0x309A];

impl<'a> FoldBuilder<'a> {
    fn new(ucd: &'a UcdData) -> Self {
        Self {
            ucd,
            memo: HashMap::new(),
        }
    }

    fn is_kana(cp: u32) -> bool {
        matches!(cp, 0x3041..=0x309F | 0x30A0..=0x30FF)
    }

    /// Full compatibility decomposition, decompositions resolved
    /// recursively.
    fn decompose(&self, cp: u32, out: &mut Vec<u32>) {
        match self.ucd.chars.get(&cp) {
            Some(info) if !info.decomposition.is_empty() => {
                for &part in &info.decomposition {
                    self.decompose(part, out);
                }
            }
            _ => out.push(cp),
        }
    }

    fn combining_class(&self, cp: u32) -> u8 {
        self.ucd
            .chars
            .get(&cp)
            .map_or(0, |info| info.combining_class)
    }

    fn fold_string(&mut self, cps: &[u32]) -> String {
        let mut out = String::new();
        for &cp in cps {
            match self.fold(cp) {
                Some(folded) => out.push_str(&folded),
                None => {
                    if let Some(ch) = char::from_u32(cp) {
                        out.push(ch);
                    }
                }
            }
        }
        out
    }

    /// Folded form of `cp`, or `None` when it is its own fixed point.
    fn fold(&mut self, cp: u32) -> Option<String> {
        if let Some(cached) = self.memo.get(&cp) {
            return cached.clone();
        }
        // Break cycles; a code point never folds through itself.
        self.memo.insert(cp, None);
        let folded = self.fold_uncached(cp);
        self.memo.insert(cp, folded.clone());
        folded
    }

    fn fold_uncached(&mut self, cp: u32) -> Option<String> {
        if (HANGUL_S_BASE..=HANGUL_S_LAST).contains(&cp) {
            return None;
        }
        let mut seq = Vec::new();
        self.decompose(cp, &mut seq);
        if seq == [cp] {
            return None;
        }
        // Kana with a voicing mark folds to its decomposed pair and no
        // further; the pair is the search key for both spellings.
        if seq.len() == 2 && VOICING_MARKS.contains(&seq[1]) && Self::is_kana(seq[0]) {
            let folded: String = seq.iter().filter_map(|&c| char::from_u32(c)).collect();
            return Some(folded);
        }
        // A base with trailing combining marks folds to the base alone.
        if seq.len() > 1
            && self.combining_class(seq[0]) == 0
            && seq[1..].iter().all(|&c| self.combining_class(c) > 0)
        {
            let base = self.fold_string(&seq[..1]);
            return Some(base);
        }
        Some(self.fold_string(&seq))
    }

    fn kind_of(&mut self, cp: u32, folded: &str) -> &'static str {
        let mut seq = Vec::new();
        self.decompose(cp, &mut seq);
        if seq.len() == 2 && VOICING_MARKS.contains(&seq[1]) && Self::is_kana(seq[0]) {
            return "KanaVoiced";
        }
        if seq.len() > 1
            && self.combining_class(seq[0]) == 0
            && seq[1..].iter().all(|&c| self.combining_class(c) > 0)
        {
            return "LetterMarks";
        }
        if seq.contains(&0x00B7) {
            return "MiddleDot";
        }
        if seq.contains(&0x00B0) {
            return "DegreeLetter";
        }
        let modifier = seq.iter().any(|c| {
            self.ucd
                .chars
                .get(c)
                .is_some_and(|info| info.general_category == "Lm" || info.general_category == "Sk")
        });
        if modifier {
            return "ModifierLetter";
        }
        if folded.chars().count() == 1 {
            return "Simple";
        }
        "Complex"
    }
}

fn emit(ucd: &UcdData) -> Result<String> {
    let mut out = String::new();
    out.push_str("//! Static Unicode property tables.\n//!\n");
    out.push_str("//! @generated by `gen-unicode-tables` from the Unicode Character Database\n");
    out.push_str("//! (UnicodeData.txt, auxiliary/GraphemeBreakProperty.txt,\n");
    out.push_str("//! DerivedCoreProperties.txt, emoji/emoji-data.txt). Do not edit by hand.\n");
    out.push_str("//!\n");
    out.push_str("//! Each class is a sorted list of inclusive code point ranges. Hangul LV/LVT\n");
    out.push_str("//! syllable types are computed arithmetically in `tables.rs` and have no\n");
    out.push_str("//! table here. The fold table maps a source code point to its fully memoized\n");
    out.push_str("//! fold result; every folded string is a fixed point of the fold.\n\n");
    out.push_str("use crate::unify::FoldKind;\n");

    let classes = [
        ("CONTROL", "Control"),
        ("EXTEND", "Extend"),
        ("SPACING_MARK", "SpacingMark"),
        ("PREPEND", "Prepend"),
        ("HANGUL_L", "L"),
        ("HANGUL_V", "V"),
        ("HANGUL_T", "T"),
        ("REGIONAL_INDICATOR", "Regional_Indicator"),
    ];
    for (name, prop) in classes {
        emit_ranges(&mut out, name, ucd.class_ranges(prop)?);
    }
    emit_ranges(&mut out, "EXTENDED_PICTOGRAPHIC", &ucd.extended_pictographic);
    for (name, value) in [
        ("INCB_CONSONANT", "Consonant"),
        ("INCB_LINKER", "Linker"),
        ("INCB_EXTEND", "Extend"),
    ] {
        let ranges = ucd
            .incb
            .get(value)
            .ok_or_else(|| format!("DerivedCoreProperties.txt lacks InCB={value}"))?;
        emit_ranges(&mut out, name, ranges);
    }

    let mut builder = FoldBuilder::new(ucd);
    let mut entries = Vec::new();
    let mut cps: Vec<u32> = ucd.chars.keys().copied().collect();
    cps.sort_unstable();
    for cp in cps {
        if let Some(folded) = builder.fold(cp) {
            let kind = builder.kind_of(cp, &folded);
            entries.push((cp, kind, folded));
        }
    }
    out.push_str("\n#[rustfmt::skip]\n");
    out.push_str("pub(crate) static FOLD_TABLE: &[(u32, FoldKind, &str)] = &[\n");
    for (cp, kind, folded) in entries {
        let mut escaped = String::new();
        for ch in folded.chars() {
            if ch.is_ascii_graphic() && ch != '"' && ch != '\\' {
                escaped.push(ch);
            } else {
                let _ = write!(escaped, "\\u{{{:X}}}", ch as u32);
            }
        }
        let _ = writeln!(out, "    (0x{cp:04X}, FoldKind::{kind}, \"{escaped}\"),");
    }
    out.push_str("];\n");
    Ok(out)
}

fn emit_ranges(out: &mut String, name: &str, ranges: &[(u32, u32)]) {
    out.push('\n');
    out.push_str("#[rustfmt::skip]\n");
    let _ = writeln!(out, "pub(crate) static {name}: &[(u32, u32)] = &[");
    for &(lo, hi) in ranges {
        let _ = writeln!(out, "    (0x{lo:04X}, 0x{hi:04X}),");
    }
    out.push_str("];\n");
}
