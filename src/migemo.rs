//! Romaji query expansion in the cmigemo tradition.
//!
//! A query typed in romaji is expanded into a regex fragment matching every
//! plausible Japanese rendering: the raw word, its fullwidth and halfwidth
//! forms, the hiragana readings (with ambiguous trailing fragments
//! completed predictively), their katakana and halfwidth-katakana forms,
//! and any dictionary surface forms reachable from those readings. The
//! alternatives are deduplicated and prefix-compressed by the generator in
//! [`tst`] before they reach pattern rewriting.

pub(crate) mod bitvec;
pub mod dict;
pub mod dict_builder;
pub(crate) mod louds;
pub(crate) mod romaji;
pub(crate) mod tst;

use crate::migemo::dict::CompactDictionary;
use crate::migemo::romaji::{to_hiragana_predictively, RomajiTrie};
use crate::migemo::tst::{RegexGenerator, RegexOperators};

pub struct MigemoEngine {
    dict: Option<CompactDictionary>,
    romaji: RomajiTrie,
}

impl MigemoEngine {
    /// Engine with no dictionary: expansion still covers kana and width
    /// variants, just not kanji surface forms.
    pub fn new() -> Self {
        Self {
            dict: None,
            romaji: RomajiTrie::new(),
        }
    }

    pub fn with_dictionary(dict: CompactDictionary) -> Self {
        Self {
            dict: Some(dict),
            romaji: RomajiTrie::new(),
        }
    }

    /// Expands `text` into a regex fragment. Words split at whitespace and
    /// at lower-to-upper case transitions, each expanding independently;
    /// the fragments concatenate.
    pub fn query(&self, text: &str) -> String {
        let mut out = String::new();
        for word in split_words(text) {
            out.push_str(&self.query_a_word(&word));
        }
        out
    }

    fn query_a_word(&self, word: &str) -> String {
        let mut generator = RegexGenerator::new();
        generator.add(word);
        generator.add(&to_fullwidth(word));
        generator.add(&to_halfwidth(word));
        let lower = word.to_lowercase();
        if let Some(dict) = &self.dict {
            for hit in dict.predictive_search(&lower) {
                generator.add(&hit);
            }
        }
        let predicted = to_hiragana_predictively(&self.romaji, &lower);
        for suffix in &predicted.suffixes {
            let reading = format!("{}{suffix}", predicted.prefix);
            if reading.is_empty() {
                continue;
            }
            generator.add(&reading);
            if let Some(dict) = &self.dict {
                for hit in dict.predictive_search(&reading) {
                    generator.add(&hit);
                }
            }
            let katakana = hiragana_to_katakana(&reading);
            generator.add(&katakana);
            generator.add(&to_halfwidth(&katakana));
        }
        generator.generate(&RegexOperators::default())
    }
}

impl Default for MigemoEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn split_words(text: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;
    for ch in text.chars() {
        if ch.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if prev_lower && ch.is_uppercase() && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        current.push(ch);
        prev_lower = ch.is_lowercase();
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

pub(crate) fn hiragana_to_katakana(text: &str) -> String {
    text.chars()
        .map(|ch| match ch {
            '\u{3041}'..='\u{3096}' | '\u{309D}' | '\u{309E}' => {
                char::from_u32(ch as u32 + 0x60).unwrap_or(ch)
            }
            _ => ch,
        })
        .collect()
}

pub(crate) fn to_fullwidth(text: &str) -> String {
    text.chars()
        .map(|ch| match ch {
            '!'..='~' => char::from_u32(ch as u32 + 0xFEE0).unwrap_or(ch),
            ' ' => '\u{3000}',
            _ => ch,
        })
        .collect()
}

/// Narrows fullwidth ASCII and maps katakana to the halfwidth kana block,
/// splitting voiced forms into base plus a spacing voicing mark.
pub(crate) fn to_halfwidth(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\u{FF01}'..='\u{FF5E}' => {
                out.push(char::from_u32(ch as u32 - 0xFEE0).unwrap_or(ch));
            }
            '\u{3000}' => out.push(' '),
            _ => match KATAKANA_TO_HALFWIDTH.binary_search_by_key(&ch, |&(full, _)| full) {
                Ok(idx) => out.push_str(KATAKANA_TO_HALFWIDTH[idx].1),
                Err(_) => out.push(ch),
            },
        }
    }
    out
}

/// Sorted by the fullwidth character.
#[rustfmt::skip]
static KATAKANA_TO_HALFWIDTH: &[(char, &str)] = &[
    ('、', "､"),
    ('。', "｡"),
    ('「', "｢"),
    ('」', "｣"),
    ('゙', "ﾞ"),
    ('゚', "ﾟ"),
    ('ァ', "ｧ"),
    ('ア', "ｱ"),
    ('ィ', "ｨ"),
    ('イ', "ｲ"),
    ('ゥ', "ｩ"),
    ('ウ', "ｳ"),
    ('ェ', "ｪ"),
    ('エ', "ｴ"),
    ('ォ', "ｫ"),
    ('オ', "ｵ"),
    ('カ', "ｶ"),
    ('ガ', "ｶﾞ"),
    ('キ', "ｷ"),
    ('ギ', "ｷﾞ"),
    ('ク', "ｸ"),
    ('グ', "ｸﾞ"),
    ('ケ', "ｹ"),
    ('ゲ', "ｹﾞ"),
    ('コ', "ｺ"),
    ('ゴ', "ｺﾞ"),
    ('サ', "ｻ"),
    ('ザ', "ｻﾞ"),
    ('シ', "ｼ"),
    ('ジ', "ｼﾞ"),
    ('ス', "ｽ"),
    ('ズ', "ｽﾞ"),
    ('セ', "ｾ"),
    ('ゼ', "ｾﾞ"),
    ('ソ', "ｿ"),
    ('ゾ', "ｿﾞ"),
    ('タ', "ﾀ"),
    ('ダ', "ﾀﾞ"),
    ('チ', "ﾁ"),
    ('ヂ', "ﾁﾞ"),
    ('ッ', "ｯ"),
    ('ツ', "ﾂ"),
    ('ヅ', "ﾂﾞ"),
    ('テ', "ﾃ"),
    ('デ', "ﾃﾞ"),
    ('ト', "ﾄ"),
    ('ド', "ﾄﾞ"),
    ('ナ', "ﾅ"),
    ('ニ', "ﾆ"),
    ('ヌ', "ﾇ"),
    ('ネ', "ﾈ"),
    ('ノ', "ﾉ"),
    ('ハ', "ﾊ"),
    ('バ', "ﾊﾞ"),
    ('パ', "ﾊﾟ"),
    ('ヒ', "ﾋ"),
    ('ビ', "ﾋﾞ"),
    ('ピ', "ﾋﾟ"),
    ('フ', "ﾌ"),
    ('ブ', "ﾌﾞ"),
    ('プ', "ﾌﾟ"),
    ('ヘ', "ﾍ"),
    ('ベ', "ﾍﾞ"),
    ('ペ', "ﾍﾟ"),
    ('ホ', "ﾎ"),
    ('ボ', "ﾎﾞ"),
    ('ポ', "ﾎﾟ"),
    ('マ', "ﾏ"),
    ('ミ', "ﾐ"),
    ('ム', "ﾑ"),
    ('メ', "ﾒ"),
    ('モ', "ﾓ"),
    ('ャ', "ｬ"),
    ('ヤ', "ﾔ"),
    ('ュ', "ｭ"),
    ('ユ', "ﾕ"),
    ('ョ', "ｮ"),
    ('ヨ', "ﾖ"),
    ('ラ', "ﾗ"),
    ('リ', "ﾘ"),
    ('ル', "ﾙ"),
    ('レ', "ﾚ"),
    ('ロ', "ﾛ"),
    ('ワ', "ﾜ"),
    ('ヲ', "ｦ"),
    ('ン', "ﾝ"),
    ('ヴ', "ｳﾞ"),
    ('ヷ', "ﾜﾞ"),
    ('ヺ', "ｦﾞ"),
    ('・', "･"),
    ('ー', "ｰ"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::migemo::dict_builder::CompactDictionaryBuilder;
    use std::collections::BTreeMap;

    fn engine_with_dict() -> MigemoEngine {
        let mut entries: BTreeMap<String, Vec<String>> = BTreeMap::new();
        entries.insert(
            "けんさく".to_string(),
            vec!["検索".to_string(), "研削".to_string()],
        );
        entries.insert("けんとう".to_string(), vec!["検討".to_string()]);
        entries.insert("きゃく".to_string(), vec!["客".to_string()]);
        let (bytes, _) = CompactDictionaryBuilder::build(&entries);
        MigemoEngine::with_dictionary(CompactDictionary::from_bytes(&bytes).unwrap())
    }

    #[test]
    fn splits_at_whitespace_and_case_transitions() {
        assert_eq!(split_words("fooBar baz"), ["foo", "Bar", "baz"]);
        assert_eq!(split_words("ABCdef"), ["ABCdef"]);
        assert_eq!(split_words("  "), Vec::<String>::new());
    }

    #[test]
    fn width_conversions_round_trip() {
        assert_eq!(to_fullwidth("ka1!"), "ｋａ１！");
        assert_eq!(to_halfwidth("ｋａ１！"), "ka1!");
        assert_eq!(to_halfwidth("カナ"), "ｶﾅ");
        assert_eq!(to_halfwidth("ガパ"), "ｶﾞﾊﾟ");
        assert_eq!(hiragana_to_katakana("けんさくー"), "ケンサクー");
    }

    #[test]
    fn query_covers_kana_and_width_variants() {
        let engine = MigemoEngine::new();
        let fragment = engine.query("kensaku");
        for expected in ["kensaku", "けんさく", "ケンサク", "ｹﾝｻｸ", "ｋｅｎｓａｋｕ"] {
            assert!(fragment.contains(expected), "{expected} in {fragment}");
        }
    }

    #[test]
    fn query_pulls_dictionary_surface_forms() {
        let engine = engine_with_dict();
        let fragment = engine.query("kensaku");
        assert!(fragment.contains("検索"), "{fragment}");
        assert!(fragment.contains("研削"), "{fragment}");
        assert!(!fragment.contains("検討"), "{fragment}");
    }

    #[test]
    fn ambiguous_tail_reaches_dictionary_entries() {
        let engine = engine_with_dict();
        let fragment = engine.query("ky");
        assert!(fragment.contains("客"), "{fragment}");
        assert!(fragment.contains("きゃ"), "{fragment}");
    }

    #[test]
    fn words_expand_independently_and_concatenate() {
        let engine = MigemoEngine::new();
        let fragment = engine.query("aI");
        let a = engine.query("a");
        let i = engine.query("I");
        assert_eq!(fragment, format!("{a}{i}"));
    }
}
