//! Romaji to hiragana transliteration.
//!
//! A static table of romaji fragments drives two interchangeable matchers:
//! [`RomajiIndex`] binary-searches entries by a packed 4-byte key, and
//! [`RomajiTrie`] walks a double-array trie. Both answer longest-match
//! queries; the trie additionally enumerates completions of an ambiguous
//! trailing fragment, which is what the search engine needs for queries cut
//! off mid-syllable ("ky" should reach きゃ, きゅ and きょ).

#[derive(Debug, Clone, Copy)]
pub(crate) struct RomanEntry {
    pub(crate) roman: &'static str,
    pub(crate) hiragana: &'static str,
    /// Trailing input bytes the match leaves unconsumed. The doubled
    /// consonant of a sokuon ("kk" emits っ) is re-read as the start of the
    /// next syllable.
    pub(crate) remain: usize,
}

const fn e(roman: &'static str, hiragana: &'static str, remain: usize) -> RomanEntry {
    RomanEntry {
        roman,
        hiragana,
        remain,
    }
}

/// Sorted by `roman`; every fragment is 1-4 printable-ASCII bytes.
#[rustfmt::skip]
pub(crate) static ROMAN_ENTRIES: &[RomanEntry] = &[
    e("-", "ー", 0),
    e("a", "あ", 0),
    e("ba", "ば", 0),
    e("bb", "っ", 1),
    e("be", "べ", 0),
    e("bi", "び", 0),
    e("bo", "ぼ", 0),
    e("bu", "ぶ", 0),
    e("bya", "びゃ", 0),
    e("bye", "びぇ", 0),
    e("byi", "びぃ", 0),
    e("byo", "びょ", 0),
    e("byu", "びゅ", 0),
    e("cc", "っ", 1),
    e("cha", "ちゃ", 0),
    e("che", "ちぇ", 0),
    e("chi", "ち", 0),
    e("cho", "ちょ", 0),
    e("chu", "ちゅ", 0),
    e("da", "だ", 0),
    e("dd", "っ", 1),
    e("de", "で", 0),
    e("dhi", "でぃ", 0),
    e("dhu", "でゅ", 0),
    e("di", "ぢ", 0),
    e("do", "ど", 0),
    e("du", "づ", 0),
    e("dwu", "どぅ", 0),
    e("dya", "ぢゃ", 0),
    e("dye", "ぢぇ", 0),
    e("dyi", "ぢぃ", 0),
    e("dyo", "ぢょ", 0),
    e("dyu", "ぢゅ", 0),
    e("e", "え", 0),
    e("fa", "ふぁ", 0),
    e("fe", "ふぇ", 0),
    e("ff", "っ", 1),
    e("fi", "ふぃ", 0),
    e("fo", "ふぉ", 0),
    e("fu", "ふ", 0),
    e("fya", "ふゃ", 0),
    e("fye", "ふぇ", 0),
    e("fyi", "ふぃ", 0),
    e("fyo", "ふょ", 0),
    e("fyu", "ふゅ", 0),
    e("ga", "が", 0),
    e("ge", "げ", 0),
    e("gg", "っ", 1),
    e("gi", "ぎ", 0),
    e("go", "ご", 0),
    e("gu", "ぐ", 0),
    e("gwa", "ぐゎ", 0),
    e("gya", "ぎゃ", 0),
    e("gye", "ぎぇ", 0),
    e("gyi", "ぎぃ", 0),
    e("gyo", "ぎょ", 0),
    e("gyu", "ぎゅ", 0),
    e("ha", "は", 0),
    e("he", "へ", 0),
    e("hh", "っ", 1),
    e("hi", "ひ", 0),
    e("ho", "ほ", 0),
    e("hu", "ふ", 0),
    e("hya", "ひゃ", 0),
    e("hye", "ひぇ", 0),
    e("hyi", "ひぃ", 0),
    e("hyo", "ひょ", 0),
    e("hyu", "ひゅ", 0),
    e("i", "い", 0),
    e("ja", "じゃ", 0),
    e("je", "じぇ", 0),
    e("ji", "じ", 0),
    e("jj", "っ", 1),
    e("jo", "じょ", 0),
    e("ju", "じゅ", 0),
    e("jya", "じゃ", 0),
    e("jye", "じぇ", 0),
    e("jyi", "じぃ", 0),
    e("jyo", "じょ", 0),
    e("jyu", "じゅ", 0),
    e("ka", "か", 0),
    e("ke", "け", 0),
    e("ki", "き", 0),
    e("kk", "っ", 1),
    e("ko", "こ", 0),
    e("ku", "く", 0),
    e("kwa", "くゎ", 0),
    e("kya", "きゃ", 0),
    e("kye", "きぇ", 0),
    e("kyi", "きぃ", 0),
    e("kyo", "きょ", 0),
    e("kyu", "きゅ", 0),
    e("la", "ぁ", 0),
    e("le", "ぇ", 0),
    e("li", "ぃ", 0),
    e("ll", "っ", 1),
    e("lo", "ぉ", 0),
    e("ltsu", "っ", 0),
    e("ltu", "っ", 0),
    e("lu", "ぅ", 0),
    e("lwa", "ゎ", 0),
    e("lya", "ゃ", 0),
    e("lye", "ぇ", 0),
    e("lyi", "ぃ", 0),
    e("lyo", "ょ", 0),
    e("lyu", "ゅ", 0),
    e("ma", "ま", 0),
    e("me", "め", 0),
    e("mi", "み", 0),
    e("mm", "っ", 1),
    e("mo", "も", 0),
    e("mu", "む", 0),
    e("mya", "みゃ", 0),
    e("mye", "みぇ", 0),
    e("myi", "みぃ", 0),
    e("myo", "みょ", 0),
    e("myu", "みゅ", 0),
    e("n", "ん", 0),
    e("n'", "ん", 0),
    e("na", "な", 0),
    e("ne", "ね", 0),
    e("ni", "に", 0),
    e("nn", "ん", 0),
    e("no", "の", 0),
    e("nu", "ぬ", 0),
    e("nya", "にゃ", 0),
    e("nye", "にぇ", 0),
    e("nyi", "にぃ", 0),
    e("nyo", "にょ", 0),
    e("nyu", "にゅ", 0),
    e("o", "お", 0),
    e("pa", "ぱ", 0),
    e("pe", "ぺ", 0),
    e("pi", "ぴ", 0),
    e("po", "ぽ", 0),
    e("pp", "っ", 1),
    e("pu", "ぷ", 0),
    e("pya", "ぴゃ", 0),
    e("pye", "ぴぇ", 0),
    e("pyi", "ぴぃ", 0),
    e("pyo", "ぴょ", 0),
    e("pyu", "ぴゅ", 0),
    e("qa", "くぁ", 0),
    e("qe", "くぇ", 0),
    e("qi", "くぃ", 0),
    e("qo", "くぉ", 0),
    e("qq", "っ", 1),
    e("ra", "ら", 0),
    e("re", "れ", 0),
    e("ri", "り", 0),
    e("ro", "ろ", 0),
    e("rr", "っ", 1),
    e("ru", "る", 0),
    e("rya", "りゃ", 0),
    e("rye", "りぇ", 0),
    e("ryi", "りぃ", 0),
    e("ryo", "りょ", 0),
    e("ryu", "りゅ", 0),
    e("sa", "さ", 0),
    e("se", "せ", 0),
    e("sha", "しゃ", 0),
    e("she", "しぇ", 0),
    e("shi", "し", 0),
    e("sho", "しょ", 0),
    e("shu", "しゅ", 0),
    e("si", "し", 0),
    e("so", "そ", 0),
    e("ss", "っ", 1),
    e("su", "す", 0),
    e("sya", "しゃ", 0),
    e("sye", "しぇ", 0),
    e("syi", "しぃ", 0),
    e("syo", "しょ", 0),
    e("syu", "しゅ", 0),
    e("ta", "た", 0),
    e("te", "て", 0),
    e("thi", "てぃ", 0),
    e("thu", "てゅ", 0),
    e("ti", "ち", 0),
    e("to", "と", 0),
    e("tsa", "つぁ", 0),
    e("tse", "つぇ", 0),
    e("tsi", "つぃ", 0),
    e("tso", "つぉ", 0),
    e("tsu", "つ", 0),
    e("tt", "っ", 1),
    e("tu", "つ", 0),
    e("twu", "とぅ", 0),
    e("tya", "ちゃ", 0),
    e("tye", "ちぇ", 0),
    e("tyi", "ちぃ", 0),
    e("tyo", "ちょ", 0),
    e("tyu", "ちゅ", 0),
    e("u", "う", 0),
    e("va", "ゔぁ", 0),
    e("ve", "ゔぇ", 0),
    e("vi", "ゔぃ", 0),
    e("vo", "ゔぉ", 0),
    e("vu", "ゔ", 0),
    e("vv", "っ", 1),
    e("vya", "ゔゃ", 0),
    e("vye", "ゔぇ", 0),
    e("vyi", "ゔぃ", 0),
    e("vyo", "ゔょ", 0),
    e("vyu", "ゔゅ", 0),
    e("wa", "わ", 0),
    e("we", "うぇ", 0),
    e("wi", "うぃ", 0),
    e("wo", "を", 0),
    e("ww", "っ", 1),
    e("wye", "ゑ", 0),
    e("wyi", "ゐ", 0),
    e("xa", "ぁ", 0),
    e("xe", "ぇ", 0),
    e("xi", "ぃ", 0),
    e("xka", "ヵ", 0),
    e("xke", "ヶ", 0),
    e("xo", "ぉ", 0),
    e("xtsu", "っ", 0),
    e("xtu", "っ", 0),
    e("xu", "ぅ", 0),
    e("xwa", "ゎ", 0),
    e("xx", "っ", 1),
    e("xya", "ゃ", 0),
    e("xye", "ぇ", 0),
    e("xyi", "ぃ", 0),
    e("xyo", "ょ", 0),
    e("xyu", "ゅ", 0),
    e("ya", "や", 0),
    e("ye", "いぇ", 0),
    e("yo", "よ", 0),
    e("yu", "ゆ", 0),
    e("yy", "っ", 1),
    e("za", "ざ", 0),
    e("ze", "ぜ", 0),
    e("zi", "じ", 0),
    e("zo", "ぞ", 0),
    e("zu", "ず", 0),
    e("zya", "じゃ", 0),
    e("zye", "じぇ", 0),
    e("zyi", "じぃ", 0),
    e("zyo", "じょ", 0),
    e("zyu", "じゅ", 0),
    e("zz", "っ", 1),
];

/// Longest-match and completion queries over [`ROMAN_ENTRIES`].
pub(crate) trait RomajiMatcher {
    /// Longest entry whose roman is a prefix of `tail`.
    fn longest_match(&self, tail: &str) -> Option<&'static RomanEntry>;

    /// Entries whose roman starts with `tail`, `tail` itself included.
    fn completions(&self, tail: &str) -> Vec<&'static RomanEntry>;
}

/// Binary search over entries keyed by their roman packed into a `u32`,
/// bytes left-aligned and zero-padded. Packing is order-preserving and
/// injective for printable ASCII, so equality on the key is equality on
/// the fragment.
#[derive(Debug, Clone)]
pub(crate) struct RomajiIndex {
    keys: Vec<u32>,
}

fn pack(fragment: &[u8]) -> u32 {
    let mut key = 0u32;
    for &byte in fragment {
        key = key << 8 | byte as u32;
    }
    key << (8 * (4 - fragment.len()))
}

impl RomajiIndex {
    pub(crate) fn new() -> Self {
        let keys = ROMAN_ENTRIES
            .iter()
            .map(|entry| pack(entry.roman.as_bytes()))
            .collect();
        Self { keys }
    }
}

impl RomajiMatcher for RomajiIndex {
    fn longest_match(&self, tail: &str) -> Option<&'static RomanEntry> {
        let bytes = tail.as_bytes();
        for len in (1..=bytes.len().min(4)).rev() {
            let head = &bytes[..len];
            if !head.is_ascii() {
                continue;
            }
            if let Ok(idx) = self.keys.binary_search(&pack(head)) {
                return Some(&ROMAN_ENTRIES[idx]);
            }
        }
        None
    }

    fn completions(&self, tail: &str) -> Vec<&'static RomanEntry> {
        let start = ROMAN_ENTRIES.partition_point(|entry| entry.roman < tail);
        ROMAN_ENTRIES[start..]
            .iter()
            .take_while(|entry| entry.roman.starts_with(tail))
            .collect()
    }
}

/// Double-array trie over the same entries. Transition from `slot` on byte
/// `code` lands at `base[slot] + code`, valid iff `check` there points back
/// at `slot`.
#[derive(Debug, Clone)]
pub(crate) struct RomajiTrie {
    base: Vec<u32>,
    check: Vec<i32>,
    entry: Vec<Option<u16>>,
}

impl RomajiTrie {
    pub(crate) fn new() -> Self {
        // Plain pointer trie first, then slot assignment level by level.
        let mut children: Vec<Vec<(u8, usize)>> = vec![Vec::new()];
        let mut entry_at: Vec<Option<u16>> = vec![None];
        for (idx, entry) in ROMAN_ENTRIES.iter().enumerate() {
            let mut node = 0;
            for &byte in entry.roman.as_bytes() {
                node = match children[node].iter().find(|(b, _)| *b == byte) {
                    Some(&(_, next)) => next,
                    None => {
                        children.push(Vec::new());
                        entry_at.push(None);
                        let next = children.len() - 1;
                        children[node].push((byte, next));
                        next
                    }
                };
            }
            entry_at[node] = Some(idx as u16);
        }

        let mut trie = Self {
            base: vec![0],
            check: vec![0],
            entry: vec![None],
        };
        let mut slot_of = vec![0usize; children.len()];
        let mut queue = std::collections::VecDeque::from([0usize]);
        while let Some(node) = queue.pop_front() {
            if children[node].is_empty() {
                continue;
            }
            let slot = slot_of[node];
            let base = trie.find_base(&children[node]);
            trie.base[slot] = base;
            for &(byte, child) in &children[node] {
                let target = base as usize + byte as usize;
                trie.check[target] = slot as i32;
                trie.entry[target] = entry_at[child];
                slot_of[child] = target;
                queue.push_back(child);
            }
        }
        trie
    }

    /// Smallest base leaving every needed slot vacant.
    fn find_base(&mut self, edges: &[(u8, usize)]) -> u32 {
        let mut base = 1u32;
        loop {
            let high = base as usize + edges.last().map_or(0, |&(b, _)| b as usize);
            if high >= self.check.len() {
                self.check.resize(high + 1, -1);
                self.base.resize(high + 1, 0);
                self.entry.resize(high + 1, None);
            }
            if edges
                .iter()
                .all(|&(byte, _)| self.check[base as usize + byte as usize] < 0)
            {
                return base;
            }
            base += 1;
        }
    }

    fn step(&self, slot: usize, byte: u8) -> Option<usize> {
        let target = self.base[slot] as usize + byte as usize;
        (target < self.check.len() && self.check[target] == slot as i32).then_some(target)
    }

    fn collect(&self, slot: usize, out: &mut Vec<&'static RomanEntry>) {
        if let Some(idx) = self.entry[slot] {
            out.push(&ROMAN_ENTRIES[idx as usize]);
        }
        for byte in 0x20..0x7fu8 {
            if let Some(next) = self.step(slot, byte) {
                self.collect(next, out);
            }
        }
    }
}

impl RomajiMatcher for RomajiTrie {
    fn longest_match(&self, tail: &str) -> Option<&'static RomanEntry> {
        let mut slot = 0;
        let mut best = None;
        for &byte in tail.as_bytes() {
            let Some(next) = self.step(slot, byte) else {
                break;
            };
            slot = next;
            if let Some(idx) = self.entry[slot] {
                best = Some(&ROMAN_ENTRIES[idx as usize]);
            }
        }
        best
    }

    fn completions(&self, tail: &str) -> Vec<&'static RomanEntry> {
        let mut slot = 0;
        for &byte in tail.as_bytes() {
            let Some(next) = self.step(slot, byte) else {
                return Vec::new();
            };
            slot = next;
        }
        let mut out = Vec::new();
        self.collect(slot, &mut out);
        out
    }
}

/// Transliterates `input`, copying anything the table does not cover.
pub(crate) fn to_hiragana(matcher: &impl RomajiMatcher, input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pos = 0;
    while pos < input.len() {
        let tail = &input[pos..];
        match matcher.longest_match(tail) {
            Some(entry) => {
                out.push_str(entry.hiragana);
                pos += entry.roman.len() - entry.remain;
            }
            None => {
                // Slicing at `pos` keeps it on a char boundary.
                let ch = tail.chars().next().unwrap_or('\0');
                out.push(ch);
                pos += ch.len_utf8();
            }
        }
    }
    out
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RomajiPredictiveResult {
    pub(crate) prefix: String,
    /// Plausible hiragana completions of the unresolved tail; a single
    /// empty string when the input resolved fully.
    pub(crate) suffixes: Vec<String>,
}

/// Like [`to_hiragana`] but stops at an ambiguous trailing fragment and
/// reports every syllable it could still become.
pub(crate) fn to_hiragana_predictively(
    matcher: &impl RomajiMatcher,
    input: &str,
) -> RomajiPredictiveResult {
    let mut out = String::with_capacity(input.len());
    let mut pos = 0;
    while pos < input.len() {
        let tail = &input[pos..];
        let matched = matcher.longest_match(tail);
        let consumed = matched.map_or(0, |entry| entry.roman.len() - entry.remain);
        if consumed > 0 && consumed < tail.len() {
            if let Some(entry) = matched {
                out.push_str(entry.hiragana);
            }
            pos += consumed;
            continue;
        }
        let completions = matcher.completions(tail);
        if completions
            .iter()
            .any(|entry| entry.roman.len() > tail.len())
        {
            let mut suffixes: Vec<String> = completions
                .iter()
                .filter(|entry| entry.remain == 0)
                .map(|entry| entry.hiragana.to_string())
                .collect();
            suffixes.sort();
            suffixes.dedup();
            return RomajiPredictiveResult {
                prefix: out,
                suffixes,
            };
        }
        match matched {
            Some(entry) => {
                // Exact match for the entire tail.
                out.push_str(entry.hiragana);
                pos = input.len();
            }
            None => {
                let ch = tail.chars().next().unwrap_or('\0');
                out.push(ch);
                pos += ch.len_utf8();
            }
        }
    }
    RomajiPredictiveResult {
        prefix: out,
        suffixes: vec![String::new()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_and_packable() {
        for pair in ROMAN_ENTRIES.windows(2) {
            assert!(pair[0].roman < pair[1].roman);
        }
        for entry in ROMAN_ENTRIES {
            assert!((1..=4).contains(&entry.roman.len()));
            assert!(entry.roman.is_ascii());
            assert!(entry.remain < entry.roman.len());
        }
    }

    #[test]
    fn longest_match_prefers_the_longer_fragment() {
        let index = RomajiIndex::new();
        assert_eq!(index.longest_match("kya").unwrap().hiragana, "きゃ");
        assert_eq!(index.longest_match("ka").unwrap().hiragana, "か");
        assert_eq!(index.longest_match("kk").unwrap().hiragana, "っ");
        assert_eq!(index.longest_match("nka").unwrap().hiragana, "ん");
        assert!(index.longest_match("q").is_none());
    }

    #[test]
    fn strategies_agree_on_transliteration() {
        let index = RomajiIndex::new();
        let trie = RomajiTrie::new();
        for input in [
            "kensaku", "kanji", "shinbun", "gakkou", "tukue", "chottomatte",
            "konnnichiha", "n'a", "vaiorin", "xtu", "a-mondo", "mix3ed",
        ] {
            assert_eq!(
                to_hiragana(&index, input),
                to_hiragana(&trie, input),
                "input {input}"
            );
        }
    }

    #[test]
    fn transliterates_common_words() {
        let trie = RomajiTrie::new();
        assert_eq!(to_hiragana(&trie, "kensaku"), "けんさく");
        assert_eq!(to_hiragana(&trie, "gakkou"), "がっこう");
        assert_eq!(to_hiragana(&trie, "konnnichiha"), "こんにちは");
        assert_eq!(to_hiragana(&trie, "ra-men"), "らーめん");
        assert_eq!(to_hiragana(&trie, "123"), "123");
    }

    #[test]
    fn predictive_expands_an_ambiguous_tail() {
        let trie = RomajiTrie::new();
        let result = to_hiragana_predictively(&trie, "ky");
        assert_eq!(result.prefix, "");
        for suffix in ["きゃ", "きゅ", "きょ"] {
            assert!(result.suffixes.contains(&suffix.to_string()), "{suffix}");
        }

        let result = to_hiragana_predictively(&trie, "kak");
        assert_eq!(result.prefix, "か");
        assert!(result.suffixes.contains(&"か".to_string()));
        assert!(result.suffixes.contains(&"きゃ".to_string()));
    }

    #[test]
    fn predictive_keeps_sokuon_and_syllabic_n() {
        let trie = RomajiTrie::new();
        let result = to_hiragana_predictively(&trie, "kakk");
        assert_eq!(result.prefix, "かっ");
        assert!(result.suffixes.contains(&"か".to_string()));
        // The doubled consonant itself never completes the word.
        assert!(!result.suffixes.contains(&"っ".to_string()));

        let result = to_hiragana_predictively(&trie, "kan");
        assert_eq!(result.prefix, "か");
        assert!(result.suffixes.contains(&"ん".to_string()));
        assert!(result.suffixes.contains(&"な".to_string()));
    }

    #[test]
    fn resolved_input_yields_the_empty_suffix() {
        let trie = RomajiTrie::new();
        let result = to_hiragana_predictively(&trie, "kensaku");
        assert_eq!(result.prefix, "けんさく");
        assert_eq!(result.suffixes, vec![String::new()]);
    }
}
