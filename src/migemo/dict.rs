//! Compact dictionary: two LOUDS tries plus a sparse node-to-value mapping.
//!
//! The key trie holds readings (hiragana), the value trie holds surface
//! forms, and a third bit vector maps every key-trie node to its slice of a
//! flat value-node array. Everything is immutable after loading; lookups
//! are rank/select arithmetic only.
//!
//! Binary layout, all length fields big-endian `i32`, bit-vector words
//! serialized as upper-`u32` then lower-`u32`:
//!
//! ```text
//! key edge count   | key edges, one compact-hiragana byte each
//! key bit count    | key trie LOUDS words
//! value edge count | value edges, one big-endian u16 each
//! value bit count  | value trie LOUDS words
//! mapping bit count| mapping words
//! mapping length   | mapping entries, big-endian i32 value-trie nodes
//! ```

use std::path::Path;

use crate::migemo::bitvec::BitVector;
use crate::migemo::louds::LoudsTrie;
use crate::{Error, Result};

#[derive(Debug, Clone)]
pub struct CompactDictionary {
    key_trie: LoudsTrie,
    value_trie: LoudsTrie,
    mapping_bits: BitVector,
    mapping: Vec<u32>,
}

impl CompactDictionary {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = std::fs::read(path.as_ref())
            .map_err(|e| Error::DictionaryFormat(format!("read failed: {e}")))?;
        Self::from_bytes(&bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut reader = ByteReader::new(bytes);

        let key_edge_count = reader.read_len("key edge count")?;
        let mut key_labels = Vec::with_capacity(key_edge_count);
        for _ in 0..key_edge_count {
            key_labels.push(decode_compact_hiragana(reader.read_u8()?)?);
        }
        let key_bit_count = reader.read_len("key bit count")?;
        let key_words = reader.read_words(key_bit_count)?;

        let value_edge_count = reader.read_len("value edge count")?;
        let mut value_labels = Vec::with_capacity(value_edge_count);
        for _ in 0..value_edge_count {
            let unit = reader.read_u16()?;
            let label = char::from_u32(unit as u32).ok_or_else(|| {
                Error::DictionaryFormat(format!("surrogate value edge {unit:#06x}"))
            })?;
            value_labels.push(label);
        }
        let value_bit_count = reader.read_len("value bit count")?;
        let value_words = reader.read_words(value_bit_count)?;

        let mapping_bit_count = reader.read_len("mapping bit count")?;
        let mapping_words = reader.read_words(mapping_bit_count)?;
        let mapping_len = reader.read_len("mapping length")?;
        let mut mapping = Vec::with_capacity(mapping_len);
        for _ in 0..mapping_len {
            mapping.push(reader.read_len("mapping entry")? as u32);
        }
        if !reader.is_empty() {
            return Err(Error::DictionaryFormat(format!(
                "{} trailing bytes",
                reader.remaining()
            )));
        }

        let dict = Self {
            key_trie: LoudsTrie::from_parts(
                BitVector::new(key_words, key_bit_count),
                key_labels,
            ),
            value_trie: LoudsTrie::from_parts(
                BitVector::new(value_words, value_bit_count),
                value_labels,
            ),
            mapping_bits: BitVector::new(mapping_words, mapping_bit_count),
            mapping,
        };
        for &node in &dict.mapping {
            if node as usize > dict.value_trie.last_node() {
                return Err(Error::DictionaryFormat(format!(
                    "mapping entry {node} out of range"
                )));
            }
        }
        Ok(dict)
    }

    /// Surface forms whose reading is exactly `key`.
    pub fn search(&self, key: &str) -> Vec<String> {
        let Some(node) = self.key_trie.lookup(key) else {
            return Vec::new();
        };
        self.values_for_node(node)
    }

    /// Surface forms whose reading starts with `key`.
    pub fn predictive_search(&self, key: &str) -> Vec<String> {
        let Some(node) = self.key_trie.lookup(key) else {
            return Vec::new();
        };
        let mut out = Vec::new();
        for descendant in self.key_trie.descendants(node) {
            out.extend(self.values_for_node(descendant));
        }
        out
    }

    /// The mapping bit vector carries one clear bit per key-trie node
    /// followed by one set bit per value of that node; the set-bit rank
    /// indexes the flat value-node array.
    fn values_for_node(&self, node: usize) -> Vec<String> {
        let Some(start) = self.mapping_bits.select(node, false) else {
            return Vec::new();
        };
        let end = self.mapping_bits.next_clear_bit(start + 1);
        let count = end - start - 1;
        if count == 0 {
            return Vec::new();
        }
        let base = self.mapping_bits.rank(start, true);
        self.mapping[base..base + count]
            .iter()
            .map(|&value_node| self.value_trie.key_of(value_node as usize))
            .collect()
    }
}

struct ByteReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn is_empty(&self) -> bool {
        self.pos == self.bytes.len()
    }

    fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    fn read_u8(&mut self) -> Result<u8> {
        let byte = self
            .bytes
            .get(self.pos)
            .copied()
            .ok_or_else(|| Error::DictionaryFormat("truncated input".to_string()))?;
        self.pos += 1;
        Ok(byte)
    }

    fn read_u16(&mut self) -> Result<u16> {
        let hi = self.read_u8()? as u16;
        let lo = self.read_u8()? as u16;
        Ok(hi << 8 | lo)
    }

    fn read_u32(&mut self) -> Result<u32> {
        let hi = self.read_u16()? as u32;
        let lo = self.read_u16()? as u32;
        Ok(hi << 16 | lo)
    }

    fn read_len(&mut self, what: &str) -> Result<usize> {
        let raw = self.read_u32()? as i32;
        usize::try_from(raw)
            .map_err(|_| Error::DictionaryFormat(format!("negative {what}: {raw}")))
    }

    /// Reads the words backing a bit vector of `bit_count` bits. Each word
    /// is stored as its upper half first.
    fn read_words(&mut self, bit_count: usize) -> Result<Vec<u64>> {
        let n_words = bit_count.div_ceil(64);
        let mut words = Vec::with_capacity(n_words);
        for _ in 0..n_words {
            let upper = self.read_u32()? as u64;
            let lower = self.read_u32()? as u64;
            words.push(upper << 32 | lower);
        }
        Ok(words)
    }
}

/// Key-trie edges use a one-byte encoding: printable ASCII maps to itself,
/// 0xA1..=0xF6 to the hiragana block from U+3041, 0xF7 to the prolonged
/// sound mark.
pub(crate) fn decode_compact_hiragana(byte: u8) -> Result<char> {
    match byte {
        0x20..=0x7E => Ok(byte as char),
        0xA1..=0xF6 => Ok(char::from_u32(0x3041 + (byte - 0xA1) as u32)
            .unwrap_or('\u{3041}')),
        0xF7 => Ok('\u{30FC}'),
        _ => Err(Error::DictionaryFormat(format!(
            "unencodable key byte {byte:#04x}"
        ))),
    }
}

pub(crate) fn encode_compact_hiragana(ch: char) -> Option<u8> {
    match ch {
        ' '..='~' => Some(ch as u8),
        '\u{3041}'..='\u{3096}' => Some(0xA1 + (ch as u32 - 0x3041) as u8),
        '\u{30FC}' => Some(0xF7),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::migemo::dict_builder::CompactDictionaryBuilder;
    use std::collections::BTreeMap;

    fn sample() -> CompactDictionary {
        let mut entries: BTreeMap<String, Vec<String>> = BTreeMap::new();
        entries.insert("けん".to_string(), vec!["件".to_string(), "県".to_string()]);
        entries.insert("けんさく".to_string(), vec!["検索".to_string()]);
        entries.insert("けs".to_string(), vec!["消".to_string()]);
        let (bytes, skipped) = CompactDictionaryBuilder::build(&entries);
        assert!(skipped.is_empty());
        CompactDictionary::from_bytes(&bytes).unwrap()
    }

    #[test]
    fn search_is_exact() {
        let dict = sample();
        let mut hits = dict.search("けん");
        hits.sort();
        assert_eq!(hits, ["件", "県"]);
        assert_eq!(dict.search("けんさく"), ["検索"]);
        assert!(dict.search("け").is_empty());
        assert!(dict.search("あ").is_empty());
    }

    #[test]
    fn predictive_search_covers_the_prefix_subtree() {
        let dict = sample();
        let mut hits = dict.predictive_search("け");
        hits.sort();
        assert_eq!(hits, ["件", "検索", "消", "県"]);
        assert_eq!(dict.predictive_search("けんさ"), ["検索"]);
        assert!(dict.predictive_search("こ").is_empty());
    }

    #[test]
    fn compact_hiragana_codec_round_trips() {
        for ch in ('\u{3041}'..='\u{3096}').chain(" azAZ09~ー".chars()) {
            let byte = encode_compact_hiragana(ch).unwrap();
            assert_eq!(decode_compact_hiragana(byte).unwrap(), ch);
        }
        assert_eq!(encode_compact_hiragana('カ'), None);
        assert_eq!(encode_compact_hiragana('漢'), None);
        assert!(decode_compact_hiragana(0x00).is_err());
    }

    #[test]
    fn truncated_input_is_rejected() {
        let mut entries = BTreeMap::new();
        entries.insert("か".to_string(), vec!["可".to_string()]);
        let (bytes, _) = CompactDictionaryBuilder::build(&entries);
        assert!(CompactDictionary::from_bytes(&bytes[..bytes.len() - 1]).is_err());
        assert!(CompactDictionary::from_bytes(&[0, 0]).is_err());
        let mut padded = bytes.clone();
        padded.push(0);
        assert!(CompactDictionary::from_bytes(&padded).is_err());
    }
}
