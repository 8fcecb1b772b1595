//! Offline serializer for the compact dictionary format.
//!
//! Not a hot path: this runs in the asset-generation tool and in tests.
//! The emitted bytes are the on-disk contract `CompactDictionary` parses.

use std::collections::BTreeMap;

use crate::migemo::dict::encode_compact_hiragana;
use crate::migemo::louds::LoudsTrie;

pub struct CompactDictionaryBuilder;

impl CompactDictionaryBuilder {
    /// Serializes `entries` (reading → surface forms). Keys that the
    /// compact-hiragana codec cannot express, and keys left without any
    /// BMP-representable surface form, are dropped and returned so the
    /// caller can warn about them instead of aborting the build.
    pub fn build(entries: &BTreeMap<String, Vec<String>>) -> (Vec<u8>, Vec<String>) {
        let mut skipped = Vec::new();
        let mut kept: Vec<(&str, Vec<&str>)> = Vec::new();
        for (key, values) in entries {
            let encodable = key.chars().all(|c| encode_compact_hiragana(c).is_some());
            let values: Vec<&str> = values
                .iter()
                .map(String::as_str)
                .filter(|v| v.chars().all(|c| (c as u32) <= 0xFFFF))
                .collect();
            if encodable && !values.is_empty() {
                kept.push((key, values));
            } else {
                skipped.push(key.clone());
            }
        }

        let keys: Vec<&str> = kept.iter().map(|(k, _)| *k).collect();
        let key_trie = LoudsTrie::build(&keys);
        let mut surfaces: Vec<&str> = kept
            .iter()
            .flat_map(|(_, values)| values.iter().copied())
            .collect();
        surfaces.sort_unstable();
        surfaces.dedup();
        let value_trie = LoudsTrie::build(&surfaces);

        // One clear bit per key-trie node, one set bit per value of that
        // node; the flat array lists the value-trie nodes in the same order.
        let mut mapping_bits = Vec::new();
        let mut mapping = Vec::new();
        for node in 1..=key_trie.last_node() {
            mapping_bits.push(false);
            let key = key_trie.key_of(node);
            let Ok(idx) = kept.binary_search_by(|(k, _)| k.cmp(&key.as_str())) else {
                continue;
            };
            for &value in &kept[idx].1 {
                let Some(value_node) = value_trie.lookup(value) else {
                    continue;
                };
                mapping_bits.push(true);
                mapping.push(value_node as u32);
            }
        }
        let mapping_bits = crate::migemo::bitvec::BitVector::from_bits(&mapping_bits);

        let mut out = Vec::new();
        let key_labels = key_trie.labels();
        push_u32(&mut out, key_labels.len() as u32);
        for &label in key_labels {
            // Filtered above; unencodable labels cannot reach this point.
            out.push(encode_compact_hiragana(label).unwrap_or(b'?'));
        }
        push_bit_vector(&mut out, key_trie.bits());
        let value_labels = value_trie.labels();
        push_u32(&mut out, value_labels.len() as u32);
        for &label in value_labels {
            push_u16(&mut out, label as u16);
        }
        push_bit_vector(&mut out, value_trie.bits());
        push_bit_vector(&mut out, &mapping_bits);
        push_u32(&mut out, mapping.len() as u32);
        for value_node in mapping {
            push_u32(&mut out, value_node);
        }
        (out, skipped)
    }
}

fn push_u16(out: &mut Vec<u8>, value: u16) {
    out.extend_from_slice(&value.to_be_bytes());
}

fn push_u32(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&value.to_be_bytes());
}

fn push_bit_vector(out: &mut Vec<u8>, bits: &crate::migemo::bitvec::BitVector) {
    push_u32(out, bits.len() as u32);
    for &word in bits.words() {
        push_u32(out, (word >> 32) as u32);
        push_u32(out, word as u32);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::migemo::dict::CompactDictionary;

    #[test]
    fn round_trip_preserves_every_entry() {
        let mut entries: BTreeMap<String, Vec<String>> = BTreeMap::new();
        entries.insert("あい".into(), vec!["愛".into(), "藍".into()]);
        entries.insert("あお".into(), vec!["青".into()]);
        entries.insert("かき".into(), vec!["柿".into(), "牡蠣".into()]);
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
    }

    #[test]
    fn unencodable_keys_are_reported_not_fatal() {
        let mut entries: BTreeMap<String, Vec<String>> = BTreeMap::new();
        entries.insert("カナ".into(), vec!["仮名".into()]);
        entries.insert("かな".into(), vec!["仮名".into()]);
        entries.insert("えもじ".into(), vec!["😀".into()]);
        let (bytes, skipped) = CompactDictionaryBuilder::build(&entries);
        assert_eq!(skipped, ["えもじ", "カナ"]);
        let dict = CompactDictionary::from_bytes(&bytes).unwrap();
        assert_eq!(dict.search("かな"), ["仮名"]);
        assert!(dict.search("カナ").is_empty());
    }

    #[test]
    fn empty_input_builds_an_empty_dictionary() {
        let (bytes, skipped) = CompactDictionaryBuilder::build(&BTreeMap::new());
        assert!(skipped.is_empty());
        let dict = CompactDictionary::from_bytes(&bytes).unwrap();
        assert!(dict.search("あ").is_empty());
        assert!(dict.predictive_search("").is_empty());
    }
}
