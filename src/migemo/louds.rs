//! LOUDS-encoded trie.
//!
//! Tree shape lives in one bit vector (Level-Order Unary Degree Sequence):
//! a leading `10` for the super root, then one `1` per child and a closing
//! `0` for every node in level order. Node `i` is the `i`-th set bit, the
//! root is node 1, and all navigation is rank/select arithmetic; no
//! pointers are stored. Edge labels sit in a flat array indexed by node
//! number, with two leading dummy slots for the nonexistent node 0 and the
//! unlabeled root.

use crate::migemo::bitvec::BitVector;

#[derive(Debug, Clone)]
pub(crate) struct LoudsTrie {
    bits: BitVector,
    edges: Vec<char>,
}

impl LoudsTrie {
    /// Reassembles a trie from its serialized parts. `edges` holds only the
    /// real labels (node 2 onward).
    pub(crate) fn from_parts(bits: BitVector, labels: Vec<char>) -> Self {
        let mut edges = Vec::with_capacity(labels.len() + 2);
        edges.push('\0');
        edges.push('\0');
        edges.extend(labels);
        Self { bits, edges }
    }

    /// Builds a trie over `keys`. Duplicate keys are fine; sibling edges
    /// come out sorted so `traverse` can binary-search them.
    pub(crate) fn build(keys: &[&str]) -> Self {
        let keys: Vec<Vec<char>> = keys.iter().map(|k| k.chars().collect()).collect();
        let mut bits = vec![true, false];
        let mut edges = vec!['\0', '\0'];

        // Each queue item is one node: the keys passing through it and the
        // depth of its incoming edge.
        let mut queue: std::collections::VecDeque<(Vec<usize>, usize)> =
            std::collections::VecDeque::new();
        queue.push_back(((0..keys.len()).collect(), 0));
        while let Some((members, depth)) = queue.pop_front() {
            let mut labels: Vec<char> = members
                .iter()
                .filter_map(|&k| keys[k].get(depth).copied())
                .collect();
            labels.sort_unstable();
            labels.dedup();
            for &label in &labels {
                let group: Vec<usize> = members
                    .iter()
                    .copied()
                    .filter(|&k| keys[k].get(depth) == Some(&label))
                    .collect();
                bits.push(true);
                edges.push(label);
                queue.push_back((group, depth + 1));
            }
            bits.push(false);
        }
        Self {
            bits: BitVector::from_bits(&bits),
            edges,
        }
    }

    /// Largest valid node number.
    pub(crate) fn last_node(&self) -> usize {
        self.edges.len() - 1
    }

    pub(crate) fn labels(&self) -> &[char] {
        &self.edges[2..]
    }

    pub(crate) fn bits(&self) -> &BitVector {
        &self.bits
    }

    pub(crate) fn parent(&self, node: usize) -> Option<usize> {
        if node <= 1 {
            return None;
        }
        let pos = self.bits.select(node, true)?;
        Some(self.bits.rank(pos, false))
    }

    /// Node numbers of the children of `node`, as a half-open range.
    /// Children of consecutive nodes are themselves consecutive.
    pub(crate) fn child_range(&self, node: usize) -> std::ops::Range<usize> {
        let Some(zero) = self.bits.select(node, false) else {
            return 0..0;
        };
        let first_bit = zero + 1;
        if first_bit >= self.bits.len() || !self.bits.get(first_bit) {
            return 0..0;
        }
        let end_bit = self.bits.next_clear_bit(first_bit);
        let first = self.bits.rank(first_bit + 1, true);
        first..first + (end_bit - first_bit)
    }

    /// Child of `node` along edge `label`.
    pub(crate) fn traverse(&self, node: usize, label: char) -> Option<usize> {
        let range = self.child_range(node);
        if range.is_empty() {
            return None;
        }
        let siblings = &self.edges[range.start..range.end];
        siblings
            .binary_search(&label)
            .ok()
            .map(|offset| range.start + offset)
    }

    /// Node reached by walking `key` from the root.
    pub(crate) fn lookup(&self, key: &str) -> Option<usize> {
        let mut node = 1;
        for c in key.chars() {
            node = self.traverse(node, c)?;
        }
        Some(node)
    }

    /// The key spelled along the path from the root to `node`.
    pub(crate) fn key_of(&self, node: usize) -> String {
        let mut reversed = Vec::new();
        let mut current = node;
        while current > 1 {
            reversed.push(self.edges[current]);
            current = match self.parent(current) {
                Some(parent) => parent,
                None => break,
            };
        }
        reversed.iter().rev().collect()
    }

    /// `node` and every descendant, in level order. Walks sibling ranges
    /// level by level; the only state is the per-level node range.
    pub(crate) fn descendants(&self, node: usize) -> Vec<usize> {
        let mut out = Vec::new();
        let mut level = node..node + 1;
        while !level.is_empty() {
            out.extend(level.clone());
            let mut next: Option<std::ops::Range<usize>> = None;
            for n in level {
                let children = self.child_range(n);
                if children.is_empty() {
                    continue;
                }
                next = match next {
                    None => Some(children),
                    Some(range) => Some(range.start..children.end),
                };
            }
            level = next.unwrap_or(0..0);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LoudsTrie {
        LoudsTrie::build(&["baku", "ba", "bea", "ko", "kobu"])
    }

    #[test]
    fn lookup_finds_every_key() {
        let trie = sample();
        for key in ["baku", "ba", "bea", "ko", "kobu"] {
            let node = trie.lookup(key).unwrap_or_else(|| panic!("missing {key}"));
            assert_eq!(trie.key_of(node), key);
        }
        assert_eq!(trie.lookup("b"), trie.lookup("b"));
        assert!(trie.lookup("x").is_none());
        assert!(trie.lookup("bakuX").is_none());
    }

    #[test]
    fn parent_inverts_traverse() {
        let trie = sample();
        let b = trie.traverse(1, 'b').unwrap();
        let ba = trie.traverse(b, 'a').unwrap();
        assert_eq!(trie.parent(ba), Some(b));
        assert_eq!(trie.parent(b), Some(1));
        assert_eq!(trie.parent(1), None);
    }

    #[test]
    fn descendants_cover_the_subtree() {
        let trie = sample();
        let ko = trie.lookup("ko").unwrap();
        let keys: Vec<String> = trie
            .descendants(ko)
            .into_iter()
            .map(|n| trie.key_of(n))
            .collect();
        assert!(keys.contains(&"ko".to_string()));
        assert!(keys.contains(&"kob".to_string()));
        assert!(keys.contains(&"kobu".to_string()));
        assert_eq!(keys.len(), 3);
    }

    #[test]
    fn serialized_parts_round_trip() {
        let trie = sample();
        let labels = trie.labels().to_vec();
        let bits = BitVector::new(trie.bits().words().to_vec(), trie.bits().len());
        let rebuilt = LoudsTrie::from_parts(bits, labels);
        for key in ["baku", "bea", "kobu"] {
            assert_eq!(rebuilt.lookup(key), trie.lookup(key));
        }
    }
}
