//! Bit vector with rank/select acceleration.
//!
//! Two-level precomputed population counts (one per 512-bit block, one per
//! 64-bit word within the block) give amortized O(1) `rank`; `select`
//! binary-searches the block counts and finishes inside one word. This is
//! the primitive the LOUDS tries are built on.

/// Immutable bit array with rank/select support.
#[derive(Debug, Clone)]
pub(crate) struct BitVector {
    words: Vec<u64>,
    len: usize,
    /// Ones before each 512-bit block.
    blocks: Vec<u32>,
    /// Ones from the block start to each word, within its block.
    in_block: Vec<u16>,
}

const WORD_BITS: usize = 64;
const BLOCK_WORDS: usize = 8;
const BLOCK_BITS: usize = WORD_BITS * BLOCK_WORDS;

impl BitVector {
    /// Wraps `words` holding `len` valid bits; bits past `len` must be zero.
    pub(crate) fn new(words: Vec<u64>, len: usize) -> Self {
        debug_assert!(len <= words.len() * WORD_BITS);
        let n_blocks = words.len().div_ceil(BLOCK_WORDS) + 1;
        let mut blocks = Vec::with_capacity(n_blocks);
        let mut in_block = Vec::with_capacity(words.len());
        let mut total = 0u32;
        let mut within = 0u16;
        for (i, &word) in words.iter().enumerate() {
            if i % BLOCK_WORDS == 0 {
                blocks.push(total);
                within = 0;
            }
            in_block.push(within);
            let ones = word.count_ones();
            total += ones;
            within += ones as u16;
        }
        blocks.push(total);
        Self {
            words,
            len,
            blocks,
            in_block,
        }
    }

    pub(crate) fn from_bits(bits: &[bool]) -> Self {
        let mut words = vec![0u64; bits.len().div_ceil(WORD_BITS)];
        for (i, &bit) in bits.iter().enumerate() {
            if bit {
                words[i / WORD_BITS] |= 1u64 << (i % WORD_BITS);
            }
        }
        Self::new(words, bits.len())
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn words(&self) -> &[u64] {
        &self.words
    }

    pub(crate) fn get(&self, pos: usize) -> bool {
        debug_assert!(pos < self.len);
        self.words[pos / WORD_BITS] >> (pos % WORD_BITS) & 1 == 1
    }

    /// Number of `bit` values in positions `[0, pos)`.
    pub(crate) fn rank(&self, pos: usize, bit: bool) -> usize {
        debug_assert!(pos <= self.len);
        let w = pos / WORD_BITS;
        // pos == len on a word-aligned vector lands one word past the end;
        // the final blocks entry holds the grand total.
        let ones = if w >= self.words.len() {
            self.blocks[self.blocks.len() - 1] as usize
        } else {
            let mut ones = self.blocks[w / BLOCK_WORDS] as usize + self.in_block[w] as usize;
            let shift = pos % WORD_BITS;
            if shift != 0 {
                ones += (self.words[w] & ((1u64 << shift) - 1)).count_ones() as usize;
            }
            ones
        };
        if bit { ones } else { pos - ones }
    }

    /// Position of the `count`-th `bit` value (1-based), if it exists.
    pub(crate) fn select(&self, count: usize, bit: bool) -> Option<usize> {
        if count == 0 || count > self.rank(self.len, bit) {
            return None;
        }
        // Last block whose prefix count is still below `count`.
        let block_rank = |b: usize| {
            let ones = self.blocks[b] as usize;
            if bit { ones } else { b * BLOCK_BITS - ones }
        };
        let mut lo = 0;
        let mut hi = self.blocks.len() - 1;
        while lo < hi {
            let mid = (lo + hi + 1) / 2;
            if block_rank(mid) < count {
                lo = mid;
            } else {
                hi = mid - 1;
            }
        }
        let mut remaining = count - block_rank(lo);
        let first_word = lo * BLOCK_WORDS;
        let last_word = (first_word + BLOCK_WORDS).min(self.words.len());
        for w in first_word..last_word {
            let word = if bit { self.words[w] } else { !self.words[w] };
            let ones = word.count_ones() as usize;
            if remaining > ones {
                remaining -= ones;
                continue;
            }
            let mut word = word;
            for _ in 1..remaining {
                word &= word - 1;
            }
            let pos = w * WORD_BITS + word.trailing_zeros() as usize;
            return (pos < self.len).then_some(pos);
        }
        None
    }

    /// First position at or after `pos` holding a zero bit; `len` when all
    /// remaining bits are set.
    pub(crate) fn next_clear_bit(&self, mut pos: usize) -> usize {
        while pos < self.len && self.get(pos) {
            pos += 1;
        }
        pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (Vec<bool>, BitVector) {
        // Irregular pattern crossing word and block boundaries.
        let bits: Vec<bool> = (0..1500)
            .map(|i| i % 3 == 0 || i % 7 == 0)
            .collect();
        let bv = BitVector::from_bits(&bits);
        (bits, bv)
    }

    #[test]
    fn rank_matches_naive_count() {
        let (bits, bv) = sample();
        let mut ones = 0;
        for pos in 0..=bits.len() {
            assert_eq!(bv.rank(pos, true), ones, "rank1 at {pos}");
            assert_eq!(bv.rank(pos, false), pos - ones, "rank0 at {pos}");
            if pos < bits.len() && bits[pos] {
                ones += 1;
            }
        }
    }

    #[test]
    fn select_inverts_rank() {
        let (bits, bv) = sample();
        for bit in [true, false] {
            let mut seen = 0;
            for (pos, &b) in bits.iter().enumerate() {
                if b == bit {
                    seen += 1;
                    assert_eq!(bv.select(seen, bit), Some(pos), "select {seen}");
                }
            }
            assert_eq!(bv.select(seen + 1, bit), None);
            assert_eq!(bv.select(0, bit), None);
        }
    }

    #[test]
    fn rank_and_select_at_word_aligned_lengths() {
        // Exactly one word, all set: the total must be reachable at pos == len.
        let full = BitVector::from_bits(&[true; 64]);
        assert_eq!(full.rank(64, true), 64);
        assert_eq!(full.rank(64, false), 0);
        assert_eq!(full.select(1, true), Some(0));
        assert_eq!(full.select(64, true), Some(63));

        // 576 bits = 9 words, so the last word sits alone past a block seam.
        for len in [64usize, 576] {
            let bits: Vec<bool> = (0..len).map(|i| i % 5 != 0).collect();
            let bv = BitVector::from_bits(&bits);
            let ones = bits.iter().filter(|&&b| b).count();
            assert_eq!(bv.rank(len, true), ones, "rank1 at len {len}");
            assert_eq!(bv.rank(len, false), len - ones, "rank0 at len {len}");
            let last_one = bits.iter().rposition(|&b| b);
            assert_eq!(bv.select(ones, true), last_one, "last select at len {len}");
            assert_eq!(bv.select(ones + 1, true), None);
        }
    }

    #[test]
    fn next_clear_bit_skips_runs() {
        let bv = BitVector::from_bits(&[true, true, false, true, false]);
        assert_eq!(bv.next_clear_bit(0), 2);
        assert_eq!(bv.next_clear_bit(2), 2);
        assert_eq!(bv.next_clear_bit(3), 4);
        // All ones past the last zero runs off the end.
        let ones = BitVector::from_bits(&[true; 9]);
        assert_eq!(ones.next_clear_bit(0), 9);
    }

    #[test]
    fn round_trips_through_words() {
        let (bits, bv) = sample();
        let rebuilt = BitVector::new(bv.words().to_vec(), bv.len());
        for (pos, &b) in bits.iter().enumerate() {
            assert_eq!(rebuilt.get(pos), b);
        }
    }
}
