//! Fixed-length bit array backing a Bloom filter.
//!
//! Bits are packed into 64-bit words in little-endian bit order:
//!
//! ```text
//! Word 0: [bit 0][bit 1]...[bit 63]
//! Word 1: [bit 64][bit 65]...[bit 127]
//! ```
//!
//! The length is fixed at construction and bits only ever go from 0 to 1.
//! There is no clear or unset operation.
//!
//! # Performance Characteristics
//!
//! - Space: `⌈n/64⌉ * 8` bytes for `n` bits
//! - `set` / `get`: O(1)
//! - `count_ones`: O(n/64), uses the POPCNT instruction where available
//!
//! # Examples
//!
//! ```
//! use bloomset::core::BitVec;
//!
//! let mut bv = BitVec::new(100).unwrap();
//! assert!(bv.set(42));
//! assert!(!bv.set(42)); // already set
//! assert!(bv.get(42));
//! assert!(!bv.get(43));
//! assert_eq!(bv.count_ones(), 1);
//! ```

use crate::error::{BloomError, Result};

/// Fixed-length bit array, all bits initially 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitVec {
    /// Storage words, each holding 64 bits.
    words: Box<[u64]>,

    /// Number of addressable bits.
    len: usize,
}

impl BitVec {
    /// Create a bit vector of `num_bits` bits, all unset.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if `num_bits` is 0.
    pub fn new(num_bits: usize) -> Result<Self> {
        if num_bits == 0 {
            return Err(BloomError::invalid_filter_size(num_bits));
        }

        Ok(Self {
            words: vec![0u64; words_for(num_bits)].into_boxed_slice(),
            len: num_bits,
        })
    }

    /// Rebuild a bit vector from its raw words.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if `num_bits` is 0, if the word count does
    /// not match `num_bits`, or if any bit at or past `num_bits` is set.
    pub fn from_words(words: Vec<u64>, num_bits: usize) -> Result<Self> {
        if num_bits == 0 {
            return Err(BloomError::invalid_filter_size(num_bits));
        }
        if words.len() != words_for(num_bits) {
            return Err(BloomError::invalid_configuration(
                "words",
                format!(
                    "{} words cannot hold exactly {} bits (expected {})",
                    words.len(),
                    num_bits,
                    words_for(num_bits)
                ),
            ));
        }

        let tail = num_bits % 64;
        if tail != 0 {
            let last = words[words.len() - 1];
            if last >> tail != 0 {
                return Err(BloomError::invalid_configuration(
                    "words",
                    format!("bits set beyond bit length {}", num_bits),
                ));
            }
        }

        Ok(Self {
            words: words.into_boxed_slice(),
            len: num_bits,
        })
    }

    /// Number of bits in the vector.
    #[must_use]
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Always `false` for a successfully constructed `BitVec`.
    #[must_use]
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Set a bit to 1, returning whether it was previously 0.
    ///
    /// Idempotent: setting an already-set bit changes nothing.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`, matching slice indexing.
    #[inline]
    pub fn set(&mut self, index: usize) -> bool {
        assert!(
            index < self.len,
            "BitVec index out of bounds: index={} len={}",
            index,
            self.len
        );

        let mask = 1u64 << (index % 64);
        let word = &mut self.words[index / 64];
        let was_unset = *word & mask == 0;
        *word |= mask;
        was_unset
    }

    /// Read a bit.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[must_use]
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        assert!(
            index < self.len,
            "BitVec index out of bounds: index={} len={}",
            index,
            self.len
        );

        self.words[index / 64] & (1u64 << (index % 64)) != 0
    }

    /// Number of bits set to 1.
    #[must_use]
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Raw storage words.
    #[must_use]
    pub fn as_words(&self) -> &[u64] {
        &self.words
    }

    /// Heap bytes used by the storage words.
    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.words.len() * std::mem::size_of::<u64>()
    }
}

#[inline]
fn words_for(num_bits: usize) -> usize {
    num_bits / 64 + usize::from(num_bits % 64 != 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_all_unset() {
        let bv = BitVec::new(130).unwrap();
        assert_eq!(bv.len(), 130);
        assert!(!bv.is_empty());
        assert_eq!(bv.count_ones(), 0);
        assert_eq!(bv.as_words().len(), 3);
        assert!((0..130).all(|i| !bv.get(i)));
    }

    #[test]
    fn test_zero_length_rejected() {
        let err = BitVec::new(0).unwrap_err();
        assert!(err.is_invalid_configuration());
    }

    #[test]
    fn test_set_reports_transition() {
        let mut bv = BitVec::new(64).unwrap();
        assert!(bv.set(63));
        assert!(!bv.set(63));
        assert!(bv.get(63));
        assert_eq!(bv.count_ones(), 1);
    }

    #[test]
    fn test_word_boundaries() {
        let mut bv = BitVec::new(129).unwrap();
        for idx in [0, 63, 64, 127, 128] {
            bv.set(idx);
        }
        assert_eq!(bv.count_ones(), 5);
        assert!(bv.get(64));
        assert!(!bv.get(65));
        assert_eq!(bv.as_words()[2], 1);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_get_out_of_bounds_panics() {
        let bv = BitVec::new(10).unwrap();
        let _ = bv.get(10);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_set_out_of_bounds_panics() {
        let mut bv = BitVec::new(10).unwrap();
        bv.set(10);
    }

    #[test]
    fn test_from_words_restores_bits() {
        let mut bv = BitVec::new(100).unwrap();
        bv.set(3);
        bv.set(99);

        let restored = BitVec::from_words(bv.as_words().to_vec(), 100).unwrap();
        assert_eq!(restored, bv);
    }

    #[test]
    fn test_from_words_rejects_wrong_word_count() {
        assert!(BitVec::from_words(vec![0; 3], 100).is_err());
        assert!(BitVec::from_words(vec![0; 1], 100).is_err());
    }

    #[test]
    fn test_from_words_rejects_bits_past_length() {
        // bit 100 lives in word 1 at offset 36
        let result = BitVec::from_words(vec![0, 1u64 << 36], 100);
        assert!(result.is_err());

        // exact multiple of 64 has no tail to check
        assert!(BitVec::from_words(vec![u64::MAX], 64).is_ok());
    }

    #[test]
    fn test_memory_usage() {
        let bv = BitVec::new(1000).unwrap();
        assert_eq!(bv.memory_usage(), 16 * 8);
    }
}
