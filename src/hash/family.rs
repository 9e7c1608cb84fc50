//! Seeded hash functions and the family that generates them.
//!
//! Each [`HashFunction`] is a small value object: a seed, the shared range `m`,
//! and the (zero-sized) hasher. Evaluating it is a pure function of the key, so
//! an `insert` followed by a `test` always visits the same slots.
//!
//! [`HashFamily`] hands out the `k` functions of one filter. Seeds come from
//! the full 64-bit space and duplicates are redrawn, so the functions of a
//! filter never share a seed.
//!
//! # Examples
//!
//! ```
//! use bloomset::hash::{HashFamily, HashFunction};
//!
//! let f = HashFunction::create(1000).unwrap();
//! assert!(f.slot(b"key") < 1000);
//! assert_eq!(f.slot(b"key"), f.slot(b"key"));
//!
//! let functions: Vec<HashFunction> = HashFamily::seeded(7).generate(5, 1000).unwrap();
//! assert_eq!(functions.len(), 5);
//! ```

use super::hasher::{SeededHasher, Xxh3Hasher};
use crate::error::{BloomError, Result};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use std::collections::HashSet;

/// One slot selector: bytes to an index in `[0, range)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashFunction<H = Xxh3Hasher> {
    seed: u64,
    range: usize,
    hasher: H,
}

impl HashFunction<Xxh3Hasher> {
    /// Create a hash function over `[0, range)` with a freshly drawn seed.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` if `range == 0`.
    pub fn create(range: usize) -> Result<Self> {
        Self::with_seed(rand::thread_rng().gen(), range)
    }

    /// Create a hash function with a caller-chosen seed.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` if `range == 0`.
    pub fn with_seed(seed: u64, range: usize) -> Result<Self> {
        Self::with_hasher(seed, range, Xxh3Hasher)
    }
}

impl<H: SeededHasher> HashFunction<H> {
    /// Create a hash function backed by a specific hasher.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` if `range == 0`.
    pub fn with_hasher(seed: u64, range: usize, hasher: H) -> Result<Self> {
        if range == 0 {
            return Err(BloomError::invalid_range(range));
        }
        Ok(Self { seed, range, hasher })
    }

    /// Map `key` to a slot in `[0, range)`.
    #[must_use]
    #[inline]
    pub fn slot(&self, key: &[u8]) -> usize {
        // range <= usize::MAX, so the remainder always fits back into usize
        (self.hasher.hash_with_seed(key, self.seed) % self.range as u64) as usize
    }

    /// The seed bound into this function.
    #[must_use]
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Size of the output range.
    #[must_use]
    #[inline]
    pub fn range(&self) -> usize {
        self.range
    }

    /// The hasher evaluated under this function's seed.
    #[must_use]
    pub fn hasher(&self) -> &H {
        &self.hasher
    }
}

/// Generates the `k` hash functions of one filter.
#[derive(Debug)]
pub struct HashFamily<R = StdRng> {
    rng: R,
}

impl HashFamily<StdRng> {
    /// Family seeded from operating system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic family: the same seed always yields the same functions.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: RngCore> HashFamily<R> {
    /// Family drawing seeds from a caller-supplied RNG.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generate `count` default-hasher functions over `[0, range)`.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` if `count == 0` or `range == 0`.
    pub fn generate(&mut self, count: usize, range: usize) -> Result<Vec<HashFunction>> {
        self.generate_with_hasher(count, range, Xxh3Hasher)
    }

    /// Generate `count` functions over `[0, range)` sharing `hasher`.
    ///
    /// Seeds are pairwise distinct.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` if `count == 0` or `range == 0`.
    pub fn generate_with_hasher<H: SeededHasher>(
        &mut self,
        count: usize,
        range: usize,
        hasher: H,
    ) -> Result<Vec<HashFunction<H>>> {
        if count == 0 {
            return Err(BloomError::invalid_hash_count(count));
        }
        if range == 0 {
            return Err(BloomError::invalid_range(range));
        }

        let mut seen = HashSet::with_capacity(count);
        let mut functions = Vec::with_capacity(count);
        while functions.len() < count {
            let seed = self.rng.next_u64();
            if seen.insert(seed) {
                functions.push(HashFunction::with_hasher(seed, range, hasher.clone())?);
            }
        }
        Ok(functions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::Fnv1aHasher;

    #[test]
    fn test_create_rejects_zero_range() {
        let err = HashFunction::create(0).unwrap_err();
        assert!(err.is_invalid_configuration());
        assert_eq!(err.parameter(), Some("range"));
    }

    #[test]
    fn test_slot_within_range() {
        for range in [1, 2, 7, 64, 1000, 9586] {
            let f = HashFunction::create(range).unwrap();
            for i in 0..200u32 {
                assert!(f.slot(&i.to_le_bytes()) < range);
            }
        }
    }

    #[test]
    fn test_range_one_always_zero() {
        let f = HashFunction::with_seed(99, 1).unwrap();
        assert_eq!(f.slot(b"anything"), 0);
        assert_eq!(f.slot(b""), 0);
    }

    #[test]
    fn test_slot_is_deterministic() {
        let f = HashFunction::with_seed(12345, 1 << 20).unwrap();
        let key = b"https://example.com/a/long/path";
        assert_eq!(f.slot(key), f.slot(key));
        assert_eq!(f, HashFunction::with_seed(12345, 1 << 20).unwrap());
    }

    #[test]
    fn test_different_seeds_select_different_slots() {
        let a = HashFunction::with_seed(1, 1 << 20).unwrap();
        let b = HashFunction::with_seed(2, 1 << 20).unwrap();
        let differing = (0..100u32)
            .filter(|i| a.slot(&i.to_le_bytes()) != b.slot(&i.to_le_bytes()))
            .count();
        assert!(differing > 95, "only {differing} of 100 keys differed");
    }

    #[test]
    fn test_generate_distinct_seeds() {
        let functions = HashFamily::from_entropy().generate(32, 500).unwrap();
        let seeds: HashSet<u64> = functions.iter().map(HashFunction::seed).collect();
        assert_eq!(seeds.len(), 32);
        assert!(functions.iter().all(|f| f.range() == 500));
    }

    #[test]
    fn test_seeded_family_is_reproducible() {
        let a = HashFamily::seeded(42).generate(7, 100).unwrap();
        let b = HashFamily::seeded(42).generate(7, 100).unwrap();
        let c = HashFamily::seeded(43).generate(7, 100).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_generate_rejects_zero_count_or_range() {
        let mut family = HashFamily::seeded(1);
        assert_eq!(family.generate(0, 10).unwrap_err().parameter(), Some("hash_count"));
        assert_eq!(family.generate(3, 0).unwrap_err().parameter(), Some("range"));
    }

    #[test]
    fn test_generate_with_custom_hasher() {
        let functions = HashFamily::seeded(5)
            .generate_with_hasher(3, 64, Fnv1aHasher)
            .unwrap();
        assert!(functions.iter().all(|f| f.hasher().name() == "fnv1a-64"));
    }
}
