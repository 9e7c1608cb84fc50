//! Classic insert/test Bloom filter.
//!
//! # Algorithm
//!
//! The filter owns a fixed bit array of `m` bits and `k` seeded hash functions.
//!
//! - **Insert**: set the `k` slots selected for the key.
//! - **Test**: report "probably present" only if all `k` slots are set.
//!
//! # Properties
//!
//! - **False negatives**: never. Bits only go from 0 to 1.
//! - **False positives**: approach the target rate as the number of distinct
//!   keys approaches `expected_items`, and grow past it beyond that.
//! - **Time**: O(k) hash evaluations per operation, no I/O, no allocation.
//!
//! There is deliberately no removal, clear, resize, or union.
//!
//! # Concurrency
//!
//! `insert` takes `&mut self`. To share one filter across threads wrap it in
//! [`ConcurrentBloomFilter`](crate::sync::ConcurrentBloomFilter), which takes a
//! read lock for `test` and a write lock for `insert`.
//!
//! # Examples
//!
//! ```
//! use bloomset::BloomFilter;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut filter = BloomFilter::new(10_000, 0.01)?;
//! filter.insert("https://example.com");
//!
//! assert!(filter.test("https://example.com"));
//! assert!(!filter.test("https://example.org"));
//! # Ok(())
//! # }
//! ```

#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use crate::builder::BloomConfig;
use crate::core::bitvec::BitVec;
use crate::core::params::{self, FilterParams};
use crate::error::Result;
use crate::hash::{HashFamily, HashFunction, SeededHasher, Xxh3Hasher};
use rand::RngCore;
use tracing::{debug, trace, warn};

/// Bit arrays above this size get a capacity warning at construction.
const LARGE_FILTER_BYTES: usize = 1 << 30;

/// Bloom filter sized from an expected item count and a target false positive rate.
///
/// # Type Parameters
///
/// * `H` - Seeded hasher shared by all hash functions (defaults to [`Xxh3Hasher`])
#[derive(Debug, Clone, PartialEq)]
pub struct BloomFilter<H = Xxh3Hasher> {
    /// Capacity hint used for sizing (n)
    expected_items: usize,

    /// Target false positive rate (p)
    target_fp_rate: f64,

    /// Bit array of length m
    bits: BitVec,

    /// The k slot selectors, in evaluation order
    hash_functions: Box<[HashFunction<H>]>,
}

impl BloomFilter<Xxh3Hasher> {
    /// Create a filter for `expected_items` keys at `target_fp_rate`.
    ///
    /// Hash seeds are drawn from operating system entropy.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` if `expected_items == 0` or `target_fp_rate`
    /// is not strictly inside `(0, 1)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomset::BloomFilter;
    ///
    /// assert!(BloomFilter::new(100, 0.5).is_ok());
    /// assert!(BloomFilter::new(0, 0.01).is_err());
    /// assert!(BloomFilter::new(100, 1.0).is_err());
    /// ```
    pub fn new(expected_items: usize, target_fp_rate: f64) -> Result<Self> {
        Self::with_hasher(expected_items, target_fp_rate, Xxh3Hasher)
    }

    /// Create a filter whose hash seeds derive from `seed`.
    ///
    /// Two filters built with the same arguments select the same slots for
    /// every key.
    ///
    /// # Errors
    ///
    /// Same as [`BloomFilter::new`].
    pub fn with_seed(expected_items: usize, target_fp_rate: f64, seed: u64) -> Result<Self> {
        Self::build(
            expected_items,
            target_fp_rate,
            Xxh3Hasher,
            &mut HashFamily::seeded(seed),
        )
    }

    /// Create a filter drawing hash seeds from `rng`.
    ///
    /// # Errors
    ///
    /// Same as [`BloomFilter::new`].
    pub fn with_rng<R: RngCore>(expected_items: usize, target_fp_rate: f64, rng: R) -> Result<Self> {
        Self::build(
            expected_items,
            target_fp_rate,
            Xxh3Hasher,
            &mut HashFamily::with_rng(rng),
        )
    }

    /// Create a filter from an explicit configuration value.
    ///
    /// # Errors
    ///
    /// Same as [`BloomFilter::new`].
    pub fn from_config(config: &BloomConfig) -> Result<Self> {
        match config.seed {
            Some(seed) => Self::with_seed(config.expected_items, config.target_fp_rate, seed),
            None => Self::new(config.expected_items, config.target_fp_rate),
        }
    }
}

impl<H: SeededHasher> BloomFilter<H> {
    /// Create a filter using a custom hasher, seeds from entropy.
    ///
    /// # Errors
    ///
    /// Same as [`BloomFilter::new`].
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomset::BloomFilter;
    /// use bloomset::hash::Fnv1aHasher;
    ///
    /// let mut filter = BloomFilter::with_hasher(1000, 0.01, Fnv1aHasher).unwrap();
    /// filter.insert(b"key");
    /// assert!(filter.test(b"key"));
    /// ```
    pub fn with_hasher(expected_items: usize, target_fp_rate: f64, hasher: H) -> Result<Self> {
        Self::build(
            expected_items,
            target_fp_rate,
            hasher,
            &mut HashFamily::from_entropy(),
        )
    }

    /// Size the filter, then ask `family` for its `k` hash functions.
    ///
    /// Nothing is allocated until every parameter has been validated.
    pub(crate) fn build<R: RngCore>(
        expected_items: usize,
        target_fp_rate: f64,
        hasher: H,
        family: &mut HashFamily<R>,
    ) -> Result<Self> {
        let FilterParams {
            bit_count,
            hash_count,
        } = params::calculate_filter_params(expected_items, target_fp_rate).map_err(|err| {
            warn!(expected_items, target_fp_rate, error = %err, "rejected Bloom filter configuration");
            err
        })?;

        let hasher_name = hasher.name();
        let bits = BitVec::new(bit_count)?;
        let hash_functions = family.generate_with_hasher(hash_count, bit_count, hasher)?;

        if bits.memory_usage() > LARGE_FILTER_BYTES {
            warn!(
                bit_count,
                bytes = bits.memory_usage(),
                target_fp_rate,
                "Bloom filter bit array exceeds 1 GiB"
            );
        }
        debug!(
            expected_items,
            target_fp_rate,
            bit_count,
            hash_count,
            hasher = hasher_name,
            "constructed Bloom filter"
        );

        Ok(Self {
            expected_items,
            target_fp_rate,
            bits,
            hash_functions: hash_functions.into_boxed_slice(),
        })
    }

    /// Reassemble a filter from already-validated parts.
    #[cfg(feature = "serde")]
    pub(crate) fn from_parts(
        expected_items: usize,
        target_fp_rate: f64,
        bits: BitVec,
        hash_functions: Vec<HashFunction<H>>,
    ) -> Self {
        Self {
            expected_items,
            target_fp_rate,
            bits,
            hash_functions: hash_functions.into_boxed_slice(),
        }
    }

    /// Insert a key.
    ///
    /// Sets the slot of every hash function. Inserting the same key again
    /// leaves the bit array unchanged.
    #[inline]
    pub fn insert<K: AsRef<[u8]> + ?Sized>(&mut self, key: &K) {
        let key = key.as_ref();
        let mut flipped = 0usize;
        for function in self.hash_functions.iter() {
            if self.bits.set(function.slot(key)) {
                flipped += 1;
            }
        }
        trace!(key_len = key.len(), flipped, "bloom insert");
    }

    /// Test whether a key was probably inserted.
    ///
    /// # Returns
    ///
    /// - `false`: the key was definitely never inserted
    /// - `true`: the key was probably inserted (may be a false positive)
    ///
    /// Stops at the first unset slot.
    #[must_use]
    #[inline]
    pub fn test<K: AsRef<[u8]> + ?Sized>(&self, key: &K) -> bool {
        let key = key.as_ref();
        self.hash_functions
            .iter()
            .all(|function| self.bits.get(function.slot(key)))
    }

    /// Alias for [`test`](Self::test).
    #[must_use]
    #[inline]
    pub fn contains<K: AsRef<[u8]> + ?Sized>(&self, key: &K) -> bool {
        self.test(key)
    }

    /// Insert every key from an iterator.
    pub fn insert_batch<I>(&mut self, keys: I)
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        for key in keys {
            self.insert(&key);
        }
    }

    /// Test every key from an iterator, in order.
    #[must_use]
    pub fn test_batch<I>(&self, keys: I) -> Vec<bool>
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        keys.into_iter().map(|key| self.test(&key)).collect()
    }

    /// Slot selected by each hash function for `key`, in hash-function order.
    #[must_use]
    pub fn slots<K: AsRef<[u8]> + ?Sized>(&self, key: &K) -> Vec<usize> {
        let key = key.as_ref();
        self.hash_functions.iter().map(|f| f.slot(key)).collect()
    }

    /// Capacity hint the filter was sized for (n).
    #[must_use]
    #[inline]
    pub fn expected_items(&self) -> usize {
        self.expected_items
    }

    /// Target false positive rate (p).
    #[must_use]
    #[inline]
    pub fn target_fp_rate(&self) -> f64 {
        self.target_fp_rate
    }

    /// Number of bits in the array (m).
    #[must_use]
    #[inline]
    pub fn bit_count(&self) -> usize {
        self.bits.len()
    }

    /// Number of hash functions applied per key (k).
    #[must_use]
    #[inline]
    pub fn hash_count(&self) -> usize {
        self.hash_functions.len()
    }

    /// The hash functions, in evaluation order.
    #[must_use]
    pub fn hash_functions(&self) -> &[HashFunction<H>] {
        &self.hash_functions
    }

    /// Read-only view of the bit array.
    #[must_use]
    pub fn bits(&self) -> &BitVec {
        &self.bits
    }

    /// Number of bits currently set.
    #[must_use]
    pub fn count_set_bits(&self) -> usize {
        self.bits.count_ones()
    }

    /// Whether no key has been inserted yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count_set_bits() == 0
    }

    /// Fraction of bits set, in `[0, 1]`.
    #[must_use]
    pub fn fill_ratio(&self) -> f64 {
        self.count_set_bits() as f64 / self.bit_count() as f64
    }

    /// Estimate the number of distinct keys inserted: `-(m/k) × ln(1 - X/m)`.
    ///
    /// Returns `usize::MAX` once every bit is set.
    #[must_use]
    pub fn estimated_item_count(&self) -> usize {
        let set_bits = self.count_set_bits();
        if set_bits == 0 {
            return 0;
        }
        if set_bits >= self.bit_count() {
            return usize::MAX;
        }

        let m = self.bit_count() as f64;
        let k = self.hash_count() as f64;
        let estimated = -(m / k) * (1.0 - set_bits as f64 / m).ln();
        estimated.round().max(0.0) as usize
    }

    /// Current false positive probability from the fill ratio: `fill^k`.
    #[must_use]
    pub fn estimated_fp_rate(&self) -> f64 {
        self.fill_ratio().powf(self.hash_count() as f64)
    }

    /// Theoretical false positive rate after `inserted` distinct keys.
    #[must_use]
    pub fn expected_fp_rate(&self, inserted: usize) -> f64 {
        // m and k are both at least 1 for any constructed filter
        params::expected_fp_rate(self.bit_count(), inserted, self.hash_count()).unwrap_or(1.0)
    }

    /// Approximate heap and inline memory in bytes.
    #[must_use]
    pub fn memory_usage(&self) -> usize {
        std::mem::size_of::<Self>()
            + self.bits.memory_usage()
            + self.hash_functions.len() * std::mem::size_of::<HashFunction<H>>()
    }
}
