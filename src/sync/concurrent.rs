//! Lock-guarded Bloom filter.
//!
//! # Locking Protocol
//!
//! A single `parking_lot::RwLock` guards the whole filter:
//!
//! - `test` / `contains` take the **read** lock, so queries run in parallel.
//! - `insert` / `insert_batch` take the **write** lock.
//!
//! `parking_lot::RwLock` is task-fair, so a steady stream of readers cannot
//! starve a writer. A `test` that starts after an `insert` returns observes
//! that insert, so there are no false negatives across threads.
//!
//! # Examples
//!
//! ```
//! use bloomset::sync::ConcurrentBloomFilter;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let filter = Arc::new(ConcurrentBloomFilter::new(10_000, 0.01).unwrap());
//!
//! let handles: Vec<_> = (0..4)
//!     .map(|t| {
//!         let filter = Arc::clone(&filter);
//!         thread::spawn(move || {
//!             for i in 0..100 {
//!                 filter.insert(&format!("{t}-{i}"));
//!             }
//!         })
//!     })
//!     .collect();
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//! assert!(filter.test("3-99"));
//! ```

use crate::error::Result;
use crate::filters::BloomFilter;
use crate::hash::{SeededHasher, Xxh3Hasher};
use parking_lot::RwLock;

/// A [`BloomFilter`] shareable across threads through `&self`.
#[derive(Debug)]
pub struct ConcurrentBloomFilter<H = Xxh3Hasher> {
    inner: RwLock<BloomFilter<H>>,
}

impl ConcurrentBloomFilter<Xxh3Hasher> {
    /// Create a shared filter for `expected_items` keys at `target_fp_rate`.
    ///
    /// # Errors
    ///
    /// Same as [`BloomFilter::new`].
    pub fn new(expected_items: usize, target_fp_rate: f64) -> Result<Self> {
        BloomFilter::new(expected_items, target_fp_rate).map(Self::from)
    }
}

impl<H: SeededHasher> From<BloomFilter<H>> for ConcurrentBloomFilter<H> {
    fn from(filter: BloomFilter<H>) -> Self {
        Self {
            inner: RwLock::new(filter),
        }
    }
}

impl<H: SeededHasher> ConcurrentBloomFilter<H> {
    /// Insert a key under the write lock.
    #[inline]
    pub fn insert<K: AsRef<[u8]> + ?Sized>(&self, key: &K) {
        self.inner.write().insert(key);
    }

    /// Insert every key while holding the write lock once.
    pub fn insert_batch<I>(&self, keys: I)
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        self.inner.write().insert_batch(keys);
    }

    /// Test a key under the read lock.
    #[must_use]
    #[inline]
    pub fn test<K: AsRef<[u8]> + ?Sized>(&self, key: &K) -> bool {
        self.inner.read().test(key)
    }

    /// Alias for [`test`](Self::test).
    #[must_use]
    #[inline]
    pub fn contains<K: AsRef<[u8]> + ?Sized>(&self, key: &K) -> bool {
        self.test(key)
    }

    /// Number of bits in the array (m).
    #[must_use]
    pub fn bit_count(&self) -> usize {
        self.inner.read().bit_count()
    }

    /// Number of hash functions (k).
    #[must_use]
    pub fn hash_count(&self) -> usize {
        self.inner.read().hash_count()
    }

    /// Number of bits currently set.
    #[must_use]
    pub fn count_set_bits(&self) -> usize {
        self.inner.read().count_set_bits()
    }

    /// Clone the current state under the read lock.
    #[must_use]
    pub fn snapshot(&self) -> BloomFilter<H> {
        self.inner.read().clone()
    }

    /// Unwrap the filter.
    #[must_use]
    pub fn into_inner(self) -> BloomFilter<H> {
        self.inner.into_inner()
    }
}
