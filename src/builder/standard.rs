//! Builder for Bloom filters.
//!
//! # Type-State Pattern
//!
//! The builder progresses through states so a missing required parameter is a
//! compile error rather than a runtime one:
//!
//! ```text
//! Initial → WithItems → Complete → BloomFilter
//!     ↓         ↓           ↓
//!   .expected_items()  .false_positive_rate()  .build()
//! ```
//!
//! # Examples
//!
//! ```
//! use bloomset::builder::BloomFilterBuilder;
//!
//! let filter = BloomFilterBuilder::new()
//!     .expected_items(10_000)
//!     .false_positive_rate(0.01)
//!     .seed(7)
//!     .build()
//!     .unwrap();
//! assert_eq!(filter.hash_count(), 7);
//! ```
//!
//! ## Custom Hasher
//!
//! ```
//! use bloomset::builder::BloomFilterBuilder;
//! use bloomset::hash::Fnv1aHasher;
//!
//! let filter = BloomFilterBuilder::new()
//!     .hasher(Fnv1aHasher)
//!     .expected_items(500)
//!     .false_positive_rate(0.05)
//!     .build()
//!     .unwrap();
//! assert_eq!(filter.hash_functions()[0].hasher(), &Fnv1aHasher);
//! ```
//!
//! ## Error Handling
//!
//! ```
//! use bloomset::builder::BloomFilterBuilder;
//!
//! let result = BloomFilterBuilder::new()
//!     .expected_items(0)  // Invalid!
//!     .false_positive_rate(0.01)
//!     .build();
//!
//! assert!(result.unwrap_err().is_invalid_configuration());
//! ```

use crate::error::Result;
use crate::filters::BloomFilter;
use crate::hash::{HashFamily, SeededHasher, Xxh3Hasher};
use std::marker::PhantomData;

/// Type-state marker: no parameters set.
pub struct Initial;

/// Type-state marker: item count is set.
pub struct WithItems;

/// Type-state marker: all required parameters set.
pub struct Complete;

/// Builder for [`BloomFilter`] with type-state guarantees.
pub struct BloomFilterBuilder<State, H = Xxh3Hasher> {
    expected_items: usize,
    fp_rate: f64,
    seed: Option<u64>,
    hasher: H,
    _state: PhantomData<State>,
}

impl BloomFilterBuilder<Initial, Xxh3Hasher> {
    /// Create a new builder using the default hasher.
    #[must_use]
    pub fn new() -> Self {
        Self {
            expected_items: 0,
            fp_rate: 0.0,
            seed: None,
            hasher: Xxh3Hasher,
            _state: PhantomData,
        }
    }
}

impl Default for BloomFilterBuilder<Initial, Xxh3Hasher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> BloomFilterBuilder<Initial, H> {
    /// Replace the hasher.
    #[must_use]
    pub fn hasher<H2: SeededHasher>(self, hasher: H2) -> BloomFilterBuilder<Initial, H2> {
        BloomFilterBuilder {
            expected_items: self.expected_items,
            fp_rate: self.fp_rate,
            seed: self.seed,
            hasher,
            _state: PhantomData,
        }
    }

    /// Set the expected number of distinct keys (required).
    #[must_use]
    pub fn expected_items(self, items: usize) -> BloomFilterBuilder<WithItems, H> {
        BloomFilterBuilder {
            expected_items: items,
            fp_rate: self.fp_rate,
            seed: self.seed,
            hasher: self.hasher,
            _state: PhantomData,
        }
    }
}

impl<H> BloomFilterBuilder<WithItems, H> {
    /// Set the target false positive rate (required).
    #[must_use]
    pub fn false_positive_rate(self, fp_rate: f64) -> BloomFilterBuilder<Complete, H> {
        BloomFilterBuilder {
            expected_items: self.expected_items,
            fp_rate,
            seed: self.seed,
            hasher: self.hasher,
            _state: PhantomData,
        }
    }
}

impl<State, H> BloomFilterBuilder<State, H> {
    /// Derive hash seeds deterministically from `seed` (optional).
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl<H: SeededHasher> BloomFilterBuilder<Complete, H> {
    /// Validate the parameters and build the filter.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` if the item count is zero or the rate is not in `(0, 1)`.
    pub fn build(self) -> Result<BloomFilter<H>> {
        match self.seed {
            Some(seed) => BloomFilter::build(
                self.expected_items,
                self.fp_rate,
                self.hasher,
                &mut HashFamily::seeded(seed),
            ),
            None => BloomFilter::build(
                self.expected_items,
                self.fp_rate,
                self.hasher,
                &mut HashFamily::from_entropy(),
            ),
        }
    }
}
