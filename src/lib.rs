//! bloomset: a fixed-size Bloom filter for fast negative membership checks.
//!
//! A Bloom filter answers "was this key possibly inserted?" using far less
//! memory than storing the keys. It can produce:
//! - **False positives**: it may report a key as present when it isn't
//! - **Zero false negatives**: if it says a key is absent, it definitely is
//!
//! The typical use is a fast-reject guard in front of an expensive lookup
//! (database, remote cache, disk index): a `false` skips the lookup entirely.
//!
//! # Quick Start
//!
//! ```
//! use bloomset::BloomFilter;
//!
//! // Size for 10,000 keys at a 1% false positive rate
//! let mut filter = BloomFilter::new(10_000, 0.01).unwrap();
//!
//! filter.insert("hello");
//! filter.insert(b"raw bytes");
//!
//! assert!(filter.test("hello"));     // probably present
//! assert!(!filter.test("goodbye"));  // definitely absent
//! ```
//!
//! # Sizing
//!
//! From the expected number of distinct keys `n` and the target rate `p`:
//!
//! ```text
//! m = ceil(-(n · ln p) / (ln 2)²)      bits
//! k = max(1, round((m / n) · ln 2))    hash functions
//! ```
//!
//! Each of the `k` hash functions is the same seeded hasher (XXH3-64 by
//! default) evaluated under its own seed, reduced modulo `m`.
//!
//! # Using Configuration
//!
//! ```
//! use bloomset::{BloomConfig, BloomFilterBuilder};
//!
//! let from_config = BloomConfig::new(1_000, 0.001).with_seed(1).build().unwrap();
//!
//! let from_builder = BloomFilterBuilder::new()
//!     .expected_items(1_000)
//!     .false_positive_rate(0.001)
//!     .seed(1)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(from_config, from_builder);
//! ```
//!
//! # Concurrency
//!
//! [`BloomFilter::insert`] takes `&mut self`. [`ConcurrentBloomFilter`] wraps a
//! filter in a reader-writer lock for shared use behind an `Arc`.
//!
//! # Logging
//!
//! The crate emits [`tracing`] events (construction at `debug`, rejected or
//! very large configurations at `warn`, inserts at `trace`) and never installs
//! a subscriber itself.
//!
//! # Optional Features
//!
//! - `serde` - `Serialize`/`Deserialize` for [`BloomFilter`] and [`BloomConfig`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

/// Type-safe builder and configuration value
pub mod builder;

/// Bit vector and sizing formulas
pub mod core;

/// Error types and result aliases
pub mod error;

/// Filter implementations
pub mod filters;

/// Seeded hashers and hash function families
pub mod hash;

/// Serialization support (requires `serde` feature)
#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
pub mod serde_support;

/// Thread-safe wrapper
pub mod sync;

pub use builder::{BloomConfig, BloomFilterBuilder};
pub use error::{BloomError, Result};
pub use filters::BloomFilter;
pub use hash::{Fnv1aHasher, HashFamily, HashFunction, SeededHasher, Xxh3Hasher};
pub use sync::ConcurrentBloomFilter;

/// Prelude module for convenient imports.
///
/// # Examples
///
/// ```
/// use bloomset::prelude::*;
///
/// let mut filter = BloomFilter::new(1000, 0.01).unwrap();
/// filter.insert("hello");
/// assert!(filter.contains("hello"));
/// ```
pub mod prelude {
    pub use crate::builder::{BloomConfig, BloomFilterBuilder};
    pub use crate::error::{BloomError, Result};
    pub use crate::filters::BloomFilter;
    pub use crate::hash::{HashFunction, SeededHasher};
    pub use crate::sync::ConcurrentBloomFilter;
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let mut filter = BloomFilter::new(100, 0.01).unwrap();
        filter.insert("test");
        assert!(filter.contains("test"));
    }

    #[test]
    fn test_generic_over_hasher() {
        fn check<H: SeededHasher>(filter: &mut BloomFilter<H>) {
            filter.insert("item");
            assert!(filter.test("item"));
        }

        check(&mut BloomFilter::new(100, 0.01).unwrap());
        check(&mut BloomFilter::with_hasher(100, 0.01, crate::Fnv1aHasher).unwrap());
    }

    #[test]
    fn test_concurrent_reexport() {
        let filter = ConcurrentBloomFilter::new(1000, 0.01).unwrap();
        filter.insert("concurrent");
        assert!(filter.contains("concurrent"));
    }

    #[test]
    fn test_error_reexport() {
        let err: BloomError = BloomFilter::new(0, 0.5).unwrap_err();
        assert!(err.is_invalid_configuration());
    }
}
