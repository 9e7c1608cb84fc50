//! Explicit sizing configuration.
//!
//! Host applications carry a [`BloomConfig`] instead of hard-coding capacity
//! and rate constants. With the `serde` feature it can be loaded from the
//! host's own configuration files.
//!
//! ```
//! use bloomset::builder::BloomConfig;
//!
//! let config = BloomConfig::new(1_000_000, 0.01).with_seed(42);
//! let params = config.params().unwrap();
//! assert_eq!(params.hash_count, 7);
//!
//! let mut filter = config.build().unwrap();
//! filter.insert("key");
//! assert!(filter.test("key"));
//! ```

use crate::core::params::{self, FilterParams};
use crate::error::Result;
use crate::filters::BloomFilter;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sizing parameters for one filter.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BloomConfig {
    /// Expected number of distinct keys (n).
    pub expected_items: usize,

    /// Target false positive rate (p), strictly inside `(0, 1)`.
    pub target_fp_rate: f64,

    /// Seed for reproducible hash functions. `None` draws from entropy.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub seed: Option<u64>,
}

impl BloomConfig {
    /// Configuration with entropy-seeded hash functions.
    #[must_use]
    pub const fn new(expected_items: usize, target_fp_rate: f64) -> Self {
        Self {
            expected_items,
            target_fp_rate,
            seed: None,
        }
    }

    /// Pin the hash seeds.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check that a filter can be built from this configuration.
    pub fn validate(&self) -> Result<()> {
        self.params().map(|_| ())
    }

    /// Derived bit count and hash count.
    pub fn params(&self) -> Result<FilterParams> {
        params::calculate_filter_params(self.expected_items, self.target_fp_rate)
    }

    /// Build a filter using the default hasher.
    pub fn build(&self) -> Result<BloomFilter> {
        BloomFilter::from_config(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        assert!(BloomConfig::new(100, 0.01).validate().is_ok());
        assert!(BloomConfig::new(0, 0.01).validate().is_err());
        assert!(BloomConfig::new(100, 0.0).validate().is_err());
        assert!(BloomConfig::new(100, 1.0).validate().is_err());
    }

    #[test]
    fn test_params_match_filter() {
        let config = BloomConfig::new(2500, 0.001);
        let params = config.params().unwrap();
        let filter = config.build().unwrap();
        assert_eq!(params.bit_count, filter.bit_count());
        assert_eq!(params.hash_count, filter.hash_count());
    }

    #[test]
    fn test_seeded_builds_are_identical() {
        let config = BloomConfig::new(100, 0.01).with_seed(5);
        assert_eq!(config.build().unwrap(), config.build().unwrap());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_load_from_json() {
        let config: BloomConfig =
            serde_json::from_str(r#"{"expected_items": 1000000, "target_fp_rate": 0.01}"#).unwrap();
        assert_eq!(config, BloomConfig::new(1_000_000, 0.01));

        let seeded: BloomConfig =
            serde_json::from_str(r#"{"expected_items": 10, "target_fp_rate": 0.1, "seed": 3}"#).unwrap();
        assert_eq!(seeded.seed, Some(3));
    }
}
