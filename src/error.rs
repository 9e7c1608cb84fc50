//! Error types for bloomset operations.
//!
//! Only construction can fail. Once a filter exists, `insert` and `test` are
//! total over every byte string, so the error surface is deliberately small.
//!
//! # Error Propagation
//!
//! ```
//! use bloomset::{Result, BloomError};
//! use bloomset::core::params::{optimal_bit_count, optimal_hash_count};
//!
//! fn sizing(n: usize, fp: f64) -> Result<(usize, usize)> {
//!     let m = optimal_bit_count(n, fp)?;
//!     let k = optimal_hash_count(m, n)?;
//!     Ok((m, k))
//! }
//! # assert!(sizing(1000, 0.01).is_ok());
//! # assert!(sizing(0, 0.01).unwrap_err().is_invalid_configuration());
//! ```

#![allow(clippy::module_name_repetitions)]

use std::fmt;

/// Result type alias for bloomset operations.
pub type Result<T> = std::result::Result<T, BloomError>;

/// Errors that can occur while building or restoring a Bloom filter.
#[derive(Debug, Clone, PartialEq)]
pub enum BloomError {
    /// Sizing or hashing parameters cannot produce a working filter.
    ///
    /// Raised when `expected_items == 0`, when the false positive rate is not
    /// strictly inside `(0, 1)`, when a hash function range is zero, or when
    /// the derived bit array cannot be represented on this platform.
    /// No filter object is produced.
    InvalidConfiguration {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// Human-readable description of what's invalid.
        message: String,
    },

    /// Persisted filter data was rejected while restoring.
    #[cfg(feature = "serde")]
    Serialization {
        /// Description of what failed.
        message: String,
    },
}

impl fmt::Display for BloomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration { parameter, message } => {
                write!(f, "Invalid configuration for '{}': {}.", parameter, message)
            }
            #[cfg(feature = "serde")]
            Self::Serialization { message } => {
                write!(f, "Serialization error: {}.", message)
            }
        }
    }
}

impl std::error::Error for BloomError {}

impl BloomError {
    /// Create an `InvalidConfiguration` error for an arbitrary parameter.
    #[must_use]
    pub fn invalid_configuration(parameter: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            parameter,
            message: message.into(),
        }
    }

    /// Expected item count was zero.
    #[must_use]
    pub fn invalid_item_count(count: usize) -> Self {
        Self::invalid_configuration(
            "expected_items",
            format!("{} is not a positive item count", count),
        )
    }

    /// False positive rate outside the open interval `(0, 1)` (or NaN).
    #[must_use]
    pub fn fp_rate_out_of_bounds(fp_rate: f64) -> Self {
        Self::invalid_configuration(
            "target_fp_rate",
            format!("{} is out of bounds, must be in range (0, 1)", fp_rate),
        )
    }

    /// Hash function range was zero.
    #[must_use]
    pub fn invalid_range(range: usize) -> Self {
        Self::invalid_configuration(
            "range",
            format!("hash range {} must be greater than 0", range),
        )
    }

    /// Bit array size is zero or too large to allocate.
    #[must_use]
    pub fn invalid_filter_size(size: impl fmt::Display) -> Self {
        Self::invalid_configuration(
            "bit_count",
            format!("{} bits is not a positive, addressable filter size", size),
        )
    }

    /// Hash function count was zero.
    #[must_use]
    pub fn invalid_hash_count(count: usize) -> Self {
        Self::invalid_configuration(
            "hash_count",
            format!("{} hash functions requested, at least 1 is required", count),
        )
    }

    /// Create a `Serialization` error.
    #[cfg(feature = "serde")]
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Whether this is the `InvalidConfiguration` kind.
    #[must_use]
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, Self::InvalidConfiguration { .. })
    }

    /// Name of the parameter that was rejected, if any.
    #[must_use]
    pub fn parameter(&self) -> Option<&'static str> {
        match self {
            Self::InvalidConfiguration { parameter, .. } => Some(parameter),
            #[cfg(feature = "serde")]
            Self::Serialization { .. } => None,
        }
    }
}
