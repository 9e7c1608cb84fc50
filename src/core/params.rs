//! Optimal parameter calculation for Bloom filters.
//!
//! Given:
//! - `n`: expected number of distinct items
//! - `p`: target false positive rate, strictly inside `(0, 1)`
//!
//! Optimal parameters:
//! - `m = ⌈-n × ln(p) / (ln 2)²⌉` bits, at least 1
//! - `k = max(1, round((m/n) × ln 2))` hash functions
//!
//! Expected false positive rate after inserting `n` items:
//! - `p = (1 - e^(-kn/m))^k`
//!
//! There is no upper clamp on `m` or `k`: a very small `p` yields a large
//! filter and callers own the capacity planning.
//!
//! # References
//!
//! - Bloom, Burton H. (1970). "Space/Time Trade-offs in Hash Coding with Allowable Errors"

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]

use crate::error::{BloomError, Result};
use std::f64::consts::LN_2;

/// (ln 2)² ≈ 0.4804530139182014
const LN2_SQUARED: f64 = LN_2 * LN_2;

/// Largest bit count we agree to allocate.
///
/// Beyond this the word count overflows `isize` on some targets.
pub const MAX_BIT_COUNT: usize = usize::MAX / 2;

/// Minimum number of hash functions.
pub const MIN_HASH_FUNCTIONS: usize = 1;

/// Derived sizing for one filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterParams {
    /// Number of bits in the array (m).
    pub bit_count: usize,
    /// Number of hash functions (k).
    pub hash_count: usize,
}

/// Reject `n == 0` and any rate not strictly inside `(0, 1)`, NaN included.
pub fn validate_sizing(n: usize, fp_rate: f64) -> Result<()> {
    if n == 0 {
        return Err(BloomError::invalid_item_count(n));
    }
    if !(fp_rate > 0.0 && fp_rate < 1.0) {
        return Err(BloomError::fp_rate_out_of_bounds(fp_rate));
    }
    Ok(())
}

/// Calculate the optimal number of bits: `m = ⌈-n × ln(p) / (ln 2)²⌉`.
///
/// # Errors
///
/// `InvalidConfiguration` if `n == 0`, if `fp_rate` is not in `(0, 1)`, or if
/// the result exceeds [`MAX_BIT_COUNT`].
///
/// # Examples
///
/// ```
/// use bloomset::core::params::optimal_bit_count;
///
/// assert_eq!(optimal_bit_count(1000, 0.01).unwrap(), 9586);
/// assert_eq!(optimal_bit_count(1, 0.5).unwrap(), 2);
/// ```
pub fn optimal_bit_count(n: usize, fp_rate: f64) -> Result<usize> {
    validate_sizing(n, fp_rate)?;

    let m = (-(n as f64) * fp_rate.ln() / LN2_SQUARED).ceil();

    if !m.is_finite() || m > MAX_BIT_COUNT as f64 {
        return Err(BloomError::invalid_filter_size(format!("{:.0}", m)));
    }

    Ok((m as usize).max(1))
}

/// Calculate the optimal number of hash functions: `k = max(1, round((m/n) × ln 2))`.
///
/// # Errors
///
/// `InvalidConfiguration` if `m == 0` or `n == 0`.
///
/// # Examples
///
/// ```
/// use bloomset::core::params::optimal_hash_count;
///
/// assert_eq!(optimal_hash_count(9586, 1000).unwrap(), 7);
/// assert_eq!(optimal_hash_count(10, 100_000).unwrap(), 1);
/// ```
pub fn optimal_hash_count(m: usize, n: usize) -> Result<usize> {
    if m == 0 {
        return Err(BloomError::invalid_filter_size(m));
    }
    if n == 0 {
        return Err(BloomError::invalid_item_count(n));
    }

    let k = ((m as f64 / n as f64) * LN_2).round() as usize;
    Ok(k.max(MIN_HASH_FUNCTIONS))
}

/// Derive both `m` and `k` for `(n, p)`.
///
/// ```
/// use bloomset::core::params::calculate_filter_params;
///
/// let params = calculate_filter_params(1000, 0.01).unwrap();
/// assert_eq!(params.bit_count, 9586);
/// assert_eq!(params.hash_count, 7);
/// ```
pub fn calculate_filter_params(n: usize, fp_rate: f64) -> Result<FilterParams> {
    let bit_count = optimal_bit_count(n, fp_rate)?;
    let hash_count = optimal_hash_count(bit_count, n)?;
    Ok(FilterParams {
        bit_count,
        hash_count,
    })
}

/// Theoretical false positive rate `(1 - e^(-kn/m))^k` after `n` inserts.
///
/// # Errors
///
/// `InvalidConfiguration` if `m == 0` or `k == 0`.
///
/// ```
/// use bloomset::core::params::expected_fp_rate;
///
/// let fp = expected_fp_rate(9586, 1000, 7).unwrap();
/// assert!((fp - 0.01).abs() < 0.001);
/// ```
pub fn expected_fp_rate(m: usize, n: usize, k: usize) -> Result<f64> {
    if m == 0 {
        return Err(BloomError::invalid_filter_size(m));
    }
    if k < MIN_HASH_FUNCTIONS {
        return Err(BloomError::invalid_hash_count(k));
    }
    if n == 0 {
        return Ok(0.0);
    }

    let k_f64 = k as f64;
    let prob_bit_one = 1.0 - (-(k_f64 * n as f64) / m as f64).exp();
    Ok(prob_bit_one.powf(k_f64).clamp(0.0, 1.0))
}

/// Bits needed per item for a target rate: `-ln(p) / (ln 2)²`.
///
/// ```
/// use bloomset::core::params::bits_per_item;
///
/// assert!((bits_per_item(0.01).unwrap() - 9.585).abs() < 0.001);
/// ```
pub fn bits_per_item(fp_rate: f64) -> Result<f64> {
    if !(fp_rate > 0.0 && fp_rate < 1.0) {
        return Err(BloomError::fp_rate_out_of_bounds(fp_rate));
    }
    Ok(-fp_rate.ln() / LN2_SQUARED)
}
