//! Core building blocks of a Bloom filter.
//!
//! # Module Organization
//!
//! ```text
//! core/
//! ├── bitvec.rs    - Fixed-length bit vector
//! ├── params.rs    - Sizing formulas and derived statistics
//! └── mod.rs       - This file (public API)
//! ```
//!
//! # Examples
//!
//! ```
//! use bloomset::core::{calculate_filter_params, BitVec};
//!
//! let params = calculate_filter_params(1000, 0.01).unwrap();
//! assert_eq!((params.bit_count, params.hash_count), (9586, 7));
//!
//! let mut bits = BitVec::new(params.bit_count).unwrap();
//! assert!(bits.set(42));
//! assert!(bits.get(42));
//! ```

pub mod bitvec;
pub mod params;

pub use bitvec::BitVec;
pub use params::{
    bits_per_item, calculate_filter_params, expected_fp_rate, optimal_bit_count,
    optimal_hash_count, validate_sizing, FilterParams,
};
