//! Bloom filter implementations.
//!
//! - [`BloomFilter`] - fixed-size insert/test filter sized from `(n, p)`
//!
//! For shared use across threads see [`crate::sync`].

pub mod standard;

pub use standard::BloomFilter;
