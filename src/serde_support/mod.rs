//! Serialization support for Bloom filters.
//!
//! # Feature Flag
//!
//! This module is only available when the `serde` feature is enabled:
//!
//! ```toml
//! [dependencies]
//! bloomset = { version = "0.1", features = ["serde"] }
//! ```
//!
//! Filters round-trip through any serde format. A restored filter selects the
//! same slots as the original, so it answers every `test` identically.
//!
//! # Examples
//!
//! ```
//! use bloomset::BloomFilter;
//!
//! let mut filter = BloomFilter::new(1000, 0.01).unwrap();
//! filter.insert("hello");
//!
//! let json = serde_json::to_string(&filter).unwrap();
//! let restored: BloomFilter = serde_json::from_str(&json).unwrap();
//! assert!(restored.test("hello"));
//! ```

pub mod standard;
