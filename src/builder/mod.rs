//! Configuration and construction of Bloom filters.
//!
//! - [`BloomConfig`]: a plain configuration value (`serde`-loadable)
//! - [`BloomFilterBuilder`]: a type-state builder that also picks the hasher
//!
//! Neither carries a default capacity or rate; both are always explicit.

pub mod config;
pub mod standard;

pub use config::BloomConfig;
pub use standard::BloomFilterBuilder;
