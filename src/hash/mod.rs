//! Hashing for Bloom filters.
//!
//! ```text
//! hash/
//! ├── hasher.rs  - SeededHasher trait, Xxh3Hasher (default), Fnv1aHasher
//! ├── family.rs  - HashFunction value objects and HashFamily seed generation
//! └── mod.rs     - This file (public API)
//! ```
//!
//! A filter with `k` hash functions holds `k` [`HashFunction`]s that share one
//! hasher and one range `m` and differ only by seed.
//!
//! # Choosing a Hasher
//!
//! | Hasher | Speed | Use Case |
//! |--------|-------|----------|
//! | [`Xxh3Hasher`] | Very fast | Default for every filter |
//! | [`Fnv1aHasher`] | Medium | Short keys, trivially reproducible elsewhere |

pub mod family;
pub mod hasher;

pub use family::{HashFamily, HashFunction};
pub use hasher::{Fnv1aHasher, SeededHasher, Xxh3Hasher};

/// Hasher used when none is specified.
pub type DefaultHasher = Xxh3Hasher;
