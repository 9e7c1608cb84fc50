//! Thread-safe Bloom filter.
//!
//! [`BloomFilter`](crate::BloomFilter) itself is `Send + Sync` but `insert`
//! needs `&mut self`. [`ConcurrentBloomFilter`] wraps it in a reader-writer
//! lock so it can sit behind an `Arc` and be used through `&self`.
//!
//! # Choosing
//!
//! | Access pattern | Use |
//! |----------------|-----|
//! | Build once, then read from many threads | `Arc<BloomFilter>` |
//! | Interleaved inserts and queries across threads | [`ConcurrentBloomFilter`] |
//! | Single thread | `BloomFilter` |

pub mod concurrent;

pub use concurrent::ConcurrentBloomFilter;
