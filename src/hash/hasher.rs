//! Seeded byte hashers.
//!
//! A [`SeededHasher`] maps `(bytes, seed)` to a 64-bit value. Different seeds
//! must give low-correlation outputs for the same bytes, since every hash
//! function of a filter shares one hasher and differs only by seed.
//!
//! # Examples
//!
//! ```
//! use bloomset::hash::{SeededHasher, Xxh3Hasher};
//!
//! let hasher = Xxh3Hasher;
//! let a = hasher.hash_with_seed(b"hello", 1);
//! let b = hasher.hash_with_seed(b"hello", 2);
//! assert_eq!(a, hasher.hash_with_seed(b"hello", 1));
//! assert_ne!(a, b);
//! ```

#![allow(clippy::module_name_repetitions)]

use xxhash_rust::xxh3::xxh3_64_with_seed;

/// Hash arbitrary bytes under an explicit seed.
///
/// Implementations must be deterministic within a process and across runs,
/// so a persisted filter keeps answering the same way after a restart.
pub trait SeededHasher: Clone + Send + Sync {
    /// Hash `bytes` under `seed`.
    fn hash_with_seed(&self, bytes: &[u8], seed: u64) -> u64;

    /// Stable name, checked when restoring persisted filters.
    fn name(&self) -> &'static str;
}

/// XXH3-64 with native seeding. The default hasher.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Xxh3Hasher;

impl SeededHasher for Xxh3Hasher {
    #[inline]
    fn hash_with_seed(&self, bytes: &[u8], seed: u64) -> u64 {
        xxh3_64_with_seed(bytes, seed)
    }

    #[inline]
    fn name(&self) -> &'static str {
        "xxh3-64"
    }
}

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// FNV-1a over the seed's little-endian bytes followed by the key.
///
/// Slower and weaker than [`Xxh3Hasher`] on long keys; kept as a
/// dependency-free, easily reproduced alternative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fnv1aHasher;

impl SeededHasher for Fnv1aHasher {
    #[inline]
    fn hash_with_seed(&self, bytes: &[u8], seed: u64) -> u64 {
        let mut state = FNV_OFFSET_BASIS;
        for &byte in seed.to_le_bytes().iter().chain(bytes) {
            state ^= u64::from(byte);
            state = state.wrapping_mul(FNV_PRIME);
        }
        // final avalanche so that `% range` sees well-mixed low bits
        state ^= state >> 33;
        state = state.wrapping_mul(0xff51_afd7_ed55_8ccd);
        state ^= state >> 33;
        state
    }

    #[inline]
    fn name(&self) -> &'static str {
        "fnv1a-64"
    }
}
