//! Serde implementation for [`BloomFilter`].
//!
//! # Format
//!
//! A flat record that any serde format can carry:
//!
//! | Field | Meaning |
//! |-------|---------|
//! | `hasher` | [`SeededHasher::name`] of the filter's hasher |
//! | `expected_items` | capacity hint `n` |
//! | `target_fp_rate` | target rate `p` |
//! | `bit_count` | bit array length `m` |
//! | `seeds` | the `k` hash seeds, in evaluation order |
//! | `words` | the bit array as little-endian-indexed `u64` words |
//!
//! # Safety
//!
//! Deserialization re-checks every invariant of a constructed filter. A
//! record restored with the wrong hasher would report false negatives for
//! every key, so a hasher name mismatch is rejected too.

use crate::core::bitvec::BitVec;
use crate::core::params;
use crate::error::{BloomError, Result};
use crate::filters::BloomFilter;
use crate::hash::{HashFunction, SeededHasher};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashSet;

/// Borrowed view written by `Serialize`.
#[derive(Serialize)]
struct BloomFilterRef<'a> {
    hasher: &'a str,
    expected_items: usize,
    target_fp_rate: f64,
    bit_count: usize,
    seeds: Vec<u64>,
    words: &'a [u64],
}

/// Owned record read by `Deserialize`.
#[derive(Deserialize)]
struct BloomFilterSerde {
    hasher: String,
    expected_items: usize,
    target_fp_rate: f64,
    bit_count: usize,
    seeds: Vec<u64>,
    words: Vec<u64>,
}

impl BloomFilterSerde {
    /// Validate the record and rebuild the filter.
    fn into_filter<H: SeededHasher + Default>(self) -> Result<BloomFilter<H>> {
        params::validate_sizing(self.expected_items, self.target_fp_rate)?;

        let hasher = H::default();
        if self.hasher != hasher.name() {
            return Err(BloomError::serialization(format!(
                "filter was written with hasher '{}' but is being read with '{}'",
                self.hasher,
                hasher.name()
            )));
        }

        if self.seeds.is_empty() {
            return Err(BloomError::invalid_hash_count(0));
        }
        let mut seen = HashSet::with_capacity(self.seeds.len());
        if let Some(dup) = self.seeds.iter().find(|seed| !seen.insert(**seed)) {
            return Err(BloomError::serialization(format!(
                "hash seed {} appears more than once",
                dup
            )));
        }

        let bits = BitVec::from_words(self.words, self.bit_count)?;
        let hash_functions = self
            .seeds
            .into_iter()
            .map(|seed| HashFunction::with_hasher(seed, self.bit_count, hasher.clone()))
            .collect::<Result<Vec<_>>>()?;

        Ok(BloomFilter::from_parts(
            self.expected_items,
            self.target_fp_rate,
            bits,
            hash_functions,
        ))
    }
}

impl<H: SeededHasher> Serialize for BloomFilter<H> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let hasher = self
            .hash_functions()
            .first()
            .map_or("", |function| function.hasher().name());

        BloomFilterRef {
            hasher,
            expected_items: self.expected_items(),
            target_fp_rate: self.target_fp_rate(),
            bit_count: self.bit_count(),
            seeds: self.hash_functions().iter().map(HashFunction::seed).collect(),
            words: self.bits().as_words(),
        }
        .serialize(serializer)
    }
}

impl<'de, H: SeededHasher + Default> Deserialize<'de> for BloomFilter<H> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        BloomFilterSerde::deserialize(deserializer)?
            .into_filter()
            .map_err(de::Error::custom)
    }
}
