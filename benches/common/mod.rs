//! Shared data generators and constants for the benchmarks.
#![allow(dead_code)]
use bloomset::{BloomFilter, SeededHasher};
use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};
use std::collections::HashSet;

// DATA GENERATORS

/// Random alphanumeric string of `len` bytes
#[inline]
pub fn random_string(len: usize) -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// Batch of independent random strings
pub fn generate_strings(count: usize, len: usize) -> Vec<String> {
    (0..count).map(|_| random_string(len)).collect()
}

/// URL-like keys, the shortener workload
///
/// Format: "https://example.com/path/XXXXXXXXXXXXXXXX"
pub fn generate_urls(count: usize) -> Vec<String> {
    (0..count)
        .map(|_| format!("https://example.com/path/{}", random_string(16)))
        .collect()
}

/// Random u64 values encoded as little-endian keys
pub fn generate_u64_keys(count: usize) -> Vec<[u8; 8]> {
    let mut rng = thread_rng();
    (0..count).map(|_| rng.gen::<u64>().to_le_bytes()).collect()
}

/// Two disjoint sets of strings: one to insert, one that was never inserted
pub fn disjoint_sets(count: usize, len: usize) -> (Vec<String>, Vec<String>) {
    let inserted = generate_strings(count, len);
    let present: HashSet<&String> = inserted.iter().collect();

    let mut absent = Vec::with_capacity(count);
    while absent.len() < count {
        let candidate = random_string(len);
        if !present.contains(&candidate) {
            absent.push(candidate);
        }
    }
    (inserted, absent)
}

// BENCHMARK CONSTANTS

/// Filter capacities, from cache-resident to RAM-sized
pub const SIZES: &[usize] = &[
    1_000,     // ~1.2 KB of bits
    10_000,    // ~12 KB
    100_000,   // ~120 KB
    1_000_000, // ~1.2 MB
];

/// Target false positive rates
///
/// Lower rates mean more hash functions per operation.
pub const FP_RATES: &[f64] = &[0.1, 0.01, 0.001, 0.0001];

/// Key lengths in bytes
pub const KEY_LENGTHS: &[usize] = &[8, 32, 128, 512];

/// Load factors as percentages of `expected_items`
pub const LOAD_FACTORS: &[usize] = &[10, 50, 90];

// FILTER SETUP HELPERS

/// Insert `target_pct` percent of the filter's capacity from `items`.
///
/// Returns the number of items inserted.
pub fn fill_filter<H: SeededHasher, K: AsRef<[u8]>>(
    filter: &mut BloomFilter<H>,
    items: &[K],
    target_pct: usize,
) -> usize {
    let target_count = (filter.expected_items() * target_pct) / 100;
    let actual_count = target_count.min(items.len());

    for item in &items[..actual_count] {
        filter.insert(item);
    }
    actual_count
}
