//! Basic tests through the public API only.

use bloomset::hash::{HashFamily, HashFunction};
use bloomset::{BloomConfig, BloomError, BloomFilter, BloomFilterBuilder, ConcurrentBloomFilter};

#[test]
fn test_basic_insert_and_find() {
    let mut filter = BloomFilter::new(100, 0.01).unwrap();

    filter.insert("test-item");

    assert!(
        filter.test("test-item"),
        "Should find the item we just added"
    );
}

#[test]
fn test_batch_operations() {
    let mut filter = BloomFilter::new(1000, 0.01).unwrap();

    let items: Vec<String> = vec!["apple", "banana", "cherry"]
        .into_iter()
        .map(String::from)
        .collect();

    filter.insert_batch(&items);

    for item in &items {
        assert!(filter.test(item), "Should find {}", item);
    }
}

#[test]
fn test_no_false_negatives() {
    let mut filter = BloomFilter::new(1000, 0.01).unwrap();

    for i in 0..100u64 {
        filter.insert(&i.to_be_bytes());
    }

    // All inserted items MUST be found (no false negatives allowed)
    for i in 0..100u64 {
        assert!(filter.test(&i.to_be_bytes()), "False negative for {}", i);
    }
}

#[test]
fn test_fresh_filter_answers_false() {
    let filter = BloomFilter::new(50, 0.05).unwrap();
    for key in ["", "a", "https://example.com", "\u{1F600}"] {
        assert!(!filter.test(key), "fresh filter reported {:?}", key);
    }
}

#[test]
fn test_documented_sizes() {
    let cases = [
        (1000, 0.1, 4793, 3),
        (1000, 0.01, 9586, 7),
        (1000, 0.001, 14378, 10),
        (1000, 0.0001, 19171, 13),
        (1_000_000, 0.01, 9_585_059, 7),
    ];
    for (n, p, m, k) in cases {
        let filter = BloomFilter::new(n, p).unwrap();
        assert_eq!(filter.bit_count(), m, "m for n={} p={}", n, p);
        assert_eq!(filter.hash_count(), k, "k for n={} p={}", n, p);
    }
}

#[test]
fn test_tiny_rate_uses_many_hash_functions() {
    let filter = BloomFilter::new(1000, 1e-9).unwrap();
    assert_eq!(filter.bit_count(), 43133);
    assert_eq!(filter.hash_count(), 30);
}

#[test]
fn test_rejects_invalid_configuration() {
    let bad = [
        (0, 0.01),
        (10, 0.0),
        (10, 1.0),
        (10, 1.5),
        (10, -0.1),
        (10, f64::NAN),
        (10, f64::INFINITY),
    ];
    for (n, p) in bad {
        match BloomFilter::new(n, p) {
            Err(BloomError::InvalidConfiguration { .. }) => {}
            other => panic!("n={} p={} gave {:?}", n, p, other),
        }
    }
}

#[test]
fn test_hash_function_contract() {
    let f = HashFunction::with_seed(12345, 10).unwrap();
    for key in [&b""[..], b"a", b"hello world"] {
        let slot = f.slot(key);
        assert!(slot < 10);
        assert_eq!(slot, f.slot(key));
    }
    assert!(HashFunction::create(0).is_err());
    assert!(HashFunction::with_seed(1, 0).is_err());
}

#[test]
fn test_hash_family_seeds_are_distinct() {
    let functions: Vec<HashFunction> = HashFamily::from_entropy().generate(40, 5752).unwrap();
    let mut seeds: Vec<u64> = functions.iter().map(HashFunction::seed).collect();
    seeds.sort_unstable();
    seeds.dedup();
    assert_eq!(seeds.len(), 40);
}

#[test]
fn test_config_and_builder_agree() {
    let config = BloomConfig::new(20_000, 0.005).with_seed(8);
    let built = BloomFilterBuilder::new()
        .expected_items(20_000)
        .false_positive_rate(0.005)
        .seed(8)
        .build()
        .unwrap();
    assert_eq!(config.build().unwrap(), built);
    assert_eq!(config.params().unwrap().bit_count, built.bit_count());
}

#[test]
fn test_concurrent_wrapper_round_trip() {
    let mut filter = BloomFilter::with_seed(100, 0.01, 2).unwrap();
    filter.insert("before");

    let shared = ConcurrentBloomFilter::from(filter);
    shared.insert("after");
    assert!(shared.test("before"));
    assert!(shared.test("after"));

    let filter = shared.into_inner();
    assert!(filter.test("before") && filter.test("after"));
}
