//! URL shortener with a Bloom filter as a fast-reject guard.
//!
//! The filter answers "have we ever shortened this URL?" before the map is
//! consulted. A `false` skips the map lookup; a `true` is confirmed against
//! the map, so a false positive only costs one extra lookup.
//!
//! Run with: `RUST_LOG=bloomset=debug cargo run --example url_shortener`

use bloomset::{BloomConfig, BloomFilter};
use std::collections::HashMap;
use std::error::Error;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const SHORT_PREFIX: &str = "https://short.url/";
const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

struct UrlShortener {
    seen: BloomFilter,
    long_to_short: HashMap<String, String>,
    short_to_long: HashMap<String, String>,
    next_id: u64,
    false_positives: usize,
}

impl UrlShortener {
    fn new(config: &BloomConfig) -> bloomset::Result<Self> {
        Ok(Self {
            seen: config.build()?,
            long_to_short: HashMap::new(),
            short_to_long: HashMap::new(),
            next_id: 0,
            false_positives: 0,
        })
    }

    fn shorten(&mut self, long_url: &str) -> String {
        if self.seen.test(long_url) {
            if let Some(short) = self.long_to_short.get(long_url) {
                return short.clone();
            }
            self.false_positives += 1;
        }

        let short = format!("{}{}", SHORT_PREFIX, encode_base62(self.next_id));
        self.next_id += 1;

        self.seen.insert(long_url);
        self.long_to_short.insert(long_url.to_owned(), short.clone());
        self.short_to_long.insert(short.clone(), long_url.to_owned());
        short
    }

    fn expand(&self, short_url: &str) -> Option<&str> {
        self.short_to_long.get(short_url).map(String::as_str)
    }
}

fn encode_base62(mut id: u64) -> String {
    let mut digits = Vec::new();
    loop {
        digits.push(ALPHABET[(id % 62) as usize]);
        id /= 62;
        if id == 0 {
            break;
        }
    }
    digits.iter().rev().map(|&b| char::from(b)).collect()
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_target(false))
        .try_init()?;

    let config = BloomConfig::new(1_000_000, 0.01);
    let params = config.params()?;
    info!(
        bit_count = params.bit_count,
        hash_count = params.hash_count,
        "sizing shortener guard"
    );

    let mut shortener = UrlShortener::new(&config)?;

    let long_url = "https://verylongurlwebsite.com/very_long_link_to_a_webpage/very_verylong";
    let short_url = shortener.shorten(long_url);
    println!("{}", short_url);
    println!("{}", shortener.expand(&short_url).unwrap_or("<unknown>"));

    assert_eq!(shortener.shorten(long_url), short_url);

    for i in 0..100_000 {
        shortener.shorten(&format!("https://example.com/articles/{}", i));
    }
    info!(
        stored = shortener.long_to_short.len(),
        false_positives = shortener.false_positives,
        fill_ratio = shortener.seen.fill_ratio(),
        "bulk load complete"
    );

    Ok(())
}
