use dashmap::DashMap;
use sha2::{Digest, Sha256};
use std::time::Duration;
use tokio::time::Instant;

use crate::models::{Quote, RetrievalRequest};

// Entries older than this are ignored
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

// Cache entry with timestamp
#[derive(Clone, Debug)]
pub struct CacheEntry {
    pub quotes: Vec<Quote>,
    pub created_at: Instant,
}

// Create a cache key (hash of mode + parameters)
pub fn make_cache_key(req: &RetrievalRequest) -> String {
    let mut hasher = Sha256::new();
    match req {
        RetrievalRequest::Random { count } => {
            hasher.update(b"random");
            hasher.update(count.to_le_bytes());
        }
        RetrievalRequest::Tagged { tag, count } => {
            hasher.update(b"tag");
            hasher.update(count.to_le_bytes());
            hasher.update(tag.as_bytes());
        }
    }
    format!("{:x}", hasher.finalize())
}

// In-memory quote cache. Expiry is checked on read, nothing is swept.
pub struct QuoteCache {
    entries: DashMap<String, CacheEntry>,
    ttl: Duration,
}

impl QuoteCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn get(&self, key: &str) -> Option<Vec<Quote>> {
        let entry = self.entries.get(key)?;
        if entry.created_at.elapsed() < self.ttl {
            Some(entry.quotes.clone())
        } else {
            None
        }
    }

    // Overwrites whatever was stored under `key`. True if the key is new.
    pub fn put(&self, key: String, quotes: Vec<Quote>) -> bool {
        let entry = CacheEntry {
            quotes,
            created_at: Instant::now(),
        };
        self.entries.insert(key, entry).is_none()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for QuoteCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}
