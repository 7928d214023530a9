use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::cache::{QuoteCache, make_cache_key};
use crate::metrics::{
    CACHE_HITS, CACHE_MISSES, CACHE_SIZE, REQUEST_LATENCY, REQUEST_TOTAL, SAMPLE_FALLBACKS,
    UPSTREAM_FAILURES,
};
use crate::models::{Quote, RetrievalRequest};
use crate::sample::SampleStore;
use crate::upstream::FavQsClient;

// Cache first, then FavQs (real key only), then sample quotes.
// Fallback samples after an upstream failure are not cached.
pub struct QuoteService {
    cache: QuoteCache,
    samples: SampleStore,
    upstream: Option<FavQsClient>,
    rng: Mutex<StdRng>,
}

impl QuoteService {
    // `upstream` is None when no real API key is configured
    pub fn new(upstream: Option<FavQsClient>, ttl: Duration) -> Self {
        Self::with_rng(upstream, ttl, StdRng::from_entropy())
    }

    pub fn with_rng(upstream: Option<FavQsClient>, ttl: Duration, rng: StdRng) -> Self {
        Self {
            cache: QuoteCache::new(ttl),
            samples: SampleStore,
            upstream,
            rng: Mutex::new(rng),
        }
    }

    pub fn uses_upstream(&self) -> bool {
        self.upstream.is_some()
    }

    pub async fn get_quotes(&self, count: usize) -> Vec<Quote> {
        self.retrieve(RetrievalRequest::Random { count }).await
    }

    pub async fn get_quotes_by_tag(&self, tag: &str, count: usize) -> Vec<Quote> {
        self.retrieve(RetrievalRequest::Tagged {
            tag: tag.to_string(),
            count,
        })
        .await
    }

    async fn retrieve(&self, req: RetrievalRequest) -> Vec<Quote> {
        REQUEST_TOTAL.inc();
        let start_time = Instant::now();
        let quotes = self.resolve(&req).await;
        REQUEST_LATENCY.observe(start_time.elapsed().as_secs_f64());
        quotes
    }

    async fn resolve(&self, req: &RetrievalRequest) -> Vec<Quote> {
        let cache_key = make_cache_key(req);

        if let Some(quotes) = self.cache.get(&cache_key) {
            CACHE_HITS.inc();
            debug!(?req, returned = quotes.len(), "cache hit");
            return quotes;
        }
        CACHE_MISSES.inc();

        let Some(upstream) = &self.upstream else {
            info!(?req, "no usable API key, serving sample quotes");
            let quotes = self.pick_samples(req);
            self.store(cache_key, &quotes);
            return quotes;
        };

        debug!(?req, url = upstream.base_url(), "fetching quotes from upstream");
        match upstream.fetch(req).await {
            Ok(quotes) => {
                info!(?req, returned = quotes.len(), "fetched quotes from upstream");
                self.store(cache_key, &quotes);
                quotes
            }
            Err(e) => {
                UPSTREAM_FAILURES.inc();
                warn!(?req, error = %e, "upstream call failed, falling back to sample quotes");
                self.pick_samples(req)
            }
        }
    }

    fn pick_samples(&self, req: &RetrievalRequest) -> Vec<Quote> {
        SAMPLE_FALLBACKS.inc();
        // rng state is always valid, so poisoning is ignored
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        self.samples.select(req.tag(), req.count(), &mut *rng)
    }

    fn store(&self, cache_key: String, quotes: &[Quote]) {
        if self.cache.put(cache_key, quotes.to_vec()) {
            CACHE_SIZE.inc();
        }
    }
}
