use lazy_static::lazy_static;
use prometheus::{
    Counter, Encoder, Gauge, Histogram, TextEncoder, register_counter, register_gauge,
    register_histogram,
};

lazy_static! {
    pub static ref REQUEST_TOTAL: Counter =
        register_counter!("quotes_requests_total", "Total number of quote retrievals")
            .expect("register quotes_requests_total");
    pub static ref CACHE_HITS: Counter =
        register_counter!("quotes_cache_hits_total", "Total cache hits")
            .expect("register quotes_cache_hits_total");
    pub static ref CACHE_MISSES: Counter =
        register_counter!("quotes_cache_misses_total", "Total cache misses")
            .expect("register quotes_cache_misses_total");
    pub static ref UPSTREAM_FAILURES: Counter = register_counter!(
        "quotes_upstream_failures_total",
        "Failed calls to the upstream quotes API"
    )
    .expect("register quotes_upstream_failures_total");
    pub static ref SAMPLE_FALLBACKS: Counter = register_counter!(
        "quotes_sample_fallbacks_total",
        "Responses served from sample quotes"
    )
    .expect("register quotes_sample_fallbacks_total");
    pub static ref REQUEST_LATENCY: Histogram = register_histogram!(
        "quotes_retrieval_latency_seconds",
        "Quote retrieval latency in seconds"
    )
    .expect("register quotes_retrieval_latency_seconds");
    // process-wide: one gauge shared by every QuoteService
    pub static ref CACHE_SIZE: Gauge = register_gauge!(
        "quotes_cache_size",
        "Entries held by all quote caches in the process"
    )
    .expect("register quotes_cache_size");
}

// Render every registered metric in the text exposition format
pub fn render() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
}
