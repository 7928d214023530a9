use crate::config::{ApiKey, Args};
use crate::service::QuoteService;
use crate::upstream::{FavQsClient, UpstreamError};

// app's shared state
pub struct AppState {
    pub quotes: QuoteService,
    pub api_key: ApiKey, // reported by /api/debug
}

impl AppState {
    // The key is classified here once; only a real key wires up FavQs
    pub fn from_args(args: &Args) -> Result<Self, UpstreamError> {
        let api_key = args.api_key();
        let upstream = FavQsClient::for_key(&api_key, &args.api_url, args.upstream_timeout())?;
        Ok(Self {
            quotes: QuoteService::new(upstream, args.cache_ttl()),
            api_key,
        })
    }
}
