mod debug;
mod health;
mod metrics;
mod quotes;

pub use debug::debug_handler;
pub use health::health_handler;
pub use metrics::metrics_handler;
pub use quotes::{parse_count, quotes_by_tag_handler, quotes_handler};
