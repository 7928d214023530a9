use clap::Parser;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://favqs.com/api";

// Values people leave in .env templates
const PLACEHOLDER_KEYS: &[&str] = &["your-api-key", "your-api-key-here"];

// CLI argument structure (every flag can also come from the environment)
#[derive(Parser, Debug, Clone)]
#[command(name = "quote-gateway")]
#[command(about = "Caching proxy for the FavQs quotes API with built-in sample quotes")]
pub struct Args {
    // Port to run the server on
    #[arg(short, long, env = "PORT", default_value_t = 3001)]
    pub port: u16,

    // FavQs API key; empty means sample quotes only
    #[arg(short = 'k', long, env = "FAVQS_API_KEY", default_value = "", hide_env_values = true)]
    pub api_key: String,

    // FavQs base URL
    #[arg(long, env = "FAVQS_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    // Cache TTL in seconds
    #[arg(short, long, env = "CACHE_TTL_SECS", default_value_t = 300)]
    pub cache_ttl: u64,

    // Upstream request timeout in seconds
    #[arg(long, env = "UPSTREAM_TIMEOUT_SECS", default_value_t = 10)]
    pub upstream_timeout: u64,
}

impl Args {
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout)
    }

    pub fn api_key(&self) -> ApiKey {
        ApiKey::from_raw(&self.api_key)
    }
}

// Credential state, decided once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiKey {
    Absent,
    Placeholder,
    Real(String),
}

impl ApiKey {
    pub fn from_raw(raw: &str) -> Self {
        let key = raw.trim();
        if key.is_empty() {
            ApiKey::Absent
        } else if PLACEHOLDER_KEYS.contains(&key) {
            ApiKey::Placeholder
        } else {
            ApiKey::Real(key.to_string())
        }
    }

    pub fn as_real(&self) -> Option<&str> {
        match self {
            ApiKey::Real(key) => Some(key),
            _ => None,
        }
    }

    // Text reported by /api/debug
    pub fn status(&self) -> &'static str {
        match self {
            ApiKey::Absent => "No API key (using sample data)",
            ApiKey::Placeholder => "Placeholder API key (using sample data)",
            ApiKey::Real(_) => "API key is set",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_keys() {
        assert_eq!(ApiKey::from_raw(""), ApiKey::Absent);
        assert_eq!(ApiKey::from_raw("   "), ApiKey::Absent);
        assert_eq!(ApiKey::from_raw("your-api-key"), ApiKey::Placeholder);
        assert_eq!(ApiKey::from_raw(" your-api-key-here\n"), ApiKey::Placeholder);
        assert_eq!(ApiKey::from_raw("8cdb03"), ApiKey::Real("8cdb03".into()));
        assert_eq!(ApiKey::from_raw("8cdb03").as_real(), Some("8cdb03"));
        assert_eq!(ApiKey::Placeholder.as_real(), None);
    }

    #[test]
    fn status_text() {
        assert_eq!(ApiKey::Absent.status(), "No API key (using sample data)");
        assert_eq!(ApiKey::Real("x".into()).status(), "API key is set");
        assert_eq!(
            ApiKey::Placeholder.status(),
            "Placeholder API key (using sample data)"
        );
    }

    #[test]
    fn parses_flags() {
        let args = Args::try_parse_from([
            "quote-gateway",
            "--port",
            "8081",
            "--api-key",
            "abc",
            "--cache-ttl",
            "5",
        ])
        .unwrap();
        assert_eq!(args.port, 8081);
        assert_eq!(args.api_key(), ApiKey::Real("abc".into()));
        assert_eq!(args.cache_ttl(), Duration::from_secs(5));
        assert_eq!(args.api_url, DEFAULT_API_URL);
    }
}
