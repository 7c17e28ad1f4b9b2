// src/config.rs
//! Environment-backed configuration: optional upstream API keys, the feed
//! list, cache TTL, and HTTP client settings. An absent or placeholder key
//! disables the corresponding adapter without error.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, Context, Result};

pub const ENV_NEWS_API_KEY: &str = "NEWS_API_KEY";
pub const ENV_CRYPTOPANIC_KEY: &str = "CRYPTOPANIC_KEY";
pub const ENV_FEEDS_PATH: &str = "NEWS_FEEDS_PATH";
pub const ENV_PORT: &str = "PORT";

const NEWS_API_PLACEHOLDER: &str = "YOUR_NEWSAPI_KEY_HERE";
const CRYPTOPANIC_PLACEHOLDER: &str = "YOUR_CRYPTOPANIC_KEY_HERE";

/// Cache freshness window: 5 minutes.
pub const CACHE_DURATION_MS: i64 = 5 * 60 * 1000;

/// Per-request upstream timeout.
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

const DEFAULT_PORT: u16 = 8080;

/// XRP-heavy feeds polled on every aggregation run.
pub const DEFAULT_FEEDS: &[&str] = &[
    "https://cointelegraph.com/rss/tag/xrp",
    "https://u.today/rss",
    "https://cryptopotato.com/feed/",
    "https://www.newsbtc.com/feed/",
    "https://cryptoslate.com/feed/",
    "https://dailyhodl.com/feed/",
    "https://decrypt.co/feed",
    "https://ambcrypto.com/feed/",
];

#[derive(Debug, Clone)]
pub struct Config {
    pub news_api_key: Option<String>,
    pub cryptopanic_key: Option<String>,
    pub feeds: Vec<String>,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            news_api_key: key_from_env(ENV_NEWS_API_KEY, NEWS_API_PLACEHOLDER),
            cryptopanic_key: key_from_env(ENV_CRYPTOPANIC_KEY, CRYPTOPANIC_PLACEHOLDER),
            feeds: load_feeds()?,
            port: std::env::var(ENV_PORT)
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
        })
    }
}

/// Read a key from the environment. Empty values and the documented
/// placeholder count as "not configured".
fn key_from_env(name: &str, placeholder: &str) -> Option<String> {
    let raw = std::env::var(name).ok()?;
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == placeholder {
        return None;
    }
    Some(trimmed.to_string())
}

/// Feed list resolution:
/// 1) $NEWS_FEEDS_PATH (must exist)
/// 2) config/feeds.toml
/// 3) built-in defaults
pub fn load_feeds() -> Result<Vec<String>> {
    if let Ok(p) = std::env::var(ENV_FEEDS_PATH) {
        let pb = PathBuf::from(p);
        if !pb.exists() {
            return Err(anyhow!("NEWS_FEEDS_PATH points to non-existent path"));
        }
        return load_feeds_from(&pb);
    }
    let default_path = PathBuf::from("config/feeds.toml");
    if default_path.exists() {
        return load_feeds_from(&default_path);
    }
    Ok(DEFAULT_FEEDS.iter().map(|s| s.to_string()).collect())
}

pub fn load_feeds_from(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading feed list from {}", path.display()))?;
    parse_feeds_toml(&content)
}

fn parse_feeds_toml(s: &str) -> Result<Vec<String>> {
    #[derive(serde::Deserialize)]
    struct FeedsFile {
        feeds: Vec<String>,
    }
    let parsed: FeedsFile = toml::from_str(s).context("parsing feed list toml")?;
    Ok(parsed
        .feeds
        .into_iter()
        .map(|f| f.trim().to_string())
        .filter(|f| !f.is_empty())
        .collect())
}
