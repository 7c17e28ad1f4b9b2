// src/sources/mod.rs
//! Upstream source adapters. Each adapter fetches one kind of upstream
//! (NewsAPI search, CryptoPanic posts, or an RSS feed), normalizes items
//! into [`Article`], and applies the editorial gate per item. Fetch and
//! parse failures stay inside the adapter boundary; the aggregation run
//! logs them and continues with the remaining sources.

pub mod cryptopanic;
pub mod newsapi;
pub mod rss;

use anyhow::Result;
use chrono::{DateTime, TimeZone, Utc};
use once_cell::sync::OnceCell;
use regex::Regex;
use time::{format_description::well_known::Rfc2822, OffsetDateTime, UtcOffset};

use crate::article::Article;

/// Upper bound on excerpt length, in characters.
pub const EXCERPT_MAX_CHARS: usize = 200;

#[async_trait::async_trait]
pub trait NewsSource: Send + Sync {
    async fn fetch_latest(&self) -> Result<Vec<Article>>;
    fn name(&self) -> &str;
}

/// Truncate to [`EXCERPT_MAX_CHARS`] characters. Char-based so we never cut
/// inside a multi-byte code point.
pub(crate) fn truncate_excerpt(s: &str) -> String {
    if s.chars().count() <= EXCERPT_MAX_CHARS {
        s.to_string()
    } else {
        s.chars().take(EXCERPT_MAX_CHARS).collect()
    }
}

/// Reduce an HTML fragment to plain text: decode entities, drop tags,
/// collapse whitespace.
pub(crate) fn strip_html(s: &str) -> String {
    let decoded = html_escape::decode_html_entities(s).to_string();

    static RE_TAGS: OnceCell<Regex> = OnceCell::new();
    let re_tags = RE_TAGS.get_or_init(|| Regex::new(r"(?is)</?[^>]+>").expect("tag regex"));
    let out = re_tags.replace_all(&decoded, "").to_string();

    static RE_WS: OnceCell<Regex> = OnceCell::new();
    let re_ws = RE_WS.get_or_init(|| Regex::new(r"\s+").expect("whitespace regex"));
    re_ws.replace_all(&out, " ").trim().to_string()
}

/// RFC 2822 timestamp (the RSS `pubDate` format) to UTC, `None` on failure.
pub(crate) fn parse_rfc2822(ts: &str) -> Option<DateTime<Utc>> {
    let secs = OffsetDateTime::parse(ts, &Rfc2822)
        .ok()
        .map(|dt| dt.to_offset(UtcOffset::UTC).unix_timestamp())?;
    Utc.timestamp_opt(secs, 0).single()
}

/// RFC 3339 timestamp (the JSON APIs' `publishedAt`/`published_at` format)
/// to UTC, `None` on failure.
pub(crate) fn parse_rfc3339(ts: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(ts)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
