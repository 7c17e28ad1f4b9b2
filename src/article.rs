// src/article.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One normalized news item, regardless of which upstream produced it.
///
/// `url` doubles as the deduplication key across sources; `is_manual` is
/// always false for fetched articles and is reserved for manually curated
/// entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub excerpt: String,
    pub url: String,
    pub source: String,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "isManual")]
    pub is_manual: bool,
}
