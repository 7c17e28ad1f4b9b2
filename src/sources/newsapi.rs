// src/sources/newsapi.rs
//! NewsAPI adapter: full-text search over mainstream outlets, keyed by the
//! XRP/Ripple query. Runs only when an API key is configured.

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use serde::Deserialize;

use crate::article::Article;
use crate::filter;
use crate::sources::{parse_rfc3339, truncate_excerpt, NewsSource};

const ENDPOINT: &str = "https://newsapi.org/v2/everything";
const QUERY: &str = r#"(XRP OR Ripple OR "XRP Ledger" OR XRPL OR "Brad Garlinghouse" OR RLUSD OR RippleNet OR "XRP ETF")"#;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    articles: Vec<RawArticle>,
}

#[derive(Debug, Deserialize)]
struct RawArticle {
    title: Option<String>,
    description: Option<String>,
    content: Option<String>,
    url: Option<String>,
    source: Option<RawSource>,
    #[serde(rename = "publishedAt")]
    published_at: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawSource {
    name: Option<String>,
}

pub struct NewsApiSource {
    api_key: String,
    client: reqwest::Client,
}

impl NewsApiSource {
    pub fn new(api_key: String, client: reqwest::Client) -> Self {
        Self { api_key, client }
    }

    /// Normalize a raw search response body. Items on blocked domains or
    /// without a topical keyword match are dropped; the excerpt falls back
    /// from description to the first 200 chars of content to empty.
    pub fn parse_response(body: &str) -> Result<Vec<Article>> {
        let resp: SearchResponse =
            serde_json::from_str(body).context("parsing newsapi json")?;

        let mut out = Vec::with_capacity(resp.articles.len());
        for raw in resp.articles {
            let url = match raw.url {
                Some(u) if !u.trim().is_empty() => u,
                _ => continue,
            };
            if filter::is_blocked(&url) {
                continue;
            }

            let title = raw.title.unwrap_or_default();
            let description = raw.description.unwrap_or_default();
            if !filter::is_relevant(&title, &description) {
                continue;
            }

            let excerpt = if !description.is_empty() {
                description
            } else {
                raw.content.as_deref().map(truncate_excerpt).unwrap_or_default()
            };

            out.push(Article {
                title,
                excerpt,
                url,
                source: raw
                    .source
                    .and_then(|s| s.name)
                    .unwrap_or_else(|| "NewsAPI".to_string()),
                timestamp: raw
                    .published_at
                    .as_deref()
                    .and_then(parse_rfc3339)
                    .unwrap_or_else(Utc::now),
                is_manual: false,
            });
        }
        Ok(out)
    }
}

#[async_trait]
impl NewsSource for NewsApiSource {
    async fn fetch_latest(&self) -> Result<Vec<Article>> {
        let resp = self
            .client
            .get(ENDPOINT)
            .query(&[
                ("q", QUERY),
                ("sortBy", "publishedAt"),
                ("language", "en"),
                ("pageSize", "100"),
                ("apiKey", self.api_key.as_str()),
            ])
            .send()
            .await
            .context("newsapi get")?;
        let body = resp.text().await.context("newsapi body")?;
        Self::parse_response(&body)
    }

    fn name(&self) -> &str {
        "NewsAPI"
    }
}
