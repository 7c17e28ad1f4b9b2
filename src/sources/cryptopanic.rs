// src/sources/cryptopanic.rs
//! CryptoPanic adapter: crypto-specific aggregator, queried for hot XRP
//! posts. Runs only when an auth token is configured.

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use serde::Deserialize;

use crate::article::Article;
use crate::filter;
use crate::sources::{parse_rfc3339, NewsSource};

const ENDPOINT: &str = "https://cryptopanic.com/api/developer/v2/posts/";

#[derive(Debug, Deserialize)]
struct PostsResponse {
    #[serde(default)]
    results: Vec<RawPost>,
}

#[derive(Debug, Deserialize)]
struct RawPost {
    title: Option<String>,
    description: Option<String>,
    url: Option<String>,
    source: Option<RawSource>,
    published_at: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawSource {
    title: Option<String>,
}

pub struct CryptoPanicSource {
    auth_token: String,
    client: reqwest::Client,
}

impl CryptoPanicSource {
    pub fn new(auth_token: String, client: reqwest::Client) -> Self {
        Self { auth_token, client }
    }

    /// Normalize a raw posts response body. The excerpt falls back from
    /// description to the post title.
    pub fn parse_response(body: &str) -> Result<Vec<Article>> {
        let resp: PostsResponse =
            serde_json::from_str(body).context("parsing cryptopanic json")?;

        let mut out = Vec::with_capacity(resp.results.len());
        for raw in resp.results {
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
                title.clone()
            };

            out.push(Article {
                title,
                excerpt,
                url,
                source: raw
                    .source
                    .and_then(|s| s.title)
                    .unwrap_or_else(|| "CryptoPanic".to_string()),
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
impl NewsSource for CryptoPanicSource {
    async fn fetch_latest(&self) -> Result<Vec<Article>> {
        let resp = self
            .client
            .get(ENDPOINT)
            .query(&[
                ("auth_token", self.auth_token.as_str()),
                ("currencies", "XRP"),
                ("public", "true"),
                ("filter", "hot"),
            ])
            .send()
            .await
            .context("cryptopanic get")?;
        let body = resp.text().await.context("cryptopanic body")?;
        Self::parse_response(&body)
    }

    fn name(&self) -> &str {
        "CryptoPanic"
    }
}
