// src/sources/rss.rs
//! RSS feed adapter. One instance per configured feed URL; always attempted.
//!
//! Feeds arrive as RSS 2.0 documents; we deserialize the channel with
//! quick-xml and derive the excerpt from a cleaned `content:encoded` body,
//! falling back to the item description.

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use quick_xml::de::from_str;
use serde::Deserialize;
use url::Url;

use crate::article::Article;
use crate::filter;
use crate::sources::{parse_rfc2822, parse_rfc3339, strip_html, truncate_excerpt, NewsSource};

#[derive(Debug, Deserialize)]
struct Rss {
    channel: Channel,
}

#[derive(Debug, Deserialize)]
struct Channel {
    title: Option<String>,
    #[serde(rename = "item", default)]
    item: Vec<Item>,
}

#[derive(Debug, Deserialize)]
struct Item {
    title: Option<String>,
    link: Option<String>,
    #[serde(rename = "pubDate")]
    pub_date: Option<String>,
    description: Option<String>,
    #[serde(rename = "encoded")]
    content: Option<String>,
}

pub struct RssFeedSource {
    feed_url: String,
    client: reqwest::Client,
}

impl RssFeedSource {
    pub fn new(feed_url: String, client: reqwest::Client) -> Self {
        Self { feed_url, client }
    }

    /// Parse one feed document into articles. The source name comes from the
    /// channel title, falling back to the feed URL's hostname; timestamps
    /// come from `pubDate` (RFC 2822, with some feeds emitting ISO 8601
    /// instead), falling back to now.
    pub fn parse_feed(xml: &str, feed_url: &str) -> Result<Vec<Article>> {
        let xml_clean = scrub_html_entities_for_xml(xml);
        let rss: Rss = from_str(&xml_clean).context("parsing rss xml")?;

        let source_name = rss
            .channel
            .title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| feed_hostname(feed_url));

        let mut out = Vec::with_capacity(rss.channel.item.len());
        for it in rss.channel.item {
            let url = match it.link {
                Some(l) if !l.trim().is_empty() => l.trim().to_string(),
                _ => continue,
            };
            if filter::is_blocked(&url) {
                continue;
            }

            let title = it.title.unwrap_or_default();
            let body = it.content.or(it.description).unwrap_or_default();
            let snippet = strip_html(&body);
            if !filter::is_relevant(&title, &snippet) {
                continue;
            }

            out.push(Article {
                title,
                excerpt: truncate_excerpt(&snippet),
                url,
                source: source_name.clone(),
                timestamp: it
                    .pub_date
                    .as_deref()
                    .and_then(|ts| parse_rfc2822(ts).or_else(|| parse_rfc3339(ts)))
                    .unwrap_or_else(Utc::now),
                is_manual: false,
            });
        }
        Ok(out)
    }
}

#[async_trait]
impl NewsSource for RssFeedSource {
    async fn fetch_latest(&self) -> Result<Vec<Article>> {
        let resp = self
            .client
            .get(&self.feed_url)
            .send()
            .await
            .with_context(|| format!("rss get {}", self.feed_url))?;
        let body = resp
            .text()
            .await
            .with_context(|| format!("rss body {}", self.feed_url))?;
        Self::parse_feed(&body, &self.feed_url)
    }

    fn name(&self) -> &str {
        &self.feed_url
    }
}

fn feed_hostname(feed_url: &str) -> String {
    Url::parse(feed_url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_else(|| feed_url.to_string())
}

/// Feeds routinely embed bare HTML entities outside CDATA, which are not
/// valid XML. Rewrite the common ones before handing the document to the
/// XML parser.
fn scrub_html_entities_for_xml(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&ndash;", "-")
        .replace("&mdash;", "-")
        .replace("&ldquo;", "\"")
        .replace("&rdquo;", "\"")
        .replace("&lsquo;", "'")
        .replace("&rsquo;", "'")
}
