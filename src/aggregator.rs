// src/aggregator.rs
//! One aggregation pass over every configured source: fetch, concatenate,
//! deduplicate by URL, sort newest first. Source failures are logged and
//! isolated; a failing source simply contributes zero articles.

use std::collections::HashMap;

use metrics::counter;

use crate::article::Article;
use crate::sources::NewsSource;

/// Fetch all sources in listed order and return the final deduplicated,
/// sorted article list.
pub async fn collect(sources: &[Box<dyn NewsSource>]) -> Vec<Article> {
    let mut all = Vec::new();
    for source in sources {
        match source.fetch_latest().await {
            Ok(mut articles) => {
                tracing::info!(source = source.name(), kept = articles.len(), "source fetched");
                counter!("news_articles_kept_total").increment(articles.len() as u64);
                all.append(&mut articles);
            }
            Err(e) => {
                tracing::warn!(error = ?e, source = source.name(), "source failed");
                counter!("news_source_errors_total").increment(1);
            }
        }
    }

    let mut unique = dedup_by_url(all);
    sort_newest_first(&mut unique);
    unique
}

/// Deduplicate by URL, keeping insertion order. On a collision the
/// later-processed article overwrites the earlier one in place, so the last
/// occurrence wins.
pub fn dedup_by_url(articles: Vec<Article>) -> Vec<Article> {
    let mut slot_by_url: HashMap<String, usize> = HashMap::with_capacity(articles.len());
    let mut out: Vec<Article> = Vec::with_capacity(articles.len());
    for article in articles {
        match slot_by_url.get(&article.url) {
            Some(&slot) => out[slot] = article,
            None => {
                slot_by_url.insert(article.url.clone(), out.len());
                out.push(article);
            }
        }
    }
    out
}

/// Stable sort by timestamp descending. Ties keep their dedup insertion
/// order, which makes repeated runs over identical input deterministic.
pub fn sort_newest_first(articles: &mut [Article]) {
    articles.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
}
