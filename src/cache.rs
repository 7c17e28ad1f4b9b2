// src/cache.rs
//! In-memory article cache and refresh controller.
//!
//! One [`NewsCache`] is constructed at startup and shared behind an `Arc`.
//! The snapshot is replaced wholesale at the end of a completed aggregation
//! run, never mutated incrementally, so readers always observe a complete
//! list. `is_fetching` gives at-most-one-concurrent-aggregation semantics
//! process-wide; the first-fetch mutex makes cold-start requests share a
//! single in-flight run instead of piling up.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use metrics::counter;
use once_cell::sync::OnceCell;

use crate::aggregator;
use crate::article::Article;
use crate::config::CACHE_DURATION_MS;
use crate::sources::NewsSource;

#[derive(Debug, Default)]
struct Snapshot {
    data: Vec<Article>,
    last_fetch: Option<DateTime<Utc>>,
}

pub struct NewsCache {
    sources: Vec<Box<dyn NewsSource>>,
    snapshot: RwLock<Snapshot>,
    is_fetching: AtomicBool,
    /// Serializes cold-start callers so only one of them pays for the
    /// initial aggregation; the rest wait and read its result.
    first_fetch: tokio::sync::Mutex<()>,
    ttl_ms: i64,
}

/// One-time metrics registration (so series show up on /metrics).
fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        metrics::describe_counter!("news_fetch_runs_total", "Completed aggregation runs.");
        metrics::describe_counter!(
            "news_articles_kept_total",
            "Articles surviving per-source filtering."
        );
        metrics::describe_counter!("news_source_errors_total", "Source fetch/parse errors.");
        metrics::describe_counter!("news_cache_hits_total", "Requests served from a fresh cache.");
        metrics::describe_counter!(
            "news_cache_stale_serves_total",
            "Requests served stale data while a background refresh was scheduled."
        );
    });
}

impl NewsCache {
    pub fn new(sources: Vec<Box<dyn NewsSource>>) -> Self {
        Self::with_ttl_ms(sources, CACHE_DURATION_MS)
    }

    /// Cache with a custom freshness window, in milliseconds.
    pub fn with_ttl_ms(sources: Vec<Box<dyn NewsSource>>, ttl_ms: i64) -> Self {
        ensure_metrics_described();
        Self {
            sources,
            snapshot: RwLock::new(Snapshot::default()),
            is_fetching: AtomicBool::new(false),
            first_fetch: tokio::sync::Mutex::new(()),
            ttl_ms,
        }
    }

    /// Run one aggregation pass and replace the snapshot. A no-op when a run
    /// is already in flight. The in-flight flag is cleared on every exit
    /// path, including errors, via a drop guard.
    pub async fn run_aggregation(&self) -> Result<()> {
        if self
            .is_fetching
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            tracing::debug!("aggregation already in flight, skipping");
            return Ok(());
        }
        let _clear = ClearOnDrop(&self.is_fetching);

        let articles = aggregator::collect(&self.sources).await;
        tracing::info!(total = articles.len(), "news cache updated");
        counter!("news_fetch_runs_total").increment(1);

        let mut snap = self
            .snapshot
            .write()
            .map_err(|_| anyhow!("news cache lock poisoned"))?;
        snap.data = articles;
        snap.last_fetch = Some(Utc::now());
        Ok(())
    }

    /// Serve articles, refreshing as needed.
    ///
    /// Never-fetched or empty cache: run aggregation before answering, with
    /// concurrent cold-start callers sharing one run. Fresh cache: answer
    /// immediately. Stale cache: answer immediately with the stale data and
    /// detach a background refresh, at most one at a time.
    pub async fn articles(self: Arc<Self>) -> Result<Vec<Article>> {
        let (needs_first_fetch, age_ms) = {
            let snap = self.read_snapshot()?;
            (
                snap.data.is_empty() || snap.last_fetch.is_none(),
                snap.last_fetch.map(|t| (Utc::now() - t).num_milliseconds()),
            )
        };

        if needs_first_fetch {
            let _flight = self.first_fetch.lock().await;
            // Another cold-start caller may have filled the cache while we
            // waited on the mutex.
            let still_empty = {
                let snap = self.read_snapshot()?;
                snap.data.is_empty() || snap.last_fetch.is_none()
            };
            if still_empty {
                self.run_aggregation().await?;
            }
            return Ok(self.read_snapshot()?.data.clone());
        }

        if let Some(age_ms) = age_ms {
            if age_ms > self.ttl_ms && !self.is_fetching.load(Ordering::SeqCst) {
                tracing::info!(age_ms, "serving stale cache, refreshing in background");
                counter!("news_cache_stale_serves_total").increment(1);
                let cache = Arc::clone(&self);
                tokio::spawn(async move {
                    if let Err(e) = cache.run_aggregation().await {
                        tracing::error!(error = ?e, "background refresh failed");
                    }
                });
            } else {
                counter!("news_cache_hits_total").increment(1);
            }
        }

        Ok(self.read_snapshot()?.data.clone())
    }

    fn read_snapshot(&self) -> Result<std::sync::RwLockReadGuard<'_, Snapshot>> {
        self.snapshot
            .read()
            .map_err(|_| anyhow!("news cache lock poisoned"))
    }
}

struct ClearOnDrop<'a>(&'a AtomicBool);

impl Drop for ClearOnDrop<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}
