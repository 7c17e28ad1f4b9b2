//! XRP News Service — Binary Entrypoint
//! Boots the Axum HTTP server, wiring the news cache, source adapters, and
//! middleware.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use xrp_news_service::api::{self, AppState};
use xrp_news_service::cache::NewsCache;
use xrp_news_service::config::{self, Config};
use xrp_news_service::metrics::Metrics;
use xrp_news_service::sources::{
    cryptopanic::CryptoPanicSource, newsapi::NewsApiSource, rss::RssFeedSource, NewsSource,
};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

fn build_sources(cfg: &Config, client: &reqwest::Client) -> Vec<Box<dyn NewsSource>> {
    let mut sources: Vec<Box<dyn NewsSource>> = Vec::new();

    match &cfg.news_api_key {
        Some(key) => sources.push(Box::new(NewsApiSource::new(key.clone(), client.clone()))),
        None => tracing::info!("NEWS_API_KEY missing or placeholder; NewsAPI adapter disabled"),
    }
    match &cfg.cryptopanic_key {
        Some(key) => sources.push(Box::new(CryptoPanicSource::new(key.clone(), client.clone()))),
        None => {
            tracing::info!("CRYPTOPANIC_KEY missing or placeholder; CryptoPanic adapter disabled")
        }
    }
    for feed in &cfg.feeds {
        sources.push(Box::new(RssFeedSource::new(feed.clone(), client.clone())));
    }

    sources
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op in prod environments.
    let _ = dotenvy::dotenv();
    init_tracing();

    let cfg = Config::from_env()?;
    let metrics = Metrics::init(config::CACHE_DURATION_MS);

    let client = reqwest::Client::builder()
        .timeout(config::HTTP_TIMEOUT)
        .build()
        .context("building http client")?;

    let sources = build_sources(&cfg, &client);
    tracing::info!(sources = sources.len(), "configured news sources");

    let cache = Arc::new(NewsCache::new(sources));
    let app = api::router(AppState { cache }).merge(metrics.router());

    let addr = SocketAddr::from(([0, 0, 0, 0], cfg.port));
    tracing::info!(%addr, "news service listening");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("binding listener")?;
    axum::serve(listener, app).await.context("serving http")?;
    Ok(())
}
