// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod aggregator;
pub mod api;
pub mod article;
pub mod cache;
pub mod config;
pub mod filter;
pub mod metrics;
pub mod sources;

// ---- Re-exports for stable public API ----
pub use crate::api::{router, AppState};
pub use crate::article::Article;
pub use crate::cache::NewsCache;
pub use crate::sources::NewsSource;
