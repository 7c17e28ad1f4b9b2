// src/api.rs
//! HTTP surface: `GET /news` serving the cached article list, plus `/health`.
//! CORS is permissive: any origin, GET and OPTIONS, Content-Type allowed.
//! Preflight OPTIONS requests are answered by the CORS layer with an empty
//! 200.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::article::Article;
use crate::cache::NewsCache;

#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<NewsCache>,
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    // Preflight OPTIONS is answered by the CORS layer; the explicit handler
    // keeps plain OPTIONS at an empty 200 as well instead of a 405.
    Router::new()
        .route("/news", get(get_news).options(|| async {}))
        .route("/health", get(|| async { "OK" }))
        .layer(cors)
        .with_state(state)
}

async fn get_news(State(state): State<AppState>) -> Result<Json<Vec<Article>>, ApiError> {
    let articles = Arc::clone(&state.cache).articles().await?;
    Ok(Json(articles))
}

/// Internal failure surfaced as a generic 500. Per-source fetch errors never
/// reach this point; they are swallowed inside the aggregation run.
pub struct ApiError(anyhow::Error);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = ?self.0, "news endpoint failure");
        let body = Json(serde_json::json!({
            "error": "Unable to fetch news articles",
            "message": self.0.to_string(),
        }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
