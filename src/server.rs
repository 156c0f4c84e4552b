//! HTTP wrapper — exposes [`SearchEngine`] as a request/response endpoint.
//!
//! - `POST /search` with `{"query": "...", "locale": "cy", "limit": 5}`
//! - `GET /search?q=...&locale=cy&limit=5`
//! - `GET /health`
//!
//! Both search routes answer `{"results": [...]}`. `locale` falls back to the
//! configured default when absent (and to `en` when unrecognised); `limit` can
//! only lower the configured maximum.

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use chwilio_core::{Locale, SearchEngine, SearchResult};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::net::TcpListener;

#[derive(Debug, Clone)]
struct AppState {
    engine: Arc<SearchEngine>,
    default_locale: Locale,
}

/// Body of `POST /search`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Query string of `GET /search`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    pub locale: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
}

pub fn router(engine: Arc<SearchEngine>, default_locale: Locale) -> Router {
    let state = AppState {
        engine,
        default_locale,
    };

    Router::new()
        .route("/search", get(search_get).post(search_post))
        .route("/health", get(health))
        .with_state(state)
}

/// Bind `addr` and serve until ctrl-c.
pub async fn serve(engine: Arc<SearchEngine>, default_locale: Locale, addr: &str) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, router(engine, default_locale))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

async fn search_post(State(state): State<AppState>, Json(req): Json<SearchRequest>) -> Json<SearchResponse> {
    Json(run(&state, &req.query, req.locale.as_deref(), req.limit))
}

async fn search_get(State(state): State<AppState>, Query(params): Query<SearchParams>) -> Json<SearchResponse> {
    Json(run(&state, &params.q, params.locale.as_deref(), params.limit))
}

async fn health() -> &'static str {
    "ok"
}

fn run(state: &AppState, query: &str, locale: Option<&str>, limit: Option<usize>) -> SearchResponse {
    let locale = locale.map_or(state.default_locale, Locale::resolve);
    let max = state.engine.options().limit;
    let limit = limit.map_or(max, |l| l.min(max));

    let results = state.engine.search_locale(query, locale, limit);
    tracing::debug!(query, %locale, limit, results = results.len(), "search request");
    SearchResponse { results }
}
