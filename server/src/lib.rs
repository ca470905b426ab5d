use axum::{extract::{Path, Query, State}, http::StatusCode, routing::get, Json, Router};
use search_core::{Index, Occurrence, MAX_RESULTS};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Deserialize)]
pub struct SearchParams {
    pub kw1: String,
    #[serde(default)]
    pub kw2: String,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub kw1: Option<String>,
    pub kw2: Option<String>,
    pub took_s: f64,
    pub total_hits: usize,
    pub results: Vec<Occurrence>,
}

#[derive(Serialize)]
pub struct KeywordResponse {
    pub keyword: String,
    pub occurrences: Vec<Occurrence>,
}

#[derive(Clone)]
pub struct AppState {
    pub index: Arc<Index>,
}

/// Router over an index that is never modified after this call.
pub fn build_app(index: Index) -> Router {
    let app_state = AppState { index: Arc::new(index) };

    // CORS: read CORS_ALLOW_ORIGIN (comma-separated) or allow Any by default
    let cors = match std::env::var("CORS_ALLOW_ORIGIN") {
        Ok(val) => {
            let origins: Vec<_> = val
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            if origins.is_empty() {
                CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
            } else {
                CorsLayer::new().allow_origin(AllowOrigin::list(origins)).allow_methods(Any).allow_headers(Any)
            }
        }
        Err(_) => CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any),
    };

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/search", get(search_handler))
        .route("/keyword/:keyword", get(keyword_handler))
        .with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

pub async fn search_handler(State(state): State<AppState>, Query(params): Query<SearchParams>) -> Json<SearchResponse> {
    let start = std::time::Instant::now();
    let kw1 = state.index.query_keyword(&params.kw1);
    let kw2 = state.index.query_keyword(&params.kw2);

    let mut hits = state
        .index
        .combined_matches(kw1.as_deref().unwrap_or_default(), kw2.as_deref().unwrap_or_default());
    let total_hits = hits.len();
    hits.truncate(MAX_RESULTS);

    let elapsed = start.elapsed();
    tracing::debug!(total_hits, took_s = elapsed.as_secs_f64(), "search");
    Json(SearchResponse { kw1, kw2, took_s: elapsed.as_secs_f64(), total_hits, results: hits })
}

pub async fn keyword_handler(State(state): State<AppState>, Path(word): Path<String>) -> Result<Json<KeywordResponse>, (StatusCode, String)> {
    let keyword = state
        .index
        .query_keyword(&word)
        .ok_or_else(|| (StatusCode::BAD_REQUEST, format!("\"{word}\" is not a keyword")))?;
    let occurrences = state
        .index
        .occurrences(&keyword)
        .ok_or_else(|| (StatusCode::NOT_FOUND, format!("\"{keyword}\" not indexed")))?
        .to_vec();
    Ok(Json(KeywordResponse { keyword, occurrences }))
}
