//! Macro Scorer Library
//!
//! Weighted macro scoring for currencies and currency pairs: pure scoring
//! strategies, a saved-score store, and the HTTP surface that serves them.

pub mod config;
pub mod models;
pub mod scoring;
pub mod stats;
pub mod store;
pub mod handlers {
    pub mod evaluate;
    pub mod scores;
}
pub mod health;
pub mod observability;


use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use models::*;
pub use observability::MetricsCollector;
pub use scoring::{Bias, ScoreResult, ScoringModel};
pub use store::ScoreStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: ScoreStore,
    pub metrics: MetricsCollector,
}

impl AppState {
    pub fn new(store: ScoreStore, metrics: MetricsCollector) -> Self {
        Self { store, metrics }
    }
}

/// Build the API router
pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/evaluate", post(handlers::evaluate::evaluate))
        .route(
            "/scores",
            get(handlers::scores::list_scores).post(handlers::scores::save_score),
        )
        .route("/scores/{id}", delete(handlers::scores::delete_score))
        .route("/healthz", get(health::healthz))
        .route("/readyz", get(health::readyz))
        .route("/health/detail", get(health::health_detail))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
