//! Evaluate endpoint - dry-run scoring without persistence

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;
use validator::Validate;

use crate::observability::metrics;
use crate::scoring::{self, ScoreResult, ScoringModel};
use crate::AppState;

/// POST /evaluate - score a record without saving it
pub async fn evaluate(
    State(state): State<Arc<AppState>>,
    Json(record): Json<ScoringModel>,
) -> Result<Json<ScoreResult>, (StatusCode, String)> {
    if let Err(errors) = record.validate() {
        state.metrics.increment(metrics::API_ERRORS, 1).await;
        return Err((StatusCode::BAD_REQUEST, errors.to_string()));
    }

    let result = scoring::evaluate(&record);
    state.metrics.increment(metrics::EVALUATIONS, 1).await;

    Ok(Json(result))
}
