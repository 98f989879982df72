//! Saved-score handlers: list, save, delete

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::models::{SaveScoreRequest, SavedScore};
use crate::observability::metrics;
use crate::scoring;
use crate::AppState;

/// GET /scores - saved list, most recent first, capped
pub async fn list_scores(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<SavedScore>>, (StatusCode, String)> {
    let scores = state
        .store
        .list()
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    state.metrics.increment(metrics::SCORES_LISTED, 1).await;

    Ok(Json(scores))
}

/// POST /scores - score the record and keep the snapshot
pub async fn save_score(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SaveScoreRequest>,
) -> Result<(StatusCode, Json<SavedScore>), (StatusCode, String)> {
    if let Err(errors) = req.validate() {
        state.metrics.increment(metrics::API_ERRORS, 1).await;
        return Err((StatusCode::BAD_REQUEST, errors.to_string()));
    }

    let result = scoring::evaluate(&req.record);
    let saved = SavedScore {
        id: Uuid::new_v4(),
        name: req.name,
        saved_at: Utc::now(),
        total: result.total,
        bias: result.bias,
        record: req.record,
    };

    state
        .store
        .append(saved.clone())
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    state.metrics.increment(metrics::SCORES_SAVED, 1).await;
    info!("Saved score '{}' ({} {})", saved.name, saved.total, saved.bias.label());

    Ok((StatusCode::CREATED, Json(saved)))
}

/// DELETE /scores/{id} - idempotent removal
pub async fn delete_score(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, (StatusCode, String)> {
    let removed = state
        .store
        .delete(id)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    if removed {
        state.metrics.increment(metrics::SCORES_DELETED, 1).await;
    }

    Ok(StatusCode::NO_CONTENT)
}
