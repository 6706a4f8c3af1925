use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::error::ApiError;
use crate::services::dependent_service::{DependentUpdate, NewDependent};
use crate::services::DependentService;
use crate::state::AppState;

/// POST /api/dependents - Add a dependent to an employee
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<NewDependent>,
) -> Result<impl IntoResponse, ApiError> {
    let dependent = DependentService::new(state.pool.clone()).add(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "data": dependent })),
    ))
}

/// GET /api/dependents/:id - Get a single dependent
pub async fn get(
    State(state): State<AppState>,
    Path(dependent_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let dependent = DependentService::new(state.pool.clone()).get(dependent_id).await?;
    Ok(Json(json!({ "success": true, "data": dependent })))
}

/// PATCH /api/dependents/:id - Edit a dependent; omitted fields are kept
pub async fn update(
    State(state): State<AppState>,
    Path(dependent_id): Path<i64>,
    Json(payload): Json<DependentUpdate>,
) -> Result<impl IntoResponse, ApiError> {
    let dependent = DependentService::new(state.pool.clone())
        .edit(dependent_id, payload)
        .await?;
    Ok(Json(json!({ "success": true, "data": dependent })))
}

/// DELETE /api/dependents/:id - Delete a single dependent
pub async fn delete(
    State(state): State<AppState>,
    Path(dependent_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    DependentService::new(state.pool.clone()).delete(dependent_id).await?;
    Ok(Json(json!({ "success": true })))
}
