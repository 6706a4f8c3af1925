use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::error::ApiError;
use crate::services::{AccountService, DependentService, EmployeeService};
use crate::state::AppState;

/// GET /api/users/:user_id - Account record (credential hash is never serialized)
pub async fn get(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let user = AccountService::new(state.pool.clone()).get(user_id).await?;
    Ok(Json(json!({ "success": true, "data": user })))
}

/// GET /api/users/:user_id/employee - Employee record owned by an account
pub async fn employee(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let employee = EmployeeService::new(state.pool.clone())
        .find_by_user(user_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("No employee for user {}", user_id)))?;
    Ok(Json(json!({ "success": true, "data": employee })))
}

/// GET /api/users/:user_id/dependents - Dependents across the account's employees
pub async fn dependents(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let dependents = DependentService::new(state.pool.clone())
        .list_for_user(user_id)
        .await?;
    Ok(Json(json!({ "success": true, "data": dependents })))
}

/// DELETE /api/users/:user_id - Cascading account deletion
///
/// Removes the account and everything it owns (dependents, then employees,
/// then the user row) in one transaction; a failure at any step rolls the
/// whole thing back.
pub async fn delete(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    AccountService::new(state.pool.clone()).delete_cascade(user_id).await?;
    Ok(Json(json!({ "success": true })))
}
