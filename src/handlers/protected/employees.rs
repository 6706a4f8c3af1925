use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::error::ApiError;
use crate::services::employee_service::{EmployeeUpdate, NewEmployee};
use crate::services::EmployeeService;
use crate::state::AppState;

/// GET /api/employees - List all employees
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let employees = EmployeeService::new(state.pool.clone()).list().await?;
    Ok(Json(json!({ "success": true, "data": employees })))
}

/// POST /api/employees - Onboard a new employee
///
/// Creates the login account and the employee record together; a duplicate
/// email is a 409 and leaves no partial rows behind.
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<NewEmployee>,
) -> Result<impl IntoResponse, ApiError> {
    let employee = EmployeeService::new(state.pool.clone()).onboard(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "data": employee })),
    ))
}

/// GET /api/employees/:id - Get a single employee
pub async fn get(
    State(state): State<AppState>,
    Path(employee_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let employee = EmployeeService::new(state.pool.clone()).get(employee_id).await?;
    Ok(Json(json!({ "success": true, "data": employee })))
}

/// PUT /api/employees/:id - Update an employee; omitted fields are kept
pub async fn update(
    State(state): State<AppState>,
    Path(employee_id): Path<i64>,
    Json(payload): Json<EmployeeUpdate>,
) -> Result<impl IntoResponse, ApiError> {
    let employee = EmployeeService::new(state.pool.clone())
        .update(employee_id, payload)
        .await?;
    Ok(Json(json!({ "success": true, "data": employee })))
}

/// DELETE /api/employees/:id - Delete a single employee (non-cascading)
pub async fn delete(
    State(state): State<AppState>,
    Path(employee_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    EmployeeService::new(state.pool.clone()).delete(employee_id).await?;
    Ok(Json(json!({ "success": true })))
}
