use axum::{extract::State, response::IntoResponse, Json};
use serde::Deserialize;
use serde_json::json;

use crate::auth::{generate_jwt, Claims};
use crate::config;
use crate::error::ApiError;
use crate::services::AccountService;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// POST /auth/login - Authenticate with email/password and receive a JWT
///
/// Looks the account up by email (joined to its employee row to resolve the
/// role), verifies the password against the stored hash, and returns
/// `{ user_id, role, token, expires_in }`. Unknown email and wrong password
/// are distinct failures: 404 vs 401.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_email_format(&payload.email).map_err(ApiError::bad_request)?;

    let service = AccountService::new(state.pool.clone());
    let user = service.login(&payload.email, &payload.password).await?;

    let claims = Claims::new(user.user_id, payload.email, user.role.clone());
    let token = generate_jwt(claims)?;
    let expires_in = config::config().security.jwt_expiry_hours * 3600;

    Ok(Json(json!({
        "success": true,
        "data": {
            "user_id": user.user_id,
            "role": user.role,
            "token": token,
            "expires_in": expires_in
        }
    })))
}

/// Basic email shape check before the lookup query runs
fn validate_email_format(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email cannot be empty".to_string());
    }

    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() || !parts[1].contains('.') {
        return Err("Invalid email format".to_string());
    }

    Ok(())
}
