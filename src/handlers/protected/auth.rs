use axum::{response::IntoResponse, Extension, Json};
use serde_json::json;

use crate::middleware::auth::AuthUser;

/// GET /api/auth/whoami - Identity of the current bearer token
pub async fn whoami(Extension(user): Extension<AuthUser>) -> impl IntoResponse {
    Json(json!({
        "success": true,
        "data": {
            "user_id": user.user_id,
            "email": user.email,
            "role": user.role
        }
    }))
}
