use sqlx::PgPool;

/// Shared application state injected into every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}
