use serde::Serialize;
use sqlx::{FromRow, PgPool, Postgres, Transaction};
use thiserror::Error;
use tracing::warn;

use crate::auth::password;
use crate::database::models::User;

#[derive(Debug, Error)]
pub enum AccountError {
    #[error("User not found")]
    NotFound,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Credential error: {0}")]
    Credential(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Row shape for the login lookup: user joined to its employee row so the
/// role resolves in one query.
#[derive(Debug, FromRow)]
struct CredentialRow {
    user_id: i64,
    password_hash: String,
    role: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuthenticatedUser {
    pub user_id: i64,
    pub role: String,
}

pub struct AccountService {
    pool: PgPool,
}

impl AccountService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Resolve a user by email and verify the presented password against the
    /// stored hash.
    ///
    /// Lookup failure and verification failure stay distinct: callers can
    /// tell an unknown email from a wrong password.
    pub async fn login(
        &self,
        email: &str,
        candidate: &str,
    ) -> Result<AuthenticatedUser, AccountError> {
        let row: Option<CredentialRow> = sqlx::query_as(
            "SELECT u.user_id, u.password_hash, e.role
             FROM users u
             JOIN employees e ON u.user_id = e.user_id
             WHERE u.email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        let row = row.ok_or(AccountError::NotFound)?;

        let verified =
            password::verify_password(candidate, &row.password_hash).map_err(AccountError::Credential)?;
        if !verified {
            return Err(AccountError::InvalidCredentials);
        }

        Ok(AuthenticatedUser {
            user_id: row.user_id,
            role: row.role,
        })
    }

    /// Account row by id, without the credential hash in the response path.
    pub async fn get(&self, user_id: i64) -> Result<User, AccountError> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AccountError::NotFound)
    }

    /// Remove a user and every employee/dependent row it transitively owns,
    /// as one atomic unit of work.
    ///
    /// Children are deleted before parents so referential integrity holds
    /// without ON DELETE CASCADE in the schema. Either all three deletions
    /// commit or none of them are visible to subsequent reads.
    pub async fn delete_cascade(&self, user_id: i64) -> Result<(), AccountError> {
        let mut tx = self.pool.begin().await?;

        if let Err(err) = Self::delete_owned_rows(&mut tx, user_id).await {
            if let Err(rollback_err) = tx.rollback().await {
                warn!("Rollback after failed cascade also failed: {}", rollback_err);
            }
            return Err(err.into());
        }

        tx.commit().await?;
        Ok(())
    }

    async fn delete_owned_rows(
        tx: &mut Transaction<'_, Postgres>,
        user_id: i64,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "DELETE FROM dependents WHERE employee_id IN
             (SELECT employee_id FROM employees WHERE user_id = $1)",
        )
        .bind(user_id)
        .execute(&mut **tx)
        .await?;

        sqlx::query("DELETE FROM employees WHERE user_id = $1")
            .bind(user_id)
            .execute(&mut **tx)
            .await?;

        // Re-check before the final delete; an absent user turns the whole
        // cascade into a committed no-op
        let user: Option<(i64,)> = sqlx::query_as("SELECT user_id FROM users WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&mut **tx)
            .await?;

        if user.is_some() {
            sqlx::query("DELETE FROM users WHERE user_id = $1")
                .bind(user_id)
                .execute(&mut **tx)
                .await?;
        }

        Ok(())
    }
}
