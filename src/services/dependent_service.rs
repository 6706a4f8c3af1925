use chrono::NaiveDate;
use serde::Deserialize;
use sqlx::PgPool;
use thiserror::Error;

use crate::database::models::Dependent;

#[derive(Debug, Error)]
pub enum DependentError {
    #[error("Dependent not found: {0}")]
    NotFound(i64),

    #[error("No such employee: {0}")]
    MissingEmployee(i64),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Debug, Deserialize)]
pub struct NewDependent {
    pub employee_id: i64,
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub relation: String,
}

/// Partial update; omitted fields keep their stored values.
#[derive(Debug, Default, Deserialize)]
pub struct DependentUpdate {
    pub name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub relation: Option<String>,
}

pub struct DependentService {
    pool: PgPool,
}

impl DependentService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Dependents of every employee owned by the given account.
    pub async fn list_for_user(&self, user_id: i64) -> Result<Vec<Dependent>, DependentError> {
        let rows = sqlx::query_as::<_, Dependent>(
            "SELECT d.*
             FROM dependents d
             JOIN employees e ON d.employee_id = e.employee_id
             WHERE e.user_id = $1
             ORDER BY d.dependent_id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn get(&self, dependent_id: i64) -> Result<Dependent, DependentError> {
        sqlx::query_as::<_, Dependent>("SELECT * FROM dependents WHERE dependent_id = $1")
            .bind(dependent_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(DependentError::NotFound(dependent_id))
    }

    pub async fn add(&self, details: NewDependent) -> Result<Dependent, DependentError> {
        sqlx::query_as::<_, Dependent>(
            "INSERT INTO dependents (employee_id, name, date_of_birth, relation)
             VALUES ($1, $2, $3, $4)
             RETURNING *",
        )
        .bind(details.employee_id)
        .bind(&details.name)
        .bind(details.date_of_birth)
        .bind(&details.relation)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| Self::map_fk_violation(err, details.employee_id))
    }

    pub async fn edit(
        &self,
        dependent_id: i64,
        changes: DependentUpdate,
    ) -> Result<Dependent, DependentError> {
        sqlx::query_as::<_, Dependent>(
            "UPDATE dependents SET
                name = COALESCE($2, name),
                date_of_birth = COALESCE($3, date_of_birth),
                relation = COALESCE($4, relation)
             WHERE dependent_id = $1
             RETURNING *",
        )
        .bind(dependent_id)
        .bind(&changes.name)
        .bind(changes.date_of_birth)
        .bind(&changes.relation)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(DependentError::NotFound(dependent_id))
    }

    pub async fn delete(&self, dependent_id: i64) -> Result<(), DependentError> {
        let result = sqlx::query("DELETE FROM dependents WHERE dependent_id = $1")
            .bind(dependent_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DependentError::NotFound(dependent_id));
        }
        Ok(())
    }

    fn map_fk_violation(err: sqlx::Error, employee_id: i64) -> DependentError {
        match &err {
            sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23503") => {
                DependentError::MissingEmployee(employee_id)
            }
            _ => DependentError::Database(err),
        }
    }
}
