use chrono::NaiveDate;
use serde::Deserialize;
use sqlx::PgPool;
use thiserror::Error;

use crate::auth::password;
use crate::database::models::Employee;

/// Initial credential for accounts created during onboarding when the
/// request does not carry one. Users are expected to change it on first
/// login.
const DEFAULT_INITIAL_PASSWORD: &str = "changeme";

#[derive(Debug, Error)]
pub enum EmployeeError {
    #[error("Employee not found: {0}")]
    NotFound(i64),

    #[error("Account already exists for email: {0}")]
    DuplicateEmail(String),

    #[error("Credential error: {0}")]
    Credential(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Debug, Deserialize)]
pub struct NewEmployee {
    pub name: String,
    pub role: String,
    pub email: String,
    pub designation: String,
    pub date_of_joining: NaiveDate,
    pub gender: String,
    pub mobile_number: String,
    pub insurance_number: Option<String>,
    /// Initial login password; a default is used when omitted
    pub password: Option<String>,
}

/// Partial update; omitted fields keep their stored values.
#[derive(Debug, Default, Deserialize)]
pub struct EmployeeUpdate {
    pub name: Option<String>,
    pub role: Option<String>,
    pub designation: Option<String>,
    pub gender: Option<String>,
    pub mobile_number: Option<String>,
    pub insurance_number: Option<String>,
}

pub struct EmployeeService {
    pool: PgPool,
}

impl EmployeeService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Employee>, EmployeeError> {
        let rows = sqlx::query_as::<_, Employee>("SELECT * FROM employees ORDER BY employee_id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn get(&self, employee_id: i64) -> Result<Employee, EmployeeError> {
        sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE employee_id = $1")
            .bind(employee_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(EmployeeError::NotFound(employee_id))
    }

    /// Employee owned by a given account, if any.
    pub async fn find_by_user(&self, user_id: i64) -> Result<Option<Employee>, EmployeeError> {
        let row = sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Create the account and the employee record in one transaction.
    ///
    /// The account insert carries the argon2 hash of the initial password. A
    /// failed employee insert must not strand a credential-bearing user row,
    /// so both inserts commit together.
    pub async fn onboard(&self, details: NewEmployee) -> Result<Employee, EmployeeError> {
        let initial_password = details
            .password
            .as_deref()
            .unwrap_or(DEFAULT_INITIAL_PASSWORD);
        let password_hash =
            password::hash_password(initial_password).map_err(EmployeeError::Credential)?;

        let mut tx = self.pool.begin().await?;

        let (user_id,): (i64,) = sqlx::query_as(
            "INSERT INTO users (email, password_hash) VALUES ($1, $2) RETURNING user_id",
        )
        .bind(&details.email)
        .bind(&password_hash)
        .fetch_one(&mut *tx)
        .await
        .map_err(|err| Self::map_unique_violation(err, &details.email))?;

        let employee = sqlx::query_as::<_, Employee>(
            "INSERT INTO employees
                (user_id, name, role, designation, date_of_joining, gender, mobile_number, insurance_number)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING *",
        )
        .bind(user_id)
        .bind(&details.name)
        .bind(&details.role)
        .bind(&details.designation)
        .bind(details.date_of_joining)
        .bind(&details.gender)
        .bind(&details.mobile_number)
        .bind(&details.insurance_number)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(employee)
    }

    pub async fn update(
        &self,
        employee_id: i64,
        changes: EmployeeUpdate,
    ) -> Result<Employee, EmployeeError> {
        sqlx::query_as::<_, Employee>(
            "UPDATE employees SET
                name = COALESCE($2, name),
                role = COALESCE($3, role),
                designation = COALESCE($4, designation),
                gender = COALESCE($5, gender),
                mobile_number = COALESCE($6, mobile_number),
                insurance_number = COALESCE($7, insurance_number)
             WHERE employee_id = $1
             RETURNING *",
        )
        .bind(employee_id)
        .bind(&changes.name)
        .bind(&changes.role)
        .bind(&changes.designation)
        .bind(&changes.gender)
        .bind(&changes.mobile_number)
        .bind(&changes.insurance_number)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(EmployeeError::NotFound(employee_id))
    }

    /// Non-cascading delete of a single employee row.
    pub async fn delete(&self, employee_id: i64) -> Result<(), EmployeeError> {
        let result = sqlx::query("DELETE FROM employees WHERE employee_id = $1")
            .bind(employee_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(EmployeeError::NotFound(employee_id));
        }
        Ok(())
    }

    fn map_unique_violation(err: sqlx::Error, email: &str) -> EmployeeError {
        match &err {
            sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23505") => {
                EmployeeError::DuplicateEmail(email.to_string())
            }
            _ => EmployeeError::Database(err),
        }
    }
}
