use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Dependent {
    pub dependent_id: i64,
    pub employee_id: i64,
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub relation: String,
}
