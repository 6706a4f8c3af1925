use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Employee {
    pub employee_id: i64,
    pub user_id: i64,
    pub name: String,
    pub role: String,
    pub designation: String,
    pub date_of_joining: NaiveDate,
    pub gender: String,
    pub mobile_number: String,
    pub insurance_number: Option<String>,
}
