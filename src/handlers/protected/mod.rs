pub mod auth;
pub mod dependents;
pub mod employees;
pub mod users;
