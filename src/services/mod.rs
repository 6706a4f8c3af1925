pub mod account_service;
pub mod dependent_service;
pub mod employee_service;

pub use account_service::AccountService;
pub use dependent_service::DependentService;
pub use employee_service::EmployeeService;
