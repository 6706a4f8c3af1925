pub mod dependent;
pub mod employee;
pub mod user;

pub use dependent::Dependent;
pub use employee::Employee;
pub use user::User;
