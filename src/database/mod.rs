pub mod models;
pub mod pool;

pub use pool::{connect, health_check, StoreError};
