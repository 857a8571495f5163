mod app;
mod check;
mod config;
mod schema;
mod suite;

pub use app::{AppError, AppResult};
pub use check::CheckError;
pub use config::ConfigError;
pub use schema::SchemaError;
pub use suite::SuiteError;
