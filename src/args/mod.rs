//! CLI argument types.
mod cli;
mod types;


pub use cli::CheckArgs;
pub use types::OutputFormat;
