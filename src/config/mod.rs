//! Configuration loading and target resolution.
mod loader;
mod resolve;
pub mod types;


pub use loader::{load_config, load_config_file};
pub use resolve::{
    DEFAULT_ENVIRONMENT, DEFAULT_LOCAL_BASE_URL, DEFAULT_SEED_FILE, ResolvedTarget,
    normalize_base_url, resolve_target,
};
