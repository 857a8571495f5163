//! Base-URL-bound HTTP session used by every check.
mod base;
mod curl;
mod options;


pub use base::{BaseSession, DEFAULT_USER_AGENT};
pub use curl::to_curl;
pub use options::RequestOptions;
