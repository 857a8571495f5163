use thiserror::Error;

#[derive(Debug, Error)]
pub enum SuiteError {
    #[error("{failed} of {total} checks did not pass.")]
    ChecksFailed { failed: usize, total: usize },
    #[error("No checks match filter '{filter}'.")]
    NoChecksSelected { filter: String },
}
