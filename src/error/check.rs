use thiserror::Error;

use super::SchemaError;

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("{method} {path}: expected status {expected}, got {actual}.")]
    UnexpectedStatus {
        method: &'static str,
        path: String,
        expected: u16,
        actual: u16,
    },
    #[error("Field '{field}' mismatch: expected '{expected}', got '{actual}'.")]
    FieldMismatch {
        field: &'static str,
        expected: String,
        actual: String,
    },
    #[error("Duplicate ids: {total} ids but only {unique} unique.")]
    DuplicateIds { total: usize, unique: usize },
    #[error("Seeded {expected} users but got {unique} unique ids.")]
    SeedCountMismatch { expected: usize, unique: usize },
    #[error("Expected a JSON array from {path}.")]
    NotAList { path: String },
    #[error("Element {index} failed schema validation: {source}")]
    ListElementSchema {
        index: usize,
        #[source]
        source: SchemaError,
    },
    #[error("Schema validation failed: {0}")]
    Schema(#[from] SchemaError),
    #[error("Response from {path} has no integer 'id'.")]
    MissingId { path: String },
    #[error("Request failed: {source}")]
    Request {
        #[from]
        source: reqwest::Error,
    },
    #[error("Failed to encode request body: {source}")]
    EncodeBody {
        #[source]
        source: serde_json::Error,
    },
    #[error("Seed fixture unavailable: {reason}")]
    SeedUnavailable { reason: String },
    #[error("Seed fixture is empty.")]
    SeedEmpty,
    #[error("Cleanup failed for {count} user(s): {details}")]
    Cleanup { count: usize, details: String },
    #[error("Check panicked: {message}")]
    Panicked { message: String },
}
