use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Expected a JSON object, got {kind}.")]
    NotAnObject { kind: &'static str },
    #[error("User does not match schema: {source}")]
    Shape {
        #[source]
        source: serde_json::Error,
    },
    #[error("Field 'email' is not an email address: '{value}'.")]
    InvalidEmail { value: String },
    #[error("Field 'avatar' is not a URL: '{value}' ({source})")]
    InvalidAvatar {
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Field 'avatar' must use http or https: '{value}'.")]
    UnsupportedAvatarScheme { value: String },
}
