use serde::Serialize;
use serde_json::Value;

/// Per-request extras forwarded to the underlying client.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub json: Option<Value>,
    pub headers: Vec<(String, String)>,
    pub query: Vec<(String, String)>,
}

impl RequestOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds options carrying `body` as the JSON request body.
    ///
    /// # Errors
    ///
    /// Returns an error when `body` cannot be represented as JSON.
    pub fn with_json<T>(body: &T) -> Result<Self, serde_json::Error>
    where
        T: Serialize + ?Sized,
    {
        Ok(Self {
            json: Some(serde_json::to_value(body)?),
            ..Self::default()
        })
    }

    #[must_use]
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_owned(), value.to_owned()));
        self
    }

    #[must_use]
    pub fn query(mut self, name: &str, value: &str) -> Self {
        self.query.push((name.to_owned(), value.to_owned()));
        self
    }
}
