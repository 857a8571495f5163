use reqwest::{Client, Method, Response};
use tracing::debug;

use super::curl::to_curl;
use super::options::RequestOptions;

pub const DEFAULT_USER_AGENT: &str = concat!("apicheck/", env!("CARGO_PKG_VERSION"));

/// An HTTP client bound to one base URL.
///
/// Every verb method takes a path relative to the base URL and performs
/// exactly one request. Responses and transport errors are returned exactly
/// as the client produced them. Dropping the session releases its pooled
/// connections.
#[derive(Debug)]
pub struct BaseSession {
    client: Client,
    base_url: String,
}

impl BaseSession {
    /// Creates a session with a default client.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be initialized.
    pub fn new(base_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let client = Client::builder().user_agent(DEFAULT_USER_AGENT).build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        debug!(base_url = %base_url, "session opened");
        Self { client, base_url }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for `path`: the base URL followed by `path`, verbatim.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// # Errors
    ///
    /// Returns the client error when the request cannot be built or sent.
    pub async fn get(
        &self,
        path: &str,
        options: &RequestOptions,
    ) -> Result<Response, reqwest::Error> {
        self.send(Method::GET, path, options).await
    }

    /// # Errors
    ///
    /// Returns the client error when the request cannot be built or sent.
    pub async fn post(
        &self,
        path: &str,
        options: &RequestOptions,
    ) -> Result<Response, reqwest::Error> {
        self.send(Method::POST, path, options).await
    }

    /// # Errors
    ///
    /// Returns the client error when the request cannot be built or sent.
    pub async fn patch(
        &self,
        path: &str,
        options: &RequestOptions,
    ) -> Result<Response, reqwest::Error> {
        self.send(Method::PATCH, path, options).await
    }

    /// # Errors
    ///
    /// Returns the client error when the request cannot be built or sent.
    pub async fn delete(
        &self,
        path: &str,
        options: &RequestOptions,
    ) -> Result<Response, reqwest::Error> {
        self.send(Method::DELETE, path, options).await
    }

    /// Releases the session and its connections.
    pub fn close(self) {
        drop(self);
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        options: &RequestOptions,
    ) -> Result<Response, reqwest::Error> {
        let mut builder = self.client.request(method, self.url(path));
        for (name, value) in &options.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if !options.query.is_empty() {
            builder = builder.query(&options.query);
        }
        if let Some(body) = options.json.as_ref() {
            builder = builder.json(body);
        }
        let request = builder.build()?;

        debug!(curl = %to_curl(&request), "sending request");
        let method = request.method().clone();
        let url = request.url().clone();

        let response = self.client.execute(request).await?;
        debug!("{} {} -> {}", method, url, response.status().as_u16());
        Ok(response)
    }
}

impl Drop for BaseSession {
    fn drop(&mut self) {
        debug!(base_url = %self.base_url, "session closed");
    }
}
