//! HTTP client and shared transport pipeline for the StatusGator REST API.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::Client as HttpClient;
use reqwest::Method;
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::error::{classify, Error};

pub const DEFAULT_BASE_URL: &str = "https://statusgator.com/api/v3";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_MAX_RESPONSE_SIZE: usize = 10 * 1024 * 1024; // 10 MiB

/// StatusGator API client.
///
/// Cheap to clone; all clones share one connection pool and configuration.
/// Configuration is frozen at construction.
#[derive(Clone, Debug)]
pub struct Client {
    inner: Arc<ClientInner>,
}

#[derive(Debug)]
struct ClientInner {
    http: HttpClient,
    base_url: String,
    token: String,
    user_agent: String,
    max_response_size: usize,
}

/// Builder for [`Client`] configuration.
pub struct ClientBuilder {
    token: String,
    base_url: String,
    user_agent: String,
    timeout: Duration,
    max_response_size: usize,
    http: Option<HttpClient>,
}

impl ClientBuilder {
    fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: format!("statusgator-rust-client/{}", crate::VERSION),
            timeout: DEFAULT_TIMEOUT,
            max_response_size: DEFAULT_MAX_RESPONSE_SIZE,
            http: None,
        }
    }

    /// Set a custom base URL. A trailing slash is trimmed.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set a custom request timeout. Ignored when a custom HTTP client is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the maximum accepted response body size in bytes.
    pub fn max_response_size(mut self, bytes: usize) -> Self {
        self.max_response_size = bytes;
        self
    }

    /// Supply a pre-configured `reqwest` client.
    pub fn http_client(mut self, http: HttpClient) -> Self {
        self.http = Some(http);
        self
    }

    /// Validate the configuration and construct the client.
    pub fn build(self) -> Result<Client, Error> {
        if self.token.is_empty() {
            return Err(Error::TokenRequired);
        }
        Url::parse(&self.base_url)?;

        let http = match self.http {
            Some(http) => http,
            None => HttpClient::builder().timeout(self.timeout).build()?,
        };

        Ok(Client {
            inner: Arc::new(ClientInner {
                http,
                base_url: self.base_url,
                token: self.token,
                user_agent: self.user_agent,
                max_response_size: self.max_response_size,
            }),
        })
    }
}

impl Client {
    /// Create a client with the default configuration.
    ///
    /// Fails with [`Error::TokenRequired`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, Error> {
        Self::builder(token).build()
    }

    /// Start building a client with custom configuration.
    pub fn builder(token: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(token)
    }

    /// The configured base URL, without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// The configured user agent.
    pub fn user_agent(&self) -> &str {
        &self.inner.user_agent
    }

    /// Verify API connectivity and authentication.
    pub async fn ping(&self) -> Result<(), Error> {
        self.get("/ping").await.map(|_| ())
    }

    pub(crate) async fn get(&self, path: &str) -> Result<Vec<u8>, Error> {
        self.execute(Method::GET, path, None::<&()>).await
    }

    pub(crate) async fn post<B: Serialize>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<Vec<u8>, Error> {
        self.execute(Method::POST, path, body).await
    }

    pub(crate) async fn patch<B: Serialize>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<Vec<u8>, Error> {
        self.execute(Method::PATCH, path, body).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), Error> {
        self.execute(Method::DELETE, path, None::<&()>).await?;
        Ok(())
    }

    /// Execute a request and return the raw response body.
    ///
    /// Non-2xx responses are classified into typed errors; bodies larger than
    /// the configured cap fail with [`Error::ResponseTooLarge`] and no partial
    /// body is returned.
    async fn execute<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Vec<u8>, Error> {
        let url = format!("{}{}", self.inner.base_url, path);
        debug!(%method, %url, "statusgator request");

        let mut req = self
            .inner
            .http
            .request(method, &url)
            .header(AUTHORIZATION, format!("Bearer {}", self.inner.token))
            .header(USER_AGENT, &self.inner.user_agent)
            .header(ACCEPT, "application/json");

        if let Some(body) = body {
            let payload = serde_json::to_vec(body).map_err(Error::Encode)?;
            req = req.header(CONTENT_TYPE, "application/json").body(payload);
        }

        let mut resp = req.send().await?;
        let status = resp.status();

        let mut buf: Vec<u8> = Vec::new();
        while let Some(chunk) = resp.chunk().await? {
            if buf.len() + chunk.len() > self.inner.max_response_size {
                return Err(Error::ResponseTooLarge);
            }
            buf.extend_from_slice(&chunk);
        }

        if !status.is_success() {
            debug!(status = status.as_u16(), "statusgator error response");
            return Err(classify(status.as_u16(), &buf));
        }

        Ok(buf)
    }
}
