use crate::endpoints::{GoogleEndpoint, RequestBody};
use crate::error::Error;
use reqwest::{Method, header::CONTENT_TYPE};
use std::time::Duration;

pub type Result<T> = std::result::Result<T, Error>;

const GOOG_API_KEY_HEADER: &str = "x-goog-api-key";
const APPLICATION_JSON: &str = "application/json";

/// Transport configuration for the shared client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Per-request timeout. Recognition of a full reading can take a
    /// few seconds, so this is generous.
    pub timeout: Duration,
    /// TCP connect timeout.
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(5),
        }
    }
}

/// One HTTP client for every Google Cloud endpoint the facade calls.
///
/// The API key is injected as the `x-goog-api-key` header on each
/// request; endpoints only describe their URL and bodies.
#[derive(Clone)]
pub struct GoogleClient {
    inner: reqwest::Client,
    api_key: String,
}

impl GoogleClient {
    pub fn from_env() -> Result<Self> {
        Self::from_env_with_config(ClientConfig::default())
    }

    pub fn from_env_with_config(config: ClientConfig) -> Result<Self> {
        let api_key = std::env::var("GOOGLE_API_KEY")
            .or_else(|_| std::env::var("GOOGLE_CLOUD_API_KEY"))
            .map_err(|_| Error::ApiKeyNotFound)?;
        Self::new_with_config(api_key, config)
    }

    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::new_with_config(api_key, ClientConfig::default())
    }

    pub fn new_with_config(api_key: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            inner: client,
            api_key: api_key.into(),
        })
    }

    /// Dispatch an endpoint and deserialize its response body.
    pub async fn hit<T: GoogleEndpoint>(&self, endpoint: T) -> Result<T::ResponseBody> {
        let url = endpoint.url()?;
        tracing::debug!(%url, method = %T::METHOD, "dispatching Google Cloud request");

        let mut builder = self
            .inner
            .request(T::METHOD, url)
            .header(GOOG_API_KEY_HEADER, &self.api_key);

        if matches!(T::METHOD, Method::POST | Method::PATCH) {
            builder = match endpoint.request_body()? {
                RequestBody::Json(json) => {
                    builder.header(CONTENT_TYPE, APPLICATION_JSON).json(&json)
                }
                RequestBody::Empty => builder,
            };
        }

        let resp = builder.send().await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp
                .json()
                .await
                .unwrap_or(serde_json::Value::String("<unreadable body>".into()));
            tracing::warn!(status, "Google Cloud request failed");
            return Err(Error::HttpError { status, body });
        }

        endpoint.response_body(resp).await
    }
}