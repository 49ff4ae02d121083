mod types;

pub use types::*;

use crate::{Error, Result, config::BackendConfig};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::time::Duration;
use tracing::debug;

/// The shared request helper. Executes HTTP calls against the backend,
/// decodes responses to strings, and owns the error taxonomy for network
/// failures and non-2xx statuses.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post(
        &self,
        path: &str,
        body: String,
        options: Option<&RequestOptions>,
    ) -> Result<String>;
}

pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(config: BackendConfig) -> Result<Self> {
        let mut default_headers = HeaderMap::new();
        for (name, value) in &config.default_headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| Error::config(format!("Invalid default header name: {}", name)))?;
            let value = HeaderValue::from_str(value)
                .map_err(|_| Error::config(format!("Invalid default header value for {}", name)))?;
            default_headers.insert(name, value);
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(default_headers)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(
        &self,
        path: &str,
        body: String,
        options: Option<&RequestOptions>,
    ) -> Result<String> {
        let url = self.url_for(path);
        debug!("POST {}", url);

        let mut request = self.client.post(&url);

        if let Some(options) = options {
            for (name, value) in &options.headers {
                request = request.header(name.as_str(), value.as_str());
            }
            if !options.query.is_empty() {
                request = request.query(&options.query);
            }
            if let Some(timeout) = options.timeout {
                request = request.timeout(timeout);
            }
            if !options.extensions.is_empty() {
                // Nothing in the HTTP layer consumes these today.
                debug!("Ignoring {} transport extensions", options.extensions.len());
            }
        }

        let response = request.body(body).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.text().await?)
    }
}
