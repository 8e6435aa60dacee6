//! reqwest implementation of [`Transport`].

use std::error::Error as _;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, instrument, trace};

use ytdata_core::error::InvalidInputError;
use ytdata_core::{ClientConfig, HttpMethod, HttpRequest, HttpResponse, Result, Transport, TransportError};

/// Sends requests with a pooled [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    timeout: Option<Duration>,
}

impl ReqwestTransport {
    /// Create a transport honouring the config's timeout.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| InvalidInputError::Other {
            message: format!("failed to build HTTP client: {}", describe(&e)),
        })?;

        Ok(Self {
            client,
            timeout: config.timeout,
        })
    }

    /// Wrap an existing reqwest client, e.g. one with custom TLS or proxy
    /// settings.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client,
            timeout: None,
        }
    }

    fn classify(&self, err: reqwest::Error) -> TransportError {
        let err = err.without_url();
        let message = describe(&err);

        if err.is_timeout() {
            TransportError::Timeout {
                duration_ms: self
                    .timeout
                    .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
                    .unwrap_or_default(),
            }
        } else if err.is_connect() {
            TransportError::Connection { message }
        } else if err.is_builder() {
            TransportError::Request { message }
        } else {
            TransportError::Http { message }
        }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    #[instrument(skip_all, fields(method = %request.method, url = %request.redacted_url()))]
    async fn send(&self, request: &HttpRequest) -> std::result::Result<HttpResponse, TransportError> {
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, request.url.clone());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            debug!(content_type = %body.content_type, len = body.data.len(), "sending body");
            builder = builder
                .header(CONTENT_TYPE, body.content_type.as_str())
                .body(body.data.clone());
        }

        let response = builder.send().await.map_err(|e| self.classify(e))?;
        let status = response.status().as_u16();
        trace!(status, "response received");

        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response.bytes().await.map_err(|e| self.classify(e))?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

/// Flattens an error and its sources into one line.
fn describe(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_from_config() {
        let config = ClientConfig::new().with_timeout(Duration::from_secs(5));
        let transport = ReqwestTransport::new(&config).unwrap();
        assert_eq!(transport.timeout, Some(Duration::from_secs(5)));
    }

    #[tokio::test]
    async fn refused_connection_is_classified() {
        let transport = ReqwestTransport::new(&ClientConfig::new()).unwrap();
        let url = "http://127.0.0.1:1/youtube/v3/videos".parse().unwrap();
        let err = transport
            .send(&HttpRequest::new(HttpMethod::Get, url))
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::Connection { .. }), "{err:?}");
    }
}
