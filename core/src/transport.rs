//! Transport seam between the client and the network.
//!
//! # Design
//! Implementations return an [`HttpResponse`] for every status the
//! server actually served — 4xx/5xx included — and reserve `Err` for
//! connection-level faults (DNS, refused connection, timeout). The
//! distinction matters downstream: a served error page is a logical
//! failure for the classifier to normalize, a broken connection is not.

use std::sync::Arc;
use std::time::Duration;

use ureq::Agent;

use crate::config::EimzoConfig;
use crate::error::{EimzoError, Result};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Sends one HTTP request to the signing service.
pub trait Transport: Send + Sync {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse>;
}

/// One transport can back several clients.
impl<T: Transport> Transport for Arc<T> {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse> {
        (**self).send(request)
    }
}

/// Default [`Transport`] over a blocking ureq agent.
///
/// Owns the validated base URL and applies the service-wide default
/// headers (`accept: application/json`, bearer `authorization` when an
/// API key is configured) before each request's own headers.
#[derive(Debug)]
pub struct HttpTransport {
    base_url: String,
    api_key: Option<String>,
    agent: Agent,
}

impl HttpTransport {
    /// Build a transport from configuration.
    ///
    /// Fails with [`EimzoError::InvalidBaseUrl`] unless the base URL is
    /// non-empty and starts with `http`. A trailing slash is trimmed so
    /// request paths always attach cleanly.
    pub fn new(config: &EimzoConfig) -> Result<Self> {
        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() || !base_url.starts_with("http") {
            return Err(EimzoError::InvalidBaseUrl(config.base_url.clone()));
        }

        // Non-2xx statuses must come back as data for the classifier,
        // not as agent errors.
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .timeout_connect(Some(Duration::from_secs(config.connect_timeout_secs)))
            .timeout_global(Some(Duration::from_secs(config.timeout_secs)))
            .build()
            .new_agent();

        Ok(Self {
            base_url,
            api_key: config.api_key.clone(),
            agent,
        })
    }

    fn apply_headers<Any>(
        &self,
        mut builder: ureq::RequestBuilder<Any>,
        request: &HttpRequest,
    ) -> ureq::RequestBuilder<Any> {
        builder = builder.header("accept", "application/json");
        if let Some(ref key) = self.api_key {
            builder = builder.header("authorization", format!("Bearer {key}"));
        }
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        builder
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse> {
        let url = format!("{}{}", self.base_url, request.path);

        let result = match (&request.method, &request.body) {
            (HttpMethod::Get, _) => self.apply_headers(self.agent.get(&url), request).call(),
            (HttpMethod::Post, Some(body)) => self
                .apply_headers(self.agent.post(&url), request)
                .send(body.as_bytes()),
            (HttpMethod::Post, None) => {
                self.apply_headers(self.agent.post(&url), request).send_empty()
            }
        };

        let mut response = result.map_err(|e| EimzoError::Transport {
            message: e.to_string(),
        })?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| EimzoError::Transport {
                message: e.to_string(),
            })?;

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_base_url_is_rejected() {
        let err = HttpTransport::new(&EimzoConfig::new("")).unwrap_err();
        assert!(matches!(err, EimzoError::InvalidBaseUrl(_)));
    }

    #[test]
    fn non_http_base_url_is_rejected() {
        for base_url in ["ftp://imzo.example.uz", "imzo.example.uz", "   "] {
            let err = HttpTransport::new(&EimzoConfig::new(base_url)).unwrap_err();
            assert!(matches!(err, EimzoError::InvalidBaseUrl(_)), "{base_url}");
        }
    }

    #[test]
    fn https_base_url_is_accepted() {
        assert!(HttpTransport::new(&EimzoConfig::new("https://imzo.example.uz")).is_ok());
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let transport = HttpTransport::new(&EimzoConfig::new("http://localhost:8080/")).unwrap();
        assert_eq!(transport.base_url, "http://localhost:8080");
    }
}
