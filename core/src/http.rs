//! Plain-data HTTP types shared by builders, transport, and classifier.
//!
//! # Design
//! Requests and responses are described as data so every layer stays
//! testable without a network: request builders produce `HttpRequest`
//! values, a [`Transport`](crate::Transport) executes them, and the
//! outcome classifier consumes `HttpResponse` values. Owned fields keep
//! the types free of lifetimes at the trait seam.

/// HTTP method for a request. The signing service only uses these two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// An HTTP request described as plain data.
///
/// `path` is relative to the transport's base URL. `headers` carries the
/// per-request entries only; transport-wide defaults (`accept`, bearer
/// `authorization`) are the transport's concern.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// Status and raw body of an executed request.
///
/// A [`Transport`](crate::Transport) produces one of these for every
/// response the server actually served — 4xx/5xx included. Served error
/// pages are data for the classifier, not transport errors.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// Whether the HTTP exchange itself succeeded (2xx).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
