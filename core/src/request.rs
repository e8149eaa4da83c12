//! Request builders for the four service operations.
//!
//! # Design
//! Pure functions from caller input to [`HttpRequest`]: no validation,
//! no I/O. PKCS#7 payloads are opaque tokens passed through verbatim as
//! raw `text/plain` bodies (the service does not accept JSON wrapping),
//! and endpoint selection for `verify` depends only on whether detached
//! data is present.

use crate::http::{HttpMethod, HttpRequest};

/// GET a fresh signing challenge.
pub fn challenge() -> HttpRequest {
    HttpRequest {
        method: HttpMethod::Get,
        path: "/frontend/challenge".to_string(),
        headers: Vec::new(),
        body: None,
    }
}

/// POST a signed challenge for authentication.
///
/// `user_ip` and `host` travel as `x-real-ip` and `host` headers for the
/// service's audit trail.
pub fn authenticate(pkcs7: &str, user_ip: &str, host: &str) -> HttpRequest {
    HttpRequest {
        method: HttpMethod::Post,
        path: "/backend/auth".to_string(),
        headers: vec![
            ("content-type".to_string(), "text/plain".to_string()),
            ("x-real-ip".to_string(), user_ip.to_string()),
            ("host".to_string(), host.to_string()),
        ],
        body: Some(pkcs7.to_string()),
    }
}

/// POST a PKCS#7 to the TSA for a timestamp.
pub fn timestamp(pkcs7: &str) -> HttpRequest {
    HttpRequest {
        method: HttpMethod::Post,
        path: "/frontend/timestamp/pkcs7".to_string(),
        headers: vec![("content-type".to_string(), "text/plain".to_string())],
        body: Some(pkcs7.to_string()),
    }
}

/// POST a timestamped PKCS#7 for verification.
///
/// With `data64` the detached endpoint receives `"<data64>|<pkcs7wtst>"`;
/// without it the attached endpoint receives the PKCS#7 alone.
pub fn verify(pkcs7wtst: &str, data64: Option<&str>) -> HttpRequest {
    let (path, body) = match data64 {
        Some(data64) => (
            "/frontend/verify/detached".to_string(),
            format!("{data64}|{pkcs7wtst}"),
        ),
        None => ("/frontend/verify/attached".to_string(), pkcs7wtst.to_string()),
    };
    HttpRequest {
        method: HttpMethod::Post,
        path,
        headers: vec![("content-type".to_string(), "text/plain".to_string())],
        body: Some(body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn challenge_is_a_bare_get() {
        let req = challenge();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "/frontend/challenge");
        assert!(req.headers.is_empty());
        assert!(req.body.is_none());
    }

    #[test]
    fn authenticate_carries_audit_headers_and_raw_body() {
        let req = authenticate("MIIB-pkcs7-blob", "203.0.113.7", "example.uz");
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "/backend/auth");
        assert_eq!(
            req.headers,
            vec![
                ("content-type".to_string(), "text/plain".to_string()),
                ("x-real-ip".to_string(), "203.0.113.7".to_string()),
                ("host".to_string(), "example.uz".to_string()),
            ]
        );
        assert_eq!(req.body.as_deref(), Some("MIIB-pkcs7-blob"));
    }

    #[test]
    fn timestamp_posts_raw_pkcs7() {
        let req = timestamp("MIIB-pkcs7-blob");
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "/frontend/timestamp/pkcs7");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "text/plain".to_string())]
        );
        assert_eq!(req.body.as_deref(), Some("MIIB-pkcs7-blob"));
    }

    #[test]
    fn verify_without_data_targets_attached() {
        let req = verify("MIIB-signed", None);
        assert_eq!(req.path, "/frontend/verify/attached");
        assert_eq!(req.body.as_deref(), Some("MIIB-signed"));
    }

    #[test]
    fn verify_with_data_targets_detached_and_joins_body() {
        let req = verify("MIIB-signed", Some("ZG9jdW1lbnQ="));
        assert_eq!(req.path, "/frontend/verify/detached");
        assert_eq!(req.body.as_deref(), Some("ZG9jdW1lbnQ=|MIIB-signed"));
    }

    #[test]
    fn verify_inputs_are_not_validated() {
        // Builders pass opaque tokens through; presence alone selects
        // the endpoint.
        let req = verify("", Some(""));
        assert_eq!(req.path, "/frontend/verify/detached");
        assert_eq!(req.body.as_deref(), Some("|"));
    }
}
