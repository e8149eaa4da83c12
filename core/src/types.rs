//! Typed views of the service's response bodies.
//!
//! # Design
//! Decoding is lenient on purpose: every field is read with an explicit
//! default and the decode step itself can never fail. Whether a response
//! is usable is decided by a single predicate — `status == 1` — applied
//! by the outcome classifier, never by a deserialization error. Nested
//! certificate and signature metadata passes through as opaque
//! `serde_json::Value` because its shape belongs to the service.
//!
//! All types are immutable value objects: constructed from one decoded
//! response, consumed by the caller, then discarded.

use serde::Serialize;
use serde_json::Value;

/// Common shape of the four success decoders, letting the outcome
/// classifier stay generic over the operation.
pub trait ServiceReply: Sized {
    /// Decode from a JSON object, defaulting every missing field.
    fn from_value(value: &Value) -> Self;

    /// Raw status code reported by the service.
    fn status(&self) -> i64;

    /// Diagnostic message, when the service sent one.
    fn message(&self) -> Option<&str>;

    /// The service reports success as exactly `status == 1`.
    fn is_success(&self) -> bool {
        self.status() == 1
    }
}

/// Issued challenge token.
///
/// `challenge` is non-empty whenever the service reports `status == 1`;
/// `ttl` is the token's lifetime in seconds when the service sends one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChallengeResult {
    pub status: i64,
    pub challenge: String,
    pub ttl: Option<i64>,
    pub message: Option<String>,
}

impl ServiceReply for ChallengeResult {
    fn from_value(value: &Value) -> Self {
        Self {
            status: int_field(value, "status").unwrap_or(0),
            challenge: string_field(value, "challenge").unwrap_or_default(),
            ttl: int_field(value, "ttl"),
            message: string_field(value, "message"),
        }
    }

    fn status(&self) -> i64 {
        self.status
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Verdict on a signed challenge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthenticateResult {
    pub status: i64,
    /// Signer certificate metadata, opaque to this crate.
    #[serde(rename = "subjectCertificateInfo")]
    pub subject_certificate_info: Option<Value>,
    pub message: Option<String>,
}

impl ServiceReply for AuthenticateResult {
    fn from_value(value: &Value) -> Self {
        Self {
            status: int_field(value, "status").unwrap_or(0),
            subject_certificate_info: object_field(value, "subjectCertificateInfo"),
            message: string_field(value, "message"),
        }
    }

    fn status(&self) -> i64 {
        self.status
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Timestamped signature returned by the TSA.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimestampResult {
    pub status: i64,
    /// Base64-encoded PKCS#7 with the timestamp attached.
    pub pkcs7b64: Option<String>,
    pub message: Option<String>,
}

impl ServiceReply for TimestampResult {
    fn from_value(value: &Value) -> Self {
        Self {
            status: int_field(value, "status").unwrap_or(0),
            pkcs7b64: string_field(value, "pkcs7b64"),
            message: string_field(value, "message"),
        }
    }

    fn status(&self) -> i64 {
        self.status
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Verdict on an attached or detached signature.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerifyResult {
    pub status: i64,
    /// Verified signature metadata, opaque to this crate.
    #[serde(rename = "pkcs7Info")]
    pub pkcs7_info: Option<Value>,
    pub message: Option<String>,
}

impl ServiceReply for VerifyResult {
    fn from_value(value: &Value) -> Self {
        Self {
            status: int_field(value, "status").unwrap_or(0),
            pkcs7_info: object_field(value, "pkcs7Info"),
            message: string_field(value, "message"),
        }
    }

    fn status(&self) -> i64 {
        self.status
    }

    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Logical failure reported by — or synthesized for — the service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorResult {
    /// `0` for synthesized failures, otherwise the service's failing code.
    pub status: i64,
    pub message: String,
}

/// Integer field, coercing numeric strings the way the service's own
/// clients do. Anything else counts as absent.
fn int_field(value: &Value, key: &str) -> Option<i64> {
    match value.get(key) {
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    }
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_owned)
}

/// Nested structured data, passed through unmodified. JSON `null` counts
/// as absent.
fn object_field(value: &Value, key: &str) -> Option<Value> {
    value.get(key).filter(|v| !v.is_null()).cloned()
}
