//! Turning HTTP responses into typed outcomes.
//!
//! # Design
//! This is the one place that decides between the terminal states of a
//! call: a typed success, or a normalized logical failure. (The third
//! state — a propagated transport error — never reaches this module;
//! the facade re-raises it before classification.) The rules are
//! identical for all four operations; only the decoder and the default
//! failure messages differ.
//!
//! Non-2xx responses short-circuit to a synthesized failure without the
//! body ever being JSON-decoded: a served error page is not a service
//! reply. On 2xx the body is decoded leniently — malformed JSON is
//! logged with the truncated raw body and degrades to an empty object —
//! and the `status == 1` predicate alone picks the variant.

use serde_json::Value;
use tracing::warn;

use crate::http::HttpResponse;
use crate::message::{text, Locale, MessageKey};
use crate::types::{ErrorResult, ServiceReply};

/// Result of one service operation: the typed success payload or the
/// service's (possibly synthesized) error report.
///
/// Logical failures are values, never `Err` — the transport `Result`
/// wrapping this type carries only connection-level faults.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Success(T),
    Failure(ErrorResult),
}

impl<T> Outcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&ErrorResult> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(error) => Some(error),
        }
    }

    /// Convert into a std `Result` over the two variants.
    pub fn into_result(self) -> std::result::Result<T, ErrorResult> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}

/// The four service operations, used for diagnostics and default-message
/// selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Challenge,
    Authenticate,
    Timestamp,
    Verify,
}

impl Operation {
    pub fn name(self) -> &'static str {
        match self {
            Operation::Challenge => "challenge",
            Operation::Authenticate => "authenticate",
            Operation::Timestamp => "timestamp",
            Operation::Verify => "verify",
        }
    }

    /// Default message when the HTTP exchange itself failed (non-2xx).
    fn http_fail(self) -> MessageKey {
        match self {
            Operation::Challenge => MessageKey::ChallengeFail,
            Operation::Authenticate => MessageKey::AuthFail,
            Operation::Timestamp => MessageKey::TimestampFail,
            Operation::Verify => MessageKey::VerifyFail,
        }
    }

    /// Default message when the service answered but said no. Timestamp
    /// is the one operation with a distinct rejection text.
    fn rejected(self) -> MessageKey {
        match self {
            Operation::Timestamp => MessageKey::TimestampReject,
            other => other.http_fail(),
        }
    }
}

/// Classify one HTTP response into an [`Outcome`].
///
/// Public so hosts that run their own transport loop can reuse the
/// classification rules; the facade calls this for every operation.
pub fn interpret<T: ServiceReply>(
    operation: Operation,
    response: &HttpResponse,
    locale: Locale,
) -> Outcome<T> {
    if !response.is_success() {
        warn!(
            operation = operation.name(),
            status = response.status,
            body = %truncate(&response.body),
            "E-IMZO request failed"
        );
        return Outcome::Failure(ErrorResult {
            status: 0,
            message: text(operation.http_fail(), locale).to_string(),
        });
    }

    let reply = T::from_value(&decode_body(operation, response));
    if reply.is_success() {
        return Outcome::Success(reply);
    }

    let message = reply
        .message()
        .map(str::to_owned)
        .unwrap_or_else(|| text(operation.rejected(), locale).to_string());
    Outcome::Failure(ErrorResult {
        status: reply.status(),
        message,
    })
}

/// Parse the body as a JSON object, degrading to `{}` instead of
/// failing. Malformed JSON is logged with the truncated body; a valid
/// but non-object body (scalar, array) is dropped quietly.
fn decode_body(operation: Operation, response: &HttpResponse) -> Value {
    match serde_json::from_str::<Value>(&response.body) {
        Ok(value) if value.is_object() => value,
        Ok(_) => Value::Object(Default::default()),
        Err(error) => {
            warn!(
                operation = operation.name(),
                status = response.status,
                body = %truncate(&response.body),
                %error,
                "invalid JSON in E-IMZO response"
            );
            Value::Object(Default::default())
        }
    }
}

const BODY_LOG_LIMIT: usize = 2000;

/// Cap a response body for diagnostics. Counts characters, not bytes,
/// so multibyte bodies are never split mid-character.
fn truncate(body: &str) -> String {
    if body.chars().count() > BODY_LOG_LIMIT {
        let capped: String = body.chars().take(BODY_LOG_LIMIT).collect();
        format!("{capped}... [truncated]")
    } else {
        body.to_string()
    }
}
