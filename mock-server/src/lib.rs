//! In-process mock of the E-IMZO signing service.
//!
//! # Design
//! Implements the service's wire contract closely enough to exercise a
//! client end-to-end: challenge tokens are minted and remembered,
//! operation endpoints accept raw `text/plain` bodies, and replies use
//! the service's `{status, ...}` JSON envelope. Deterministic body
//! conventions trigger the failure paths a client must handle:
//!
//! - auth body that is empty, contains `expired`, or references no
//!   issued challenge → `{status:0, message:...}`
//! - timestamp body containing `reject` → `{status:0, message:...}`
//! - detached verify body without the `|` separator → `{status:0, ...}`
//! - any operation body `boom` → 503 with an empty body
//! - any operation body `garbage` → 200 with a non-JSON body

use std::{collections::HashSet, sync::Arc};

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

/// Challenge tokens issued so far.
pub type Issued = Arc<RwLock<HashSet<String>>>;

pub const CHALLENGE_TTL_SECS: u64 = 300;

pub fn app() -> Router {
    let issued: Issued = Arc::new(RwLock::new(HashSet::new()));
    Router::new()
        .route("/frontend/challenge", get(challenge))
        .route("/backend/auth", post(authenticate))
        .route("/frontend/timestamp/pkcs7", post(timestamp))
        .route("/frontend/verify/attached", post(verify_attached))
        .route("/frontend/verify/detached", post(verify_detached))
        .with_state(issued)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Failure simulation shared by all POST endpoints.
fn simulated_failure(body: &str) -> Option<Response> {
    match body {
        "boom" => Some((StatusCode::SERVICE_UNAVAILABLE, String::new()).into_response()),
        "garbage" => Some((StatusCode::OK, "not json".to_string()).into_response()),
        _ => None,
    }
}

fn rejection(message: &str) -> Response {
    Json(json!({ "status": 0, "message": message })).into_response()
}

async fn challenge(State(issued): State<Issued>) -> Json<Value> {
    let token = Uuid::new_v4().simple().to_string();
    issued.write().await.insert(token.clone());
    Json(json!({ "status": 1, "challenge": token, "ttl": CHALLENGE_TTL_SECS }))
}

async fn authenticate(State(issued): State<Issued>, headers: HeaderMap, body: String) -> Response {
    if let Some(response) = simulated_failure(&body) {
        return response;
    }
    if body.is_empty() {
        return rejection("Empty PKCS#7");
    }
    if body.contains("expired") {
        return rejection("Certificate expired");
    }
    // The signed blob is opaque; a real service would extract the signed
    // challenge from it. Here the token must appear verbatim in the body.
    let known = issued.read().await.iter().any(|token| body.contains(token));
    if !known {
        return rejection("Challenge not found or expired");
    }

    let ip = headers
        .get("x-real-ip")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");
    Json(json!({
        "status": 1,
        "subjectCertificateInfo": {
            "subjectName": "CN=Test Subject",
            "serialNumber": "7F3A21",
            "validFrom": "2025-01-01T00:00:00Z",
            "validTo": "2027-01-01T00:00:00Z",
            "userIp": ip,
        },
    }))
    .into_response()
}

async fn timestamp(body: String) -> Response {
    if let Some(response) = simulated_failure(&body) {
        return response;
    }
    if body.is_empty() || body.contains("reject") {
        return rejection("Timestamp rejected");
    }
    let blob = format!("MII{}", Uuid::new_v4().simple());
    Json(json!({ "status": 1, "pkcs7b64": blob })).into_response()
}

async fn verify_attached(body: String) -> Response {
    if let Some(response) = simulated_failure(&body) {
        return response;
    }
    if body.is_empty() {
        return rejection("Signature invalid");
    }
    Json(pkcs7_info(&body)).into_response()
}

async fn verify_detached(body: String) -> Response {
    if let Some(response) = simulated_failure(&body) {
        return response;
    }
    match body.split_once('|') {
        Some((data64, pkcs7)) if !data64.is_empty() && !pkcs7.is_empty() => {
            Json(pkcs7_info(pkcs7)).into_response()
        }
        _ => rejection("Detached data missing"),
    }
}

fn pkcs7_info(pkcs7: &str) -> Value {
    json!({
        "status": 1,
        "pkcs7Info": {
            "signers": [{ "subjectName": "CN=Test Subject", "verified": true }],
            "documentBytes": pkcs7.len(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulated_failure_maps_boom_to_503() {
        let response = simulated_failure("boom").expect("simulated");
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn simulated_failure_ignores_normal_bodies() {
        assert!(simulated_failure("MIIB-pkcs7").is_none());
        assert!(simulated_failure("").is_none());
    }

    #[test]
    fn pkcs7_info_reports_success_envelope() {
        let value = pkcs7_info("MIIB-signed");
        assert_eq!(value["status"], 1);
        assert_eq!(value["pkcs7Info"]["signers"][0]["verified"], true);
    }
}
