//! End-to-end flows against the live mock signing service.
//!
//! # Design
//! Starts the mock server on a random port, then drives the full client
//! stack — request builders, blocking HTTP transport, outcome
//! classifier — over real HTTP. Covers the success path of all four
//! operations plus the failure shapes the classifier must normalize:
//! logical rejection, 503 error pages, and non-JSON bodies.

use eimzo_core::{EimzoClient, EimzoConfig, EimzoError, Outcome};

/// Start the mock service on a random port and return its base URL.
fn start_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

fn client(base_url: &str) -> EimzoClient {
    EimzoClient::new(EimzoConfig::new(base_url)).unwrap()
}

#[test]
fn challenge_then_authenticate() {
    let base = start_server();
    let client = client(&base);

    // Step 1: obtain a challenge.
    let challenge = match client.challenge().unwrap() {
        Outcome::Success(challenge) => challenge,
        Outcome::Failure(failure) => panic!("challenge rejected: {failure:?}"),
    };
    assert_eq!(challenge.status, 1);
    assert!(!challenge.challenge.is_empty());
    assert_eq!(challenge.ttl, Some(300));

    // Step 2: authenticate with a blob embedding the issued token; the
    // mock service checks for it.
    let pkcs7 = format!("PKCS7:{}", challenge.challenge);
    let outcome = client
        .authenticate(&pkcs7, "203.0.113.7", "example.uz")
        .unwrap();
    let auth = outcome.success().expect("authentication rejected");
    assert_eq!(auth.status, 1);
    let info = auth.subject_certificate_info.as_ref().expect("certificate info");
    assert_eq!(info["userIp"], "203.0.113.7");
}

#[test]
fn authenticate_expired_certificate_is_rejected() {
    let base = start_server();
    let client = client(&base);

    let outcome = client
        .authenticate("PKCS7:expired-cert", "203.0.113.7", "example.uz")
        .unwrap();
    let failure = outcome.failure().expect("failure variant");
    assert_eq!(failure.status, 0);
    assert_eq!(failure.message, "Certificate expired");
}

#[test]
fn timestamp_success_and_rejection() {
    let base = start_server();
    let client = client(&base);

    let outcome = client.timestamp("PKCS7:signed-document").unwrap();
    let stamped = outcome.success().expect("timestamp rejected");
    assert!(stamped.pkcs7b64.as_deref().is_some_and(|b| !b.is_empty()));

    let outcome = client.timestamp("PKCS7:reject-this").unwrap();
    let failure = outcome.failure().expect("failure variant");
    assert_eq!(failure.status, 0);
    assert_eq!(failure.message, "Timestamp rejected");
}

#[test]
fn verify_attached_and_detached() {
    let base = start_server();
    let client = client(&base);

    let outcome = client.verify("MIIB-signed", None).unwrap();
    let verdict = outcome.success().expect("attached verify rejected");
    assert!(verdict.pkcs7_info.is_some());

    let outcome = client.verify("MIIB-signed", Some("ZG9jdW1lbnQ=")).unwrap();
    let verdict = outcome.success().expect("detached verify rejected");
    assert_eq!(
        verdict.pkcs7_info.as_ref().unwrap()["documentBytes"],
        "MIIB-signed".len()
    );
}

#[test]
fn service_error_page_becomes_failure_value() {
    let base = start_server();
    let client = client(&base);

    // 503 with an empty body must normalize to a failure, not an error.
    let outcome = client.timestamp("boom").unwrap();
    let failure = outcome.failure().expect("failure variant");
    assert_eq!(failure.status, 0);
    assert_eq!(failure.message, "Failed to attach timestamp");
}

#[test]
fn unparseable_body_becomes_failure_value() {
    let base = start_server();
    let client = client(&base);

    let outcome = client.verify("garbage", None).unwrap();
    let failure = outcome.failure().expect("failure variant");
    assert_eq!(failure.status, 0);
    assert_eq!(failure.message, "Verification failed");
}

#[test]
fn health_check_reports_live_service() {
    let base = start_server();
    assert!(client(&base).health_check());
}

#[test]
fn transport_error_propagates_from_operations() {
    // Bind then drop to find a port nothing listens on.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client(&format!("http://{addr}"));
    let err = client.challenge().unwrap_err();
    assert!(matches!(err, EimzoError::Transport { .. }));
}

#[test]
fn health_check_swallows_transport_errors() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client(&format!("http://{addr}"));
    assert!(!client.health_check());
}
