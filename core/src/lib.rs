//! Synchronous client for the E-IMZO remote digital-signature service.
//!
//! # Overview
//! Four typed operations — challenge, authenticate, timestamp, verify —
//! plus a derived health check. Each call performs exactly one HTTP
//! round-trip through an injected [`Transport`] and resolves to one of
//! three terminal states:
//!
//! - `Ok(Outcome::Success(_))` — the service reported `status == 1`;
//! - `Ok(Outcome::Failure(_))` — the service answered but said no, or
//!   the exchange produced a non-2xx status or an unreadable body;
//! - `Err(_)` — configuration or connection-level fault, propagated to
//!   the caller (swallowed only inside `health_check`).
//!
//! # Design
//! - Request builders are pure functions producing [`HttpRequest`] data;
//!   the I/O boundary is the [`Transport`] trait, so every layer tests
//!   without a network.
//! - Response decoding is lenient: fields default instead of failing,
//!   and only the `status == 1` predicate decides the outcome variant.
//! - No cryptography happens here. PKCS#7 blobs are opaque tokens and
//!   every verification verdict comes from the remote service.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod message;
pub mod outcome;
pub mod request;
pub mod transport;
pub mod types;

pub use client::EimzoClient;
pub use config::EimzoConfig;
pub use error::{EimzoError, Result};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use message::{Locale, MessageKey};
pub use outcome::{Operation, Outcome};
pub use transport::{HttpTransport, Transport};
pub use types::{
    AuthenticateResult, ChallengeResult, ErrorResult, ServiceReply, TimestampResult, VerifyResult,
};
