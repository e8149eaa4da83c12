//! Error taxonomy for the signing-service client.
//!
//! # Design
//! Only faults that must interrupt the caller are errors: a bad base URL
//! at construction time and connection-level transport failures. A
//! response in which the service *reports* failure is data, not an
//! error — it surfaces as [`Outcome::Failure`](crate::Outcome) and is
//! never raised, so `?` cannot accidentally skip past it.

use thiserror::Error;

/// Raised errors of the client.
#[derive(Debug, Error)]
pub enum EimzoError {
    /// Base URL missing or malformed at construction time.
    #[error("base URL {0:?} is missing or invalid, must start with http or https")]
    InvalidBaseUrl(String),

    /// Connection-level fault: DNS failure, refused connection, timeout,
    /// or a broken body read. Propagated unchanged from every operation
    /// except `health_check`.
    #[error("transport failure: {message}")]
    Transport { message: String },
}

/// Result alias for client operations.
pub type Result<T> = std::result::Result<T, EimzoError>;
