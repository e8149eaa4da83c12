//! Service facade: the four signing operations plus a health check.
//!
//! # Design
//! `EimzoClient` is stateless beyond its configuration: each operation
//! builds a request, hands it to the injected [`Transport`], and
//! classifies the response. Transport faults are logged and propagated
//! from every operation; `health_check` is the single place that
//! swallows them. Concurrent calls are safe — there is no shared
//! mutable state anywhere in the chain.

use tracing::{error, info, warn_span};

use crate::config::EimzoConfig;
use crate::error::Result;
use crate::http::{HttpRequest, HttpResponse};
use crate::message::Locale;
use crate::outcome::{interpret, Operation, Outcome};
use crate::request;
use crate::transport::{HttpTransport, Transport};
use crate::types::{AuthenticateResult, ChallengeResult, TimestampResult, VerifyResult};

/// Client for the E-IMZO signing service.
///
/// Every operation resolves to one of three terminal states: a typed
/// success, a typed logical failure, or a propagated transport error.
///
/// # Example
///
/// ```rust,no_run
/// use eimzo_core::{EimzoClient, EimzoConfig, Outcome};
///
/// # fn main() -> eimzo_core::Result<()> {
/// let client = EimzoClient::new(EimzoConfig::new("https://imzo.example.uz"))?;
///
/// match client.challenge()? {
///     Outcome::Success(challenge) => println!("sign this: {}", challenge.challenge),
///     Outcome::Failure(failure) => eprintln!("{}: {}", failure.status, failure.message),
/// }
/// # Ok(())
/// # }
/// ```
pub struct EimzoClient<T: Transport = HttpTransport> {
    transport: T,
    locale: Locale,
}

impl EimzoClient<HttpTransport> {
    /// Build a client with the default blocking HTTP transport.
    ///
    /// Fails immediately if the configured base URL is missing or does
    /// not start with `http`.
    pub fn new(config: EimzoConfig) -> Result<Self> {
        Ok(Self::with_transport(HttpTransport::new(&config)?))
    }
}

impl<T: Transport> EimzoClient<T> {
    /// Build a client over a custom transport.
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            locale: Locale::default(),
        }
    }

    /// Locale for the default failure messages.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Request a fresh signing challenge.
    pub fn challenge(&self) -> Result<Outcome<ChallengeResult>> {
        let response = self.send(Operation::Challenge, &request::challenge())?;
        Ok(interpret(Operation::Challenge, &response, self.locale))
    }

    /// Authenticate a challenge signed with the user's key.
    ///
    /// `user_ip` and `host` identify the end user for the service's
    /// audit trail.
    pub fn authenticate(
        &self,
        pkcs7: &str,
        user_ip: &str,
        host: &str,
    ) -> Result<Outcome<AuthenticateResult>> {
        let span = warn_span!("eimzo_authenticate", ip = %user_ip);
        let _guard = span.enter();

        let request = request::authenticate(pkcs7, user_ip, host);
        let response = self.send(Operation::Authenticate, &request)?;
        let outcome: Outcome<AuthenticateResult> =
            interpret(Operation::Authenticate, &response, self.locale);

        if let Outcome::Success(ref auth) = outcome {
            // Payload fields stay out of the log.
            info!(
                ip = %user_ip,
                has_cert_info = auth.subject_certificate_info.is_some(),
                "E-IMZO authentication successful"
            );
        }
        Ok(outcome)
    }

    /// Attach a TSA timestamp to a PKCS#7.
    pub fn timestamp(&self, pkcs7: &str) -> Result<Outcome<TimestampResult>> {
        let response = self.send(Operation::Timestamp, &request::timestamp(pkcs7))?;
        Ok(interpret(Operation::Timestamp, &response, self.locale))
    }

    /// Verify an attached (`data64 = None`) or detached signature.
    pub fn verify(&self, pkcs7wtst: &str, data64: Option<&str>) -> Result<Outcome<VerifyResult>> {
        let mode = if data64.is_some() { "detached" } else { "attached" };
        let span = warn_span!("eimzo_verify", mode);
        let _guard = span.enter();

        let request = request::verify(pkcs7wtst, data64);
        let response = self.send(Operation::Verify, &request)?;
        Ok(interpret(Operation::Verify, &response, self.locale))
    }

    /// `true` iff a challenge round-trip succeeds.
    ///
    /// The one place transport errors are caught instead of propagated.
    pub fn health_check(&self) -> bool {
        match self.challenge() {
            Ok(outcome) => outcome.is_success(),
            Err(error) => {
                error!(%error, "E-IMZO health check failed");
                false
            }
        }
    }

    fn send(&self, operation: Operation, request: &HttpRequest) -> Result<HttpResponse> {
        self.transport.send(request).map_err(|error| {
            error!(operation = operation.name(), %error, "E-IMZO transport failure");
            error
        })
    }
}
