/*
 * Responsibility
 * - Authorization error taxonomy
 * - Every variant is fully recovered inside the request handler; none of
 *   them crosses the invocation boundary as a fault.
 */
use thiserror::Error;

/// Why an authorization attempt could not prove the request valid.
///
/// All three collapse to the same outward denial; they differ only in how
/// they are logged (`MissingHeader` / `VerificationFailed` are expected
/// traffic, `SecretUnavailable` is an operational misconfiguration).
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("the `approov-token` header is missing or is empty")]
    MissingHeader,

    #[error("the Approov secret is not available")]
    SecretUnavailable,

    #[error("token verification failed: {0}")]
    VerificationFailed(String),
}
