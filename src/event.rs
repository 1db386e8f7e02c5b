/*
 * Responsibility
 * - Inbound boundary: the request-like event handed over by the host
 * - Only the header map is consumed; everything else in the payload is
 *   ignored on deserialization.
 */
use std::collections::HashMap;

use serde::Deserialize;

/// The token header key. API Gateway lowercases header keys in its
/// authorizer payload, so an exact-case lookup on the lowercase key is safe.
pub const TOKEN_HEADER: &str = "approov-token";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthorizerEvent {
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

impl AuthorizerEvent {
    /// Returns the Approov token, or `None` when the header is missing,
    /// empty, or whitespace-only.
    pub fn approov_token(&self) -> Option<&str> {
        self.headers
            .get(TOKEN_HEADER)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }
}
