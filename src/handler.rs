/*
 * Responsibility
 * - Orchestration: header extraction → secret resolution → verification →
 *   decision
 * - Fail closed: every path that cannot prove authorization funnels through
 *   the same Deny construction, and no internal fault escapes `authorize`
 */
use std::sync::Arc;

use tracing::{error, info};

use crate::config::Config;
use crate::decision::{self, AuthorizationDecision};
use crate::error::AuthError;
use crate::event::AuthorizerEvent;
use crate::services::secret::{SecretProvider, SecretStore};
use crate::services::verifier::TokenVerifier;

pub struct Authorizer {
    provider: SecretProvider,
    verifier: TokenVerifier,
}

impl Authorizer {
    pub fn new(provider: SecretProvider, verifier: TokenVerifier) -> Self {
        Self { provider, verifier }
    }

    /// Builds the provider and verifier from `config` and the given store.
    pub fn from_parts(config: &Config, store: Arc<dyn SecretStore>) -> Self {
        Self::new(SecretProvider::new(config, store), TokenVerifier::new())
    }

    /// Authorizes one inbound request.
    ///
    /// Always returns a well-formed decision; failures differ only in log
    /// detail, never in the outward shape.
    pub async fn authorize(&self, event: &AuthorizerEvent) -> AuthorizationDecision {
        match self.try_authorize(event).await {
            Ok(claims) => decision::build(true, Some(claims)),
            Err(err) => {
                match &err {
                    // Expected traffic: absent clients and adversarial or
                    // expired tokens.
                    AuthError::MissingHeader => {
                        info!("the `approov-token` header is missing or is empty");
                    }
                    AuthError::VerificationFailed(reason) => {
                        info!(reason = %reason, "Approov token verification failed");
                    }
                    // Provisioning problem, not a forged token.
                    AuthError::SecretUnavailable => {
                        error!(
                            "an unauthorized response will be sent due to the missing Approov secret"
                        );
                    }
                }

                decision::build(false, None)
            }
        }
    }

    async fn try_authorize(&self, event: &AuthorizerEvent) -> Result<serde_json::Value, AuthError> {
        let token = event.approov_token().ok_or(AuthError::MissingHeader)?;

        let secret = self
            .provider
            .resolve()
            .await
            .ok_or(AuthError::SecretUnavailable)?;

        self.verifier.verify(token, secret)
    }
}
