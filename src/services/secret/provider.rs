/*
 * Responsibility
 * - Resolve the binary Approov secret from the configured source
 *   (environment variable or remote secret store) and base64-decode it
 * - Memoize the outcome process-wide: racing first callers share one
 *   in-flight resolution, and the outcome (value or absent) is never
 *   re-attempted within the same process instance
 */
use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use tokio::sync::OnceCell;
use tracing::{debug, error};

use crate::config::{Config, SecretSource};
use crate::services::secret::store::SecretStore;

pub struct SecretProvider {
    source: SecretSource,
    secret_name: String,
    store: Arc<dyn SecretStore>,
    resolved: OnceCell<Option<Vec<u8>>>,
}

impl SecretProvider {
    pub fn new(config: &Config, store: Arc<dyn SecretStore>) -> Self {
        Self {
            source: config.secret_source,
            secret_name: config.secret_name.clone(),
            store,
            resolved: OnceCell::new(),
        }
    }

    /// Returns the decoded secret, or `None` when it cannot be provisioned.
    ///
    /// The first call performs the actual lookup; concurrent first callers
    /// await the same resolution. Later calls observe the memoized outcome.
    pub async fn resolve(&self) -> Option<&[u8]> {
        self.resolved
            .get_or_init(|| async { self.resolve_uncached().await })
            .await
            .as_deref()
    }

    async fn resolve_uncached(&self) -> Option<Vec<u8>> {
        let raw = self.fetch_base64_secret().await?;

        if raw.trim().is_empty() {
            return None;
        }

        match BASE64.decode(raw.trim()) {
            Ok(secret) => Some(secret),
            Err(e) => {
                error!(error = %e, "the Approov base64 secret is not valid base64");
                None
            }
        }
    }

    /// Fetches the base64-encoded secret string from the configured source.
    async fn fetch_base64_secret(&self) -> Option<String> {
        match self.source {
            SecretSource::EnvVar => {
                debug!("the Approov base64 secret is being fetched from an environment variable");
                std::env::var(&self.secret_name).ok()
            }
            SecretSource::SecretsManager => {
                debug!(
                    backend = self.store.backend_name(),
                    "the Approov base64 secret is being fetched from the secret store"
                );

                match self.store.get_secret(&self.secret_name).await {
                    Ok(Some(secret)) => Some(secret),
                    Ok(None) => {
                        // This may happen when the entry was not created via the CLI.
                        error!(
                            backend = self.store.backend_name(),
                            "the secret is missing in the store response"
                        );
                        None
                    }
                    Err(e) => {
                        error!(
                            backend = self.store.backend_name(),
                            error = %e,
                            "failed to fetch the Approov secret from the secret store"
                        );
                        None
                    }
                }
            }
        }
    }
}
