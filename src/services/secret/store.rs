//! Secret store interface used by the secret provider.
use async_trait::async_trait;
use thiserror::Error;

/// Store-layer errors (transport/permission/not-found).
///
/// Kept independent from `AuthError` so the provider decides how to fail:
/// every store failure degrades to an absent secret, never to a fault.
#[derive(Debug, Error)]
pub enum SecretStoreError {
    #[error("secret store error: {0}")]
    Backend(String),
}

/// A minimal get-secret-by-name interface.
///
/// This is intentionally small and string-based:
/// - The provider only needs one lookup per process lifetime.
/// - `Ok(None)` means the store answered but the secret payload was missing
///   (e.g. the entry was not created via the CLI), which callers treat the
///   same as a fault.
#[async_trait]
pub trait SecretStore: Send + Sync + 'static {
    // Returns the store backend name (for logging).
    fn backend_name(&self) -> &'static str;

    // Fetch the named secret's string payload.
    async fn get_secret(&self, name: &str) -> Result<Option<String>, SecretStoreError>;
}
