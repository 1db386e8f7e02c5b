//! AWS Secrets Manager adapter for the `SecretStore` trait.
//!
//! The SDK is callback/future based; this adapter absorbs it into the one
//! uniform async contract the provider consumes.
use async_trait::async_trait;
use aws_sdk_secretsmanager::Client;

use crate::services::secret::store::{SecretStore, SecretStoreError};

#[derive(Clone)]
pub struct SecretsManagerStore {
    client: Client,
}

impl SecretsManagerStore {
    /// Builds a client from the ambient AWS environment (region, credentials).
    pub async fn new() -> Self {
        let shared_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;

        Self {
            client: Client::new(&shared_config),
        }
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SecretStore for SecretsManagerStore {
    fn backend_name(&self) -> &'static str {
        "aws-secrets-manager"
    }

    async fn get_secret(&self, name: &str) -> Result<Option<String>, SecretStoreError> {
        let response = self
            .client
            .get_secret_value()
            .secret_id(name)
            .send()
            .await
            .map_err(|e| SecretStoreError::Backend(e.to_string()))?;

        Ok(response.secret_string().map(str::to_string))
    }
}
