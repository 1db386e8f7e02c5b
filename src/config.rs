/*
 * Responsibility
 * - Environment-driven configuration (secret source selection, secret name)
 * - The authorizer fails closed at request time, so nothing here aborts
 *   startup: unset variables fall back to defaults.
 */
use std::env;

/// Name of the environment variable / Secrets Manager entry holding the
/// base64-encoded Approov secret.
pub const DEFAULT_SECRET_NAME: &str = "APPROOV_BASE64_SECRET";

const SECRET_STORAGE_VAR: &str = "APPROOV_BASE64_SECRET_STORAGE";

/// Where the base64 secret is provisioned.
///
/// Decided once at config time; the two resolution paths are independently
/// testable behind the `SecretStore` trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretSource {
    /// Read the secret directly from the environment variable.
    EnvVar,
    /// Fetch the secret from AWS Secrets Manager (default).
    SecretsManager,
}

impl SecretSource {
    pub fn from_env() -> Self {
        match env::var(SECRET_STORAGE_VAR).as_deref() {
            Ok("ENV_VAR") => Self::EnvVar,
            _ => Self::SecretsManager,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub secret_source: SecretSource,
    pub secret_name: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Config {
            secret_source: SecretSource::from_env(),
            secret_name: DEFAULT_SECRET_NAME.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_source_is_secrets_manager() {
        // SECRET_STORAGE_VAR is not set in the test environment.
        assert_eq!(SecretSource::from_env(), SecretSource::SecretsManager);
        assert_eq!(Config::from_env().secret_name, DEFAULT_SECRET_NAME);
    }
}
