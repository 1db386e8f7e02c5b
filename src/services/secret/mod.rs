pub mod provider;
pub mod secrets_manager;
pub mod store;

pub use provider::SecretProvider;
pub use secrets_manager::SecretsManagerStore;
pub use store::{SecretStore, SecretStoreError};
