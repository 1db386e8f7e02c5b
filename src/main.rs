/*
 * Responsibility
 * - Local harness: feed one JSON authorizer event from stdin through the
 *   pipeline and print the decision to stdout
 * - No logic beyond wiring; the core lives in the library
 */
use std::io::Read;
use std::sync::Arc;

use anyhow::{Context, Result};

use approov_authorizer::services::secret::SecretsManagerStore;
use approov_authorizer::{Authorizer, AuthorizerEvent, Config, telemetry};

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init_tracing();

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("failed to read the event from stdin")?;

    let event: AuthorizerEvent =
        serde_json::from_str(&input).context("failed to parse the authorizer event")?;

    let config = Config::from_env();
    let store = Arc::new(SecretsManagerStore::new().await);
    let authorizer = Authorizer::from_parts(&config, store);

    let decision = authorizer.authorize(&event).await;
    println!("{}", serde_json::to_string(&decision)?);

    Ok(())
}
