/*
 * Responsibility
 * - tracing initialization for the hosting process
 * - `RUST_LOG` wins when set; otherwise the filter level comes from
 *   `LAMBDA_LOG_LEVEL` (DEBUG|INFO|WARN|ERROR, default ERROR)
 */
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = std::env::var("LAMBDA_LOG_LEVEL").unwrap_or_default();
        tracing_subscriber::EnvFilter::new(directive_for(&level))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn directive_for(level: &str) -> &'static str {
    match level.to_ascii_uppercase().as_str() {
        "DEBUG" => "debug",
        "INFO" => "info",
        "WARN" => "warn",
        _ => "error",
    }
}
