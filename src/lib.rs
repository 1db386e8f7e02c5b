/*
 * Responsibility
 * - Module wiring + public surface of the authorizer core
 * - The hosting invocation layer (Lambda bootstrap) lives outside this crate;
 *   it deserializes the event, calls `Authorizer::authorize`, and forwards
 *   the decision as-is.
 */
pub mod config;
pub mod decision;
pub mod error;
pub mod event;
pub mod handler;
pub mod services;
pub mod telemetry;

pub use config::{Config, SecretSource};
pub use decision::AuthorizationDecision;
pub use error::AuthError;
pub use event::AuthorizerEvent;
pub use handler::Authorizer;
