pub mod secret;
pub mod verifier;
