/*
 * Responsibility
 * - Signature verification of the Approov token against the shared secret
 * - The accepted algorithm set is pinned to HS256: a token declaring any
 *   other algorithm (including `none`) is rejected regardless of what its
 *   signature segment contains, which closes the algorithm-confusion attack
 */
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde_json::Value;

use crate::error::AuthError;

#[derive(Clone, Debug)]
pub struct TokenVerifier {
    validation: Validation,
}

impl TokenVerifier {
    pub fn new() -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // The claim set is opaque to this service: no audience check, no
        // required claims. `exp`/`nbf` are still enforced when present.
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        Self { validation }
    }

    /// Verifies `token` with `secret` and returns the payload claims
    /// verbatim.
    ///
    /// The failure reason is human-readable and safe to log; it never
    /// contains the secret or the token itself.
    pub fn verify(&self, token: &str, secret: &[u8]) -> Result<Value, AuthError> {
        let key = DecodingKey::from_secret(secret);

        let data = jsonwebtoken::decode::<Value>(token, &key, &self.validation)
            .map_err(|e| AuthError::VerificationFailed(e.to_string()))?;

        Ok(data.claims)
    }
}

impl Default for TokenVerifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use base64::Engine;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use jsonwebtoken::{EncodingKey, Header};
    use serde_json::json;

    use super::*;

    const SECRET: &[u8] = b"s3cr3t";

    fn far_future() -> u64 {
        4_102_444_800 // 2100-01-01
    }

    fn sign(claims: &Value, algorithm: Algorithm) -> String {
        jsonwebtoken::encode(
            &Header::new(algorithm),
            claims,
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap()
    }

    #[test]
    fn valid_token_yields_the_embedded_claims() {
        let claims = json!({"sub": "user1", "exp": far_future()});
        let token = sign(&claims, Algorithm::HS256);

        let verified = TokenVerifier::new().verify(&token, SECRET).unwrap();
        assert_eq!(verified, claims);
    }

    #[test]
    fn token_without_exp_is_accepted() {
        let claims = json!({"sub": "user1"});
        let token = sign(&claims, Algorithm::HS256);

        let verified = TokenVerifier::new().verify(&token, SECRET).unwrap();
        assert_eq!(verified["sub"], "user1");
    }

    #[test]
    fn expired_token_is_rejected() {
        let token = sign(&json!({"sub": "user1", "exp": 1}), Algorithm::HS256);
        assert!(TokenVerifier::new().verify(&token, SECRET).is_err());
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = sign(&json!({"sub": "user1"}), Algorithm::HS256);
        assert!(TokenVerifier::new().verify(&token, b"other").is_err());
    }

    #[test]
    fn hs384_token_is_rejected_even_with_the_right_secret() {
        let token = sign(&json!({"sub": "user1"}), Algorithm::HS384);
        assert!(TokenVerifier::new().verify(&token, SECRET).is_err());
    }

    #[test]
    fn alg_none_token_is_rejected() {
        // Hand-rolled `{"alg":"none"}` token with an empty signature segment.
        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"none","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(r#"{"sub":"user1"}"#);
        let token = format!("{header}.{payload}.");

        assert!(TokenVerifier::new().verify(&token, SECRET).is_err());
    }

    #[test]
    fn tampered_payload_is_rejected() {
        let token = sign(&json!({"sub": "user1"}), Algorithm::HS256);
        let mut segments: Vec<&str> = token.split('.').collect();
        let forged = URL_SAFE_NO_PAD.encode(r#"{"sub":"admin"}"#);
        segments[1] = &forged;
        let tampered = segments.join(".");

        assert!(TokenVerifier::new().verify(&tampered, SECRET).is_err());
    }

    #[test]
    fn malformed_token_is_rejected() {
        assert!(TokenVerifier::new().verify("not-a-jwt", SECRET).is_err());
    }
}
