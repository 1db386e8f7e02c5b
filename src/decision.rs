/*
 * Responsibility
 * - Outbound boundary: the two-shape authorization decision
 * - `build` is pure and infallible; the handler funnels every outcome
 *   through it.
 */
use serde::Serialize;
use serde_json::Value;

/// The terminal output of one authorization attempt.
///
/// Serialized shape (consumed verbatim by the hosting layer):
/// `{ "isAuthorized": bool, "context": { "approovTokenClaims": <claims|""> } }`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizationDecision {
    pub is_authorized: bool,
    pub context: DecisionContext,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionContext {
    pub approov_token_claims: Value,
}

/// Builds the decision, normalizing absent claims to the empty
/// representation.
///
/// Invariant: an unauthorized decision never carries claims, even if some
/// were passed in.
pub fn build(is_authorized: bool, claims: Option<Value>) -> AuthorizationDecision {
    let approov_token_claims = match claims {
        Some(claims) if is_authorized => claims,
        _ => Value::String(String::new()),
    };

    AuthorizationDecision {
        is_authorized,
        context: DecisionContext {
            approov_token_claims,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deny_has_empty_claims() {
        let decision = build(false, None);
        assert!(!decision.is_authorized);
        assert_eq!(decision.context.approov_token_claims, json!(""));
    }

    #[test]
    fn deny_drops_claims_even_when_present() {
        let decision = build(false, Some(json!({"sub": "user1"})));
        assert_eq!(decision.context.approov_token_claims, json!(""));
    }

    #[test]
    fn allow_carries_claims_verbatim() {
        let claims = json!({"sub": "user1", "iat": 1_700_000_000});
        let decision = build(true, Some(claims.clone()));
        assert!(decision.is_authorized);
        assert_eq!(decision.context.approov_token_claims, claims);
    }

    #[test]
    fn serialized_shape_matches_the_contract() {
        let denied = serde_json::to_value(build(false, None)).unwrap();
        assert_eq!(
            denied,
            json!({"isAuthorized": false, "context": {"approovTokenClaims": ""}})
        );

        let allowed = serde_json::to_value(build(true, Some(json!({"sub": "user1"})))).unwrap();
        assert_eq!(
            allowed,
            json!({"isAuthorized": true, "context": {"approovTokenClaims": {"sub": "user1"}}})
        );
    }
}
