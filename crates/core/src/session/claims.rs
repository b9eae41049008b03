//! Bearer-token claims decoding
//!
//! Tokens are opaque to the client except for the payload segment, which is
//! base64url-encoded JSON. Decoding is best-effort: any malformed input maps
//! to a [`ClaimsError`] and never panics.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde_json::{Map, Value};
use thiserror::Error;

/// Decode failure taxonomy for token claims.
#[derive(Debug, Error)]
pub enum ClaimsError {
    #[error("token has {0} segments, expected 3")]
    SegmentCount(usize),

    #[error("payload segment is not valid base64url: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("payload segment is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("payload is not a JSON object")]
    NotAnObject,
}

/// Identity claims decoded from the access token payload.
///
/// The full payload is preserved as-is; typed accessors cover the fields the
/// UI cares about. Servers add claims freely, so unknown fields are kept
/// rather than rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenClaims {
    claims: Map<String, Value>,
}

impl TokenClaims {
    /// Raw claim lookup.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.claims.get(key)
    }

    fn get_str(&self, key: &str) -> Option<&str> {
        self.claims.get(key).and_then(Value::as_str)
    }

    /// Subject identifier. Backends emit either `id` or the standard `sub`.
    pub fn id(&self) -> Option<&str> {
        self.get_str("id").or_else(|| self.get_str("sub"))
    }

    pub fn role(&self) -> Option<&str> {
        self.get_str("role")
    }

    pub fn name(&self) -> Option<&str> {
        self.get_str("name")
    }

    pub fn email(&self) -> Option<&str> {
        self.get_str("email")
    }

    /// The whole payload as a JSON value.
    pub fn as_value(&self) -> Value {
        Value::Object(self.claims.clone())
    }
}

impl From<Map<String, Value>> for TokenClaims {
    fn from(claims: Map<String, Value>) -> Self {
        Self { claims }
    }
}

/// Decode the payload segment of a bearer token.
///
/// Splits on `.`, requires exactly three segments, base64url-decodes the
/// middle one (unpadded, per RFC 7515) and parses it as a JSON object.
pub fn decode_claims(token: &str) -> Result<TokenClaims, ClaimsError> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(ClaimsError::SegmentCount(segments.len()));
    }

    let payload = URL_SAFE_NO_PAD.decode(segments[1])?;
    let value: Value = serde_json::from_slice(&payload)?;

    match value {
        Value::Object(claims) => Ok(TokenClaims::from(claims)),
        _ => Err(ClaimsError::NotAnObject),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn encode_token(payload: &Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(serde_json::to_vec(payload).unwrap());
        format!("{header}.{body}.signature")
    }

    #[test]
    fn rejects_wrong_segment_count() {
        for token in ["", "abc", "a.b", "a.b.c.d", "....."] {
            let err = decode_claims(token).unwrap_err();
            assert!(matches!(err, ClaimsError::SegmentCount(_)), "{token:?}");
        }
    }

    #[test]
    fn rejects_invalid_base64_payload() {
        let err = decode_claims("header.!!!not-base64!!!.sig").unwrap_err();
        assert!(matches!(err, ClaimsError::Base64(_)));
    }

    #[test]
    fn rejects_non_json_payload() {
        let garbage = URL_SAFE_NO_PAD.encode(b"not json at all");
        let err = decode_claims(&format!("h.{garbage}.s")).unwrap_err();
        assert!(matches!(err, ClaimsError::Json(_)));
    }

    #[test]
    fn rejects_non_object_payload() {
        let array = URL_SAFE_NO_PAD.encode(b"[1,2,3]");
        let err = decode_claims(&format!("h.{array}.s")).unwrap_err();
        assert!(matches!(err, ClaimsError::NotAnObject));
    }

    #[test]
    fn round_trips_payload() {
        let payload = json!({
            "sub": "user-17",
            "role": "OPERATOR",
            "name": "Mina",
            "stations": ["central", "harbor"],
            "exp": 1893456000,
        });
        let claims = decode_claims(&encode_token(&payload)).unwrap();
        assert_eq!(claims.as_value(), payload);
        assert_eq!(claims.id(), Some("user-17"));
        assert_eq!(claims.role(), Some("OPERATOR"));
    }

    #[test]
    fn id_prefers_explicit_id_claim() {
        let payload = json!({"id": "42", "sub": "ignored"});
        let claims = decode_claims(&encode_token(&payload)).unwrap();
        assert_eq!(claims.id(), Some("42"));
    }

    #[test]
    fn decodes_unpadded_base64url_alphabet() {
        // Payload chosen so the encoding exercises both '-' and '_'.
        let payload = json!({"blob": "\u{3fb}\u{7ff}??>>~~"});
        let claims = decode_claims(&encode_token(&payload)).unwrap();
        assert_eq!(claims.get("blob"), Some(&payload["blob"]));
    }
}
