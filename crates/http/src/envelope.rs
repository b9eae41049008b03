//! The uniform response envelope used by the backend

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::ClientError;

/// Every backend endpoint answers with this wrapper. Callers branch on
/// `is_success`, not on the HTTP status alone; the envelope is validated
/// here once rather than at each call site.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEnvelope<T> {
    pub is_success: bool,
    pub status_code: u16,
    #[serde(default)]
    pub message: String,
    pub result: Option<T>,
}

impl<T: DeserializeOwned> ApiEnvelope<T> {
    /// Unwrap a successful envelope into its result.
    pub fn into_result(self) -> Result<T, ClientError> {
        if !self.is_success {
            return Err(ClientError::Api {
                status_code: self.status_code,
                message: self.message,
            });
        }
        self.result.ok_or(ClientError::MissingResult)
    }

    /// Accept a successful envelope regardless of payload (message-only
    /// endpoints answer without a `result`).
    pub fn into_empty(self) -> Result<(), ClientError> {
        if self.is_success {
            Ok(())
        } else {
            Err(ClientError::Api {
                status_code: self.status_code,
                message: self.message,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_envelope_yields_result() {
        let envelope: ApiEnvelope<Vec<String>> = serde_json::from_value(json!({
            "isSuccess": true,
            "statusCode": 200,
            "message": "",
            "result": ["a", "b"],
        }))
        .unwrap();
        assert_eq!(envelope.into_result().unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn failed_envelope_maps_to_api_error() {
        let envelope: ApiEnvelope<String> = serde_json::from_value(json!({
            "isSuccess": false,
            "statusCode": 409,
            "message": "station code already exists",
        }))
        .unwrap();
        match envelope.into_result() {
            Err(ClientError::Api {
                status_code,
                message,
            }) => {
                assert_eq!(status_code, 409);
                assert_eq!(message, "station code already exists");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn success_without_result_is_missing_result() {
        let envelope: ApiEnvelope<String> = serde_json::from_value(json!({
            "isSuccess": true,
            "statusCode": 200,
            "message": "deleted",
        }))
        .unwrap();
        assert!(matches!(
            envelope.into_result(),
            Err(ClientError::MissingResult)
        ));
    }

    #[test]
    fn message_only_envelope_passes_into_empty() {
        let envelope: ApiEnvelope<serde_json::Value> = serde_json::from_value(json!({
            "isSuccess": true,
            "statusCode": 204,
            "message": "deleted",
        }))
        .unwrap();
        assert!(envelope.into_empty().is_ok());
    }

    #[test]
    fn missing_message_defaults_to_empty_string() {
        let envelope: ApiEnvelope<i32> = serde_json::from_value(json!({
            "isSuccess": true,
            "statusCode": 200,
            "result": 5,
        }))
        .unwrap();
        assert_eq!(envelope.message, "");
        assert_eq!(envelope.into_result().unwrap(), 5);
    }
}
