//! Hub wire frames

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One inbound hub event. The payload is an opaque server-supplied blob;
/// the only contract is that it is loggable JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HubMessage {
    pub event: String,
    #[serde(default)]
    pub data: Value,
}

impl HubMessage {
    pub fn new(event: impl Into<String>, data: Value) -> Self {
        Self {
            event: event.into(),
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_frame_with_payload() {
        let msg: HubMessage =
            serde_json::from_str(r#"{"event":"ForceLogout","data":{"reason":"elsewhere"}}"#)
                .unwrap();
        assert_eq!(msg.event, "ForceLogout");
        assert_eq!(msg.data, json!({"reason": "elsewhere"}));
    }

    #[test]
    fn missing_payload_defaults_to_null() {
        let msg: HubMessage = serde_json::from_str(r#"{"event":"ForceLogout"}"#).unwrap();
        assert_eq!(msg.data, Value::Null);
    }
}
