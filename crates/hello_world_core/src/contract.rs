use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub const HELLO_WORLD_MESSAGE: &str = "Hello World!";
pub const JSON_CONTENT_TYPE: &str = "application/json";
pub const STATUS_OK: u16 = 200;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResponsePayload {
    pub message: String,
}

impl ResponsePayload {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Proxy-integration response returned to the invoking host.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResponseEnvelope {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: Value,
    pub body: String,
    #[serde(rename = "isBase64Encoded")]
    pub is_base64_encoded: bool,
}

impl ResponseEnvelope {
    /// Serializes `payload` as the textual JSON body of a response.
    pub fn json(status_code: u16, payload: &impl Serialize) -> Result<Self, serde_json::Error> {
        Ok(Self {
            status_code,
            headers: json!({"Content-Type": JSON_CONTENT_TYPE}),
            body: serde_json::to_string(payload)?,
            is_base64_encoded: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_uses_proxy_field_names() {
        let envelope = ResponseEnvelope::json(STATUS_OK, &ResponsePayload::new("hi"))
            .expect("payload should serialize");

        let value = serde_json::to_value(&envelope).expect("envelope should serialize");
        assert_eq!(
            value,
            json!({
                "statusCode": 200,
                "headers": {"Content-Type": "application/json"},
                "body": "{\"message\":\"hi\"}",
                "isBase64Encoded": false
            })
        );
    }

    #[test]
    fn envelope_parses_from_host_shape() {
        let envelope: ResponseEnvelope = serde_json::from_value(json!({
            "statusCode": 404,
            "headers": {"Content-Type": "text/plain"},
            "body": "missing",
            "isBase64Encoded": true
        }))
        .expect("envelope should parse");

        assert_eq!(envelope.status_code, 404);
        assert_eq!(envelope.body, "missing");
        assert!(envelope.is_base64_encoded);
    }

    #[test]
    fn body_is_compact_json() {
        let envelope = ResponseEnvelope::json(STATUS_OK, &json!({"a": [1, 2]}))
            .expect("payload should serialize");
        assert_eq!(envelope.body, "{\"a\":[1,2]}");
    }
}
