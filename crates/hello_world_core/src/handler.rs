use serde_json::Value;

use crate::contract::{ResponseEnvelope, ResponsePayload, HELLO_WORLD_MESSAGE, STATUS_OK};

pub fn hello_payload() -> ResponsePayload {
    ResponsePayload::new(HELLO_WORLD_MESSAGE)
}

pub fn hello_response() -> Result<ResponseEnvelope, serde_json::Error> {
    ResponseEnvelope::json(STATUS_OK, &hello_payload())
}

/// Builds the response for an invocation. The event does not influence the
/// result; any JSON shape, including `null`, is accepted.
pub fn handle_event(_event: &Value) -> Result<ResponseEnvelope, serde_json::Error> {
    hello_response()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn empty_event_returns_hello_world() {
        let response = handle_event(&json!({})).expect("handler should not fail");

        assert_eq!(response.status_code, 200);
        assert_eq!(
            response.headers,
            json!({"Content-Type": "application/json"})
        );
        assert_eq!(response.body, "{\"message\":\"Hello World!\"}");
        assert!(!response.is_base64_encoded);
    }

    #[test]
    fn null_event_matches_empty_event() {
        let from_null = handle_event(&Value::Null).expect("handler should not fail");
        let from_empty = handle_event(&json!({})).expect("handler should not fail");

        assert_eq!(from_null, from_empty);
    }

    #[test]
    fn ignores_event_shape() {
        let events = [
            json!([1, 2, 3]),
            json!("text"),
            json!(42),
            json!(false),
            json!({"body": "{not json", "statusCode": 500}),
            json!({"message": "Goodbye"}),
        ];

        for event in events {
            let response = handle_event(&event).expect("handler should not fail");
            let body: Value = serde_json::from_str(&response.body).expect("body should parse");

            assert_eq!(response.status_code, 200, "event: {event}");
            assert_eq!(body, json!({"message": "Hello World!"}), "event: {event}");
        }
    }

    #[test]
    fn repeated_invocations_serialize_identically() {
        let first = serde_json::to_vec(&hello_response().expect("handler should not fail"))
            .expect("response should serialize");

        for _ in 0..16 {
            let next = serde_json::to_vec(&handle_event(&Value::Null).expect("no failure"))
                .expect("response should serialize");
            assert_eq!(next, first);
        }
    }

    #[test]
    fn payload_carries_greeting() {
        assert_eq!(hello_payload().message, "Hello World!");
    }
}
