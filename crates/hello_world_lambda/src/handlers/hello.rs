use hello_world_core::contract::ResponseEnvelope;
use hello_world_core::handler::handle_event;
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;

pub async fn handle_request(event: LambdaEvent<Value>) -> Result<ResponseEnvelope, Error> {
    let (payload, context) = event.into_parts();
    tracing::info!(request_id = %context.request_id, "handling hello world invocation");

    let response = handle_event(&payload)
        .map_err(|error| Error::from(format!("failed to serialize response body: {error}")))?;
    Ok(response)
}
