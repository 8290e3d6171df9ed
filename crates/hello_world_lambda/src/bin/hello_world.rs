use hello_world_lambda::handlers::hello::handle_request;
use hello_world_lambda::telemetry::{init_tracing, DEFAULT_LOG_FILTER};
use lambda_runtime::{service_fn, Error};

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing(DEFAULT_LOG_FILTER)?;
    lambda_runtime::run(service_fn(handle_request)).await
}
