use lambda_runtime::Error;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_FILTER: &str = "info";

/// Resolves the log filter from `RUST_LOG`, falling back to `default_filter`.
pub fn log_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// Installs the global fmt subscriber. Timestamps are left to CloudWatch.
pub fn init_tracing(default_filter: &str) -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(default_filter))
        .with_target(false)
        .without_time()
        .try_init()
}
