//! Lambda runtime integration for the hello world function.
//!
//! Response construction lives in `hello_world_core`; this crate adapts it to
//! `lambda_runtime` and owns process-level setup such as tracing.

pub mod handlers;
pub mod telemetry;
