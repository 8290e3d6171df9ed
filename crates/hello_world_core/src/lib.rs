//! Hello world response contract and handler logic.
//!
//! This crate owns the response envelope shape and the pure handler. It
//! excludes Lambda runtime and async concerns, which live in
//! `hello_world_lambda`.

pub mod contract;
pub mod handler;
