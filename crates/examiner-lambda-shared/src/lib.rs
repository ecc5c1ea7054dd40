//! Shared infrastructure for examiner AWS Lambda functions.
//!
//! This crate provides common functionality used across all Lambda handlers:
//!
//! - [`Logger`]: per-invocation structured JSON logging with identity and
//!   trace enrichment
//! - [`Response`]: the API Gateway proxy response envelope with CORS headers
//! - [`guards`]: combinators that short-circuit handlers on missing path
//!   parameters or unauthorized roles
//! - [`config`]: environment value accessors
//! - [`events`]: serde mirrors of the inbound event shapes
//! - [`init_tracing`]: JSON-formatted tracing for CloudWatch Logs
//!
//! # Testing Support
//!
//! The [`test_utils`] module provides event fixtures and a capture sink for
//! asserting emitted log lines. Enable the `test-utils` feature to access it
//! from dependent crates.

#![deny(warnings)]

pub mod config;
pub mod events;
pub mod guards;
mod logger;
mod response;
pub mod security;
mod tracing_init;
pub mod validation;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::{default_if_not_present, require_value, ConfigError};
pub use events::{InvocationEvent, ProxyEvent, RequestContext, ScheduledEvent};
pub use logger::{LogContext, LogDetail, LogLevel, Logger};
pub use response::{Response, CORS_ALLOW_ORIGIN_HEADER, TRACE_ID_HEADER};
pub use tracing_init::init_tracing;
