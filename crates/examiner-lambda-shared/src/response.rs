//! The API Gateway proxy response envelope.

use std::collections::HashMap;

use http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::logger::LogContext;

/// Required for CORS support to work.
pub const CORS_ALLOW_ORIGIN_HEADER: &str = "Access-Control-Allow-Origin";

/// Propagates the X-Ray trace id back to the caller.
pub const TRACE_ID_HEADER: &str = "X-Amzn-Trace-Id";

/// A normalized proxy-integration response.
///
/// The body is carried pre-serialized (API Gateway expects a string), or as
/// a literal JSON `null` for body-less responses. Every envelope allows all
/// origins; callers may layer further headers on top and win on conflict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: Option<String>,
}

impl Response {
    /// Create a response with a JSON-serialized body.
    pub fn json<T: Serialize + ?Sized>(
        body: &T,
        status_code: StatusCode,
    ) -> Result<Self, serde_json::Error> {
        Ok(Response {
            status_code: status_code.as_u16(),
            headers: default_headers(),
            body: Some(serde_json::to_string(body)?),
        })
    }

    /// Create a response with a `null` body.
    pub fn empty(status_code: StatusCode) -> Self {
        Response {
            status_code: status_code.as_u16(),
            headers: default_headers(),
            body: None,
        }
    }

    /// Set a header, replacing any existing value.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Merge caller-supplied headers over the defaults.
    pub fn with_headers(mut self, headers: &HashMap<String, String>) -> Self {
        for (name, value) in headers {
            self.headers.insert(name.clone(), value.clone());
        }
        self
    }

    /// Add the trace id header when the invocation context carries one.
    pub fn with_trace_id(mut self, context: &LogContext) -> Self {
        if let Some(trace_id) = &context.x_ray_trace_id {
            self.headers
                .insert(TRACE_ID_HEADER.to_string(), trace_id.clone());
        }
        self
    }
}

fn default_headers() -> HashMap<String, String> {
    HashMap::from([(CORS_ALLOW_ORIGIN_HEADER.to_string(), "*".to_string())])
}
