//! Test utilities for Lambda handler testing.
//!
//! This module provides shared test infrastructure for all Lambda crates:
//! canned inbound events and a capture sink for asserting the log lines a
//! [`Logger`] emits.
//!
//! These utilities are only available in test builds (or behind the
//! `test-utils` feature):
//!
//! ```ignore
//! use examiner_lambda_shared::test_utils::{api_gateway_event, CaptureBuffer};
//!
//! #[test]
//! fn test_handler() {
//!     let buffer = CaptureBuffer::new();
//!     let event = api_gateway_event(Some("00112233"), Some("DE"));
//!     // ... test handler logic
//! }
//! ```

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use serde_json::{json, Value};

use crate::events::{InvocationEvent, ProxyEvent};
use crate::logger::{LogContext, LogLevel, Logger};

/// A shared in-memory sink for captured log output.
///
/// Clone-cheap: the writer handed to a [`Logger`] and the buffer the test
/// reads share the same storage.
#[derive(Debug, Clone, Default)]
pub struct CaptureBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl CaptureBuffer {
    pub fn new() -> Self {
        CaptureBuffer::default()
    }

    /// A writer suitable for [`Logger::with_sink`].
    pub fn writer(&self) -> Box<dyn Write + Send> {
        Box::new(CaptureWriter {
            inner: Arc::clone(&self.inner),
        })
    }

    /// Everything written so far, as one string.
    pub fn contents(&self) -> String {
        let bytes = self.inner.lock().expect("capture buffer lock poisoned");
        String::from_utf8_lossy(&bytes).into_owned()
    }

    /// The complete lines written so far.
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(String::from).collect()
    }
}

struct CaptureWriter {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut bytes = self
            .inner
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "capture buffer lock poisoned"))?;
        bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A logger writing to a fresh [`CaptureBuffer`] at the given level.
pub fn capture_logger(service_name: &str, level: LogLevel) -> (Logger, CaptureBuffer) {
    let buffer = CaptureBuffer::new();
    let logger = Logger::with_sink(LogContext::for_service(service_name), level, buffer.writer());
    (logger, buffer)
}

/// An API Gateway proxy payload with the given authorizer identity.
pub fn api_gateway_payload(staff_number: Option<&str>, role: Option<&str>) -> Value {
    let mut authorizer = serde_json::Map::new();
    if let Some(staff_number) = staff_number {
        authorizer.insert("staffNumber".to_string(), json!(staff_number));
    }
    if let Some(role) = role {
        authorizer.insert("examinerRole".to_string(), json!(role));
    }

    json!({
        "httpMethod": "GET",
        "path": "",
        "headers": {},
        "pathParameters": {},
        "requestContext": {"authorizer": authorizer},
    })
}

/// An API Gateway proxy event with the given authorizer identity.
pub fn api_gateway_event(staff_number: Option<&str>, role: Option<&str>) -> ProxyEvent {
    match InvocationEvent::from_payload(api_gateway_payload(staff_number, role)) {
        Ok(InvocationEvent::ApiGateway(event)) => event,
        _ => unreachable!("payload always carries a requestContext"),
    }
}

/// A scheduled-trigger payload.
pub fn scheduled_payload() -> Value {
    json!({
        "account": "12345",
        "region": "eu-west-1",
        "detail": "details",
        "detail-type": "type",
        "source": "CloudWatch",
        "time": "2019-01-01 00:00:00",
        "id": "999",
        "resources": [],
    })
}

/// Create a mock request ID for testing.
pub fn mock_request_id(suffix: &str) -> String {
    format!("test-request-{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_buffer_collects_lines() {
        let buffer = CaptureBuffer::new();
        let mut writer = buffer.writer();
        writeln!(writer, "first").unwrap();
        writeln!(writer, "second").unwrap();

        assert_eq!(buffer.lines(), vec!["first", "second"]);
    }

    #[test]
    fn api_gateway_event_carries_the_identity() {
        let event = api_gateway_event(Some("00112233"), Some("LDTM"));
        let authorizer = event.request_context.unwrap().authorizer.unwrap();
        assert_eq!(authorizer["staffNumber"], "00112233");
        assert_eq!(authorizer["examinerRole"], "LDTM");
    }

    #[test]
    fn scheduled_payload_has_no_request_context() {
        assert!(scheduled_payload().get("requestContext").is_none());
    }

    #[test]
    fn mock_request_id_formats_correctly() {
        assert_eq!(mock_request_id("123"), "test-request-123");
    }
}
