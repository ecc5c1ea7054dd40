//! Per-invocation structured JSON logging.
//!
//! Every Lambda handler builds a [`Logger`] at the top of the invocation
//! with [`Logger::bootstrap`], then threads it through the code that needs
//! to log. The logger owns the invocation's [`LogContext`] (service name,
//! examiner identity, trace id, cold-start marker), so log output is
//! enriched without any process-global mutable state leaking between
//! overlapping invocations.
//!
//! Output is one JSON object per line on standard output, which CloudWatch
//! Logs ingests as-is. The level filter is controlled by the `LOG_LEVEL`
//! environment variable (`DEBUG`, `INFO`, `WARN` or `ERROR`); an absent or
//! invalid value falls back to `DEBUG` and emits a warning saying so.
//! Error-level messages and custom metrics are always emitted.

use std::io::{self, Write};
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{json, Value};

use crate::events::InvocationEvent;
use crate::security::{role_from_request_context, staff_number_from_request_context};

/// Set until the first bootstrap of this execution environment.
static COLD_START: AtomicBool = AtomicBool::new(true);

/// Severity of a log entry, in increasing verbosity order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
}

impl FromStr for LogLevel {
    type Err = ();

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            _ => Err(()),
        }
    }
}

/// Contextual fields attached to every log line of an invocation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogContext {
    pub service: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staff_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_ray_trace_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cold_start: Option<bool>,
}

impl LogContext {
    /// A context carrying only a service name.
    pub fn for_service(service_name: &str) -> Self {
        LogContext {
            service: service_name.to_string(),
            ..LogContext::default()
        }
    }
}

/// A value appended to a log message.
///
/// Errors render as `Name: message` verbatim; everything else is appended
/// as its JSON encoding.
#[derive(Debug, Clone, PartialEq)]
pub enum LogDetail {
    Text(String),
    Json(Value),
}

impl LogDetail {
    /// Render an error as `Name: message`, where the name is the error
    /// type's unqualified name.
    pub fn from_error<E: std::error::Error>(error: &E) -> Self {
        let name = std::any::type_name::<E>().rsplit("::").next().unwrap_or("Error");
        LogDetail::Text(format!("{name}: {error}"))
    }

    fn render(&self) -> String {
        match self {
            LogDetail::Text(text) => text.clone(),
            LogDetail::Json(value) => value.to_string(),
        }
    }
}

impl From<Value> for LogDetail {
    fn from(value: Value) -> Self {
        LogDetail::Json(value)
    }
}

/// A leveled, context-enriched JSON line logger for one invocation.
pub struct Logger {
    context: LogContext,
    level: LogLevel,
    sink: Mutex<Box<dyn Write + Send>>,
}

impl Logger {
    /// Build the logger for an invocation, writing to standard output.
    ///
    /// The examiner's staff number and role are copied from the event's
    /// authorizer when present; scheduled events carry no identity. The
    /// X-Ray trace id comes from `_X_AMZN_TRACE_ID`, and the first
    /// bootstrap in the execution environment marks its context as a cold
    /// start.
    pub fn bootstrap(service_name: &str, event: &InvocationEvent) -> Self {
        let (level, level_warning) = level_from_env();
        let logger = Logger::with_sink(
            invocation_context(service_name, event),
            level,
            Box::new(io::stdout()),
        );
        if let Some(warning) = level_warning {
            logger.warn(&warning, &[]);
        }
        logger
    }

    /// Build a logger with an explicit context, level and sink.
    pub fn with_sink(context: LogContext, level: LogLevel, sink: Box<dyn Write + Send>) -> Self {
        Logger {
            context,
            level,
            sink: Mutex::new(sink),
        }
    }

    /// The invocation context this logger enriches output with.
    pub fn context(&self) -> &LogContext {
        &self.context
    }

    /// Record verbose low-level details of what has happened.
    pub fn debug(&self, message: &str, details: &[LogDetail]) {
        self.log(LogLevel::Debug, message, details);
    }

    /// Record brief high-level details of what has happened.
    pub fn info(&self, message: &str, details: &[LogDetail]) {
        self.log(LogLevel::Info, message, details);
    }

    /// Record that something bad happened but the primary action can still
    /// be completed.
    pub fn warn(&self, message: &str, details: &[LogDetail]) {
        self.log(LogLevel::Warn, message, details);
    }

    /// Record that something bad happened and the action cannot be
    /// completed. Always emitted.
    pub fn error(&self, message: &str, details: &[LogDetail]) {
        self.log(LogLevel::Error, message, details);
    }

    /// Emit a named metric line, bypassing the level filter.
    pub fn custom_metric(&self, name: &str, description: &str, value: Option<Value>) {
        self.write_line(&MetricEntry {
            name,
            description,
            context: &self.context,
            value,
        });
    }

    /// Emit a duration metric line, with the value in fractional seconds.
    pub fn custom_duration_metric(
        &self,
        name: &str,
        description: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) {
        let seconds = (end - start).num_milliseconds() as f64 / 1_000.0;
        self.custom_metric(name, description, Some(json!(seconds)));
    }

    fn log(&self, level: LogLevel, message: &str, details: &[LogDetail]) {
        if level > self.level {
            return;
        }
        let message = format_message(message, details);
        self.write_line(&LogEntry {
            context: &self.context,
            level,
            message: &message,
        });
    }

    fn write_line<T: Serialize>(&self, entry: &T) {
        let Ok(line) = serde_json::to_string(entry) else {
            return;
        };
        if let Ok(mut sink) = self.sink.lock() {
            // A failed log write must never fail the invocation.
            let _ = writeln!(sink, "{line}");
        }
    }
}

#[derive(Serialize)]
struct LogEntry<'a> {
    #[serde(flatten)]
    context: &'a LogContext,
    level: LogLevel,
    message: &'a str,
}

#[derive(Serialize)]
struct MetricEntry<'a> {
    name: &'a str,
    description: &'a str,
    #[serde(flatten)]
    context: &'a LogContext,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<Value>,
}

fn format_message(message: &str, details: &[LogDetail]) -> String {
    if details.is_empty() {
        return message.to_string();
    }
    let rendered: Vec<String> = details.iter().map(LogDetail::render).collect();
    format!("{}{}", message, rendered.join(" "))
}

fn invocation_context(service_name: &str, event: &InvocationEvent) -> LogContext {
    let request_context = event.request_context();
    LogContext {
        service: service_name.to_string(),
        staff_number: staff_number_from_request_context(request_context).map(String::from),
        role: role_from_request_context(request_context).map(String::from),
        x_ray_trace_id: std::env::var("_X_AMZN_TRACE_ID").ok(),
        cold_start: COLD_START.swap(false, Ordering::Relaxed).then_some(true),
    }
}

fn level_from_env() -> (LogLevel, Option<String>) {
    match std::env::var("LOG_LEVEL") {
        Ok(name) => match name.parse() {
            Ok(level) => (level, None),
            Err(()) => (
                LogLevel::Debug,
                Some(format!("{name} is an invalid log level. Defaulting to DEBUG")),
            ),
        },
        Err(_) => (
            LogLevel::Debug,
            Some("No log level set, defaulting to DEBUG".to_string()),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::CaptureBuffer;
    use serde_json::json;

    fn capture_logger(level: LogLevel) -> (Logger, CaptureBuffer) {
        crate::test_utils::capture_logger("test-service", level)
    }

    #[test]
    fn logs_a_simple_message_at_each_level() {
        for (level, expected) in [
            (LogLevel::Debug, "DEBUG"),
            (LogLevel::Info, "INFO"),
            (LogLevel::Warn, "WARN"),
            (LogLevel::Error, "ERROR"),
        ] {
            let (logger, buffer) = capture_logger(level);
            logger.log(level, "Log Message", &[]);
            assert_eq!(
                buffer.lines(),
                vec![format!(
                    "{{\"service\":\"test-service\",\"level\":\"{expected}\",\"message\":\"Log Message\"}}"
                )]
            );
        }
    }

    #[test]
    fn appends_json_details_to_the_message() {
        let (logger, buffer) = capture_logger(LogLevel::Debug);
        logger.debug(
            "Log Message: ",
            &[json!({"aaa": "bbb", "ccc": 123, "ddd": false}).into()],
        );
        assert_eq!(
            buffer.lines(),
            vec![
                "{\"service\":\"test-service\",\"level\":\"DEBUG\",\"message\":\"Log Message: \
                 {\\\"aaa\\\":\\\"bbb\\\",\\\"ccc\\\":123,\\\"ddd\\\":false}\"}"
            ]
        );
    }

    #[test]
    fn joins_several_details_with_spaces() {
        let (logger, buffer) = capture_logger(LogLevel::Debug);
        logger.debug(
            "Log Message: ",
            &[
                json!({"aaa": "bbb"}).into(),
                json!("test").into(),
                json!(54321).into(),
                json!(false).into(),
            ],
        );
        assert_eq!(
            buffer.lines(),
            vec![
                "{\"service\":\"test-service\",\"level\":\"DEBUG\",\"message\":\"Log Message: \
                 {\\\"aaa\\\":\\\"bbb\\\"} \\\"test\\\" 54321 false\"}"
            ]
        );
    }

    #[test]
    fn renders_errors_as_name_and_message() {
        let (logger, buffer) = capture_logger(LogLevel::Debug);
        let error = crate::config::ConfigError::Missing {
            key: "MY_KEY".to_string(),
        };
        logger.debug("Log Message: ", &[LogDetail::from_error(&error)]);
        assert_eq!(
            buffer.lines(),
            vec![
                "{\"service\":\"test-service\",\"level\":\"DEBUG\",\"message\":\"Log Message: \
                 ConfigError: configuration item MY_KEY was not provided with a value\"}"
            ]
        );
    }

    #[test]
    fn level_filter_is_monotonic() {
        let (logger, buffer) = capture_logger(LogLevel::Warn);
        logger.debug("Log Message", &[]);
        logger.info("Log Message", &[]);
        assert!(buffer.lines().is_empty());

        logger.warn("Log Message", &[]);
        logger.error("Log Message", &[]);
        let lines = buffer.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("\"level\":\"WARN\""));
        assert!(lines[1].contains("\"level\":\"ERROR\""));
    }

    #[test]
    fn error_is_emitted_at_every_configured_level() {
        let (logger, buffer) = capture_logger(LogLevel::Error);
        logger.warn("ignored", &[]);
        logger.error("kept", &[]);
        let lines = buffer.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("\"level\":\"ERROR\""));
    }

    #[test]
    fn context_enriches_every_line() {
        let buffer = CaptureBuffer::new();
        let context = LogContext {
            service: "test-service".to_string(),
            staff_number: Some("00112233".to_string()),
            ..LogContext::default()
        };
        let logger = Logger::with_sink(context, LogLevel::Debug, buffer.writer());
        logger.debug("Log Message", &[]);
        assert_eq!(
            buffer.lines(),
            vec![
                "{\"service\":\"test-service\",\"staffNumber\":\"00112233\",\"level\":\"DEBUG\",\
                 \"message\":\"Log Message\"}"
            ]
        );
    }

    #[test]
    fn bootstrap_reads_identity_from_the_authorizer() {
        let event = InvocationEvent::from_payload(json!({
            "requestContext": {
                "authorizer": {"staffNumber": "00112233", "examinerRole": "DE"},
            },
        }))
        .unwrap();
        let logger = Logger::bootstrap("test-service", &event);
        assert_eq!(logger.context().service, "test-service");
        assert_eq!(logger.context().staff_number.as_deref(), Some("00112233"));
        assert_eq!(logger.context().role.as_deref(), Some("DE"));
    }

    #[test]
    fn bootstrap_accepts_scheduled_events() {
        let event = InvocationEvent::from_payload(json!({
            "id": "999",
            "source": "CloudWatch",
            "time": "2019-01-01 00:00:00",
        }))
        .unwrap();
        let logger = Logger::bootstrap("test-service", &event);
        assert_eq!(logger.context().staff_number, None);
        assert_eq!(logger.context().role, None);
    }

    #[test]
    fn custom_metric_ignores_the_level_filter() {
        let (logger, buffer) = capture_logger(LogLevel::Error);
        logger.custom_metric("my-metric", "my-description", None);
        assert_eq!(
            buffer.lines(),
            vec![
                "{\"name\":\"my-metric\",\"description\":\"my-description\",\
                 \"service\":\"test-service\"}"
            ]
        );
    }

    #[test]
    fn custom_metric_appends_the_value() {
        let (logger, buffer) = capture_logger(LogLevel::Debug);
        logger.custom_metric("my-metric", "my-description", Some(json!("my-value")));
        assert_eq!(
            buffer.lines(),
            vec![
                "{\"name\":\"my-metric\",\"description\":\"my-description\",\
                 \"service\":\"test-service\",\"value\":\"my-value\"}"
            ]
        );
    }

    #[test]
    fn duration_metric_reports_fractional_seconds() {
        let (logger, buffer) = capture_logger(LogLevel::Debug);
        let start = "2021-03-08T09:00:00Z".parse::<DateTime<Utc>>().unwrap();
        logger.custom_duration_metric(
            "duration",
            "time taken",
            start,
            start + chrono::Duration::seconds(5),
        );
        let line = buffer.lines().pop().unwrap();
        let entry: Value = serde_json::from_str(&line).unwrap();
        assert_eq!(entry["value"].as_f64(), Some(5.0));
    }

    #[test]
    fn duration_metric_handles_long_fractional_gaps() {
        let (logger, buffer) = capture_logger(LogLevel::Debug);
        let start = "2021-03-08T09:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let end = start + chrono::Duration::milliseconds((2 * 3600 + 15 * 60 + 5) * 1_000 + 250);
        logger.custom_duration_metric("duration", "time taken", start, end);
        let line = buffer.lines().pop().unwrap();
        let entry: Value = serde_json::from_str(&line).unwrap();
        assert_eq!(entry["value"].as_f64(), Some(8105.25));
    }

    #[test]
    fn parses_level_names() {
        assert_eq!("DEBUG".parse(), Ok(LogLevel::Debug));
        assert_eq!("INFO".parse(), Ok(LogLevel::Info));
        assert_eq!("WARN".parse(), Ok(LogLevel::Warn));
        assert_eq!("ERROR".parse(), Ok(LogLevel::Error));
        assert_eq!("WIBBLE".parse::<LogLevel>(), Err(()));
        assert_eq!("debug".parse::<LogLevel>(), Err(()));
    }
}
