//! Serde mirrors of the inbound Lambda event shapes.
//!
//! Handlers receive either an API Gateway proxy request or a scheduled
//! trigger; the two are told apart by the presence of a `requestContext`
//! field. Every field is optional so that partially-formed events (common
//! in tests and custom integrations) still deserialize.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An API Gateway proxy request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProxyEvent {
    pub http_method: Option<String>,
    pub path: Option<String>,
    pub headers: Option<HashMap<String, String>>,
    /// Path parameter values; kept as raw JSON so that non-string values
    /// from custom integrations can be rejected rather than coerced.
    pub path_parameters: Option<Map<String, Value>>,
    pub body: Option<String>,
    pub request_context: Option<RequestContext>,
}

/// The request context attached by API Gateway.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequestContext {
    /// Free-form claims set by the custom authorizer.
    pub authorizer: Option<Map<String, Value>>,
}

/// A scheduled (CloudWatch Events) trigger.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduledEvent {
    pub id: Option<String>,
    pub source: Option<String>,
    pub account: Option<String>,
    pub time: Option<String>,
    pub region: Option<String>,
    pub detail: Option<Value>,
    #[serde(rename = "detail-type")]
    pub detail_type: Option<String>,
    pub resources: Option<Vec<String>>,
}

/// Either inbound event shape.
#[derive(Debug, Clone, PartialEq)]
pub enum InvocationEvent {
    ApiGateway(ProxyEvent),
    Scheduled(ScheduledEvent),
}

impl InvocationEvent {
    /// Classify a raw Lambda payload by the presence of `requestContext`.
    pub fn from_payload(payload: Value) -> Result<Self, serde_json::Error> {
        if payload.get("requestContext").is_some() {
            serde_json::from_value(payload).map(InvocationEvent::ApiGateway)
        } else {
            serde_json::from_value(payload).map(InvocationEvent::Scheduled)
        }
    }

    /// The request context, when this is an API Gateway event.
    pub fn request_context(&self) -> Option<&RequestContext> {
        match self {
            InvocationEvent::ApiGateway(event) => event.request_context.as_ref(),
            InvocationEvent::Scheduled(_) => None,
        }
    }
}
