//! Handler guard combinators.
//!
//! Each guard wraps an async handler and intercepts the inbound event:
//! when validation fails it logs an error and short-circuits with a 400 or
//! 401 [`Response`], otherwise it awaits the wrapped handler with the event
//! unchanged. Guards nest, so a handler can require a role and then
//! validate a path parameter.

use std::future::Future;

use http::StatusCode;
use lambda_runtime::Error;
use serde_json::{json, Map, Value};

use examiner_lib::ExaminerRole;

use crate::events::ProxyEvent;
use crate::logger::Logger;
use crate::response::Response;
use crate::security::role_from_request_context;

const MISSING_PATH_PARAMETERS: &str = "Event object or path parameters are missing.";
const UNAUTHORISED_ROLE: &str = "Examiner role is not authorised for this request.";

/// Require a named path parameter to be present and non-empty.
pub async fn require_path_param<F, Fut>(
    logger: &Logger,
    param: &str,
    event: ProxyEvent,
    handler: F,
) -> Result<Response, Error>
where
    F: FnOnce(ProxyEvent) -> Fut,
    Fut: Future<Output = Result<Response, Error>>,
{
    let Some(params) = event.path_parameters.as_ref() else {
        logger.error(MISSING_PATH_PARAMETERS, &[]);
        return Ok(Response::json(MISSING_PATH_PARAMETERS, StatusCode::BAD_REQUEST)?);
    };
    if !has_value(params, param) {
        logger.error("Path parameter not defined", &[json!(param).into()]);
        return Ok(Response::json(
            &format!("Path parameter is required: {param}"),
            StatusCode::BAD_REQUEST,
        )?);
    }

    handler(event).await
}

/// Require the authenticated role to equal the expected examiner role.
pub async fn require_role<F, Fut>(
    logger: &Logger,
    required: ExaminerRole,
    event: ProxyEvent,
    handler: F,
) -> Result<Response, Error>
where
    F: FnOnce(ProxyEvent) -> Fut,
    Fut: Future<Output = Result<Response, Error>>,
{
    let actual = role_from_request_context(event.request_context.as_ref());
    if actual != Some(required.code()) {
        logger.error(
            UNAUTHORISED_ROLE,
            &[json!({"required": required, "actual": actual}).into()],
        );
        return Ok(Response::json(UNAUTHORISED_ROLE, StatusCode::UNAUTHORIZED)?);
    }

    handler(event).await
}

/// Require a named path parameter to pass the caller's predicate.
///
/// The predicate sees the raw JSON value (or `None` when the parameter is
/// absent), so callers can enforce both presence and shape.
pub async fn validate_path_param<F, Fut, V>(
    logger: &Logger,
    param: &str,
    validator: V,
    event: ProxyEvent,
    handler: F,
) -> Result<Response, Error>
where
    F: FnOnce(ProxyEvent) -> Fut,
    Fut: Future<Output = Result<Response, Error>>,
    V: Fn(Option<&Value>) -> bool,
{
    let Some(params) = event.path_parameters.as_ref() else {
        logger.error(MISSING_PATH_PARAMETERS, &[]);
        return Ok(Response::json(MISSING_PATH_PARAMETERS, StatusCode::BAD_REQUEST)?);
    };
    let value = params.get(param);
    if !validator(value) {
        logger.error(
            "Path parameter is invalid.",
            &[json!({"param": param, "value": value}).into()],
        );
        return Ok(Response::json(
            &format!("Path parameter failed validation: \"{param}\""),
            StatusCode::BAD_REQUEST,
        )?);
    }

    handler(event).await
}

fn has_value(params: &Map<String, Value>, param: &str) -> bool {
    match params.get(param) {
        None | Some(Value::Null) => false,
        Some(Value::String(value)) => !value.is_empty(),
        Some(_) => true,
    }
}
