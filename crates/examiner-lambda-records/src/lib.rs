//! AWS Lambda function projecting submitted test results into examiner
//! records.
//!
//! The handler expects an API Gateway proxy request with a `staffNumber`
//! path parameter and a test result in the body, authorized for the DE
//! role. It responds with the flat examiner-record projection, enriched
//! with the DL25 test type and the licence-to-issue transmission.

mod models;

use std::env;

use http::StatusCode;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use once_cell::sync::Lazy;
use serde_json::Value;
use tracing::info;

use examiner_lambda_shared::{
    default_if_not_present, guards, init_tracing, validation::get_path_param, InvocationEvent,
    LogDetail, Logger, ProxyEvent, Response,
};
use examiner_lib::{
    determine_dl25_test_type, format_for_examiner_records, licence_to_issue, ExaminerRole,
    TestResult, TransmissionType,
};

pub use models::RecordsResponse;

const DEFAULT_SERVICE_NAME: &str = "examiner-records";

/// Service name used in log context, resolved once at cold start.
static SERVICE_NAME: Lazy<String> =
    Lazy::new(|| default_if_not_present(env::var("SERVICE_NAME").ok(), DEFAULT_SERVICE_NAME));

/// Path parameter naming the examiner whose record is being submitted.
pub const STAFF_NUMBER_PARAM: &str = "staffNumber";

/// Entry point used by the Lambda runtime.
pub async fn run() -> Result<(), Error> {
    init_tracing();
    info!(service = SERVICE_NAME.as_str(), "starting examiner-records handler");

    lambda_runtime::run(service_fn(handler)).await
}

/// Lambda handler invoked per request.
pub async fn handler(event: LambdaEvent<Value>) -> Result<Response, Error> {
    handle_payload(event.payload).await
}

/// Core handler logic separated for reuse in tests.
pub async fn handle_payload(payload: Value) -> Result<Response, Error> {
    let invocation = match InvocationEvent::from_payload(payload) {
        Ok(invocation) => invocation,
        Err(e) => {
            tracing::error!(error = %e, "failed to parse invocation event");
            return Ok(Response::json(
                &format!("Invalid request: {e}"),
                StatusCode::BAD_REQUEST,
            )?);
        }
    };

    let logger = Logger::bootstrap(&SERVICE_NAME, &invocation);

    let event = match invocation {
        InvocationEvent::ApiGateway(event) => event,
        InvocationEvent::Scheduled(_) => {
            logger.error("Scheduled events are not supported by this handler", &[]);
            return Ok(Response::json(
                "Scheduled events are not supported",
                StatusCode::BAD_REQUEST,
            )?);
        }
    };

    let logger_ref = &logger;
    guards::require_role(logger_ref, ExaminerRole::De, event, |event| async move {
        guards::validate_path_param(
            logger_ref,
            STAFF_NUMBER_PARAM,
            is_staff_number,
            event,
            |event| async move { project_records(logger_ref, &event) },
        )
        .await
    })
    .await
}

/// Staff numbers are non-empty strings of digits.
fn is_staff_number(value: Option<&Value>) -> bool {
    value
        .and_then(Value::as_str)
        .is_some_and(|s| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()))
}

fn project_records(logger: &Logger, event: &ProxyEvent) -> Result<Response, Error> {
    let staff_number = get_path_param(event.path_parameters.as_ref(), STAFF_NUMBER_PARAM);

    let Some(body) = event.body.as_deref() else {
        logger.error("Request body is missing", &[]);
        return Ok(Response::json("Request body is required", StatusCode::BAD_REQUEST)?);
    };

    let test_result: TestResult = match serde_json::from_str(body) {
        Ok(test_result) => test_result,
        Err(e) => {
            logger.error("Request body is not a valid test result", &[LogDetail::from_error(&e)]);
            return Ok(Response::json(
                &format!("Invalid test result: {e}"),
                StatusCode::BAD_REQUEST,
            )?);
        }
    };

    let record = format_for_examiner_records(&test_result);
    let response = RecordsResponse {
        dl25_test_type: determine_dl25_test_type(test_result.category.code()),
        licence_to_issue: licence_issued(&test_result),
        record,
    };

    logger.info(
        "Projected test result into examiner record",
        &[serde_json::json!({
            "staffNumber": staff_number,
            "appRef": response.record.app_ref,
            "category": test_result.category,
        })
        .into()],
    );

    Ok(Response::json(&response, StatusCode::OK)?.with_trace_id(logger.context()))
}

fn licence_issued(test_result: &TestResult) -> Option<TransmissionType> {
    let transmission = test_result.vehicle_details.as_ref()?.gearbox_category?;
    let code78_present = test_result
        .pass_completion
        .as_ref()
        .and_then(|pass| pass.code78_present);

    Some(licence_to_issue(test_result.category, transmission, code78_present))
}
