//! End-to-end handler tests driving the guard chain and projection.

use serde_json::{json, Value};

use examiner_lambda_records::{handle_payload, STAFF_NUMBER_PARAM};
use examiner_lambda_shared::test_utils::scheduled_payload;
use examiner_lambda_shared::CORS_ALLOW_ORIGIN_HEADER;

fn test_result_body() -> Value {
    json!({
        "category": "B",
        "journalData": {
            "applicationReference": {
                "applicationId": 10123433,
                "bookingSequence": 1,
                "checkDigit": 1,
            },
            "testCentre": {
                "centreId": 1,
                "costCode": "EXT",
                "centreName": "Test Centre (Example)",
            },
            "testSlotAttributes": {"start": "1111-11-11"},
        },
        "vehicleDetails": {"gearboxCategory": "Manual"},
    })
}

fn records_payload(role: &str, staff_number: &str, body: Option<Value>) -> Value {
    json!({
        "httpMethod": "POST",
        "path": format!("/examiner-records/{staff_number}"),
        "pathParameters": {(STAFF_NUMBER_PARAM): staff_number},
        "requestContext": {
            "authorizer": {"staffNumber": staff_number, "examinerRole": role},
        },
        "body": body.map(|value| value.to_string()),
    })
}

#[tokio::test]
async fn projects_a_valid_submission() {
    let payload = records_payload("DE", "00112233", Some(test_result_body()));
    let response = handle_payload(payload).await.unwrap();

    assert_eq!(response.status_code, 200);
    assert_eq!(
        response.headers.get(CORS_ALLOW_ORIGIN_HEADER).map(String::as_str),
        Some("*")
    );

    let body: Value = serde_json::from_str(response.body.as_deref().unwrap()).unwrap();
    assert_eq!(body["appRef"], 10123433011i64);
    assert_eq!(body["testCategory"], "B");
    assert_eq!(body["startDate"], "1111-11-11");
    assert_eq!(body["dl25TestType"], 2);
    assert_eq!(body["licenceToIssue"], "Manual");
}

#[tokio::test]
async fn rejects_the_wrong_role_with_401() {
    let payload = records_payload("LDTM", "00112233", Some(test_result_body()));
    let response = handle_payload(payload).await.unwrap();

    assert_eq!(response.status_code, 401);
    assert_eq!(
        response.body.as_deref(),
        Some("\"Examiner role is not authorised for this request.\"")
    );
}

#[tokio::test]
async fn rejects_a_missing_role_with_401() {
    let payload = json!({
        "pathParameters": {(STAFF_NUMBER_PARAM): "00112233"},
        "requestContext": {},
    });
    let response = handle_payload(payload).await.unwrap();

    assert_eq!(response.status_code, 401);
}

#[tokio::test]
async fn rejects_a_non_numeric_staff_number_with_400() {
    let payload = records_payload("DE", "not-a-number", Some(test_result_body()));
    let response = handle_payload(payload).await.unwrap();

    assert_eq!(response.status_code, 400);
    assert_eq!(
        response.body.as_deref(),
        Some("\"Path parameter failed validation: \\\"staffNumber\\\"\"")
    );
}

#[tokio::test]
async fn rejects_missing_path_parameters_with_400() {
    let payload = json!({
        "requestContext": {
            "authorizer": {"examinerRole": "DE"},
        },
    });
    let response = handle_payload(payload).await.unwrap();

    assert_eq!(response.status_code, 400);
    assert_eq!(
        response.body.as_deref(),
        Some("\"Event object or path parameters are missing.\"")
    );
}

#[tokio::test]
async fn rejects_a_missing_body_with_400() {
    let payload = records_payload("DE", "00112233", None);
    let response = handle_payload(payload).await.unwrap();

    assert_eq!(response.status_code, 400);
    assert_eq!(response.body.as_deref(), Some("\"Request body is required\""));
}

#[tokio::test]
async fn rejects_an_unparseable_body_with_400() {
    let mut payload = records_payload("DE", "00112233", None);
    payload["body"] = json!("{\"category\": \"B\"");
    let response = handle_payload(payload).await.unwrap();

    assert_eq!(response.status_code, 400);
    assert!(response.body.unwrap().contains("Invalid test result"));
}

#[tokio::test]
async fn rejects_scheduled_events_with_400() {
    let response = handle_payload(scheduled_payload()).await.unwrap();

    assert_eq!(response.status_code, 400);
    assert_eq!(
        response.body.as_deref(),
        Some("\"Scheduled events are not supported\"")
    );
}

#[tokio::test]
async fn rejects_a_malformed_request_context_with_400() {
    let payload = json!({"requestContext": "not-an-object"});
    let response = handle_payload(payload).await.unwrap();

    assert_eq!(response.status_code, 400);
    assert!(response.body.unwrap().contains("Invalid request"));
}
