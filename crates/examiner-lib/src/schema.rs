//! Read-only mirror of the external test-result schema.
//!
//! The full schema is versioned and category-specific; these types cover
//! only the slice the examiner-record projection and the licence rules
//! consume. Unknown fields are ignored on deserialization, and everything
//! the category unions make optional is optional here.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::category::TestCategory;
use crate::licence::TransmissionType;

/// One captured driving test, as submitted by the examiner application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    pub category: TestCategory,
    pub journal_data: JournalData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_data: Option<TestData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_summary: Option<TestSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_details: Option<VehicleDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pass_completion: Option<PassCompletion>,
}

/// Booking and scheduling data copied from the journal at test time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalData {
    pub application_reference: ApplicationReference,
    pub test_centre: TestCentre,
    pub test_slot_attributes: TestSlotAttributes,
}

/// The compound booking identifier for a driving test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationReference {
    pub application_id: i64,
    /// Sequence within the application, at most two digits.
    pub booking_sequence: i64,
    pub check_digit: i64,
}

/// The test centre the slot belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCentre {
    pub centre_id: i64,
    pub cost_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub centre_name: Option<String>,
}

/// Attributes of the booked test slot. Only the start time is projected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestSlotAttributes {
    pub start: String,
}

/// Captured in-test data. Category unions vary wildly here, so every field
/// is optional and the manoeuvres block is kept as raw JSON.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controlled_stop: Option<ControlledStop>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manoeuvres: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_checks: Option<VehicleChecks>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safety_and_balance_questions: Option<SafetyAndBalanceQuestions>,
}

/// Whether a controlled stop was exercised.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlledStop {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<bool>,
}

/// Show-me / tell-me vehicle checks. Some categories record a single
/// question, others a list; both shapes appear in the wild.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleChecks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_me_question: Option<QuestionResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_me_questions: Option<Vec<QuestionResult>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tell_me_question: Option<QuestionResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tell_me_questions: Option<Vec<QuestionResult>>,
}

/// Outcome of a single safety, balance, show-me or tell-me question.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<String>,
}

/// Safety and balance questions asked on motorcycle tests.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyAndBalanceQuestions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safety_questions: Option<Vec<QuestionResult>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance_questions: Option<Vec<QuestionResult>>,
}

/// Post-test summary recorded by the examiner.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_number: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub independent_driving: Option<IndependentDriving>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub circuit: Option<Circuit>,
}

/// How the independent driving section was conducted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndependentDriving {
    #[serde(rename = "Sat nav")]
    SatNav,
    #[serde(rename = "Traffic signs")]
    TrafficSigns,
    #[serde(rename = "N/A")]
    NotApplicable,
}

/// Circuit direction for module 1 motorcycle tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Circuit {
    Left,
    Right,
}

/// Details of the vehicle presented for test.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gearbox_category: Option<TransmissionType>,
}

/// Licence-issue data captured when the test is a pass.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassCompletion {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code78_present: Option<bool>,
}
