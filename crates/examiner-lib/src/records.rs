//! Flat examiner-record projection of a nested test result.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application_reference::format_application_reference;
use crate::category::TestCategory;
use crate::schema::{
    Circuit, IndependentDriving, QuestionResult, TestCentre, TestResult, VehicleChecks,
};

/// The flat projection kept for examiner records analysis.
///
/// Only `appRef`, `testCategory`, `testCentre` and `startDate` are always
/// present; every other field is copied from the test result when recorded
/// and omitted from the JSON output otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExaminerRecord {
    pub app_ref: i64,
    pub test_category: TestCategory,
    pub test_centre: TestCentre,
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_number: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controlled_stop: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub independent_driving: Option<IndependentDriving>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub circuit: Option<Circuit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safety_questions: Option<Vec<QuestionResult>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance_questions: Option<Vec<QuestionResult>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manoeuvres: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_me_questions: Option<Vec<QuestionResult>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tell_me_questions: Option<Vec<QuestionResult>>,
}

/// Project a test result into its examiner record.
pub fn format_for_examiner_records(test_result: &TestResult) -> ExaminerRecord {
    let journal_data = &test_result.journal_data;
    let test_data = test_result.test_data.as_ref();
    let test_summary = test_result.test_summary.as_ref();
    let vehicle_checks = test_data.and_then(|data| data.vehicle_checks.as_ref());
    let safety_and_balance = test_data.and_then(|data| data.safety_and_balance_questions.as_ref());

    ExaminerRecord {
        app_ref: format_application_reference(&journal_data.application_reference),
        test_category: test_result.category,
        test_centre: journal_data.test_centre.clone(),
        start_date: journal_data.test_slot_attributes.start.clone(),
        route_number: test_summary.and_then(|summary| summary.route_number),
        controlled_stop: test_data
            .and_then(|data| data.controlled_stop.as_ref())
            .and_then(|stop| stop.selected),
        independent_driving: test_summary.and_then(|summary| summary.independent_driving),
        circuit: test_summary.and_then(|summary| summary.circuit),
        safety_questions: safety_and_balance.and_then(|questions| questions.safety_questions.clone()),
        balance_questions: safety_and_balance
            .and_then(|questions| questions.balance_questions.clone()),
        manoeuvres: test_data.and_then(|data| data.manoeuvres.clone()),
        show_me_questions: vehicle_checks.and_then(show_me_questions),
        tell_me_questions: vehicle_checks.and_then(tell_me_questions),
    }
}

// Older category schemas record a single show-me/tell-me question, newer
// ones a list. The record always carries a list; the singular field wins
// when both are present.
fn show_me_questions(checks: &VehicleChecks) -> Option<Vec<QuestionResult>> {
    normalize_questions(checks.show_me_question.as_ref(), checks.show_me_questions.as_ref())
}

fn tell_me_questions(checks: &VehicleChecks) -> Option<Vec<QuestionResult>> {
    normalize_questions(checks.tell_me_question.as_ref(), checks.tell_me_questions.as_ref())
}

fn normalize_questions(
    singular: Option<&QuestionResult>,
    plural: Option<&Vec<QuestionResult>>,
) -> Option<Vec<QuestionResult>> {
    match (singular, plural) {
        (Some(question), _) => Some(vec![question.clone()]),
        (None, Some(questions)) => Some(questions.clone()),
        (None, None) => None,
    }
}
