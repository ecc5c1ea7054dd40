//! Response payload for the examiner-records endpoint.

use serde::Serialize;

use examiner_lib::{ExaminerRecord, TransmissionType};

/// An examiner record enriched with the codes downstream reporting wants
/// alongside it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordsResponse {
    #[serde(flatten)]
    pub record: ExaminerRecord,

    /// DL25 test type for the test's category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dl25_test_type: Option<u8>,

    /// Transmission the licence should be issued with, when the vehicle's
    /// gearbox was recorded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub licence_to_issue: Option<TransmissionType>,
}
