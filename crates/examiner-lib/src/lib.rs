//! Examiner domain library entry points.
//!
//! This crate exposes the pure business rules shared by the examiner Lambda
//! functions: test category and transmission vocabularies, the licence-type
//! rules around restriction code 78, the DL25 test type cross-reference,
//! application reference formatting, and the flat examiner-record projection
//! of a nested test result. Higher-level consumers (Lambda handlers) should
//! only depend on the functions exported here instead of reimplementing
//! behavior.

#![deny(warnings)]

pub mod application_reference;
pub mod category;
pub mod licence;
pub mod records;
pub mod role;
pub mod schema;
pub mod test_type;

pub use application_reference::format_application_reference;
pub use category::{trim_test_category_prefix, TestCategory, UnknownCategory};
pub use licence::{licence_to_issue, TransmissionType};
pub use records::{format_for_examiner_records, ExaminerRecord};
pub use role::ExaminerRole;
pub use schema::{
    ApplicationReference, Circuit, IndependentDriving, JournalData, PassCompletion,
    QuestionResult, SafetyAndBalanceQuestions, TestCentre, TestResult, TestSlotAttributes,
    VehicleDetails,
};
pub use test_type::determine_dl25_test_type;
