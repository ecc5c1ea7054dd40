//! Licence-type rules around restriction code 78.
//!
//! Code 78 restricts a licence to automatic transmission. For the vocational
//! lorry and bus categories, a test passed in an automatic vehicle without
//! code 78 recorded still earns a manual licence.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::category::TestCategory;

/// Vehicle transmission, as recorded on the test and printed on the licence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransmissionType {
    Manual,
    Automatic,
}

impl fmt::Display for TransmissionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransmissionType::Manual => f.write_str("Manual"),
            TransmissionType::Automatic => f.write_str("Automatic"),
        }
    }
}

/// Determine the transmission type to issue the licence with.
///
/// When `code78_present` was not captured the recorded transmission is
/// returned unchanged. For the vocational categories, an automatic pass with
/// code 78 explicitly absent is issued as a manual licence; every other
/// combination keeps the recorded transmission.
pub fn licence_to_issue(
    category: TestCategory,
    vehicle_transmission: TransmissionType,
    code78_present: Option<bool>,
) -> TransmissionType {
    let Some(code78) = code78_present else {
        return vehicle_transmission;
    };

    if is_vocational(category) && vehicle_transmission == TransmissionType::Automatic && !code78 {
        return TransmissionType::Manual;
    }

    vehicle_transmission
}

fn is_vocational(category: TestCategory) -> bool {
    matches!(
        category,
        TestCategory::C
            | TestCategory::Ce
            | TestCategory::C1
            | TestCategory::C1e
            | TestCategory::D
            | TestCategory::De
            | TestCategory::D1
            | TestCategory::D1e
    )
}
