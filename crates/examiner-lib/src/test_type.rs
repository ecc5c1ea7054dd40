//! DL25 test type cross-reference.

use crate::category::TestCategory;

/// Map a test category code to its DL25 test type, as agreed in the TARS
/// `TEST_CATEGORY_CROSS_REFERENCE` table.
///
/// Returns `None` when the code does not name a known test category.
pub fn determine_dl25_test_type(category: &str) -> Option<u8> {
    let category = TestCategory::from_code(category)?;

    let test_type = match category {
        TestCategory::Adi2 => 10,
        TestCategory::Adi3 => 11,
        TestCategory::B | TestCategory::Be => 2,
        TestCategory::C | TestCategory::Ce | TestCategory::C1 | TestCategory::C1e => 3,
        TestCategory::D | TestCategory::De | TestCategory::D1 | TestCategory::D1e => 4,
        TestCategory::F => 5,
        TestCategory::G => 6,
        TestCategory::H => 7,
        TestCategory::K => 8,
        TestCategory::EuA1M1 | TestCategory::EuA2M1 | TestCategory::EuAM1 => 16,
        TestCategory::EuA1M2 | TestCategory::EuA2M2 | TestCategory::EuAM2 => 1,
        TestCategory::EuAmM1 => 17,
        TestCategory::EuAmM2 => 9,
        TestCategory::Ccpc | TestCategory::Dcpc => 44,
        TestCategory::Cm | TestCategory::Cem | TestCategory::C1m | TestCategory::C1em => 18,
        TestCategory::Dm | TestCategory::Dem | TestCategory::D1m | TestCategory::D1em => 19,
        TestCategory::Sc => 12,
    };

    Some(test_type)
}
