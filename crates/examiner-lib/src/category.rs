//! Test category vocabulary.
//!
//! Mirrors the category codes of the external test-result schema. The wire
//! representation uses the DVSA category code strings (`"C+E"`, `"EUAM2"`,
//! etc.), so serialization goes through [`TestCategory::code`] rather than
//! the variant names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised when a category code string does not name a known test category.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown test category code: {code}")]
pub struct UnknownCategory {
    pub code: String,
}

/// A driving-test category, as carried in the `category` field of a test
/// result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TestCategory {
    Adi2,
    Adi3,
    B,
    Be,
    C,
    Ce,
    C1,
    C1e,
    Ccpc,
    Cm,
    Cem,
    C1m,
    C1em,
    D,
    De,
    D1,
    D1e,
    Dcpc,
    Dm,
    Dem,
    D1m,
    D1em,
    F,
    G,
    H,
    K,
    EuA1M1,
    EuA1M2,
    EuA2M1,
    EuA2M2,
    EuAM1,
    EuAM2,
    EuAmM1,
    EuAmM2,
    Sc,
}

impl TestCategory {
    /// Every known category, in schema order.
    pub const ALL: &'static [TestCategory] = &[
        TestCategory::Adi2,
        TestCategory::Adi3,
        TestCategory::B,
        TestCategory::Be,
        TestCategory::C,
        TestCategory::Ce,
        TestCategory::C1,
        TestCategory::C1e,
        TestCategory::Ccpc,
        TestCategory::Cm,
        TestCategory::Cem,
        TestCategory::C1m,
        TestCategory::C1em,
        TestCategory::D,
        TestCategory::De,
        TestCategory::D1,
        TestCategory::D1e,
        TestCategory::Dcpc,
        TestCategory::Dm,
        TestCategory::Dem,
        TestCategory::D1m,
        TestCategory::D1em,
        TestCategory::F,
        TestCategory::G,
        TestCategory::H,
        TestCategory::K,
        TestCategory::EuA1M1,
        TestCategory::EuA1M2,
        TestCategory::EuA2M1,
        TestCategory::EuA2M2,
        TestCategory::EuAM1,
        TestCategory::EuAM2,
        TestCategory::EuAmM1,
        TestCategory::EuAmM2,
        TestCategory::Sc,
    ];

    /// The schema wire code for this category.
    pub fn code(self) -> &'static str {
        match self {
            TestCategory::Adi2 => "ADI2",
            TestCategory::Adi3 => "ADI3",
            TestCategory::B => "B",
            TestCategory::Be => "B+E",
            TestCategory::C => "C",
            TestCategory::Ce => "C+E",
            TestCategory::C1 => "C1",
            TestCategory::C1e => "C1+E",
            TestCategory::Ccpc => "CCPC",
            TestCategory::Cm => "CM",
            TestCategory::Cem => "C+EM",
            TestCategory::C1m => "C1M",
            TestCategory::C1em => "C1+EM",
            TestCategory::D => "D",
            TestCategory::De => "D+E",
            TestCategory::D1 => "D1",
            TestCategory::D1e => "D1+E",
            TestCategory::Dcpc => "DCPC",
            TestCategory::Dm => "DM",
            TestCategory::Dem => "D+EM",
            TestCategory::D1m => "D1M",
            TestCategory::D1em => "D1+EM",
            TestCategory::F => "F",
            TestCategory::G => "G",
            TestCategory::H => "H",
            TestCategory::K => "K",
            TestCategory::EuA1M1 => "EUA1M1",
            TestCategory::EuA1M2 => "EUA1M2",
            TestCategory::EuA2M1 => "EUA2M1",
            TestCategory::EuA2M2 => "EUA2M2",
            TestCategory::EuAM1 => "EUAM1",
            TestCategory::EuAM2 => "EUAM2",
            TestCategory::EuAmM1 => "EUAMM1",
            TestCategory::EuAmM2 => "EUAMM2",
            TestCategory::Sc => "SC",
        }
    }

    /// Look up a category by its wire code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|category| category.code() == code)
    }
}

impl fmt::Display for TestCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for TestCategory {
    type Err = UnknownCategory;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Self::from_code(code).ok_or_else(|| UnknownCategory {
            code: code.to_string(),
        })
    }
}

impl TryFrom<String> for TestCategory {
    type Error = UnknownCategory;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        code.parse()
    }
}

impl From<TestCategory> for String {
    fn from(category: TestCategory) -> Self {
        category.code().to_string()
    }
}

/// Strip the literal `EU` prefix from a category code, leaving anything else
/// unchanged. The EU moped and motorcycle categories are reported to
/// downstream systems without the prefix.
pub fn trim_test_category_prefix(category: &str) -> &str {
    category.strip_prefix("EU").unwrap_or(category)
}
