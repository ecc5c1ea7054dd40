//! Examiner roles attached to authenticated requests.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised when a role string does not name a known examiner role.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown examiner role: {role}")]
pub struct UnknownRole {
    pub role: String,
}

/// The role granted to an examiner by the authorizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExaminerRole {
    /// Driving examiner.
    #[serde(rename = "DE")]
    De,
    /// Local driving test manager.
    #[serde(rename = "LDTM")]
    Ldtm,
}

impl ExaminerRole {
    /// The wire code the authorizer uses for this role.
    pub fn code(self) -> &'static str {
        match self {
            ExaminerRole::De => "DE",
            ExaminerRole::Ldtm => "LDTM",
        }
    }
}

impl fmt::Display for ExaminerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ExaminerRole {
    type Err = UnknownRole;

    fn from_str(role: &str) -> Result<Self, Self::Err> {
        match role {
            "DE" => Ok(ExaminerRole::De),
            "LDTM" => Ok(ExaminerRole::Ldtm),
            _ => Err(UnknownRole {
                role: role.to_string(),
            }),
        }
    }
}
