//! The four fixed project types shared by projects and line items.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::validation::{ValidationReport, Violation};

/// Kind of engagement a project belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectType {
    Permanent,
    #[serde(rename = "Semi-Permanent")]
    SemiPermanent,
    Retail,
    Tradeshow,
}

impl ProjectType {
    pub const ALL: [ProjectType; 4] = [
        ProjectType::Permanent,
        ProjectType::SemiPermanent,
        ProjectType::Retail,
        ProjectType::Tradeshow,
    ];

    /// Stored/wire spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectType::Permanent => "Permanent",
            ProjectType::SemiPermanent => "Semi-Permanent",
            ProjectType::Retail => "Retail",
            ProjectType::Tradeshow => "Tradeshow",
        }
    }

    fn allowed() -> Vec<String> {
        Self::ALL.iter().map(|t| t.as_str().to_string()).collect()
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown project type '{0}'")]
pub struct UnknownProjectType(pub String);

impl FromStr for ProjectType {
    type Err = UnknownProjectType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownProjectType(s.to_string()))
    }
}

impl TryFrom<String> for ProjectType {
    type Error = UnknownProjectType;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Parse a single project type, reporting an enum violation against `field`.
pub fn validate_project_type(field: &str, value: &str) -> Result<ProjectType, Violation> {
    value
        .parse()
        .map_err(|UnknownProjectType(value)| Violation::InvalidEnum {
            field: field.to_string(),
            value,
            allowed: ProjectType::allowed(),
        })
}

/// Parse a list of project types. Every unknown entry is reported.
pub fn validate_project_types(
    field: &str,
    values: &[String],
) -> Result<Vec<ProjectType>, ValidationReport> {
    let mut report = ValidationReport::new();
    let parsed: Vec<ProjectType> = values
        .iter()
        .filter_map(|v| report.check(validate_project_type(field, v)))
        .collect();
    report.into_result().map(|()| parsed)
}
