//! Project entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use venuebook_core::project_type::{validate_project_type, ProjectType};
use venuebook_core::types::{DbId, Timestamp};
use venuebook_core::validation::{require_non_blank, ValidationReport, Violation};

/// A row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    /// Stored as text; the check constraint keeps it within the four types.
    #[sqlx(try_from = "String")]
    pub project_type: ProjectType,
    /// Line item ids, resolved by lookup.
    pub line_items: Vec<DbId>,
    pub report_types: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a project.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateProject {
    #[serde(default)]
    pub name: String,
    pub project_type: Option<String>,
    #[serde(default)]
    pub line_items: Vec<DbId>,
    #[serde(default)]
    pub report_types: Vec<String>,
}

/// A project that passed validation and is ready to insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProject {
    pub name: String,
    pub project_type: ProjectType,
    pub line_items: Vec<DbId>,
    pub report_types: Vec<String>,
}

impl CreateProject {
    pub fn validated(self) -> Result<NewProject, ValidationReport> {
        let mut report = ValidationReport::new();
        report.check(require_non_blank("name", &self.name));
        let project_type = match self.project_type.as_deref() {
            Some(value) => report.check(validate_project_type("project_type", value)),
            None => {
                report.push(Violation::Required {
                    field: "project_type".into(),
                });
                None
            }
        };
        report.into_result()?;

        let project_type = project_type.ok_or_else(|| {
            ValidationReport::single(Violation::Required {
                field: "project_type".into(),
            })
        })?;
        Ok(NewProject {
            name: self.name,
            project_type,
            line_items: self.line_items,
            report_types: self.report_types,
        })
    }
}

/// DTO for updating a project. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProject {
    pub name: Option<String>,
    pub project_type: Option<String>,
    pub line_items: Option<Vec<DbId>>,
    pub report_types: Option<Vec<String>>,
}

impl UpdateProject {
    pub fn validated(self) -> Result<Self, ValidationReport> {
        let mut report = ValidationReport::new();
        if let Some(name) = &self.name {
            report.check(require_non_blank("name", name));
        }
        if let Some(value) = &self.project_type {
            report.check(validate_project_type("project_type", value));
        }
        report.into_result()?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn expo() -> CreateProject {
        CreateProject {
            name: "Spring Expo".into(),
            project_type: Some("Tradeshow".into()),
            line_items: vec![3, 4],
            report_types: vec!["weekly".into()],
        }
    }

    #[test]
    fn valid_project_parses_type() {
        let project = expo().validated().unwrap();
        assert_eq!(project.project_type, ProjectType::Tradeshow);
        assert_eq!(project.line_items, vec![3, 4]);
    }

    #[test]
    fn missing_type_is_required() {
        let report = CreateProject {
            project_type: None,
            ..expo()
        }
        .validated()
        .unwrap_err();
        assert_eq!(
            report.violations(),
            &[Violation::Required {
                field: "project_type".into()
            }]
        );
    }

    #[test]
    fn unknown_type_is_enum_violation() {
        let report = CreateProject {
            project_type: Some("Popup".into()),
            ..expo()
        }
        .validated()
        .unwrap_err();
        assert_matches!(&report.violations()[0], Violation::InvalidEnum { .. });
    }

    #[test]
    fn update_rejects_unknown_type() {
        let update = UpdateProject {
            project_type: Some("permanent".into()),
            ..Default::default()
        };
        assert!(update.validated().is_err());
    }
}
