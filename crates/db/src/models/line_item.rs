//! Line item catalog model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;
use venuebook_core::project_type::validate_project_types;
use venuebook_core::types::{DbId, Timestamp};
use venuebook_core::validation::{
    require_non_blank, validate_fields, ValidationReport, Violation,
};

/// A row from the `line_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LineItem {
    pub id: DbId,
    pub name: String,
    /// Project types this item may be billed against.
    pub applicable_to: Vec<String>,
    pub cost: f64,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for adding a catalog entry.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateLineItem {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub applicable_to: Vec<String>,
    #[validate(required, range(min = 0.0))]
    pub cost: Option<f64>,
    pub description: Option<String>,
}

/// A line item that passed validation and is ready to insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLineItem {
    pub name: String,
    pub applicable_to: Vec<String>,
    pub cost: f64,
    pub description: Option<String>,
}

impl CreateLineItem {
    pub fn validated(self) -> Result<NewLineItem, ValidationReport> {
        let mut report = ValidationReport::new();
        report.check(require_non_blank("name", &self.name));
        if let Err(fields) = validate_fields(&self) {
            report.merge(fields);
        }
        // Normalize to the canonical spelling of each type.
        let applicable_to = match validate_project_types("applicable_to", &self.applicable_to) {
            Ok(types) => types.iter().map(|t| t.as_str().to_string()).collect(),
            Err(enum_report) => {
                report.merge(enum_report);
                Vec::new()
            }
        };
        report.into_result()?;

        let cost = self.cost.ok_or_else(|| {
            ValidationReport::single(Violation::Required {
                field: "cost".into(),
            })
        })?;
        Ok(NewLineItem {
            name: self.name,
            applicable_to,
            cost,
            description: self.description,
        })
    }
}

/// DTO for updating a line item. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateLineItem {
    pub name: Option<String>,
    pub applicable_to: Option<Vec<String>>,
    #[validate(range(min = 0.0))]
    pub cost: Option<f64>,
    pub description: Option<String>,
}

impl UpdateLineItem {
    pub fn validated(self) -> Result<Self, ValidationReport> {
        let mut report = ValidationReport::new();
        if let Some(name) = &self.name {
            report.check(require_non_blank("name", name));
        }
        if let Err(fields) = validate_fields(&self) {
            report.merge(fields);
        }
        if let Some(types) = &self.applicable_to {
            if let Err(enum_report) = validate_project_types("applicable_to", types) {
                report.merge(enum_report);
            }
        }
        report.into_result()?;
        Ok(self)
    }
}
