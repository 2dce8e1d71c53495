//! Client entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;
use venuebook_core::types::{DbId, Timestamp};
use venuebook_core::validation::{require_non_blank, validate_fields, ValidationReport};

/// A row from the `clients` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Client {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    /// Sell-rate ids negotiated for this client.
    pub custom_rates: Vec<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for registering a client.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateClient {
    #[serde(default)]
    pub name: String,
    #[validate(email)]
    #[serde(default)]
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    #[serde(default)]
    pub custom_rates: Vec<DbId>,
}

impl CreateClient {
    pub fn validated(self) -> Result<Self, ValidationReport> {
        let mut report = ValidationReport::new();
        report.check(require_non_blank("name", &self.name));
        // Format is only worth checking once the email is present at all.
        if report.check(require_non_blank("email", &self.email)).is_some() {
            if let Err(fields) = validate_fields(&self) {
                report.merge(fields);
            }
        }
        report.into_result()?;
        Ok(self)
    }
}

/// DTO for updating a client. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateClient {
    pub name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub custom_rates: Option<Vec<DbId>>,
}

impl UpdateClient {
    pub fn validated(self) -> Result<Self, ValidationReport> {
        let mut report = ValidationReport::new();
        if let Some(name) = &self.name {
            report.check(require_non_blank("name", name));
        }
        if let Err(fields) = validate_fields(&self) {
            report.merge(fields);
        }
        report.into_result()?;
        Ok(self)
    }
}
