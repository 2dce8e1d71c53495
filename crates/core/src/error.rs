use crate::types::DbId;
use crate::validation::ValidationReport;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// One or more field-level violations found by the validation stage.
    #[error("Validation failed: {0}")]
    Rejected(ValidationReport),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

impl From<ValidationReport> for CoreError {
    fn from(report: ValidationReport) -> Self {
        CoreError::Rejected(report)
    }
}
