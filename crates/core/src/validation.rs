//! Write-time validation stage.
//!
//! Every create/update DTO runs through this stage before the repository
//! is called. The result is either success or a [`ValidationReport`]
//! listing typed [`Violation`]s, so the rules can be tested without a
//! database. Uniqueness is the one rule that stays storage-enforced: the
//! DB layer translates unique-index failures into [`Violation::Duplicate`].

use std::fmt;

use serde::Serialize;
use validator::{ValidationError, ValidationErrors};

/* --------------------------------------------------------------------------
Violation kinds
-------------------------------------------------------------------------- */

/// A single rule breach on a single field (or field group).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    /// A required field was omitted or empty.
    Required { field: String },

    /// A numeric field fell outside its inclusive bounds.
    OutOfRange {
        field: String,
        min: Option<f64>,
        max: Option<f64>,
        value: Option<f64>,
    },

    /// A string field exceeded its length cap (in characters). `actual`
    /// is unknown when storage rejected the write.
    TooLong {
        field: String,
        max: usize,
        actual: Option<usize>,
    },

    /// A value is not a member of a fixed enumeration.
    InvalidEnum {
        field: String,
        value: String,
        allowed: Vec<String>,
    },

    /// Any other malformed value (e.g. an email without `@`).
    Invalid { field: String, message: String },

    /// A uniqueness rule was broken by this write.
    Duplicate { fields: Vec<String> },
}

impl Violation {
    /// Human-readable message for this violation.
    pub fn message(&self) -> String {
        match self {
            Violation::Required { field } => format!("{field} is required"),
            Violation::OutOfRange {
                field,
                min,
                max,
                value,
            } => {
                let bounds = match (min, max) {
                    (Some(min), Some(max)) => format!("between {min} and {max}"),
                    (Some(min), None) => format!("at least {min}"),
                    (None, Some(max)) => format!("at most {max}"),
                    (None, None) => "within range".to_string(),
                };
                match value {
                    Some(v) => format!("{field} must be {bounds}, got {v}"),
                    None => format!("{field} must be {bounds}"),
                }
            }
            Violation::TooLong { field, max, actual } => match actual {
                Some(actual) => {
                    format!("{field} exceeds maximum length of {max} characters (got {actual})")
                }
                None => format!("{field} exceeds maximum length of {max} characters"),
            },
            Violation::InvalidEnum {
                field,
                value,
                allowed,
            } => format!(
                "Invalid {field} '{value}'. Must be one of: {}",
                allowed.join(", ")
            ),
            Violation::Invalid { field, message } => format!("{field}: {message}"),
            Violation::Duplicate { fields } => format!(
                "A record with the same {} already exists",
                fields.join(" and ")
            ),
        }
    }

    /// The field (or comma-joined field group) this violation refers to.
    pub fn field(&self) -> String {
        match self {
            Violation::Required { field }
            | Violation::OutOfRange { field, .. }
            | Violation::TooLong { field, .. }
            | Violation::InvalidEnum { field, .. }
            | Violation::Invalid { field, .. } => field.clone(),
            Violation::Duplicate { fields } => fields.join(","),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/* --------------------------------------------------------------------------
Report
-------------------------------------------------------------------------- */

/// The outcome of the validation stage when at least one rule failed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(violation: Violation) -> Self {
        Self {
            violations: vec![violation],
        }
    }

    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Record the violation from `result`, if any.
    pub fn check<T>(&mut self, result: Result<T, Violation>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(v) => {
                self.push(v);
                None
            }
        }
    }

    pub fn merge(&mut self, other: ValidationReport) {
        self.violations.extend(other.violations);
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// `Ok(())` when no violation was recorded.
    pub fn into_result(self) -> Result<(), ValidationReport> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.violations.iter().map(Violation::message).collect();
        f.write_str(&messages.join("; "))
    }
}

impl std::error::Error for ValidationReport {}

/* --------------------------------------------------------------------------
Conversion from `validator` derive output
-------------------------------------------------------------------------- */

impl From<ValidationErrors> for ValidationReport {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<(String, Vec<ValidationError>)> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| (field.to_string(), errs.clone()))
            .collect();
        // HashMap order is unstable; sort so responses are deterministic.
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        let mut report = ValidationReport::new();
        for (field, errs) in fields {
            for err in &errs {
                report.push(violation_from_error(&field, err));
            }
        }
        report
    }
}

/// Validate a DTO with its `validator` rules and convert the failure.
pub fn validate_fields<T: validator::Validate>(input: &T) -> Result<(), ValidationReport> {
    input.validate().map_err(ValidationReport::from)
}

fn param_f64(err: &ValidationError, key: &str) -> Option<f64> {
    err.params.get(key).and_then(serde_json::Value::as_f64)
}

fn violation_from_error(field: &str, err: &ValidationError) -> Violation {
    let field = field.to_string();
    match err.code.as_ref() {
        "required" => Violation::Required { field },
        "range" => Violation::OutOfRange {
            field,
            min: param_f64(err, "min"),
            max: param_f64(err, "max"),
            value: param_f64(err, "value"),
        },
        "length" => {
            let actual = err
                .params
                .get("value")
                .and_then(serde_json::Value::as_str)
                .map(|s| s.chars().count())
                .unwrap_or(0);
            match param_f64(err, "max") {
                Some(max) if actual as f64 > max => Violation::TooLong {
                    field,
                    max: max as usize,
                    actual: Some(actual),
                },
                // `length(min = 1)` is how DTOs spell "non-empty".
                _ => Violation::Required { field },
            }
        }
        code => Violation::Invalid {
            field,
            message: err
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("failed '{code}' check")),
        },
    }
}

/// Reject empty or whitespace-only strings.
pub fn require_non_blank(field: &str, value: &str) -> Result<(), Violation> {
    if value.trim().is_empty() {
        Err(Violation::Required {
            field: field.to_string(),
        })
    } else {
        Ok(())
    }
}
