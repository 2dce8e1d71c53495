//! Translation of storage-layer constraint failures into typed violations.
//!
//! Uniqueness is never pre-checked in application code: the unique index
//! is the only thing that can decide a race between two concurrent writes.
//! Check constraints mirror the validation stage and only fire if a write
//! bypasses it.

use venuebook_core::rating::{MAX_REVIEW_LENGTH, MAX_SCORE, MIN_SCORE};
use venuebook_core::validation::Violation;

/// PostgreSQL `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

/// PostgreSQL `check_violation`.
const CHECK_VIOLATION: &str = "23514";

/// Map a sqlx error to the violation it represents, if it is a known
/// constraint failure. Returns `None` for every other error.
pub fn violation_from_db_error(err: &sqlx::Error) -> Option<Violation> {
    let sqlx::Error::Database(db_err) = err else {
        return None;
    };
    let constraint = db_err.constraint()?;
    match db_err.code().as_deref() {
        Some(UNIQUE_VIOLATION) => Some(unique_violation(constraint)),
        Some(CHECK_VIOLATION) => check_violation(constraint),
        _ => None,
    }
}

fn unique_violation(constraint: &str) -> Violation {
    let fields: Vec<String> = match constraint {
        "uq_ratings_user_venue" => vec!["user_id".into(), "venue_id".into()],
        "uq_clients_email" => vec!["email".into()],
        other => vec![other.to_string()],
    };
    Violation::Duplicate { fields }
}

fn score_out_of_range(field: &str) -> Violation {
    Violation::OutOfRange {
        field: field.to_string(),
        min: Some(f64::from(MIN_SCORE)),
        max: Some(f64::from(MAX_SCORE)),
        value: None,
    }
}

fn check_violation(constraint: &str) -> Option<Violation> {
    let violation = match constraint {
        "ck_ratings_service_rating" => score_out_of_range("service_rating"),
        "ck_ratings_location_rating" => score_out_of_range("location_rating"),
        "ck_ratings_review_length" => Violation::TooLong {
            field: "review".into(),
            max: MAX_REVIEW_LENGTH,
            actual: None,
        },
        "ck_clients_name_not_blank" | "ck_line_items_name_not_blank" | "ck_projects_name_not_blank" => {
            Violation::Required {
                field: "name".into(),
            }
        }
        "ck_clients_email_not_blank" => Violation::Required {
            field: "email".into(),
        },
        "ck_projects_project_type" => Violation::Invalid {
            field: "project_type".into(),
            message: "not a known project type".into(),
        },
        "ck_line_items_applicable_to" => Violation::Invalid {
            field: "applicable_to".into(),
            message: "contains an unknown project type".into(),
        },
        "ck_line_items_cost" => Violation::OutOfRange {
            field: "cost".into(),
            min: Some(0.0),
            max: None,
            value: None,
        },
        _ => return None,
    };
    Some(violation)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn rating_pair_maps_to_both_fields() {
        assert_eq!(
            unique_violation("uq_ratings_user_venue"),
            Violation::Duplicate {
                fields: vec!["user_id".into(), "venue_id".into()]
            }
        );
    }

    #[test]
    fn unknown_unique_keeps_constraint_name() {
        assert_eq!(
            unique_violation("uq_something_else"),
            Violation::Duplicate {
                fields: vec!["uq_something_else".into()]
            }
        );
    }

    #[test]
    fn score_checks_map_to_out_of_range() {
        assert_matches!(
            check_violation("ck_ratings_service_rating"),
            Some(Violation::OutOfRange { ref field, .. }) if field == "service_rating"
        );
        assert!(check_violation("ck_unknown").is_none());
    }

    #[test]
    fn review_length_check_matches_validation_kind() {
        assert_eq!(
            check_violation("ck_ratings_review_length"),
            Some(Violation::TooLong {
                field: "review".into(),
                max: MAX_REVIEW_LENGTH,
                actual: None,
            })
        );
    }

    #[test]
    fn non_database_errors_are_ignored() {
        assert!(violation_from_db_error(&sqlx::Error::RowNotFound).is_none());
    }
}
