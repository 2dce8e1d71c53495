//! Venue rating entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;
use venuebook_core::rating::{MAX_REVIEW_LENGTH, MAX_SCORE, MIN_SCORE};
use venuebook_core::types::{DbId, Timestamp};
use venuebook_core::validation::{validate_fields, ValidationReport, Violation};

/// A row from the `ratings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Rating {
    pub id: DbId,
    pub service_rating: i16,
    pub location_rating: i16,
    pub review: Option<String>,
    pub user_id: DbId,
    pub venue_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// `validator` compares lengths as `u64`.
const REVIEW_LENGTH_CAP: u64 = MAX_REVIEW_LENGTH as u64;

/// DTO for submitting a rating.
///
/// Scores are optional on the wire so an omitted score surfaces as a
/// `Required` violation instead of a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateRating {
    #[validate(required, range(min = MIN_SCORE, max = MAX_SCORE))]
    pub service_rating: Option<i16>,
    #[validate(required, range(min = MIN_SCORE, max = MAX_SCORE))]
    pub location_rating: Option<i16>,
    #[validate(length(max = REVIEW_LENGTH_CAP))]
    pub review: Option<String>,
    #[validate(required)]
    pub user_id: Option<DbId>,
    #[validate(required)]
    pub venue_id: Option<DbId>,
}

/// A rating that passed validation and is ready to insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRating {
    pub service_rating: i16,
    pub location_rating: i16,
    pub review: Option<String>,
    pub user_id: DbId,
    pub venue_id: DbId,
}

impl CreateRating {
    /// Run the validation stage, producing a write-ready record.
    pub fn validated(self) -> Result<NewRating, ValidationReport> {
        validate_fields(&self)?;
        match (
            self.service_rating,
            self.location_rating,
            self.user_id,
            self.venue_id,
        ) {
            (Some(service_rating), Some(location_rating), Some(user_id), Some(venue_id)) => {
                Ok(NewRating {
                    service_rating,
                    location_rating,
                    review: self.review,
                    user_id,
                    venue_id,
                })
            }
            // `required` above already rejected any `None`.
            _ => Err(ValidationReport::single(Violation::Invalid {
                field: "rating".into(),
                message: "incomplete rating".into(),
            })),
        }
    }
}

/// DTO for updating a rating. `user_id` and `venue_id` are immutable.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateRating {
    #[validate(range(min = MIN_SCORE, max = MAX_SCORE))]
    pub service_rating: Option<i16>,
    #[validate(range(min = MIN_SCORE, max = MAX_SCORE))]
    pub location_rating: Option<i16>,
    #[validate(length(max = REVIEW_LENGTH_CAP))]
    pub review: Option<String>,
}

impl UpdateRating {
    pub fn validated(self) -> Result<Self, ValidationReport> {
        validate_fields(&self)?;
        Ok(self)
    }
}

/// Optional filters for listing ratings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RatingFilter {
    pub user_id: Option<DbId>,
    pub venue_id: Option<DbId>,
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn input(service: i16, location: i16) -> CreateRating {
        CreateRating {
            service_rating: Some(service),
            location_rating: Some(location),
            review: None,
            user_id: Some(1),
            venue_id: Some(2),
        }
    }

    #[test]
    fn every_score_pair_in_range_is_accepted() {
        for s1 in MIN_SCORE..=MAX_SCORE {
            for s2 in MIN_SCORE..=MAX_SCORE {
                let rating = input(s1, s2).validated().unwrap();
                assert_eq!((rating.service_rating, rating.location_rating), (s1, s2));
            }
        }
    }

    #[test]
    fn scores_just_outside_range_are_rejected() {
        for bad in [MIN_SCORE - 1, MAX_SCORE + 1] {
            let report = input(bad, 3).validated().unwrap_err();
            assert_matches!(
                &report.violations()[0],
                Violation::OutOfRange { field, .. } if field == "service_rating"
            );

            let report = input(3, bad).validated().unwrap_err();
            assert_matches!(
                &report.violations()[0],
                Violation::OutOfRange { field, .. } if field == "location_rating"
            );
        }
    }

    #[test]
    fn missing_scores_are_required() {
        let report = CreateRating {
            service_rating: None,
            location_rating: None,
            ..input(3, 3)
        }
        .validated()
        .unwrap_err();
        assert_eq!(
            report.violations(),
            &[
                Violation::Required {
                    field: "location_rating".into()
                },
                Violation::Required {
                    field: "service_rating".into()
                },
            ]
        );
    }

    #[test]
    fn review_length_cap() {
        let ok = CreateRating {
            review: Some("a".repeat(MAX_REVIEW_LENGTH)),
            ..input(4, 4)
        };
        assert!(ok.validated().is_ok());

        let too_long = CreateRating {
            review: Some("a".repeat(MAX_REVIEW_LENGTH + 1)),
            ..input(4, 4)
        };
        let report = too_long.validated().unwrap_err();
        assert_eq!(
            report.violations(),
            &[Violation::TooLong {
                field: "review".into(),
                max: MAX_REVIEW_LENGTH,
                actual: Some(MAX_REVIEW_LENGTH + 1)
            }]
        );
    }

    #[test]
    fn review_length_counts_characters_not_bytes() {
        let rating = CreateRating {
            review: Some("é".repeat(MAX_REVIEW_LENGTH)),
            ..input(4, 4)
        };
        assert!(rating.validated().is_ok());
    }

    #[test]
    fn update_checks_provided_fields_only() {
        assert!(UpdateRating::default().validated().is_ok());
        let bad = UpdateRating {
            location_rating: Some(0),
            ..Default::default()
        };
        assert!(bad.validated().is_err());
    }
}
