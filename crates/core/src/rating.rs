//! Venue rating rules and per-venue aggregation.

use serde::Serialize;

use crate::rating_stars::{render_stars, StarRow};
use crate::types::DbId;

/// Lowest accepted score for either rating dimension.
pub const MIN_SCORE: i16 = 1;

/// Highest accepted score for either rating dimension.
pub const MAX_SCORE: i16 = 5;

/// Maximum review length in characters.
pub const MAX_REVIEW_LENGTH: usize = 500;

/// Aggregate view of all ratings for one venue.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingSummary {
    pub venue_id: DbId,
    pub rating_count: i64,
    pub average_service: Option<f64>,
    pub average_location: Option<f64>,
    /// Mean of the two per-dimension averages.
    pub overall: Option<f64>,
    pub stars: StarRow,
}

impl RatingSummary {
    /// Build a summary from storage-computed averages.
    ///
    /// A venue without ratings has no averages and renders five unfilled stars.
    pub fn from_averages(
        venue_id: DbId,
        rating_count: i64,
        average_service: Option<f64>,
        average_location: Option<f64>,
    ) -> Self {
        let overall = match (average_service, average_location) {
            (Some(s), Some(l)) => Some((s + l) / 2.0),
            _ => None,
        };
        Self {
            venue_id,
            rating_count,
            average_service,
            average_location,
            overall,
            stars: render_stars(overall.unwrap_or(0.0)),
        }
    }
}
