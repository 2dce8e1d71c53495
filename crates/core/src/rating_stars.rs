//! Star-row rendering for a numeric rating.
//!
//! A rating always renders as exactly [`STAR_COUNT`] glyphs. The integer
//! part gives the number of filled stars. When there is a fractional
//! remainder the next star takes the half-star branch, which currently
//! renders with the same filled style as a full star, so `4.5` shows five
//! filled stars.

use std::fmt;

use serde::Serialize;

pub const STAR_COUNT: usize = 5;

pub const FILLED_GLYPH: char = '★';
pub const UNFILLED_GLYPH: char = '☆';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Star {
    Filled,
    Unfilled,
}

impl Star {
    pub fn glyph(self) -> char {
        match self {
            Star::Filled => FILLED_GLYPH,
            Star::Unfilled => UNFILLED_GLYPH,
        }
    }
}

/// A rendered row of five stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StarRow([Star; STAR_COUNT]);

impl StarRow {
    pub fn stars(&self) -> &[Star; STAR_COUNT] {
        &self.0
    }

    pub fn filled_count(&self) -> usize {
        self.0.iter().filter(|s| **s == Star::Filled).count()
    }

    pub fn unfilled_count(&self) -> usize {
        STAR_COUNT - self.filled_count()
    }
}

impl fmt::Display for StarRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for star in self.0 {
            write!(f, "{}", star.glyph())?;
        }
        Ok(())
    }
}

/// Render `rating` (expected 0–5) as a row of stars.
///
/// Non-finite input renders as 0 and values are clamped into `0..=5`.
pub fn render_stars(rating: f64) -> StarRow {
    let rating = if rating.is_finite() {
        rating.clamp(0.0, STAR_COUNT as f64)
    } else {
        0.0
    };
    let full = rating.floor() as usize;
    let has_half = rating.fract() > 0.0;

    let mut row = [Star::Unfilled; STAR_COUNT];
    for (i, star) in row.iter_mut().enumerate() {
        *star = if i < full {
            Star::Filled
        } else if i == full && has_half {
            // Half-star branch: same style as a full star.
            Star::Filled
        } else {
            Star::Unfilled
        };
    }
    StarRow(row)
}
