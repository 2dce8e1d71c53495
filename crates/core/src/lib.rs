//! Domain logic for the venuebook backend.
//!
//! Nothing in this crate touches the database. The DB and API layers call
//! into it for validation rules, project-type parsing, rating aggregation
//! and the small amount of presentation logic the dashboard needs.

pub mod error;
pub mod greeting;
pub mod navigation;
pub mod project_type;
pub mod rating;
pub mod rating_stars;
pub mod types;
pub mod validation;
