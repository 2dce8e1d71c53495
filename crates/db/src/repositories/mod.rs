//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod client_repo;
pub mod line_item_repo;
pub mod project_repo;
pub mod rating_repo;

pub use client_repo::ClientRepo;
pub use line_item_repo::LineItemRepo;
pub use project_repo::ProjectRepo;
pub use rating_repo::RatingRepo;
