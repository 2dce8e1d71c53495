//! Request handlers.
//!
//! Each submodule provides async handler functions (create, list, get_by_id,
//! update, delete) for a single resource. Inputs pass through the validation
//! stage before the corresponding repository in `venuebook_db` is called.

pub mod client;
pub mod line_item;
pub mod overview;
pub mod project;
pub mod rating;
