//! Record models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO, validated into a write-ready `New*` struct
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod client;
pub mod line_item;
pub mod project;
pub mod rating;
