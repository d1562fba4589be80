//! Row models and DTOs.
//!
//! Each submodule contains:
//! - `FromRow` + `Serialize` structs matching the database rows
//! - Trimmed projections returned by the content endpoints
//! - `Deserialize` create DTOs used to seed content

pub mod category;
pub mod image;
pub mod system_config;
