//! Domain layer for the Mind's Eye studio backend.
//!
//! Holds the types and pure logic shared by the database and HTTP crates:
//! error taxonomy, typed system-config values, portfolio pagination math,
//! and contact-inquiry validation and rendering. Nothing here performs I/O.

pub mod error;
pub mod inquiry;
pub mod pagination;
pub mod system_config;
pub mod types;
