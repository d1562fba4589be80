//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod category_repo;
pub mod image_repo;
pub mod system_config_repo;

pub use category_repo::CategoryRepo;
pub use image_repo::ImageRepo;
pub use system_config_repo::SystemConfigRepo;
