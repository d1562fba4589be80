#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A configured resource is absent or points at a row that no longer exists.
    #[error("{0}")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    /// A stored value could not be interpreted (e.g. unparseable JSON).
    #[error("Bad stored data: {0}")]
    BadData(String),
}
