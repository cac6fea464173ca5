use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("scalar histogram for path '{path}' has no bounds; bounds are required whenever buckets are given")]
    BoundsMissing { path: String },

    #[error("array histogram has buckets but no bounds; bounds are required whenever buckets are given")]
    ArrayBoundsMissing,

    #[error("invalid object id '{0}': expected 24 hex characters")]
    ObjectIdInvalid(String),
}

impl Error {
    pub fn bounds_missing(path: impl Into<String>) -> Self {
        Self::BoundsMissing { path: path.into() }
    }
}
