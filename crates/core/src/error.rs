use std::path::PathBuf;

/// Domain errors surfaced to consumers of a loaded [`RecordStore`].
///
/// [`RecordStore`]: crate::store::RecordStore
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Fatal errors raised while loading the dataset at startup.
///
/// None of these are recoverable at runtime: a view whose data failed to
/// load cannot be rendered.
#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed dataset {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Duplicate {entity} id '{id}'")]
    DuplicateId { entity: &'static str, id: String },

    #[error("Invalid {entity} record '{id}': {reason}")]
    InvalidRecord {
        entity: &'static str,
        id: String,
        reason: String,
    },
}
