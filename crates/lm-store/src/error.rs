use std::path::PathBuf;

use lm_types::SourceId;

/// Errors from reading load orders and writing patches.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// I/O error from the filesystem.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid TOML for the expected shape.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// The value could not be written as TOML.
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// JSON parse or write failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The file extension names neither TOML nor JSON.
    #[error("unsupported file format: {}", .path.display())]
    UnsupportedFormat { path: PathBuf },

    /// A source appears more than once in the load order.
    #[error("duplicate source in load order: {0}")]
    DuplicateSource(SourceId),

    /// A source depends on a master that is not loaded before it.
    #[error("{source_id} requires master {master}, which is not loaded earlier")]
    MasterNotLoaded { source_id: SourceId, master: SourceId },
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
