use std::path::Path;

use crate::error::{StoreError, StoreResult};

/// On-disk document format, chosen by file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileFormat {
    Toml,
    Json,
}

impl FileFormat {
    /// Detect the format of `path` from its extension (case-insensitive).
    pub fn from_path(path: &Path) -> StoreResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            _ => Err(StoreError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}
