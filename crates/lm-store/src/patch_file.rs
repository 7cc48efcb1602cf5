//! Reading and writing [`PatchSet`] documents.

use std::fs;
use std::path::Path;

use tracing::info;

use lm_merge::PatchSet;

use crate::error::StoreResult;
use crate::format::FileFormat;

/// Write `patch` to `path` as TOML or JSON, by extension.
pub fn save_patch(path: &Path, patch: &PatchSet) -> StoreResult<()> {
    let text = match FileFormat::from_path(path)? {
        FileFormat::Toml => toml::to_string_pretty(patch)?,
        FileFormat::Json => serde_json::to_string_pretty(patch)?,
    };
    fs::write(path, text)?;
    info!(
        path = %path.display(),
        records = patch.len(),
        skipped = patch.skipped.len(),
        "patch written"
    );
    Ok(())
}

/// Read a patch previously written by [`save_patch`].
pub fn load_patch(path: &Path) -> StoreResult<PatchSet> {
    let format = FileFormat::from_path(path)?;
    let text = fs::read_to_string(path)?;
    Ok(match format {
        FileFormat::Toml => toml::from_str(&text)?,
        FileFormat::Json => serde_json::from_str(&text)?,
    })
}
