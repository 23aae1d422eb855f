//! File helpers for the profile settings file.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tokio::{fs, io::AsyncWriteExt};
use uuid::Uuid;

use crate::lib::errors::ProfileError;

/// Extension used for settings and backup files.
const JSON_EXTENSION: &str = "json";
/// Byte-order mark some editors write at the start of UTF-8 files.
const BOM: char = '\u{feff}';

/// Drop a leading byte-order mark, if any.
pub fn strip_bom(contents: &str) -> &str {
    contents.strip_prefix(BOM).unwrap_or(contents)
}

/// Returns true when the trimmed contents look like a top-level JSON array.
///
/// Only the first and last non-whitespace characters are inspected.
pub fn has_array_shape(contents: &str) -> bool {
    let trimmed = strip_bom(contents).trim();
    trimmed.starts_with('[') && trimmed.ends_with(']')
}

/// Create the settings directory (and parents) if it does not exist.
pub async fn ensure_dir(dir: &Path) -> Result<(), ProfileError> {
    fs::create_dir_all(dir)
        .await
        .map_err(|source| ProfileError::io(dir, source))
}

pub async fn exists(path: &Path) -> Result<bool, ProfileError> {
    fs::try_exists(path)
        .await
        .map_err(|source| ProfileError::io(path, source))
}

/// Return the last-modified time of `path`, or `None` if it cannot be read.
pub async fn modified_at(path: &Path) -> Option<DateTime<Utc>> {
    let metadata = fs::metadata(path).await.ok()?;
    metadata.modified().ok().map(DateTime::<Utc>::from)
}

/// Read the whole file as text without a leading byte-order mark.
///
/// Invalid UTF-8 is replaced with U+FFFD so corrupt files still reach the shape check.
pub async fn read_text(path: &Path) -> Result<String, ProfileError> {
    let bytes = fs::read(path)
        .await
        .map_err(|source| ProfileError::io(path, source))?;
    Ok(strip_bom(&String::from_utf8_lossy(&bytes)).to_string())
}

/// Replace `path` with `bytes` by writing a sibling temp file and renaming it over the target.
///
/// A crash mid-write leaves either the previous file or the new one, never a truncated file.
pub async fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), ProfileError> {
    let tmp = temp_path_for(path);
    if let Err(source) = write_synced(&tmp, bytes).await {
        let _ = fs::remove_file(&tmp).await;
        return Err(ProfileError::io(&tmp, source));
    }

    if let Err(source) = fs::rename(&tmp, path).await {
        let _ = fs::remove_file(&tmp).await;
        return Err(ProfileError::io(path, source));
    }
    Ok(())
}

async fn write_synced(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(path).await?;
    file.write_all(bytes).await?;
    file.sync_all().await
}

/// Copy a corrupt settings file byte for byte to `<stem>_<uuid>.json` beside it,
/// then delete the original. Returns the backup path.
pub async fn back_up_and_remove(path: &Path) -> Result<PathBuf, ProfileError> {
    let backup = backup_path_for(path);
    fs::copy(path, &backup)
        .await
        .map_err(|source| ProfileError::io(&backup, source))?;
    fs::remove_file(path)
        .await
        .map_err(|source| ProfileError::io(path, source))?;
    Ok(backup)
}

/// Build a unique backup path in the same directory as `path`.
pub fn backup_path_for(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "settings".to_string());
    let name = format!("{stem}_{}.{JSON_EXTENSION}", Uuid::new_v4().simple());
    path.with_file_name(name)
}

fn temp_path_for(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "settings".to_string());
    path.with_file_name(format!(".{name}.tmp-{}", std::process::id()))
}
