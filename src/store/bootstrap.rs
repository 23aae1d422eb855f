//! First-run creation and structural repair of the settings file.
use std::path::Path;

use tracing::{error, info, warn};

use crate::{
    lib::{errors::ProfileError, fs as settings_fs},
    profile::{codec, Profile, ProfileSet},
};

/// Attempts made to obtain a structurally valid settings file.
pub const MAX_REPAIR_ATTEMPTS: usize = 3;

/// Guarantee a settings file shaped like a JSON array exists and return its contents.
///
/// A missing file is created holding the default profile. A file that is not
/// array-shaped is copied to a uniquely named backup, removed and recreated.
pub async fn ensure_settings_file(path: &Path, settings_dir: &Path) -> Result<String, ProfileError> {
    let default_document = default_document()?;
    ensure_settings_file_with(path, settings_dir, &default_document).await
}

pub(crate) fn default_document() -> Result<String, ProfileError> {
    let defaults = ProfileSet::from_profiles([Profile::bootstrap_default()]);
    codec::encode(&defaults).map_err(|source| ProfileError::Encode { source })
}

pub(crate) async fn ensure_settings_file_with(
    path: &Path,
    settings_dir: &Path,
    default_document: &str,
) -> Result<String, ProfileError> {
    for attempt in 1..=MAX_REPAIR_ATTEMPTS {
        if !settings_fs::exists(path).await? {
            settings_fs::write_atomic(path, default_document.as_bytes()).await?;
            info!(
                target: "settings_profile::store",
                path = %path.display(),
                "Created settings file with default profile"
            );
        }

        let contents = settings_fs::read_text(path).await?;
        if settings_fs::has_array_shape(&contents) {
            return Ok(contents);
        }

        let backup = settings_fs::back_up_and_remove(path).await?;
        warn!(
            target: "settings_profile::store",
            path = %path.display(),
            backup = %backup.display(),
            attempt,
            "Settings file is not a JSON array; backed up and recreating"
        );
    }

    error!(
        target: "settings_profile::store",
        settings_dir = %settings_dir.display(),
        attempts = MAX_REPAIR_ATTEMPTS,
        "Unable to repair settings file"
    );
    Err(ProfileError::Integrity {
        settings_dir: settings_dir.to_path_buf(),
    })
}
