//! Resolve and validate where the profile settings file lives.
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::error;

use crate::lib::{
    errors::ConfigError,
    paths::{is_nonempty_absolute, resolve_home_dir},
};

mod telemetry;

/// Prefix for environment overrides (`SETTINGS_PROFILE_DIR`, `SETTINGS_PROFILE_FILE_NAME`).
pub const ENV_PREFIX: &str = "SETTINGS_PROFILE";
/// Hidden folder under the user's home directory.
pub const DEFAULT_SETTINGS_FOLDER: &str = ".valid-identity-solutions";
pub const DEFAULT_FILE_NAME: &str = "settings-profile-demo.json";

/// Location of the settings file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreSettings {
    pub settings_dir: PathBuf,
    pub file_name: String,
}

#[derive(Debug, Default, Deserialize)]
struct RawStoreSettings {
    dir: Option<String>,
    file_name: Option<String>,
}

impl StoreSettings {
    /// Settings rooted at an explicit directory with the default file name.
    pub fn in_dir(settings_dir: impl Into<PathBuf>) -> Self {
        Self {
            settings_dir: settings_dir.into(),
            file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }

    /// Full path of the settings file.
    pub fn file_path(&self) -> PathBuf {
        self.settings_dir.join(&self.file_name)
    }

    /// Resolve in the order: CLI override → `SETTINGS_PROFILE_*` env → `$HOME` default.
    pub fn load(dir_override: Option<PathBuf>) -> Result<Self, ConfigError> {
        Self::load_from(dir_override, None, resolve_home_dir())
    }

    /// Resolve from explicit sources; `env` replaces the process environment when given.
    pub fn load_from(
        dir_override: Option<PathBuf>,
        env: Option<HashMap<String, String>>,
        home: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let from_env = env.is_some();
        let environment = config::Environment::with_prefix(ENV_PREFIX)
            .ignore_empty(true)
            .source(env);
        let raw: RawStoreSettings = config::Config::builder()
            .add_source(environment)
            .build()
            .and_then(|document| document.try_deserialize())
            .map_err(|err| {
                let error = ConfigError::from_load_error(err);
                error!(
                    target: "settings_profile::config",
                    reason = %error,
                    "Failed to read store settings"
                );
                error
            })?;

        let settings = Self::from_raw(raw, dir_override, home).map_err(|err| {
            error!(
                target: "settings_profile::config",
                reason = %err,
                "Failed to validate store settings"
            );
            err
        })?;

        telemetry::log_resolved(&settings, from_env);
        Ok(settings)
    }

    fn from_raw(
        raw: RawStoreSettings,
        dir_override: Option<PathBuf>,
        home: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let settings_dir = match dir_override.or_else(|| raw.dir.map(PathBuf::from)) {
            Some(dir) => dir,
            None => home
                .map(|home| home.join(DEFAULT_SETTINGS_FOLDER))
                .ok_or(ConfigError::MissingField {
                    field: "settings_dir",
                })?,
        };
        validate_settings_dir(&settings_dir)?;

        let file_name = raw
            .file_name
            .unwrap_or_else(|| DEFAULT_FILE_NAME.to_string());
        validate_file_name(&file_name)?;

        Ok(Self {
            settings_dir,
            file_name,
        })
    }
}

fn validate_settings_dir(dir: &Path) -> Result<(), ConfigError> {
    if is_nonempty_absolute(dir) {
        return Ok(());
    }

    Err(ConfigError::InvalidField {
        field: "settings_dir",
        message: format!("`{}` must be an absolute path", dir.display()),
    })
}

fn validate_file_name(name: &str) -> Result<(), ConfigError> {
    let message = if name.trim().is_empty() {
        "must not be blank"
    } else if name.contains(['/', '\\']) {
        "must be a bare file name without path separators"
    } else if !name.ends_with(".json") {
        "must end in `.json`"
    } else {
        return Ok(());
    };

    Err(ConfigError::InvalidField {
        field: "file_name",
        message: message.into(),
    })
}
