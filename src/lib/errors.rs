use std::{io, path::PathBuf};

use config::ConfigError as ConfigLoaderError;
use thiserror::Error;

/// Errors that can occur while resolving store settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to collect settings from the environment.
    #[error("Failed to read store settings")]
    Load {
        #[source]
        source: ConfigLoaderError,
    },
    /// Required setting is missing.
    #[error("Store settings are missing `{field}`")]
    MissingField { field: &'static str },
    /// Setting failed validation.
    #[error("Store settings have invalid `{field}`: {message}")]
    InvalidField {
        field: &'static str,
        message: String,
    },
}

impl ConfigError {
    /// Helper to wrap `config::ConfigError` as a load failure.
    pub fn from_load_error(source: ConfigLoaderError) -> Self {
        Self::Load { source }
    }
}

/// Failures surfaced by the profile store.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// The profile failed validation; carries the first violation only.
    #[error("{message}")]
    Validation {
        field: &'static str,
        message: &'static str,
    },
    #[error("a profile with the name '{name}' could not be found.")]
    NotFound { name: String },
    /// The settings file could not be repaired. Not recoverable in-process.
    #[error(
        "unable to manage profile settings file, check settings in '{}'",
        .settings_dir.display()
    )]
    Integrity { settings_dir: PathBuf },
    #[error("I/O failed for settings file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to parse settings file {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },
    #[error("Failed to encode profiles")]
    Encode {
        #[source]
        source: serde_json::Error,
    },
}

impl ProfileError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True for failures the process cannot continue past.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ProfileError::Integrity { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_displays_message_only() {
        let error = ProfileError::Validation {
            field: "clientId",
            message: "client id may not be empty",
        };

        assert_eq!(error.to_string(), "client id may not be empty");
        assert!(!error.is_fatal());
    }

    #[test]
    fn integrity_error_names_settings_directory() {
        let error = ProfileError::Integrity {
            settings_dir: PathBuf::from("/home/example/.valid-identity-solutions"),
        };

        assert!(error.is_fatal());
        assert!(
            error
                .to_string()
                .contains("/home/example/.valid-identity-solutions"),
            "message: {error}"
        );
    }

    #[test]
    fn not_found_error_quotes_requested_name() {
        let error = ProfileError::NotFound {
            name: "Staging".into(),
        };

        assert_eq!(
            error.to_string(),
            "a profile with the name 'Staging' could not be found."
        );
    }
}
