//! Process exit codes and the error carrier returned by CLI commands.
use std::process::ExitCode;

use anyhow::Error;
use clap::error::ErrorKind;

use crate::lib::errors::ProfileError;

/// Exit codes reported by the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
    Normal = 0,
    GeneralError = 1,
    NoConfiguredProfiles = 2,
    NoProfileByName = 3,
    InvalidParameter = 4,
}

impl ExitStatus {
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub fn for_profile_error(error: &ProfileError) -> Self {
        match error {
            ProfileError::NotFound { .. } => ExitStatus::NoProfileByName,
            ProfileError::Validation { .. } => ExitStatus::InvalidParameter,
            _ => ExitStatus::GeneralError,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}

/// Bundles a user-facing message with the exit status it maps to.
#[derive(Debug)]
pub struct CliExit {
    message: String,
    status: ExitStatus,
    fatal: bool,
}

impl CliExit {
    pub fn new(status: ExitStatus, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status,
            fatal: false,
        }
    }

    /// Classify by the underlying `ProfileError`, if any; otherwise a general error.
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        match err.downcast_ref::<ProfileError>() {
            Some(profile_error) => Self {
                message: format!("{err:#}"),
                status: ExitStatus::for_profile_error(profile_error),
                fatal: profile_error.is_fatal(),
            },
            None => Self::new(ExitStatus::GeneralError, format!("{err:#}")),
        }
    }

    /// Help and version output exit normally; any other parse failure is an invalid parameter.
    pub fn from_clap(err: clap::Error) -> Self {
        let status = match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitStatus::Normal,
            _ => ExitStatus::InvalidParameter,
        };
        Self::new(status, err.render().to_string())
    }

    /// Override the status while keeping the message.
    pub fn with_status(mut self, status: ExitStatus) -> Self {
        self.status = status;
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status(&self) -> ExitStatus {
        self.status
    }

    /// True when the process cannot keep running (e.g. the settings file is unrecoverable).
    pub fn is_fatal(&self) -> bool {
        self.fatal
    }

    pub fn report(self) -> ExitCode {
        let message = self.message.trim_end();
        if self.status == ExitStatus::Normal {
            println!("{message}");
        } else {
            eprintln!("{message}");
        }
        self.status.into()
    }
}
