//! CLI argument definitions shared by argv and interactive input.
use std::{convert::Infallible, path::PathBuf};

use clap::{Args, Parser, Subcommand};
use uuid::Uuid;

use crate::profile::SENTINEL_CLIENT_ID;

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "settings-profile",
    author,
    version,
    about = "Manage client credential profiles",
    long_about = "Manage client credential profiles.\n\nRun without a command to start the interactive shell.",
    after_help = "Hint: inside the shell, type `history` for recent commands or `exit` to leave."
)]
pub struct CliArgs {
    /// Directory holding the settings file (overrides SETTINGS_PROFILE_DIR).
    #[arg(long = "settings-dir", global = true)]
    pub settings_dir: Option<PathBuf>,
    /// Command to run; omit to start the interactive shell.
    #[command(subcommand)]
    pub command: Option<ProfileCommand>,
}

/// One line typed into the interactive shell.
#[derive(Debug, Clone, Parser)]
#[command(name = "settings-profile", no_binary_name = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ProfileCommand,
}

/// Profile management commands.
#[derive(Debug, Clone, Subcommand)]
pub enum ProfileCommand {
    /// Create or update a profile configuration.
    #[command(name = "configprofile")]
    ConfigProfile(ConfigProfileArgs),
    /// View a profile's configuration.
    #[command(name = "viewprofile")]
    ViewProfile(ProfileNameArgs),
    /// View a list of configured profiles.
    #[command(name = "viewprofilelist")]
    ViewProfileList,
    /// Delete a profile from the settings file.
    #[command(name = "deleteprofile")]
    DeleteProfile(DeleteProfileArgs),
}

impl ProfileCommand {
    /// Subcommand name as typed; safe to log (never includes secrets).
    pub const fn name(&self) -> &'static str {
        match self {
            ProfileCommand::ConfigProfile(_) => "configprofile",
            ProfileCommand::ViewProfile(_) => "viewprofile",
            ProfileCommand::ViewProfileList => "viewprofilelist",
            ProfileCommand::DeleteProfile(_) => "deleteprofile",
        }
    }
}

/// Target profile for single-profile commands.
#[derive(Debug, Clone, Args)]
pub struct ProfileNameArgs {
    /// Profile for which to run the command.
    #[arg(long = "profile", short = 'p')]
    pub profile: String,
}

/// Arguments for `configprofile`.
#[derive(Debug, Clone, Args)]
pub struct ConfigProfileArgs {
    #[command(flatten)]
    pub target: ProfileNameArgs,
    /// Client identifier (UUID).
    #[arg(long = "clientId", short = 'c', value_parser = parse_client_id)]
    pub client_id: Uuid,
    /// Client secret.
    #[arg(long = "clientSecret", short = 's')]
    pub client_secret: String,
}

/// Arguments for `deleteprofile`.
#[derive(Debug, Clone, Args)]
pub struct DeleteProfileArgs {
    #[command(flatten)]
    pub target: ProfileNameArgs,
    /// Skip the confirmation prompt.
    #[arg(long = "skipConfirmation", short = 's', default_value_t = false)]
    pub skip_confirmation: bool,
}

/// Unparsable identifiers become the sentinel so validation reports them.
fn parse_client_id(raw: &str) -> Result<Uuid, Infallible> {
    Ok(Uuid::parse_str(raw.trim()).unwrap_or(SENTINEL_CLIENT_ID))
}
