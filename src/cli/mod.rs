//! CLI entrypoint module structure.
use std::io::{BufRead, Write};

use anyhow::Context;
use serde::Serialize;
use tracing::debug;

use crate::{
    profile::Profile,
    store::{DeleteOutcome, ProfileCache, ProfileStore},
};

pub mod args;
pub mod console;
pub mod exit;
pub mod setup;
pub mod shell;

pub use args::{
    CliArgs, ConfigProfileArgs, DeleteProfileArgs, ProfileCommand, ProfileNameArgs, ShellLine,
};
pub use console::{Console, StdConsole};
pub use exit::{CliExit, ExitStatus};
pub use setup::{prompt_for_first_profile, SetupOutcome};

const DELETE_CONFIRMATION: &str = "Are you sure you want to remove this profile? (y/n): ";

/// Run one profile command, writing its output to the console.
pub async fn execute_command<C, R, W>(
    command: ProfileCommand,
    store: &mut ProfileStore<C>,
    console: &mut Console<R, W>,
) -> Result<(), CliExit>
where
    C: ProfileCache,
    R: BufRead,
    W: Write,
{
    debug!(
        target: "settings_profile::cli",
        command = command.name(),
        "Executing command"
    );
    match command {
        ProfileCommand::ConfigProfile(args) => {
            let profile = Profile::new(args.target.profile, args.client_id, args.client_secret);
            let saved = store
                .create_or_update(profile)
                .await
                .map_err(|err| CliExit::from_error(err).with_status(ExitStatus::InvalidParameter))?;
            let stored = store.get(&saved.name).await.map_err(CliExit::from_error)?;
            write_json(console, &stored)
        }
        ProfileCommand::ViewProfile(args) => {
            let profile = store
                .get(&args.profile)
                .await
                .map_err(CliExit::from_error)?;
            write_json(console, &profile)
        }
        ProfileCommand::ViewProfileList => {
            let names = store
                .get_all()
                .await
                .context("there was an error listing profiles")
                .map_err(CliExit::from_error)?
                .names();
            let rendered = serde_json::to_string(&names).map_err(CliExit::from_error)?;
            console.write_line(&rendered).map_err(CliExit::from_error)
        }
        ProfileCommand::DeleteProfile(args) => {
            let name = args.target.profile;
            let confirmed = args.skip_confirmation
                || console
                    .confirm(DELETE_CONFIRMATION)
                    .map_err(CliExit::from_error)?
                    .unwrap_or(false);
            if !confirmed {
                return Ok(());
            }

            let outcome = store
                .delete(&name)
                .await
                .context("there was an error deleting the requested profile")
                .map_err(CliExit::from_error)?;
            let message = match outcome {
                DeleteOutcome::Removed => format!("{name} has been successfully deleted"),
                DeleteOutcome::NotFound => format!("{name} was not found; nothing was deleted"),
            };
            console.write_line(&message).map_err(CliExit::from_error)
        }
    }
}

fn write_json<R: BufRead, W: Write, T: Serialize>(
    console: &mut Console<R, W>,
    value: &T,
) -> Result<(), CliExit> {
    let rendered = serde_json::to_string_pretty(value).map_err(CliExit::from_error)?;
    console.write_line(&rendered).map_err(CliExit::from_error)
}
