//! First-run prompt for a real profile when only the bootstrap default exists.
use std::io::{BufRead, Write};

use tracing::info;
use uuid::Uuid;

use super::{console::Console, exit::CliExit};
use crate::{
    lib::errors::ProfileError,
    profile::{Profile, DEFAULT_PROFILE_NAME, SENTINEL_CLIENT_ID},
    store::{ProfileCache, ProfileStore},
};

const CANCEL_WORD: &str = "cancel";

/// How the first-run prompt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupOutcome {
    Saved(Profile),
    /// The user typed `cancel` or input ended.
    Cancelled,
}

enum Answer {
    Value(String),
    Cancelled,
}

/// Prompt until a valid profile is saved, the user cancels, or input ends.
pub async fn prompt_for_first_profile<C, R, W>(
    store: &mut ProfileStore<C>,
    console: &mut Console<R, W>,
) -> Result<SetupOutcome, CliExit>
where
    C: ProfileCache,
    R: BufRead,
    W: Write,
{
    console
        .write_line("Please add a profile to continue using this app")
        .map_err(CliExit::from_error)?;

    loop {
        let Some(profile) = read_profile(console).map_err(CliExit::from_error)? else {
            return Ok(SetupOutcome::Cancelled);
        };

        match store.create_or_update(profile).await {
            Ok(saved) => {
                info!(
                    target: "settings_profile::cli",
                    profile = %saved.name,
                    "First-run profile saved"
                );
                return Ok(SetupOutcome::Saved(saved));
            }
            Err(err @ ProfileError::Validation { .. }) => {
                console
                    .write_line(&err.to_string())
                    .and_then(|_| console.write_line("You must have a profile to continue..."))
                    .map_err(CliExit::from_error)?;
            }
            Err(err) => return Err(CliExit::from_error(err)),
        }
    }
}

fn read_profile<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> std::io::Result<Option<Profile>> {
    console.write_line(&format!(
        "You may type '{CANCEL_WORD}' at any time to cancel adding a profile"
    ))?;

    let prompt = format!("Profile Name (Hit <Enter> for '{DEFAULT_PROFILE_NAME}'): ");
    let name = match ask(console, &prompt)? {
        Answer::Value(name) if name.trim().is_empty() => DEFAULT_PROFILE_NAME.to_string(),
        Answer::Value(name) => name,
        Answer::Cancelled => return Ok(None),
    };

    let client_id = loop {
        match ask(console, "Client Identifier: ")? {
            Answer::Value(raw) => match Uuid::parse_str(raw.trim()) {
                Ok(id) if id != SENTINEL_CLIENT_ID => break id,
                _ => continue,
            },
            Answer::Cancelled => return Ok(None),
        }
    };

    let client_secret = loop {
        match ask(console, "Client Secret: ")? {
            Answer::Value(secret) if secret.trim().is_empty() => continue,
            Answer::Value(secret) => break secret,
            Answer::Cancelled => return Ok(None),
        }
    };

    Ok(Some(Profile::new(name, client_id, client_secret)))
}

fn ask<R: BufRead, W: Write>(console: &mut Console<R, W>, prompt: &str) -> std::io::Result<Answer> {
    Ok(match console.prompt(prompt)? {
        Some(answer) if answer.trim().eq_ignore_ascii_case(CANCEL_WORD) => Answer::Cancelled,
        Some(answer) => Answer::Value(answer),
        None => Answer::Cancelled,
    })
}
