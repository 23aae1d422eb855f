//! Entry point for Settings Profile.
use std::process::ExitCode;

use clap::Parser;
use settings_profile::{
    cli::{
        execute_command, prompt_for_first_profile, shell, CliArgs, CliExit, ExitStatus,
        ProfileCommand, SetupOutcome, StdConsole,
    },
    config::StoreSettings,
    lib::telemetry,
    store::{ProfileStore, SetupState},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match bootstrap().await {
        Ok(_) => ExitStatus::Normal.into(),
        Err(exit) => exit.report(),
    }
}

async fn bootstrap() -> Result<(), CliExit> {
    telemetry::init_tracing().map_err(CliExit::from_error)?;
    let args = CliArgs::try_parse().map_err(CliExit::from_clap)?;

    let settings = StoreSettings::load(args.settings_dir.clone()).map_err(CliExit::from_error)?;
    let (mut store, state) = ProfileStore::open(&settings)
        .await
        .map_err(CliExit::from_error)?;
    let mut console = StdConsole::stdio();

    // `configprofile` supplies a profile itself, so it skips the first-run prompt.
    let configures_profile = matches!(args.command, Some(ProfileCommand::ConfigProfile(_)));
    if state == SetupState::NoProfilesConfigured && !configures_profile {
        if let SetupOutcome::Cancelled = prompt_for_first_profile(&mut store, &mut console).await? {
            return Err(CliExit::new(
                ExitStatus::NoConfiguredProfiles,
                "no profiles are configured; add one with `configprofile`",
            ));
        }
    }

    match args.command {
        Some(command) => execute_command(command, &mut store, &mut console).await,
        None => shell::run(&mut store, &mut console).await,
    }
}
