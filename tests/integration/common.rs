use std::{
    io::Write,
    path::Path,
    process::{Command, Output, Stdio},
};

use anyhow::{Context, Result};

pub const BINARY_PATH: &str = env!("CARGO_BIN_EXE_settings-profile");
pub const CLIENT_ID: &str = "6f1c2b9e-8f51-4a43-9d1e-0c2f5f0f7a11";

/// Run the binary against `settings_dir`, feeding `stdin` and collecting output.
pub fn run_cli(settings_dir: &Path, args: &[&str], stdin: &str) -> Result<Output> {
    let mut child = Command::new(BINARY_PATH)
        .args(args)
        .env("SETTINGS_PROFILE_DIR", settings_dir)
        .env_remove("SETTINGS_PROFILE_FILE_NAME")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .context("failed to spawn settings-profile")?;

    if let Some(mut input) = child.stdin.take() {
        input
            .write_all(stdin.as_bytes())
            .context("failed to write child stdin")?;
    }
    child.wait_with_output().context("failed to wait for child")
}

/// Configure `name` non-interactively so later runs skip first-run setup.
pub fn configure(settings_dir: &Path, name: &str) -> Result<Output> {
    run_cli(
        settings_dir,
        &["configprofile", "-p", name, "-c", CLIENT_ID, "-s", "s3cret"],
        "",
    )
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
