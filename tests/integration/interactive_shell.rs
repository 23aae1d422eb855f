use anyhow::Result;
use tempfile::tempdir;

use crate::common::{configure, run_cli, stderr, stdout, CLIENT_ID};

#[test]
fn shell_runs_commands_from_stdin_until_exit() -> Result<()> {
    let temp = tempdir()?;
    configure(temp.path(), "prod")?;

    let output = run_cli(
        temp.path(),
        &[],
        "viewprofile -p PROD\nviewprofile -p ghost\nhistory\nexit\nviewprofilelist\n",
    )?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let printed = stdout(&output);
    assert!(printed.contains("\"name\": \"prod\""), "stdout: {printed}");
    assert!(
        printed.contains("a profile with the name 'ghost' could not be found."),
        "stdout: {printed}"
    );
    let history = printed
        .find("history")
        .expect("history echoes the typed lines");
    assert!(printed[history..].contains("viewprofile -p ghost"));
    assert!(!printed.contains("[\"prod\"]"), "commands after exit must not run");
    Ok(())
}

#[test]
fn first_run_setup_saves_profile_then_enters_shell() -> Result<()> {
    let temp = tempdir()?;

    let output = run_cli(
        temp.path(),
        &[],
        &format!("work\nnot-a-uuid\n{CLIENT_ID}\n\nhunter2\nviewprofile -p work\nquit\n"),
    )?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let printed = stdout(&output);
    assert!(printed.contains("Client Identifier: "), "stdout: {printed}");
    assert!(printed.contains("\"clientSecret\": \"hunter2\""), "stdout: {printed}");
    Ok(())
}
