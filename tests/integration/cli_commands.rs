use anyhow::Result;
use serde_json::Value;
use tempfile::tempdir;

use crate::common::{configure, run_cli, stderr, stdout, CLIENT_ID};

#[test]
fn configprofile_on_fresh_directory_skips_setup_and_prints_profile() -> Result<()> {
    let temp = tempdir()?;

    let output = configure(temp.path(), "Prod")?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let printed: Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(printed["name"], "Prod");
    assert_eq!(printed["clientId"], CLIENT_ID);
    assert!(temp.path().join("settings-profile-demo.json").exists());
    Ok(())
}

#[test]
fn viewprofile_for_unknown_name_exits_with_no_profile_by_name() -> Result<()> {
    let temp = tempdir()?;
    configure(temp.path(), "prod")?;

    let output = run_cli(temp.path(), &["viewprofile", "-p", "ghost"], "")?;

    assert_eq!(output.status.code(), Some(3));
    assert!(
        stderr(&output).contains("a profile with the name 'ghost' could not be found."),
        "stderr: {}",
        stderr(&output)
    );
    Ok(())
}

#[test]
fn configprofile_with_malformed_client_id_exits_with_invalid_parameter() -> Result<()> {
    let temp = tempdir()?;

    let output = run_cli(
        temp.path(),
        &["configprofile", "-p", "prod", "-c", "not-a-uuid", "-s", "x"],
        "",
    )?;

    assert_eq!(output.status.code(), Some(4));
    assert!(stderr(&output).contains("client id may not be empty"));
    Ok(())
}

#[test]
fn unknown_flag_exits_with_invalid_parameter() -> Result<()> {
    let temp = tempdir()?;

    let output = run_cli(temp.path(), &["viewprofile", "--bogus"], "")?;

    assert_eq!(output.status.code(), Some(4));
    Ok(())
}

#[test]
fn viewprofilelist_prints_configured_names() -> Result<()> {
    let temp = tempdir()?;
    configure(temp.path(), "prod")?;
    configure(temp.path(), "Staging")?;

    let output = run_cli(temp.path(), &["viewprofilelist"], "")?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let names: Vec<String> = serde_json::from_str(stdout(&output).trim())?;
    assert!(names.contains(&"prod".to_string()), "names: {names:?}");
    assert!(names.contains(&"Staging".to_string()), "names: {names:?}");
    Ok(())
}

#[test]
fn settings_dir_flag_overrides_environment() -> Result<()> {
    let env_dir = tempdir()?;
    let flag_dir = tempdir()?;
    let flag = flag_dir.path().display().to_string();

    let output = run_cli(
        env_dir.path(),
        &[
            "--settings-dir",
            &flag,
            "configprofile",
            "-p",
            "prod",
            "-c",
            CLIENT_ID,
            "-s",
            "x",
        ],
        "",
    )?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(flag_dir.path().join("settings-profile-demo.json").exists());
    assert!(!env_dir.path().join("settings-profile-demo.json").exists());
    Ok(())
}

#[test]
fn cancelled_first_run_setup_exits_with_no_configured_profiles() -> Result<()> {
    let temp = tempdir()?;

    let output = run_cli(temp.path(), &["viewprofilelist"], "cancel\n")?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).contains("Please add a profile to continue using this app"));
    Ok(())
}

#[test]
fn help_runs_without_touching_settings() -> Result<()> {
    let temp = tempdir()?;

    let output = run_cli(temp.path(), &["--help"], "")?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("configprofile"));
    assert!(!temp.path().join("settings-profile-demo.json").exists());
    Ok(())
}
