use std::fs;

use anyhow::Result;
use settings_profile::{
    config::StoreSettings,
    lib::errors::ProfileError,
    profile::Profile,
    store::{DeleteOutcome, ProfileStore, SetupState},
};
use tempfile::tempdir;
use uuid::Uuid;

use crate::common::CLIENT_ID;

fn client_id() -> Uuid {
    Uuid::parse_str(CLIENT_ID).expect("valid uuid literal")
}

#[tokio::test]
async fn profiles_survive_reopening_the_store() -> Result<()> {
    let temp = tempdir()?;
    let settings = StoreSettings::in_dir(temp.path());

    let (mut store, state) = ProfileStore::open(&settings).await?;
    assert_eq!(state, SetupState::NoProfilesConfigured);
    store
        .create_or_update(Profile::new("Staging", client_id(), "s3cret"))
        .await?;
    drop(store);

    let (mut reopened, state) = ProfileStore::open(&settings).await?;
    assert_eq!(state, SetupState::Configured);
    let profile = reopened.get("STAGING").await?;
    assert_eq!(profile.name, "Staging");
    assert_eq!(profile.client_secret, "s3cret");
    Ok(())
}

#[tokio::test]
async fn hand_edited_file_with_comments_and_mixed_case_keys_loads() -> Result<()> {
    let temp = tempdir()?;
    let settings = StoreSettings::in_dir(temp.path());
    fs::write(
        settings.file_path(),
        format!(
            "[\n  // edited by hand\n  {{ \"NAME\": \"ops\", \"ClientId\": \"{CLIENT_ID}\", \"clientsecret\": \"x\", }},\n]\n"
        ),
    )?;

    let (mut store, state) = ProfileStore::open(&settings).await?;

    assert_eq!(state, SetupState::Configured);
    assert_eq!(store.get("ops").await?.client_id, client_id());
    Ok(())
}

#[tokio::test]
async fn object_shaped_file_is_backed_up_and_replaced() -> Result<()> {
    let temp = tempdir()?;
    let settings = StoreSettings::in_dir(temp.path());
    fs::write(settings.file_path(), "{\"not\": \"an array\"}")?;

    let (mut store, state) = ProfileStore::open(&settings).await?;

    assert_eq!(state, SetupState::NoProfilesConfigured);
    assert_eq!(store.get_all().await?.names(), vec!["default".to_string()]);
    let backups: Vec<_> = fs::read_dir(temp.path())?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| name.starts_with("settings-profile-demo_"))
        .collect();
    assert_eq!(backups.len(), 1, "backups: {backups:?}");
    Ok(())
}

#[tokio::test]
async fn invalid_profile_is_rejected_without_touching_the_file() -> Result<()> {
    let temp = tempdir()?;
    let settings = StoreSettings::in_dir(temp.path());
    let (mut store, _) = ProfileStore::open(&settings).await?;
    let before = fs::read_to_string(settings.file_path())?;

    let err = store
        .create_or_update(Profile::new("ops", client_id(), "   "))
        .await
        .expect_err("blank secret is rejected");

    assert!(matches!(err, ProfileError::Validation { field: "clientSecret", .. }));
    assert_eq!(fs::read_to_string(settings.file_path())?, before);
    Ok(())
}

#[tokio::test]
async fn delete_reports_whether_anything_was_removed() -> Result<()> {
    let temp = tempdir()?;
    let (mut store, _) = ProfileStore::open(&StoreSettings::in_dir(temp.path())).await?;

    assert_eq!(store.delete("Default").await?, DeleteOutcome::Removed);
    assert_eq!(store.delete("default").await?, DeleteOutcome::NotFound);
    assert!(store.get_all().await?.is_empty());
    Ok(())
}
