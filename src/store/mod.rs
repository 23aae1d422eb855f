//! File-backed profile store with a lazily refreshed read cache.
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{debug, info, trace};

use crate::{
    config::StoreSettings,
    lib::{errors::ProfileError, fs as settings_fs},
    profile::{codec, validate, Profile, ProfileSet},
};

pub mod bootstrap;
pub mod cache;

pub use bootstrap::MAX_REPAIR_ATTEMPTS;
pub use cache::{CacheEntry, MemoryCache, ProfileCache};

/// Whether usable profiles exist, reported once when a store is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupState {
    Configured,
    /// Nothing, or only the untouched first-run default, is stored.
    NoProfilesConfigured,
}

/// Result of `ProfileStore::delete`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Removed,
    NotFound,
}

/// Single source of truth for profiles.
///
/// Every mutation rewrites the whole settings file. Reads are served from the
/// cache until the file's modification time moves past the cache's load time.
#[derive(Debug)]
pub struct ProfileStore<C: ProfileCache = MemoryCache> {
    settings_dir: PathBuf,
    file_path: PathBuf,
    cache: C,
}

impl ProfileStore<MemoryCache> {
    /// Open the store with an in-memory cache.
    pub async fn open(settings: &StoreSettings) -> Result<(Self, SetupState), ProfileError> {
        Self::open_with_cache(settings, MemoryCache::new()).await
    }
}

impl<C: ProfileCache> ProfileStore<C> {
    /// Create the settings directory, bootstrap the file and load it.
    ///
    /// The integrity routine always runs here, even when `cache` is already warm.
    pub async fn open_with_cache(
        settings: &StoreSettings,
        cache: C,
    ) -> Result<(Self, SetupState), ProfileError> {
        let mut store = Self {
            settings_dir: settings.settings_dir.clone(),
            file_path: settings.file_path(),
            cache,
        };

        settings_fs::ensure_dir(&store.settings_dir).await?;
        bootstrap::ensure_settings_file(&store.file_path, &store.settings_dir).await?;
        let profiles = store.get_all().await?;
        let state = if profiles.is_unconfigured() {
            SetupState::NoProfilesConfigured
        } else {
            SetupState::Configured
        };
        info!(
            target: "settings_profile::store",
            path = %store.file_path.display(),
            profiles = profiles.len(),
            state = ?state,
            "Opened profile store"
        );
        Ok((store, state))
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn settings_dir(&self) -> &Path {
        &self.settings_dir
    }

    /// Return every profile, reloading from disk when the cache is missing or stale.
    pub async fn get_all(&mut self) -> Result<ProfileSet, ProfileError> {
        let modified = settings_fs::modified_at(&self.file_path).await;
        if let Some(entry) = self.cache.entry() {
            if !entry.is_stale(modified) {
                trace!(
                    target: "settings_profile::store",
                    loaded_at = %entry.loaded_at,
                    "Serving profiles from cache"
                );
                return Ok(entry.profiles.clone());
            }
        }

        let profiles = match self.load().await {
            Ok(profiles) => profiles,
            Err(err) => {
                self.cache.clear();
                return Err(err);
            }
        };
        self.cache.replace(CacheEntry::new(profiles.clone(), Utc::now()));
        Ok(profiles)
    }

    /// Case-insensitive lookup.
    pub async fn get(&mut self, name: &str) -> Result<Profile, ProfileError> {
        self.get_all()
            .await?
            .get(name)
            .cloned()
            .ok_or_else(|| ProfileError::NotFound {
                name: name.to_string(),
            })
    }

    /// Remove a profile; a missing name is not an error and writes nothing.
    pub async fn delete(&mut self, name: &str) -> Result<DeleteOutcome, ProfileError> {
        let mut profiles = self.get_all().await?;
        if profiles.remove(name).is_none() {
            debug!(
                target: "settings_profile::store",
                profile = %name,
                "Delete requested for unknown profile"
            );
            return Ok(DeleteOutcome::NotFound);
        }

        self.persist(profiles).await?;
        info!(
            target: "settings_profile::store",
            profile = %name,
            "Deleted profile"
        );
        Ok(DeleteOutcome::Removed)
    }

    /// Validate, then insert or replace the profile with the same normalized name.
    pub async fn create_or_update(&mut self, profile: Profile) -> Result<Profile, ProfileError> {
        if let Some(violation) = validate(&profile).into_iter().next() {
            return Err(ProfileError::Validation {
                field: violation.field,
                message: violation.message,
            });
        }

        let mut profiles = self.get_all().await?;
        let replaced = profiles.upsert(profile.clone()).is_some();
        self.persist(profiles).await?;
        info!(
            target: "settings_profile::store",
            profile = %profile.name,
            replaced,
            "Saved profile"
        );
        Ok(profile)
    }

    async fn load(&mut self) -> Result<ProfileSet, ProfileError> {
        debug!(
            target: "settings_profile::store",
            path = %self.file_path.display(),
            "Loading profiles from disk"
        );
        settings_fs::ensure_dir(&self.settings_dir).await?;
        let contents = bootstrap::ensure_settings_file(&self.file_path, &self.settings_dir).await?;
        let profiles = codec::decode(&contents).map_err(|message| ProfileError::Parse {
            path: self.file_path.clone(),
            message,
        })?;
        Ok(ProfileSet::from_profiles(profiles))
    }

    async fn persist(&mut self, profiles: ProfileSet) -> Result<(), ProfileError> {
        let document = codec::encode(&profiles).map_err(|source| ProfileError::Encode { source })?;
        settings_fs::write_atomic(&self.file_path, document.as_bytes()).await?;
        self.cache.replace(CacheEntry::new(profiles, Utc::now()));
        Ok(())
    }
}
