//! Credential profile model and the case-insensitive profile set.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod codec;
pub mod validator;

pub use validator::{validate, FieldViolation};

/// Name of the profile written on first run.
pub const DEFAULT_PROFILE_NAME: &str = "default";
/// Placeholder secret stored in the first-run profile.
pub const DEFAULT_CLIENT_SECRET: &str = "top-secret-client-secret";
/// All-zero client identifier marking an unconfigured profile.
pub const SENTINEL_CLIENT_ID: Uuid = Uuid::nil();

/// A named credential record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub client_id: Uuid,
    #[serde(default)]
    pub client_secret: String,
}

impl Profile {
    pub fn new(name: impl Into<String>, client_id: Uuid, client_secret: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            client_id,
            client_secret: client_secret.into(),
        }
    }

    /// The unvalidated profile written when no settings file exists.
    pub fn bootstrap_default() -> Self {
        Self::new(DEFAULT_PROFILE_NAME, SENTINEL_CLIENT_ID, DEFAULT_CLIENT_SECRET)
    }

    pub fn has_sentinel_client_id(&self) -> bool {
        self.client_id == SENTINEL_CLIENT_ID
    }
}

/// Normalize a profile name into its map key.
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
}

/// Profiles keyed by normalized name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileSet {
    entries: BTreeMap<String, Profile>,
}

impl ProfileSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set where later profiles replace earlier ones with the same normalized name.
    pub fn from_profiles(profiles: impl IntoIterator<Item = Profile>) -> Self {
        let mut set = Self::new();
        for profile in profiles {
            set.upsert(profile);
        }
        set
    }

    pub fn get(&self, name: &str) -> Option<&Profile> {
        self.entries.get(&normalize_name(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&normalize_name(name))
    }

    /// Insert or replace; returns the replaced profile.
    pub fn upsert(&mut self, profile: Profile) -> Option<Profile> {
        self.entries.insert(normalize_name(&profile.name), profile)
    }

    pub fn remove(&mut self, name: &str) -> Option<Profile> {
        self.entries.remove(&normalize_name(name))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Profile> {
        self.entries.values()
    }

    /// Stored profile names, as written, in normalized-key order.
    pub fn names(&self) -> Vec<String> {
        self.iter().map(|profile| profile.name.clone()).collect()
    }

    /// True when nothing but the first-run default (or nothing at all) is stored.
    pub fn is_unconfigured(&self) -> bool {
        match self.entries.len() {
            0 => true,
            1 => self
                .get(DEFAULT_PROFILE_NAME)
                .is_some_and(Profile::has_sentinel_client_id),
            _ => false,
        }
    }
}
