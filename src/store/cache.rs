use chrono::{DateTime, Utc};

use crate::profile::ProfileSet;

/// The last-loaded profile set and when it was loaded.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub profiles: ProfileSet,
    pub loaded_at: DateTime<Utc>,
}

impl CacheEntry {
    pub fn new(profiles: ProfileSet, loaded_at: DateTime<Utc>) -> Self {
        Self {
            profiles,
            loaded_at,
        }
    }

    /// True when the file was modified after this entry was loaded, or its
    /// modification time is unknown.
    pub fn is_stale(&self, file_modified: Option<DateTime<Utc>>) -> bool {
        file_modified.map_or(true, |modified| modified > self.loaded_at)
    }
}

/// Storage for the store's read cache; owned by a single `ProfileStore`.
pub trait ProfileCache {
    fn entry(&self) -> Option<&CacheEntry>;
    fn replace(&mut self, entry: CacheEntry);
    fn clear(&mut self);
}

/// Process-local in-memory cache.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entry: Option<CacheEntry>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProfileCache for MemoryCache {
    fn entry(&self) -> Option<&CacheEntry> {
        self.entry.as_ref()
    }

    fn replace(&mut self, entry: CacheEntry) {
        self.entry = Some(entry);
    }

    fn clear(&mut self) {
        self.entry = None;
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    #[test]
    fn entry_is_stale_only_for_newer_or_unknown_modification() {
        let loaded_at = Utc::now();
        let entry = CacheEntry::new(ProfileSet::new(), loaded_at);

        assert!(!entry.is_stale(Some(loaded_at)));
        assert!(!entry.is_stale(Some(loaded_at - Duration::seconds(5))));
        assert!(entry.is_stale(Some(loaded_at + Duration::seconds(5))));
        assert!(entry.is_stale(None));
    }

    #[test]
    fn memory_cache_replace_and_clear() {
        let mut cache = MemoryCache::new();
        assert!(cache.entry().is_none());

        cache.replace(CacheEntry::new(ProfileSet::new(), Utc::now()));
        assert!(cache.entry().is_some());

        cache.clear();
        assert!(cache.entry().is_none());
    }
}
