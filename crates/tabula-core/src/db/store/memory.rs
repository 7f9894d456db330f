use crate::db::store::{KvStore, StoreError};
use derive_more::{Deref, DerefMut};
use std::collections::BTreeMap;

///
/// MemoryStore
///
/// In-memory host store over an ordered map. The default backend for
/// tests and in-process use; an optional byte quota models the capacity
/// limit of a browser-profile store. Quota accounting covers keys and
/// values alike, since that is how host quotas are consumed.
///

#[derive(Debug, Default, Deref, DerefMut)]
pub struct MemoryStore {
    #[deref]
    #[deref_mut]
    entries: BTreeMap<String, String>,
    quota: Option<usize>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that rejects writes pushing total usage past `quota` bytes.
    #[must_use]
    pub fn with_quota(quota: usize) -> Self {
        Self {
            entries: BTreeMap::new(),
            quota: Some(quota),
        }
    }

    /// Sum of bytes used by all entries.
    #[must_use]
    pub fn used_bytes(&self) -> usize {
        self.entries.iter().map(|(k, v)| k.len() + v.len()).sum()
    }

    /// Usage after writing `value` under `key`, replacing any prior
    /// value for that key.
    fn bytes_after_write(&self, key: &str, value: &str) -> usize {
        let replaced = self
            .entries
            .get(key)
            .map_or(0, |prior| key.len() + prior.len());

        self.used_bytes() - replaced + key.len() + value.len()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        if let Some(quota) = self.quota {
            let len = self.bytes_after_write(key, &value);
            if len > quota {
                return Err(StoreError::QuotaExceeded { len, quota });
            }
        }

        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}
