use crate::{
    db::store::{KvStore, StoreError},
    error::{ErrorClass, ErrorOrigin, InternalError},
    obs::metrics,
    path::{CollectionPath, StorageKey},
    serialize::{deserialize, serialize},
};
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error as ThisError;

/// Max serialized bytes for a single persisted config to keep host-store
/// writes bounded.
pub const MAX_CONFIG_BYTES: usize = 1024 * 1024;

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("config exceeds max size: {len} bytes (limit {MAX_CONFIG_BYTES})")]
    TooLarge { len: usize },
}

impl ConfigError {
    pub(crate) const fn class() -> ErrorClass {
        ErrorClass::Unsupported
    }
}

impl From<ConfigError> for InternalError {
    fn from(err: ConfigError) -> Self {
        Self::new(ConfigError::class(), ErrorOrigin::Store, err.to_string())
    }
}

///
/// ConfigStore
///
/// Per-collection presentation config persistence over an injected host
/// key-value store. Keys are derived from the collection path with every
/// entity id stripped, so configuration is per collection type, not per
/// entity instance.
///
/// All operations are synchronous and run to completion; nothing is
/// caught or retried internally. Writes are unconditional overwrites:
/// uncoordinated writers sharing one backing store are last-write-wins.
///

pub struct ConfigStore<S: KvStore> {
    store: S,
}

impl<S: KvStore> ConfigStore<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Key the config for `path` is persisted under.
    #[must_use]
    pub fn storage_key(path: &CollectionPath) -> StorageKey {
        StorageKey::derive(path)
    }

    /// Persist `config` for the collection addressed by `path`,
    /// unconditionally overwriting any prior value.
    pub fn save<T>(&mut self, path: &CollectionPath, config: &T) -> Result<(), InternalError>
    where
        T: Serialize,
    {
        metrics::record_save_call();

        let key = StorageKey::derive(path);
        let text = serialize(config)?;
        if text.len() > MAX_CONFIG_BYTES {
            return Err(ConfigError::TooLarge { len: text.len() }.into());
        }

        let bytes = text.len();
        self.store.set(key.as_str(), text).map_err(store_err)?;
        metrics::record_saved_bytes(bytes);

        Ok(())
    }

    /// Load the config for `path`. An absent key yields the default
    /// (empty) config; stored text that fails to parse is an error,
    /// never a default.
    pub fn load<T>(&self, path: &CollectionPath) -> Result<T, InternalError>
    where
        T: DeserializeOwned + Default,
    {
        metrics::record_load_call();

        let key = StorageKey::derive(path);
        match self.store.get(key.as_str()).map_err(store_err)? {
            Some(text) => deserialize(&text).map_err(|err| {
                metrics::record_parse_failure();
                err.into()
            }),
            None => {
                metrics::record_load_default();
                Ok(T::default())
            }
        }
    }

    /// Whether a config is persisted for `path`.
    pub fn contains(&self, path: &CollectionPath) -> Result<bool, InternalError> {
        let key = StorageKey::derive(path);
        let present = self.store.get(key.as_str()).map_err(store_err)?.is_some();

        Ok(present)
    }

    /// Drop the persisted config for `path`, if any.
    pub fn remove(&mut self, path: &CollectionPath) -> Result<(), InternalError> {
        metrics::record_remove_call();

        let key = StorageKey::derive(path);
        self.store.remove(key.as_str()).map_err(store_err)?;

        Ok(())
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    pub const fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }
}

fn store_err(err: StoreError) -> InternalError {
    metrics::record_store_error();
    err.into()
}
