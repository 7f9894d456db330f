use crate::Error;
use serde::{Serialize, de::DeserializeOwned};
use tabula_core::{
    db::{ConfigStore, store::KvStore},
    path::{CollectionPath, StorageKey},
};

///
/// Configs
///
/// Caller-facing handle over the core config store: the same operations,
/// with every failure mapped into the public [`Error`] taxonomy.
///
/// ```
/// use tabula::prelude::*;
///
/// let mut configs = Configs::new(MemoryStore::new());
/// let path = CollectionPath::new("products/B44RG6APH/locales")?;
///
/// let mut config = CollectionConfig::default();
/// config.default_size = Some(CollectionSize::L);
///
/// configs.save(&path, &config)?;
/// # Ok::<(), tabula::Error>(())
/// ```
///

pub struct Configs<S: KvStore> {
    inner: ConfigStore<S>,
}

impl<S: KvStore> Configs<S> {
    pub const fn new(store: S) -> Self {
        Self {
            inner: ConfigStore::new(store),
        }
    }

    /// Key the config for `path` is persisted under.
    #[must_use]
    pub fn storage_key(path: &CollectionPath) -> StorageKey {
        ConfigStore::<S>::storage_key(path)
    }

    /// Persist `config` for the collection addressed by `path`,
    /// unconditionally overwriting any prior value.
    pub fn save<T>(&mut self, path: &CollectionPath, config: &T) -> Result<(), Error>
    where
        T: Serialize,
    {
        self.inner.save(path, config).map_err(Error::from)
    }

    /// Load the config for `path`; the default (empty) config when none
    /// is persisted.
    pub fn load<T>(&self, path: &CollectionPath) -> Result<T, Error>
    where
        T: DeserializeOwned + Default,
    {
        self.inner.load(path).map_err(Error::from)
    }

    /// Whether a config is persisted for `path`.
    pub fn contains(&self, path: &CollectionPath) -> Result<bool, Error> {
        self.inner.contains(path).map_err(Error::from)
    }

    /// Drop the persisted config for `path`, if any.
    pub fn remove(&mut self, path: &CollectionPath) -> Result<(), Error> {
        self.inner.remove(path).map_err(Error::from)
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        self.inner.store()
    }

    pub const fn store_mut(&mut self) -> &mut S {
        self.inner.store_mut()
    }

    pub fn into_inner(self) -> S {
        self.inner.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ErrorKind, ErrorOrigin, StoreErrorKind, prelude::*};

    fn path(s: &str) -> CollectionPath {
        CollectionPath::new(s).unwrap()
    }

    #[test]
    fn save_and_load_through_the_facade() {
        let mut configs = Configs::new(MemoryStore::new());
        let p = path("products/B44RG6APH/locales");

        let config = CollectionConfig {
            default_size: Some(CollectionSize::L),
            ..CollectionConfig::default()
        };

        configs.save(&p, &config).unwrap();
        let loaded: CollectionConfig = configs.load(&p).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn corruption_surfaces_as_a_parse_error() {
        let mut configs = Configs::new(MemoryStore::new());
        let p = path("products");

        configs.save(&p, &CollectionConfig::default()).unwrap();
        configs
            .store_mut()
            .set(Configs::<MemoryStore>::storage_key(&p).as_str(), "##".to_string())
            .unwrap();

        let err = configs.load::<CollectionConfig>(&p).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Parse);
        assert_eq!(err.origin, ErrorOrigin::Serialize);
    }

    #[test]
    fn quota_surfaces_as_a_store_error() {
        let mut configs = Configs::new(MemoryStore::with_quota(4));
        let p = path("products");

        let err = configs
            .save(&p, &CollectionConfig::default())
            .unwrap_err();

        assert_eq!(err.kind, ErrorKind::Store(StoreErrorKind::QuotaExceeded));
        assert_eq!(err.origin, ErrorOrigin::Store);
    }

    #[test]
    fn empty_paths_map_into_the_public_taxonomy() {
        let err = CollectionPath::new("").map_err(Error::from).unwrap_err();

        assert_eq!(err.kind, ErrorKind::Path);
        assert_eq!(err.origin, ErrorOrigin::Path);
    }
}
