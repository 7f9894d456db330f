use crate::db::store::{KvStore, StoreError};
use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};

///
/// FileStore
///
/// Durable host store: one JSON object per file, re-read on every access
/// and rewritten on every mutation. That matches the profile-wide browser
/// store it stands in for: synchronous, shared by uncoordinated
/// processes, last write wins, no locking.
///

#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Open the store backed by the file at `path`, creating parent
    /// directories up front. A missing file reads as an empty store; an
    /// existing file must parse.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|err| unavailable(&path, &err))?;
        }

        let store = Self { path };
        store.read_entries()?;

        Ok(store)
    }

    /// Backing file location.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(err) => return Err(unavailable(&self.path, &err)),
        };

        serde_json::from_str(&text).map_err(|err| StoreError::Unavailable {
            message: format!(
                "store file {} is not a JSON object: {err}",
                self.path.display()
            ),
        })
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        let text = serde_json::to_string(entries).map_err(|err| StoreError::Unavailable {
            message: format!(
                "store file {} could not be encoded: {err}",
                self.path.display()
            ),
        })?;

        fs::write(&self.path, text).map_err(|err| unavailable(&self.path, &err))
    }
}

fn unavailable(path: &Path, err: &io::Error) -> StoreError {
    StoreError::Unavailable {
        message: format!("store file {}: {err}", path.display()),
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        let mut entries = self.read_entries()?;
        entries.insert(key.to_string(), value);

        self.write_entries(&entries)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.read_entries()?;
        if entries.remove(key).is_some() {
            self.write_entries(&entries)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_persist_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("store.json");

        let mut store = FileStore::open(&file).unwrap();
        store.set("k", "v".to_string()).unwrap();
        drop(store);

        let reopened = FileStore::open(&file).unwrap();
        assert_eq!(reopened.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("absent.json")).unwrap();

        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn uncoordinated_handles_are_last_write_wins() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("store.json");

        let mut a = FileStore::open(&file).unwrap();
        let mut b = FileStore::open(&file).unwrap();

        a.set("k", "from_a".to_string()).unwrap();
        b.set("k", "from_b".to_string()).unwrap();

        assert_eq!(a.get("k").unwrap().as_deref(), Some("from_b"));
    }

    #[test]
    fn corrupted_file_reports_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("store.json");

        let mut store = FileStore::open(&file).unwrap();
        store.set("k", "v".to_string()).unwrap();

        fs::write(&file, "not a json object").unwrap();

        assert!(matches!(
            store.get("k").unwrap_err(),
            StoreError::Unavailable { .. }
        ));
        assert!(matches!(
            FileStore::open(&file).unwrap_err(),
            StoreError::Unavailable { .. }
        ));
    }
}
