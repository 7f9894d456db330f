//! Shared test-only helpers for core tests.

use crate::db::store::{KvStore, StoreError};

///
/// BrokenStore
///
/// Store stub whose every operation reports the host store as
/// unavailable. Use it to assert that failures propagate to the caller
/// unchanged instead of being swallowed.
///

pub struct BrokenStore;

impl BrokenStore {
    fn unavailable() -> StoreError {
        StoreError::Unavailable {
            message: "host store is disabled".to_string(),
        }
    }
}

impl KvStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(Self::unavailable())
    }

    fn set(&mut self, _key: &str, _value: String) -> Result<(), StoreError> {
        Err(Self::unavailable())
    }

    fn remove(&mut self, _key: &str) -> Result<(), StoreError> {
        Err(Self::unavailable())
    }
}
