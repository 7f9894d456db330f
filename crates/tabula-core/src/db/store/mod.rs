mod file;
mod memory;

pub use file::*;
pub use memory::*;

use crate::error::{ErrorClass, ErrorOrigin, InternalError};
use thiserror::Error as ThisError;

///
/// StoreError
///
/// Failure modes a host key-value store can surface. Absence of a key is
/// not one of them; `get` reports absence as `None`.
///

#[derive(Debug, ThisError)]
pub enum StoreError {
    #[error("store unavailable: {message}")]
    Unavailable { message: String },

    #[error("store quota exceeded: {len} bytes over the {quota}-byte quota")]
    QuotaExceeded { len: usize, quota: usize },
}

impl StoreError {
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::Unavailable { .. } => ErrorClass::Unavailable,
            Self::QuotaExceeded { .. } => ErrorClass::CapacityExceeded,
        }
    }
}

impl From<StoreError> for InternalError {
    fn from(err: StoreError) -> Self {
        Self::new(err.class(), ErrorOrigin::Store, err.to_string())
    }
}

///
/// KvStore
///
/// Synchronous string-to-string host store, injected into the config
/// store rather than reached as an ambient singleton. The store is a
/// single shared namespace: no locking, no transactions, last write wins
/// across any number of uncoordinated callers.
///

pub trait KvStore {
    /// Read the raw text stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write `value` under `key`, unconditionally overwriting any prior
    /// value.
    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError>;

    /// Remove the value under `key`. Removing an absent key is a no-op.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}
