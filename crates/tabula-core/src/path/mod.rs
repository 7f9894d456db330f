
use crate::{
    PATH_SEPARATOR, STORAGE_KEY_PREFIX,
    error::{ErrorClass, ErrorOrigin, InternalError},
};
use derive_more::Display;
use std::str::FromStr;
use thiserror::Error as ThisError;

///
/// PathError
///
/// Errors returned when constructing a collection path.
///

#[derive(Debug, ThisError)]
pub enum PathError {
    #[error("collection path is empty")]
    Empty,
}

impl PathError {
    pub(crate) const fn class() -> ErrorClass {
        ErrorClass::InvariantViolation
    }
}

impl From<PathError> for InternalError {
    fn from(err: PathError) -> Self {
        Self::new(PathError::class(), ErrorOrigin::Path, err.to_string())
    }
}

///
/// CollectionPath
///
/// Slash-delimited route alternating collection-name and entity-id
/// segments, starting with a collection name:
/// `products/B44RG6APH/locales` addresses the `locales` subcollection of
/// one product entity.
///
/// Segmentation is the only validation performed. The empty string is
/// rejected; anything else splits on `/` as-is, so interior empty
/// segments survive untouched.
///

#[derive(Clone, Debug, Display, Eq, Hash, PartialEq)]
pub struct CollectionPath(String);

impl CollectionPath {
    pub fn new(path: impl Into<String>) -> Result<Self, PathError> {
        let path = path.into();
        if path.is_empty() {
            return Err(PathError::Empty);
        }

        Ok(Self(path))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// All segments, in order.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(PATH_SEPARATOR)
    }

    /// Collection-name segments (even positions, 0-indexed).
    pub fn collection_segments(&self) -> impl Iterator<Item = &str> {
        self.segments().step_by(2)
    }

    /// Entity-id segments (odd positions, 0-indexed).
    pub fn entity_ids(&self) -> impl Iterator<Item = &str> {
        self.segments().skip(1).step_by(2)
    }

    /// Derive the id-free storage key this path's config is persisted
    /// under.
    #[must_use]
    pub fn storage_key(&self) -> StorageKey {
        StorageKey::derive(self)
    }
}

impl FromStr for CollectionPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

///
/// StorageKey
///
/// Namespaced, id-free identity for a persisted collection config.
///
/// Derived deterministically by discarding every entity-id segment of a
/// collection path and prefixing the remainder, so any two paths that
/// differ only in their ids share one key: configuration is per
/// collection type, not per entity instance.
///
/// This type defines the *only* persisted key layout. It is deliberately
/// separated from the caller-facing path.
///

#[derive(Clone, Debug, Display, Eq, Hash, PartialEq)]
pub struct StorageKey(String);

impl StorageKey {
    /// Strip entity ids from `path` and prepend the namespace prefix.
    #[must_use]
    pub fn derive(path: &CollectionPath) -> Self {
        let stripped = path
            .collection_segments()
            .collect::<Vec<_>>()
            .join(&PATH_SEPARATOR.to_string());

        Self(format!("{STORAGE_KEY_PREFIX}{stripped}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
