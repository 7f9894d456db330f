//! Core runtime for Tabula: collection paths and derived storage keys, the
//! presentation config model, the JSON codec, host store backends, and the
//! observability counters.

pub mod db;
pub mod error;
pub mod model;
pub mod obs;
pub mod path;
pub mod serialize;

// test
#[cfg(test)]
pub(crate) mod test_support;

///
/// CONSTANTS
///

/// Prefix namespacing every persisted collection config entry in the host
/// key-value store.
///
/// This prefix is part of the persisted layout. DO NOT CHANGE without
/// migrating existing stores.
pub const STORAGE_KEY_PREFIX: &str = "collection_config_";

/// Separator between collection path segments.
pub const PATH_SEPARATOR: char = '/';

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, stores, serializers, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        model::{CollectionConfig, CollectionSize},
        path::{CollectionPath, StorageKey},
    };
}
