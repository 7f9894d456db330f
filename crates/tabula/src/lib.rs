//! Tabula persists per-collection presentation preferences for admin
//! panel listings: which properties are visible, their order and widths,
//! and the preferred row size. Entries are keyed by the collection's
//! path with every entity id stripped, so preferences follow the
//! collection type rather than any single entity.
//!
//! ## Crate layout
//! - `core`: runtime paths and derived keys, the config model, the JSON
//!   codec, host store backends, and observability counters.
//! - this crate: the stable caller-facing surface — [`Configs`],
//!   [`Error`], and the `prelude`.

pub use tabula_core as core;

mod configs;
mod error;

pub use configs::Configs;
pub use error::{Error, ErrorKind, ErrorOrigin, StoreErrorKind};

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        Configs, Error,
        core::{
            db::store::{FileStore, KvStore, MemoryStore},
            model::{CollectionConfig, CollectionSize},
            path::{CollectionPath, StorageKey},
        },
    };
}
