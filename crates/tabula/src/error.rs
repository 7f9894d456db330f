use derive_more::Display;
use serde::{Deserialize, Serialize};
use tabula_core::{
    error::{ErrorClass, ErrorOrigin as CoreErrorOrigin, InternalError},
    path::PathError,
};
use thiserror::Error as ThisError;

///
/// Error
/// Public error type with a stable kind + origin taxonomy.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, ThisError)]
#[error("{message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub origin: ErrorOrigin,
    pub message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            kind,
            origin,
            message: message.into(),
        }
    }
}

impl From<InternalError> for Error {
    fn from(err: InternalError) -> Self {
        let kind = match (err.class, err.origin) {
            (ErrorClass::Corruption, CoreErrorOrigin::Serialize) => ErrorKind::Parse,
            (ErrorClass::Unavailable, _) => ErrorKind::Store(StoreErrorKind::Unavailable),
            (ErrorClass::CapacityExceeded, _) => ErrorKind::Store(StoreErrorKind::QuotaExceeded),
            (ErrorClass::Unsupported, CoreErrorOrigin::Store) => {
                ErrorKind::Store(StoreErrorKind::ValueTooLarge)
            }
            (ErrorClass::InvariantViolation, CoreErrorOrigin::Path) => ErrorKind::Path,
            _ => ErrorKind::Internal,
        };

        Self::new(kind, err.origin.into(), err.message)
    }
}

impl From<PathError> for Error {
    fn from(err: PathError) -> Self {
        Self::new(ErrorKind::Path, ErrorOrigin::Path, err.to_string())
    }
}

///
/// ErrorKind
/// Public error taxonomy for callers.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ErrorKind {
    /// Stored text under the derived key is not valid serialized data.
    Parse,

    /// The collection path failed validation.
    Path,

    /// The host store rejected the access.
    Store(StoreErrorKind),

    /// The caller cannot remediate this.
    Internal,
}

///
/// StoreErrorKind
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum StoreErrorKind {
    /// Store disabled, unreadable, or otherwise gone.
    Unavailable,

    /// No room left for the write.
    QuotaExceeded,

    /// A single config too large to persist.
    ValueTooLarge,
}

///
/// ErrorOrigin
/// Public origin taxonomy for callers.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum ErrorOrigin {
    Path,
    Serialize,
    Store,
}

impl From<CoreErrorOrigin> for ErrorOrigin {
    fn from(origin: CoreErrorOrigin) -> Self {
        match origin {
            CoreErrorOrigin::Path => Self::Path,
            CoreErrorOrigin::Serialize => Self::Serialize,
            CoreErrorOrigin::Store => Self::Store,
        }
    }
}
