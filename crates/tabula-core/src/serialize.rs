mod json;

use crate::error::{ErrorClass, ErrorOrigin, InternalError};
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error as ThisError;

///
/// SerializeError
///

#[derive(Debug, ThisError)]
pub enum SerializeError {
    #[error("serialize error: {0}")]
    Serialize(String),
    #[error("deserialize error: {0}")]
    Deserialize(String),
}

impl SerializeError {
    pub(crate) const fn class(&self) -> ErrorClass {
        match self {
            Self::Serialize(_) => ErrorClass::Internal,
            Self::Deserialize(_) => ErrorClass::Corruption,
        }
    }
}

impl From<SerializeError> for InternalError {
    fn from(err: SerializeError) -> Self {
        Self::new(err.class(), ErrorOrigin::Serialize, err.to_string())
    }
}

/// Serialize a value into the JSON text persisted in the host store.
///
/// This helper keeps the error type aligned with the rest of `tabula`.
pub fn serialize<T>(ty: &T) -> Result<String, SerializeError>
where
    T: Serialize,
{
    json::serialize(ty)
}

/// Deserialize a value produced by [`serialize`].
pub fn deserialize<T>(text: &str) -> Result<T, SerializeError>
where
    T: DeserializeOwned,
{
    json::deserialize(text)
}
