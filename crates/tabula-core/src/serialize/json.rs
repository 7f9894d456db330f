use crate::{db::configs::MAX_CONFIG_BYTES, serialize::SerializeError};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{from_str, to_string};

/// Serialize a value into JSON text.
pub(super) fn serialize<T>(t: &T) -> Result<String, SerializeError>
where
    T: Serialize,
{
    to_string(t).map_err(|e| SerializeError::Serialize(e.to_string()))
}

/// Deserialize JSON text into a value.
///
/// Input size is bounded before decode so a corrupted host store cannot
/// make the parser chew on arbitrarily large garbage.
pub(super) fn deserialize<T>(text: &str) -> Result<T, SerializeError>
where
    T: DeserializeOwned,
{
    if text.len() > MAX_CONFIG_BYTES {
        return Err(SerializeError::Deserialize(
            "payload exceeds maximum allowed size".into(),
        ));
    }

    from_str(text).map_err(|e| SerializeError::Deserialize(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CollectionConfig;

    #[test]
    fn malformed_text_is_a_deserialize_error() {
        let err = deserialize::<CollectionConfig>("definitely not json").unwrap_err();

        assert!(matches!(err, SerializeError::Deserialize(_)));
    }

    #[test]
    fn oversized_text_is_rejected_before_decode() {
        let text = format!("\"{}\"", "x".repeat(MAX_CONFIG_BYTES + 1));
        let err = deserialize::<String>(&text).unwrap_err();

        assert!(matches!(err, SerializeError::Deserialize(_)));
    }
}
