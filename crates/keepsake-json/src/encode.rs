//! Encoding any serializable value to JSON

use crate::{Error, Result};
use serde::Serialize;

/// Extension methods for turning a value into JSON.
///
/// Implemented for every `Serialize` type.
pub trait ToJson {
    /// Encode as compact JSON bytes.
    fn to_json_bytes(&self) -> Result<Vec<u8>>;

    /// Encode as a compact JSON string.
    fn to_json_string(&self) -> Result<String> {
        let bytes = self.to_json_bytes()?;
        Ok(String::from_utf8(bytes)?)
    }

    /// Encode as an indented JSON string.
    fn to_json_string_pretty(&self) -> Result<String>;
}

impl<T: Serialize + ?Sized> ToJson for T {
    fn to_json_bytes(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| Error::Encode(e.to_string()))
    }

    fn to_json_string_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Encode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serializer;
    use std::collections::HashMap;

    #[derive(Serialize)]
    struct Contact {
        id: String,
        age: u32,
    }

    struct Unencodable;

    impl Serialize for Unencodable {
        fn serialize<S: Serializer>(&self, _: S) -> std::result::Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("refused"))
        }
    }

    #[test]
    fn test_to_json_string() {
        let contact = Contact {
            id: "ada".to_string(),
            age: 36,
        };
        assert_eq!(contact.to_json_string().unwrap(), r#"{"id":"ada","age":36}"#);
    }

    #[test]
    fn test_to_json_bytes_matches_string() {
        let values = vec![1, 2, 3];
        assert_eq!(values.to_json_bytes().unwrap(), b"[1,2,3]".to_vec());
    }

    #[test]
    fn test_unsized_values() {
        assert_eq!("hi".to_json_string().unwrap(), r#""hi""#);
        let slice: &[u8] = &[1, 2];
        assert_eq!(slice.to_json_string().unwrap(), "[1,2]");
    }

    #[test]
    fn test_pretty() {
        let mut map = HashMap::new();
        map.insert("k", 1);
        assert_eq!(map.to_json_string_pretty().unwrap(), "{\n  \"k\": 1\n}");
    }

    #[test]
    fn test_encode_error() {
        let err = Unencodable.to_json_bytes().unwrap_err();
        assert!(matches!(err, Error::Encode(ref m) if m.contains("refused")));
    }

    #[test]
    fn test_non_string_map_keys_fail() {
        let mut map = HashMap::new();
        map.insert(vec![1u8], 1);
        assert!(matches!(map.to_json_string(), Err(Error::Encode(_))));
    }
}
