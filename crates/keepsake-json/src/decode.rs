//! Decoding JSON buffers into typed values

use crate::{Error, Result};
use serde::de::DeserializeOwned;

/// Extension methods for parsing JSON input into a typed value.
pub trait FromJson {
    /// Decode `self` as JSON into a `T`.
    fn from_json<T: DeserializeOwned>(&self) -> Result<T>;
}

impl FromJson for [u8] {
    fn from_json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(self).map_err(Error::decode)
    }
}

impl FromJson for Vec<u8> {
    fn from_json<T: DeserializeOwned>(&self) -> Result<T> {
        self.as_slice().from_json()
    }
}

impl FromJson for str {
    fn from_json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(self).map_err(Error::decode)
    }
}

impl FromJson for String {
    fn from_json<T: DeserializeOwned>(&self) -> Result<T> {
        self.as_str().from_json()
    }
}
