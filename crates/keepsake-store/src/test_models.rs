//! Record models shared by the unit tests.

use crate::schema::Schema;
use native_db::*;
use native_model::{native_model, Model};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new()
        .register::<Contact>()
        .unwrap()
        .register::<Counter>()
        .unwrap()
});

pub(crate) fn schema() -> &'static Schema {
    &SCHEMA
}

/// Record keyed by a string, with a non-unique secondary key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[native_model(id = 1, version = 1)]
#[native_db]
pub struct Contact {
    #[primary_key]
    pub id: String,
    pub name: String,
    #[secondary_key]
    pub city: String,
}

impl Contact {
    pub fn new(id: &str, name: &str, city: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            city: city.to_string(),
        }
    }
}

/// Record keyed by an integer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[native_model(id = 2, version = 1)]
#[native_db]
pub struct Counter {
    #[primary_key]
    pub id: u64,
    pub value: i64,
}

impl Counter {
    pub fn new(id: u64, value: i64) -> Self {
        Self { id, value }
    }
}

/// Record type deliberately left out of [`schema`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[native_model(id = 3, version = 1)]
#[native_db]
pub struct Unregistered {
    #[primary_key]
    pub id: u64,
}
