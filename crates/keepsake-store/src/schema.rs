//! Registry of the record types a store can hold.

use crate::error::{Error, Result};
use crate::record::{model_name, Persistable};
use crate::store::purge;
use native_db::transaction::RwTransaction;
use native_db::Models;
use native_model::Model;
use std::fmt;

/// Removes every record of one type inside an open write transaction.
pub(crate) type Purge = fn(&RwTransaction<'_>) -> Result<usize>;

/// Set of record types known to a [`Store`](crate::Store).
///
/// The engine needs every model defined before a database is opened, and a
/// store borrows its schema for as long as it lives, so schemas are usually
/// built once and kept in a `static`:
///
/// ```rust,ignore
/// static SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
///     Schema::new()
///         .register::<Contact>()
///         .and_then(|s| s.register::<Note>())
///         .unwrap()
/// });
/// ```
pub struct Schema {
    models: Models,
    purges: Vec<(&'static str, Purge)>,
    // (native_model id, version) of every registered type
    versions: Vec<(u32, u32)>,
}

impl Schema {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self {
            models: Models::new(),
            purges: Vec::new(),
            versions: Vec::new(),
        }
    }

    /// Register a record type.
    ///
    /// Fails with [`Error::Schema`] if a type with the same native model id
    /// and version is already registered; the engine would panic on it.
    pub fn register<T: Persistable>(mut self) -> Result<Self> {
        let version = (T::native_model_id(), T::native_model_version());
        if self.versions.contains(&version) {
            return Err(Error::Schema(format!(
                "{}: model id {} version {} is already registered",
                model_name::<T>(),
                version.0,
                version.1
            )));
        }
        self.models
            .define::<T>()
            .map_err(|e| Error::Schema(format!("{}: {}", model_name::<T>(), e)))?;
        self.purges.push((model_name::<T>(), purge::<T> as Purge));
        self.versions.push(version);
        Ok(self)
    }

    /// Number of registered record types.
    pub fn len(&self) -> usize {
        self.purges.len()
    }

    /// Whether no record type has been registered.
    pub fn is_empty(&self) -> bool {
        self.purges.is_empty()
    }

    /// Names of the registered record types, in registration order.
    pub fn model_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.purges.iter().map(|(name, _)| *name)
    }

    pub(crate) fn models(&self) -> &Models {
        &self.models
    }

    pub(crate) fn purges(&self) -> impl Iterator<Item = &(&'static str, Purge)> {
        self.purges.iter()
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("models", &self.purges.iter().map(|(n, _)| n).collect::<Vec<_>>())
            .finish()
    }
}
