//! Store handle and mutating operations.

use crate::config::StoreConfig;
use crate::error::{Error, Result};
use crate::record::{model_name, Persistable};
use crate::schema::Schema;
use native_db::db_type::ToKey;
use native_db::transaction::RwTransaction;
use native_db::*;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Handle to one embedded database.
///
/// Every mutating call runs in its own write transaction. The transaction is
/// committed when the call succeeds and rolled back when it returns an error,
/// so a failed batch leaves nothing behind.
pub struct Store<'a> {
    pub(crate) db: Database<'a>,
    schema: &'a Schema,
}

impl<'a> Store<'a> {
    /// Open or create a database file at the given path.
    pub fn open(schema: &'a Schema, path: impl AsRef<Path>) -> Result<Self> {
        Self::from_config(schema, &StoreConfig::at(path.as_ref()))
    }

    /// Create an in-memory database.
    pub fn in_memory(schema: &'a Schema) -> Result<Self> {
        Self::from_config(schema, &StoreConfig::in_memory())
    }

    /// Open a database as described by `config`.
    pub fn from_config(schema: &'a Schema, config: &StoreConfig) -> Result<Self> {
        let mut builder = Builder::new();
        if let Some(bytes) = config.cache_size {
            builder.set_cache_size(bytes);
        }

        let db = match &config.path {
            Some(path) => {
                if config.create_dirs {
                    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                        fs::create_dir_all(parent)?;
                    }
                }
                let db = builder.create(schema.models(), path)?;
                info!(path = %path.display(), models = schema.len(), "opened store");
                db
            }
            None => {
                let db = builder.create_in_memory(schema.models())?;
                info!(models = schema.len(), "opened in-memory store");
                db
            }
        };

        Ok(Self { db, schema })
    }

    /// The schema this store was opened with.
    pub fn schema(&self) -> &'a Schema {
        self.schema
    }

    /// Insert records without overwriting.
    ///
    /// Fails with [`Error::DuplicateKey`] if any record's primary key is
    /// already stored, or appears twice in `records`. In that case none of
    /// the records are written.
    pub fn write_all<T: Persistable>(&self, records: impl IntoIterator<Item = T>) -> Result<()> {
        let model = model_name::<T>();
        let rw = self.db.rw_transaction()?;
        let mut written = 0usize;
        for record in records {
            if let Err(err) = rw.insert(record) {
                let err = Error::from(err);
                if let Error::DuplicateKey(key) = &err {
                    warn!(model, key = %key, "insert rejected, key already stored");
                }
                return Err(err);
            }
            written += 1;
        }
        rw.commit()?;
        debug!(model, written, "inserted records");
        Ok(())
    }

    /// Insert a single record without overwriting.
    pub fn write<T: Persistable>(&self, record: T) -> Result<()> {
        self.write_all(std::iter::once(record))
    }

    /// Insert records, replacing any stored record with the same primary key.
    pub fn write_or_update_all<T: Persistable>(
        &self,
        records: impl IntoIterator<Item = T>,
    ) -> Result<()> {
        let rw = self.db.rw_transaction()?;
        let mut written = 0usize;
        let mut replaced = 0usize;
        for record in records {
            if rw.upsert(record)?.is_some() {
                replaced += 1;
            }
            written += 1;
        }
        rw.commit()?;
        let model = model_name::<T>();
        debug!(model, written, replaced, "upserted records");
        Ok(())
    }

    /// Insert a single record, replacing any stored record with the same key.
    pub fn write_or_update<T: Persistable>(&self, record: T) -> Result<()> {
        self.write_or_update_all(std::iter::once(record))
    }

    /// Delete every record of type `T`. Returns how many were removed.
    pub fn delete_all<T: Persistable>(&self) -> Result<usize> {
        let rw = self.db.rw_transaction()?;
        let removed = purge::<T>(&rw)?;
        rw.commit()?;
        let model = model_name::<T>();
        debug!(model, removed, "deleted all records");
        Ok(removed)
    }

    /// Delete the stored record sharing `record`'s primary key.
    ///
    /// Returns `false` if nothing is stored under that key.
    pub fn delete<T: Persistable>(&self, record: &T) -> Result<bool> {
        self.delete_by_key::<T>(record.primary_key())
    }

    /// Delete the record of type `T` stored under `key`, if any.
    pub fn delete_by_key<T: Persistable>(&self, key: impl ToKey) -> Result<bool> {
        let rw = self.db.rw_transaction()?;
        let stored: Option<T> = rw.get().primary(key)?;
        let removed = match stored {
            Some(record) => {
                rw.remove(record)?;
                true
            }
            None => false,
        };
        rw.commit()?;
        let model = model_name::<T>();
        debug!(model, removed, "deleted by key");
        Ok(removed)
    }

    /// Delete every record of every registered type in one transaction.
    pub fn delete_everything(&self) -> Result<usize> {
        let rw = self.db.rw_transaction()?;
        let mut total = 0usize;
        for (name, purge) in self.schema.purges() {
            let removed = purge(&rw)?;
            debug!(model = *name, removed, "purged");
            total += removed;
        }
        rw.commit()?;
        info!(removed = total, "deleted everything");
        Ok(total)
    }
}

/// Remove all records of type `T` inside `rw`.
pub(crate) fn purge<T: Persistable>(rw: &RwTransaction<'_>) -> Result<usize> {
    // Collect first; the scan borrows the transaction.
    let stored: Vec<T> = {
        let scan = rw.scan().primary::<T>()?;
        let iter = scan.all()?;
        iter.collect::<std::result::Result<Vec<T>, _>>()?
    };
    let removed = stored.len();
    for record in stored {
        rw.remove(record)?;
    }
    Ok(removed)
}
