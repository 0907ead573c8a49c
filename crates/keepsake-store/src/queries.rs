//! Read-side queries.

use crate::error::Result;
use crate::record::Persistable;
use crate::store::Store;
use native_db::db_type::{KeyOptions, ToKey, ToKeyDefinition};

impl Store<'_> {
    /// First record of type `T` in primary-key order.
    pub fn find<T: Persistable>(&self) -> Result<Option<T>> {
        let r = self.db.r_transaction()?;
        let scan = r.scan().primary::<T>()?;
        let mut iter = scan.all()?;
        let first = iter.next().transpose()?;
        Ok(first)
    }

    /// All records of type `T` in primary-key order.
    ///
    /// An empty collection yields an empty `Vec`.
    pub fn find_all<T: Persistable>(&self) -> Result<Vec<T>> {
        let r = self.db.r_transaction()?;
        let scan = r.scan().primary::<T>()?;
        let iter = scan.all()?;
        let records = iter.collect::<std::result::Result<Vec<T>, _>>()?;
        Ok(records)
    }

    /// First record of type `T` matching `predicate`.
    pub fn find_where<T, P>(&self, predicate: P) -> Result<Option<T>>
    where
        T: Persistable,
        P: Fn(&T) -> bool,
    {
        let r = self.db.r_transaction()?;
        let scan = r.scan().primary::<T>()?;
        for record in scan.all()? {
            let record = record?;
            if predicate(&record) {
                return Ok(Some(record));
            }
        }
        Ok(None)
    }

    /// All records of type `T` matching `predicate`, in primary-key order.
    pub fn find_all_where<T, P>(&self, predicate: P) -> Result<Vec<T>>
    where
        T: Persistable,
        P: Fn(&T) -> bool,
    {
        let r = self.db.r_transaction()?;
        let scan = r.scan().primary::<T>()?;
        let mut matches = Vec::new();
        for record in scan.all()? {
            let record = record?;
            if predicate(&record) {
                matches.push(record);
            }
        }
        Ok(matches)
    }

    /// Look up a record by primary key.
    pub fn find_by_key<T: Persistable>(&self, key: impl ToKey) -> Result<Option<T>> {
        let r = self.db.r_transaction()?;
        let record: Option<T> = r.get().primary(key)?;
        Ok(record)
    }

    /// Whether a record of type `T` is stored under `key`.
    pub fn exists<T: Persistable>(&self, key: impl ToKey) -> Result<bool> {
        Ok(self.find_by_key::<T>(key)?.is_some())
    }

    /// Number of stored records of type `T`.
    pub fn count<T: Persistable>(&self) -> Result<usize> {
        let r = self.db.r_transaction()?;
        let len = r.len().primary::<T>()?;
        Ok(len as usize)
    }

    /// All records of type `T` whose secondary key `key_def` equals `value`.
    ///
    /// `key_def` is one of the key variants the model derive generates, e.g.
    /// `ContactKey::city`.
    pub fn find_all_by_secondary<T, K>(
        &self,
        key_def: impl ToKeyDefinition<KeyOptions>,
        value: K,
    ) -> Result<Vec<T>>
    where
        T: Persistable,
        K: ToKey + Clone,
    {
        let r = self.db.r_transaction()?;
        let scan = r.scan().secondary::<T>(key_def)?;
        let iter = scan.range(value.clone()..=value)?;
        let records = iter.collect::<std::result::Result<Vec<T>, _>>()?;
        Ok(records)
    }

    /// First record of type `T` whose secondary key `key_def` equals `value`.
    pub fn find_by_secondary<T, K>(
        &self,
        key_def: impl ToKeyDefinition<KeyOptions>,
        value: K,
    ) -> Result<Option<T>>
    where
        T: Persistable,
        K: ToKey + Clone,
    {
        let r = self.db.r_transaction()?;
        let scan = r.scan().secondary::<T>(key_def)?;
        let mut iter = scan.range(value.clone()..=value)?;
        let first = iter.next().transpose()?;
        Ok(first)
    }
}
