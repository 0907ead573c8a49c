//! Keepsake Store - typed persistence gateway over native_db
//!
//! Generic create/read/update/delete helpers keyed by record type, primary
//! key, secondary key or predicate, so call sites never spell out
//! transactions themselves.
//!
//! # Example
//!
//! ```rust,ignore
//! use keepsake_store::{Schema, Store};
//!
//! let schema = Schema::new().register::<Contact>()?;
//! let store = Store::in_memory(&schema)?;
//!
//! store.write(Contact::new("ada", "Ada Lovelace", "London"))?;
//! store.write_or_update(Contact::new("ada", "Ada King", "Ockham"))?;
//!
//! let ada: Option<Contact> = store.find_by_key("ada")?;
//! let londoners: Vec<Contact> = store.find_all_where(|c: &Contact| c.city == "London")?;
//! store.delete_everything()?;
//! ```

mod config;
mod error;
mod queries;
mod record;
mod schema;
mod store;

#[cfg(test)]
mod test_models;

pub use config::StoreConfig;
pub use error::{Error, Result};
pub use record::Persistable;
pub use schema::Schema;
pub use store::Store;
