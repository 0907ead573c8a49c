//! Address Book Example
//!
//! Demonstrates keepsake with a small contact list: inserts, upserts,
//! predicate and secondary-key lookups, JSON export, and cleanup.
//!
//! Pass a RON store config as the first argument to use a database file;
//! without one the store is kept in memory. Set `RUST_LOG=debug` to see
//! every transaction.

use keepsake_json::{FromJson, ToJson};
use keepsake_store::{Error, Schema, Store, StoreConfig};
use native_db::*;
use native_model::{native_model, Model};
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[native_model(id = 1, version = 1)]
#[native_db]
struct Contact {
    #[primary_key]
    id: String,
    name: String,
    #[secondary_key]
    city: String,
    phone: Option<String>,
}

impl Contact {
    fn new(id: &str, name: &str, city: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            city: city.to_string(),
            phone: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[native_model(id = 2, version = 1)]
#[native_db]
struct Visit {
    #[primary_key]
    id: u64,
    contact_id: String,
    note: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Keepsake Address Book Example ===\n");

    let config = match std::env::args().nth(1) {
        Some(path) => StoreConfig::from_file(path)?,
        None => StoreConfig::in_memory(),
    };

    let schema = Schema::new().register::<Contact>()?.register::<Visit>()?;
    let store = Store::from_config(&schema, &config)?;

    // Seed contacts
    store.write_all(vec![
        Contact::new("ada", "Ada Lovelace", "London"),
        Contact::new("alan", "Alan Turing", "Wilmslow"),
        Contact::new("tim", "Tim Berners-Lee", "London"),
    ])?;
    println!("Stored {} contacts", store.count::<Contact>()?);

    // Plain insert refuses to overwrite
    match store.write(Contact::new("ada", "Someone Else", "Paris")) {
        Err(Error::DuplicateKey(key)) => println!("Rejected duplicate: {}", key),
        other => other?,
    }

    // Upsert replaces
    let mut ada = Contact::new("ada", "Ada King", "Ockham");
    ada.phone = Some("+44 20 0000 0000".to_string());
    store.write_or_update(ada)?;

    store.write_all((1..=3).map(|i| Visit {
        id: i,
        contact_id: "alan".to_string(),
        note: format!("visit #{}", i),
    }))?;

    // Lookups
    if let Some(ada) = store.find_by_key::<Contact>("ada".to_string())? {
        println!("ada -> {} ({})", ada.name, ada.city);
    }
    let londoners: Vec<Contact> =
        store.find_all_by_secondary(ContactKey::city, "London".to_string())?;
    let names: Vec<&str> = londoners.iter().map(|c| c.name.as_str()).collect();
    println!("In London: {:?}", names);

    let with_phone: Vec<Contact> = store.find_all_where(|c: &Contact| c.phone.is_some())?;
    println!("With phone: {}", with_phone.len());

    let latest: Option<Visit> = store.find_where(|v: &Visit| v.contact_id == "alan" && v.id > 1)?;
    if let Some(visit) = latest {
        println!("Alan visit after the first: {}", visit.note);
    }

    // JSON export and import
    let contacts = store.find_all::<Contact>()?;
    let json = contacts.to_json_string_pretty()?;
    println!("\nExported contacts:\n{}\n", json);
    let restored: Vec<Contact> = json.from_json()?;
    println!("Re-imported {} contacts, identical: {}", restored.len(), restored == contacts);

    // Cleanup
    store.delete_by_key::<Contact>("tim".to_string())?;
    let removed_again = store.delete_by_key::<Contact>("tim".to_string())?;
    println!("Deleted tim; deleting again removed anything: {}", removed_again);
    println!("Removed {} visits", store.delete_all::<Visit>()?);
    println!("Removed {} remaining records", store.delete_everything()?);

    Ok(())
}
