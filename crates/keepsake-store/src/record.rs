//! The capability every stored model implements.

use native_db::db_type::{Key, ToInput};

/// A record type the store can hold.
///
/// Every `native_db` model (`#[native_model]` + `#[native_db]` with a
/// `#[primary_key]` field) is persistable. The primary key always comes from
/// the engine's own key field, so the gateway and the engine cannot disagree
/// about which record a value refers to. Models without a primary key do not
/// compile under `#[native_db]`.
///
/// ```rust,ignore
/// #[derive(Debug, Clone, Serialize, Deserialize)]
/// #[native_model(id = 1, version = 1)]
/// #[native_db]
/// pub struct Contact {
///     #[primary_key]
///     pub id: String,
///     pub name: String,
/// }
/// ```
pub trait Persistable: ToInput {
    /// The engine key of this record's `#[primary_key]` field.
    fn primary_key(&self) -> Key {
        self.native_db_primary_key()
    }
}

impl<T: ToInput> Persistable for T {}

/// Short type name used in log events and error messages.
///
/// Generic arguments are dropped, so `Wrapper<app::Note>` is `Wrapper`.
pub(crate) fn model_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
