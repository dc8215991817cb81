//! Favorites: a persisted set of prayer names.
//!
//! Persistence is behind the `FavoritesStore` trait so frontends can plug
//! in their own backing store and tests can run against an in-memory one.
//! The persisted form is a JSON array of name strings; insertion order is
//! kept but carries no meaning.

use crate::error::Result;

/// Key-value persistence for the favorites list.
///
/// Writers do a plain read-modify-write with no concurrency control; if two
/// writers race, the last save wins.
pub trait FavoritesStore {
    /// Load the persisted names. Missing or malformed data loads as empty.
    fn load(&self) -> Result<Vec<String>>;

    /// Persist the full list, replacing whatever was stored.
    fn save(&self, names: &[String]) -> Result<()>;
}

/// Add `name` to the favorites if it is not already present.
///
/// Returns `true` when the name was newly added and persisted, `false` when
/// it was already a favorite (silent no-op, nothing is written).
pub fn add_to_favorites(store: &dyn FavoritesStore, name: &str) -> Result<bool> {
    let mut favorites = store.load()?;
    if favorites.iter().any(|existing| existing == name) {
        tracing::debug!(name, "already a favorite, skipping");
        return Ok(false);
    }

    favorites.push(name.to_string());
    store.save(&favorites)?;
    tracing::debug!(name, count = favorites.len(), "added favorite");
    Ok(true)
}

/// Decode a persisted favorites payload, tolerating bad data.
///
/// Anything that does not decode as a JSON array of strings is treated as
/// an empty list rather than an error.
#[must_use]
pub fn parse_favorites(raw: &str) -> Vec<String> {
    serde_json::from_str(raw).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    /// In-memory store for exercising the add operation without a backend.
    #[derive(Default)]
    struct MemoryStore {
        raw: RefCell<Option<String>>,
    }

    impl MemoryStore {
        fn with_raw(raw: &str) -> Self {
            Self {
                raw: RefCell::new(Some(raw.to_string())),
            }
        }
    }

    impl FavoritesStore for MemoryStore {
        fn load(&self) -> Result<Vec<String>> {
            Ok(self
                .raw
                .borrow()
                .as_deref()
                .map(parse_favorites)
                .unwrap_or_default())
        }

        fn save(&self, names: &[String]) -> Result<()> {
            *self.raw.borrow_mut() = Some(serde_json::to_string(names)?);
            Ok(())
        }
    }

    #[test]
    fn add_persists_new_name() {
        let store = MemoryStore::default();
        assert!(add_to_favorites(&store, "हनुमान चालीसा").unwrap());
        assert_eq!(store.load().unwrap(), vec!["हनुमान चालीसा".to_string()]);
    }

    #[test]
    fn adding_twice_keeps_exactly_one_copy() {
        let store = MemoryStore::default();
        assert!(add_to_favorites(&store, "गायत्री मंत्र").unwrap());
        assert!(!add_to_favorites(&store, "गायत्री मंत्र").unwrap());
        assert_eq!(store.load().unwrap(), vec!["गायत्री मंत्र".to_string()]);
    }

    #[test]
    fn add_keeps_existing_names() {
        let store = MemoryStore::with_raw(r#"["जय गणेश देवा"]"#);
        assert!(add_to_favorites(&store, "दुर्गा चालीसा").unwrap());
        assert_eq!(
            store.load().unwrap(),
            vec!["जय गणेश देवा".to_string(), "दुर्गा चालीसा".to_string()]
        );
    }

    #[test]
    fn malformed_payload_loads_as_empty() {
        assert_eq!(parse_favorites("not json at all"), Vec::<String>::new());
        assert_eq!(parse_favorites(r#"{"wrong":"shape"}"#), Vec::<String>::new());
        assert_eq!(parse_favorites("[1,2,3]"), Vec::<String>::new());
    }

    #[test]
    fn add_recovers_from_malformed_store() {
        let store = MemoryStore::with_raw("{{corrupt");
        assert!(add_to_favorites(&store, "शिव भक्ति").unwrap());
        assert_eq!(store.load().unwrap(), vec!["शिव भक्ति".to_string()]);
    }
}
