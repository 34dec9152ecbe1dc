use crate::client::storage::KeyValueStore;
use std::collections::BTreeSet;

/// Storage key holding the JSON array of favorite hospital ids
pub const FAVORITES_STORAGE_KEY: &str = "tw-hospital-favorites";

/// Client-side set of favorite hospital ids
///
/// Membership is independent of any search filter. Storage failures never
/// reach the caller: unreadable or corrupt entries load as an empty set and
/// failed writes leave the in-memory set authoritative for the session.
#[derive(Debug)]
pub struct FavoritesStore<S: KeyValueStore> {
    storage: S,
    ids: BTreeSet<String>,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    /// Load favorites from storage
    pub fn load(storage: S) -> Self {
        let ids = match storage.get(FAVORITES_STORAGE_KEY) {
            Ok(Some(json)) => match serde_json::from_str::<Vec<String>>(&json) {
                Ok(ids) => ids.into_iter().collect(),
                Err(e) => {
                    tracing::debug!("Ignoring corrupt favorites entry: {}", e);
                    BTreeSet::new()
                }
            },
            Ok(None) => BTreeSet::new(),
            Err(e) => {
                tracing::debug!("Favorites storage unreadable, starting empty: {}", e);
                BTreeSet::new()
            }
        };

        Self { storage, ids }
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Flip membership of `id` and persist the whole set
    ///
    /// Returns whether `id` is a favorite afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        let now_favorite = if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        };

        self.persist();
        now_favorite
    }

    pub fn count(&self) -> usize {
        self.ids.len()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    fn persist(&self) {
        let ids: Vec<&str> = self.ids().collect();
        let result = serde_json::to_string(&ids)
            .map_err(|e| e.to_string())
            .and_then(|json| {
                self.storage
                    .set(FAVORITES_STORAGE_KEY, &json)
                    .map_err(|e| e.to_string())
            });

        if let Err(e) = result {
            tracing::debug!("Failed to persist favorites: {}", e);
        }
    }
}
