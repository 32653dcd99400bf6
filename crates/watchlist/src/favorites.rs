//! The bookmarked coins, mirrored to a [`KeyValueStore`] after every change.

use std::collections::HashSet;

use log::{debug, info, warn};
use shared::CoinRecord;

use crate::error::Result;
use crate::storage::KeyValueStore;

/// Storage key holding the serialized favorites list.
pub const FAVORITES_KEY: &str = "favorites";

/// Ordered, id-unique favorites list. Insertion order is display order.
#[derive(Debug)]
pub struct FavoritesStore<S> {
    storage: S,
    entries: Vec<CoinRecord>,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    /// Load the persisted list. Missing or unreadable data gives an empty list.
    pub fn load(storage: S) -> Self {
        let entries = match storage.get_item(FAVORITES_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<CoinRecord>>(&raw) {
                Ok(entries) => dedupe(entries),
                Err(e) => {
                    warn!("Stored favorites are malformed, starting empty: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Could not read stored favorites, starting empty: {}", e);
                Vec::new()
            }
        };

        info!("Loaded {} favorites", entries.len());
        FavoritesStore { storage, entries }
    }

    pub fn entries(&self) -> &[CoinRecord] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|coin| coin.id == id)
    }

    /// Append `coin` unless its id is already present. Returns whether the
    /// list changed.
    pub fn add(&mut self, coin: CoinRecord) -> Result<bool> {
        if self.contains(&coin.id) {
            debug!("Favorite {} already present", coin.id);
            return Ok(false);
        }

        let mut next = self.entries.clone();
        info!("Adding favorite {} ({})", coin.id, coin.name);
        next.push(coin);
        self.commit(next)?;
        Ok(true)
    }

    /// Drop the entry with `id`. Returns whether the list changed.
    pub fn remove(&mut self, id: &str) -> Result<bool> {
        if !self.contains(id) {
            debug!("Favorite {} not present, nothing to remove", id);
            return Ok(false);
        }

        let next: Vec<CoinRecord> = self
            .entries
            .iter()
            .filter(|coin| coin.id != id)
            .cloned()
            .collect();
        info!("Removing favorite {}", id);
        self.commit(next)?;
        Ok(true)
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    // Persist first so memory never runs ahead of what a reload would see
    fn commit(&mut self, next: Vec<CoinRecord>) -> Result<()> {
        let serialized = serde_json::to_string(&next)?;
        self.storage.set_item(FAVORITES_KEY, &serialized)?;
        self.entries = next;
        Ok(())
    }
}

fn dedupe(entries: Vec<CoinRecord>) -> Vec<CoinRecord> {
    let mut seen = HashSet::new();
    let before = entries.len();
    let unique: Vec<CoinRecord> = entries
        .into_iter()
        .filter(|coin| seen.insert(coin.id.clone()))
        .collect();
    if unique.len() != before {
        warn!("Dropped {} duplicate stored favorites", before - unique.len());
    }
    unique
}
