//! The fixed set of decks the app ships with.

mod builtin;

use std::collections::HashSet;
use thiserror::Error;

use crate::model::{Deck, DeckKey};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog must contain at least one deck")]
    Empty,

    #[error("duplicate deck key: {0}")]
    DuplicateKey(DeckKey),
}

/// One deck together with the key it is filed under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    key: DeckKey,
    deck: Deck,
}

impl CatalogEntry {
    #[must_use]
    pub fn key(&self) -> &DeckKey {
        &self.key
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }
}

/// Ordered, immutable mapping from deck key to deck.
///
/// Never empty. The first entry is the default deck used whenever a requested
/// key is missing or unknown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckCatalog {
    entries: Vec<CatalogEntry>,
}

impl DeckCatalog {
    /// Builds a catalog in the given order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Empty` for no decks and
    /// `CatalogError::DuplicateKey` when two decks share a key.
    pub fn new(decks: Vec<(DeckKey, Deck)>) -> Result<Self, CatalogError> {
        if decks.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(decks.len());
        let mut entries = Vec::with_capacity(decks.len());
        for (key, deck) in decks {
            if !seen.insert(key.clone()) {
                return Err(CatalogError::DuplicateKey(key));
            }
            entries.push(CatalogEntry { key, deck });
        }

        Ok(Self { entries })
    }

    /// The decks bundled with the application.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            entries: builtin::entries(),
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn default_entry(&self) -> &CatalogEntry {
        &self.entries[0]
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&CatalogEntry> {
        let key = key.trim();
        self.entries.iter().find(|entry| entry.key.as_str() == key)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Looks up `requested`, falling back to the default deck when it is
    /// absent or names no deck in this catalog.
    #[must_use]
    pub fn resolve(&self, requested: Option<&str>) -> &CatalogEntry {
        requested
            .and_then(|key| self.get(key))
            .unwrap_or_else(|| self.default_entry())
    }

    /// `(key, title)` pairs in catalog order, for deck pickers.
    pub fn titles(&self) -> impl Iterator<Item = (&DeckKey, &str)> + '_ {
        self.entries
            .iter()
            .map(|entry| (&entry.key, entry.deck.title()))
    }
}
