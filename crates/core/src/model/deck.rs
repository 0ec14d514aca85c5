use thiserror::Error;

use crate::model::card::Card;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("deck title cannot be empty")]
    EmptyTitle,

    #[error("deck must contain at least one card")]
    NoCards,
}

//
// ─── DECK ──────────────────────────────────────────────────────────────────────
//

/// A titled, ordered collection of cards.
///
/// A deck always has at least one card, so `last_index` is always valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    title: String,
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a deck.
    ///
    /// # Errors
    ///
    /// Returns `DeckError::EmptyTitle` for a blank title and
    /// `DeckError::NoCards` when `cards` is empty.
    pub fn new(title: impl Into<String>, cards: Vec<Card>) -> Result<Self, DeckError> {
        let title = title.into().trim().to_owned();
        if title.is_empty() {
            return Err(DeckError::EmptyTitle);
        }
        if cards.is_empty() {
            return Err(DeckError::NoCards);
        }
        Ok(Self { title, cards })
    }

    /// Builds a deck from trusted static data. Caller guarantees a non-empty
    /// title and at least one card.
    pub(crate) fn from_static(title: &str, cards: Vec<Card>) -> Self {
        Self {
            title: title.to_owned(),
            cards,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Index of the final card.
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.cards.len() - 1
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
