use std::sync::Arc;

use flash_core::model::{AppState, Deck, DeckKey, DeckProgress};
use storage::repository::{InMemoryRepository, StateSlotRepository};

use crate::error::ProgressStoreError;

/// Slot the app state is stored under unless configured otherwise.
pub const DEFAULT_SLOT_KEY: &str = "flashcards_app_state_v1";

/// Loads and saves `AppState` as JSON in a single storage slot.
///
/// Persistence is best effort: `load` falls back to a fresh state and `save`
/// drops the write, logging a warning either way.
#[derive(Clone)]
pub struct ProgressStore {
    slots: Arc<dyn StateSlotRepository>,
    slot_key: String,
}

impl ProgressStore {
    #[must_use]
    pub fn new(slots: Arc<dyn StateSlotRepository>) -> Self {
        Self {
            slots,
            slot_key: DEFAULT_SLOT_KEY.to_owned(),
        }
    }

    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryRepository::new()))
    }

    #[must_use]
    pub fn with_slot_key(mut self, slot_key: impl Into<String>) -> Self {
        self.slot_key = slot_key.into();
        self
    }

    #[must_use]
    pub fn slot_key(&self) -> &str {
        &self.slot_key
    }

    /// Read the persisted state.
    ///
    /// Returns `Ok(None)` when nothing (or only whitespace) has been stored.
    ///
    /// # Errors
    ///
    /// Returns `ProgressStoreError` if the slot cannot be read or decoded.
    pub async fn try_load(&self) -> Result<Option<AppState>, ProgressStoreError> {
        let Some(raw) = self.slots.read_slot(&self.slot_key).await? else {
            return Ok(None);
        };
        if raw.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&raw)?))
    }

    /// Persisted state, or the default state if there is none or it is unreadable.
    pub async fn load(&self) -> AppState {
        match self.try_load().await {
            Ok(Some(state)) => state,
            Ok(None) => AppState::default(),
            Err(err) => {
                tracing::warn!(slot = %self.slot_key, error = %err, "unable to load flashcard progress");
                AppState::default()
            }
        }
    }

    /// Encode and write `state`.
    ///
    /// # Errors
    ///
    /// Returns `ProgressStoreError` if encoding or the storage write fails.
    pub async fn try_save(&self, state: &AppState) -> Result<(), ProgressStoreError> {
        let raw = serde_json::to_string(state)?;
        self.slots.write_slot(&self.slot_key, &raw).await?;
        Ok(())
    }

    /// Write `state`, logging and discarding any failure.
    pub async fn save(&self, state: &AppState) {
        if let Err(err) = self.try_save(state).await {
            tracing::warn!(slot = %self.slot_key, error = %err, "unable to save flashcard progress");
        }
    }

    /// Progress for `key` in `state`, created or re-fitted to `deck`.
    pub fn ensure_deck_progress<'a>(
        state: &'a mut AppState,
        key: &DeckKey,
        deck: &Deck,
    ) -> &'a mut DeckProgress {
        state.ensure_deck_progress(key, deck)
    }
}
