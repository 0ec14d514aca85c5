use std::sync::Arc;

use flash_core::DeckCatalog;
use storage::repository::Storage;

use crate::error::AppServicesError;
use crate::progress_store::ProgressStore;
use crate::sessions::{DeckOverview, ScoreSummary, StudySession};

/// Assembles the catalog and progress store the front end needs.
#[derive(Clone)]
pub struct AppServices {
    catalog: Arc<DeckCatalog>,
    progress: ProgressStore,
}

impl AppServices {
    #[must_use]
    pub fn new(catalog: DeckCatalog, storage: &Storage) -> Self {
        Self {
            catalog: Arc::new(catalog),
            progress: ProgressStore::new(Arc::clone(&storage.slots)),
        }
    }

    /// Build services backed by `SQLite` storage and the bundled decks.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(db_url: &str) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::new(DeckCatalog::builtin(), &storage))
    }

    /// Bundled decks with nothing persisted beyond the process.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(DeckCatalog::builtin(), &Storage::in_memory())
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<DeckCatalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn progress_store(&self) -> ProgressStore {
        self.progress.clone()
    }

    /// Load saved progress and open a study session.
    pub async fn open_session(&self, preferred_deck: Option<&str>) -> StudySession {
        StudySession::open(self.catalog(), self.progress_store(), preferred_deck).await
    }

    /// Score for every catalog deck from saved progress. Nothing is written.
    pub async fn progress_overview(&self) -> Vec<DeckOverview> {
        let mut state = self.progress.load().await;
        let current = self.catalog.resolve(state.current_deck()).key().clone();

        self.catalog
            .entries()
            .iter()
            .map(|entry| {
                let progress = state.ensure_deck_progress(entry.key(), entry.deck());
                DeckOverview {
                    key: entry.key().clone(),
                    title: entry.deck().title().to_owned(),
                    score: ScoreSummary::from_statuses(progress.statuses()),
                    current: *entry.key() == current,
                }
            })
            .collect()
    }
}
