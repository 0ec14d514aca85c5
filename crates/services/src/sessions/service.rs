use std::sync::Arc;

use flash_core::model::{AppState, Card, Deck, DeckKey, DeckProgress, Grade, Theme};
use flash_core::{CatalogEntry, DeckCatalog};

use super::notice::{CORRECT_DELTA_LABEL, NoticeToken, ScoreNotice};
use super::progress::ScoreSummary;
use super::timer::{Countdown, Tick, TimerToken};
use super::view::{DeckOption, SessionView};
use crate::progress_store::ProgressStore;

/// What `StudySession::grade` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeOutcome {
    /// The card already had this grade.
    Unchanged,
    /// Recorded and moved on to the next card.
    Advanced,
    /// Recorded on the last card; the countdown is stopped.
    LastCard,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// The active study screen: one deck, one card, one countdown.
///
/// Holds a working copy of the active deck's progress. Every mutation writes
/// it back into `AppState` and flushes through the `ProgressStore`.
pub struct StudySession {
    catalog: Arc<DeckCatalog>,
    store: ProgressStore,
    state: AppState,
    deck_key: DeckKey,
    progress: DeckProgress,
    revealed: bool,
    countdown: Countdown,
    notice: ScoreNotice,
}

impl StudySession {
    /// Load persisted state and open a deck.
    ///
    /// The deck is `preferred` if the catalog has it, else the last deck
    /// studied, else the catalog default.
    pub async fn open(
        catalog: Arc<DeckCatalog>,
        store: ProgressStore,
        preferred: Option<&str>,
    ) -> Self {
        let state = store.load().await;

        let requested = match preferred {
            Some(key) if catalog.contains(key) => Some(key.to_owned()),
            Some(key) => {
                tracing::debug!(requested = key, "preferred deck not in catalog");
                state.current_deck().map(str::to_owned)
            }
            None => state.current_deck().map(str::to_owned),
        };

        let default = catalog.default_entry();
        let key = requested.unwrap_or_else(|| default.key().as_str().to_owned());
        let mut session = Self {
            deck_key: default.key().clone(),
            progress: DeckProgress::fresh(default.deck().card_count()),
            catalog: Arc::clone(&catalog),
            store,
            state,
            revealed: false,
            countdown: Countdown::default(),
            notice: ScoreNotice::default(),
        };
        session.select_deck(&key).await;
        session
    }

    /// Switch to the deck filed under `key`.
    ///
    /// Unknown keys open the catalog default. Returns whether `key` matched.
    pub async fn select_deck(&mut self, key: &str) -> bool {
        let catalog = Arc::clone(&self.catalog);
        let matched = catalog.get(key);
        if matched.is_none() {
            tracing::debug!(requested = key, "unknown deck key, opening default deck");
        }
        let entry = matched.unwrap_or_else(|| catalog.default_entry());

        self.deck_key = entry.key().clone();
        self.progress = self
            .state
            .ensure_deck_progress(&self.deck_key, entry.deck())
            .clone();
        self.notice.clear();
        self.show_current_card();
        self.persist().await;

        matched.is_some()
    }

    /// Move to the next card. Returns `false` on the last card.
    pub async fn next(&mut self) -> bool {
        if !self.progress.advance() {
            return false;
        }
        self.show_current_card();
        self.persist().await;
        true
    }

    /// Move to the previous card. Returns `false` on the first card.
    pub async fn prev(&mut self) -> bool {
        if !self.progress.retreat() {
            return false;
        }
        self.show_current_card();
        self.persist().await;
        true
    }

    /// Flip the answer, or force it shown/hidden. Returns the new state.
    pub fn toggle_reveal(&mut self, force: Option<bool>) -> bool {
        self.revealed = force.unwrap_or(!self.revealed);
        self.revealed
    }

    /// Record a grade for the current card, then auto-advance.
    ///
    /// Repeating the card's existing grade does nothing.
    pub async fn grade(&mut self, grade: Grade) -> GradeOutcome {
        if !self.progress.record(grade) {
            return GradeOutcome::Unchanged;
        }
        self.persist().await;

        match grade {
            Grade::Correct => {
                self.notice.show(CORRECT_DELTA_LABEL);
            }
            Grade::Incorrect => self.notice.clear(),
        }

        if self.next().await {
            GradeOutcome::Advanced
        } else {
            self.countdown.stop();
            GradeOutcome::LastCard
        }
    }

    /// Flip between light and dark. Deck state is untouched.
    pub async fn toggle_theme(&mut self) -> Theme {
        let theme = self.state.toggle_theme();
        self.store.save(&self.state).await;
        theme
    }

    /// Restart the countdown for the current card.
    pub fn reset_timer(&mut self) -> TimerToken {
        self.countdown.restart()
    }

    /// Deliver one countdown tick. On expiry the answer is revealed.
    pub fn tick(&mut self, token: TimerToken) -> Tick {
        let tick = self.countdown.tick(token);
        if tick == Tick::Expired {
            self.toggle_reveal(Some(true));
        }
        tick
    }

    /// Hide the score notice if `token` is still current.
    pub fn expire_notice(&mut self, token: NoticeToken) -> bool {
        self.notice.expire(token)
    }

    fn show_current_card(&mut self) {
        self.revealed = false;
        self.countdown.restart();
    }

    async fn persist(&mut self) {
        self.state
            .store_progress(&self.deck_key, self.progress.clone());
        self.store.save(&self.state).await;
    }

    // ─── Accessors ──────────────────────────────────────────────────────────

    #[must_use]
    pub fn catalog(&self) -> &DeckCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    #[must_use]
    pub fn deck_key(&self) -> &DeckKey {
        &self.deck_key
    }

    #[must_use]
    pub fn entry(&self) -> &CatalogEntry {
        self.catalog.resolve(Some(self.deck_key.as_str()))
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        self.entry().deck()
    }

    #[must_use]
    pub fn progress(&self) -> &DeckProgress {
        &self.progress
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.progress.current_index()
    }

    #[must_use]
    pub fn current_card(&self) -> Option<&Card> {
        self.deck().card(self.progress.current_index())
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    #[must_use]
    pub fn score(&self) -> ScoreSummary {
        ScoreSummary::from_statuses(self.progress.statuses())
    }

    #[must_use]
    pub fn can_go_prev(&self) -> bool {
        self.progress.can_go_prev()
    }

    #[must_use]
    pub fn can_go_next(&self) -> bool {
        self.progress.can_go_next()
    }

    #[must_use]
    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    #[must_use]
    pub fn timer_token(&self) -> Option<TimerToken> {
        self.countdown.token()
    }

    #[must_use]
    pub fn notice_label(&self) -> Option<&str> {
        self.notice.label()
    }

    #[must_use]
    pub fn notice_token(&self) -> Option<NoticeToken> {
        self.notice.token()
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.state.theme()
    }

    /// Snapshot for rendering.
    #[must_use]
    pub fn view(&self) -> SessionView {
        let deck = self.deck();
        let (question, answer) = self
            .current_card()
            .map(|card| (card.question().to_owned(), card.answer().to_owned()))
            .unwrap_or_default();

        SessionView {
            deck_key: self.deck_key.clone(),
            deck_title: deck.title().to_owned(),
            window_title: format!("{} - Flashcards", deck.title()),
            question,
            answer,
            position: self.progress.current_index() + 1,
            total: deck.card_count(),
            revealed: self.revealed,
            can_go_prev: self.can_go_prev(),
            can_go_next: self.can_go_next(),
            score: self.score(),
            timer_display: self.countdown.display(),
            timer_running: self.countdown.is_running(),
            timer_expired: self.countdown.is_expired(),
            theme: self.theme(),
            notice: self.notice.label().map(str::to_owned),
            decks: self
                .catalog
                .titles()
                .map(|(key, title)| DeckOption {
                    key: key.clone(),
                    title: title.to_owned(),
                    selected: *key == self.deck_key,
                })
                .collect(),
        }
    }
}
