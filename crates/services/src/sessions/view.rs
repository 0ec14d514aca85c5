use flash_core::model::{DeckKey, Theme};

use super::progress::ScoreSummary;

/// One row of the deck picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckOption {
    pub key: DeckKey,
    pub title: String,
    pub selected: bool,
}

/// Everything a front end needs to draw the study screen.
///
/// Built fresh from controller state by `StudySession::view`; holding on to
/// one does not keep it in sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionView {
    pub deck_key: DeckKey,
    pub deck_title: String,
    pub window_title: String,

    pub question: String,
    pub answer: String,
    /// 1-based position of the current card.
    pub position: usize,
    pub total: usize,
    pub revealed: bool,
    pub can_go_prev: bool,
    pub can_go_next: bool,

    pub score: ScoreSummary,

    pub timer_display: String,
    pub timer_running: bool,
    pub timer_expired: bool,

    pub theme: Theme,
    pub notice: Option<String>,
    pub decks: Vec<DeckOption>,
}

impl SessionView {
    #[must_use]
    pub fn reveal_label(&self) -> &'static str {
        if self.revealed {
            "Show Question"
        } else {
            "Show Answer"
        }
    }

    #[must_use]
    pub fn theme_label(&self) -> &'static str {
        self.theme.toggle_label()
    }
}

/// Read-only progress line for one deck, e.g. for a stats listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckOverview {
    pub key: DeckKey,
    pub title: String,
    pub score: ScoreSummary,
    /// Whether this is the deck the next session opens on.
    pub current: bool,
}
