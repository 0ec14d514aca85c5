use std::time::Duration;

/// How long a score notice stays visible.
pub const NOTICE_TTL: Duration = Duration::from_millis(900);

/// Label flashed when a card is graded correct.
pub const CORRECT_DELTA_LABEL: &str = "+1";

/// Identifies one showing of a notice. See `ScoreNotice::expire`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoticeToken(u64);

/// Transient score-delta label.
///
/// Showing a new label or clearing supersedes the previous token, so an
/// expiry scheduled for an older notice cannot hide a newer one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreNotice {
    label: Option<String>,
    generation: u64,
}

impl ScoreNotice {
    /// Shows `label`. An empty label clears instead and yields no token.
    pub fn show(&mut self, label: &str) -> Option<NoticeToken> {
        self.generation += 1;
        if label.is_empty() {
            self.label = None;
            return None;
        }
        self.label = Some(label.to_owned());
        Some(NoticeToken(self.generation))
    }

    pub fn clear(&mut self) {
        self.generation += 1;
        self.label = None;
    }

    /// Hides the notice if `token` is still the live one.
    pub fn expire(&mut self, token: NoticeToken) -> bool {
        if self.token() != Some(token) {
            return false;
        }
        self.clear();
        true
    }

    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    #[must_use]
    pub fn token(&self) -> Option<NoticeToken> {
        self.label.as_ref().map(|_| NoticeToken(self.generation))
    }
}
