use serde::{Deserialize, Deserializer, Serialize};

use super::lenient::{self, Lenient};

//
// ─── GRADE / STATUS ────────────────────────────────────────────────────────────
//

/// Outcome the learner reports for the current card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grade {
    Correct,
    Incorrect,
}

impl From<bool> for Grade {
    fn from(correct: bool) -> Self {
        if correct { Grade::Correct } else { Grade::Incorrect }
    }
}

/// Recall status of one card within a deck.
///
/// Persisted as `null` / `"correct"` / `"incorrect"`. Any other stored value
/// reads back as `Unanswered`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(into = "Option<Grade>")]
pub enum CardStatus {
    #[default]
    Unanswered,
    Correct,
    Incorrect,
}

impl CardStatus {
    #[must_use]
    pub fn is_answered(self) -> bool {
        !matches!(self, CardStatus::Unanswered)
    }

    #[must_use]
    pub fn is_correct(self) -> bool {
        matches!(self, CardStatus::Correct)
    }
}

impl From<Grade> for CardStatus {
    fn from(grade: Grade) -> Self {
        match grade {
            Grade::Correct => CardStatus::Correct,
            Grade::Incorrect => CardStatus::Incorrect,
        }
    }
}

impl From<Option<Grade>> for CardStatus {
    fn from(grade: Option<Grade>) -> Self {
        grade.map_or(CardStatus::Unanswered, CardStatus::from)
    }
}

impl<'de> Deserialize<'de> for CardStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let grade = Lenient::<Grade>::deserialize(deserializer)?.valid();
        Ok(CardStatus::from(grade))
    }
}

impl From<CardStatus> for Option<Grade> {
    fn from(status: CardStatus) -> Self {
        match status {
            CardStatus::Unanswered => None,
            CardStatus::Correct => Some(Grade::Correct),
            CardStatus::Incorrect => Some(Grade::Incorrect),
        }
    }
}

//
// ─── DECK PROGRESS ─────────────────────────────────────────────────────────────
//

/// Cursor position and per-card statuses for one deck.
///
/// After `normalize(n)` the status list has exactly `n` entries and the cursor
/// points at a valid card. Every mutating method assumes that has happened.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckProgress {
    #[serde(default, deserialize_with = "lenient::or_default")]
    current_index: usize,
    #[serde(default, deserialize_with = "lenient::or_default")]
    card_statuses: Vec<CardStatus>,
}

impl DeckProgress {
    /// Progress for a deck that has never been opened.
    #[must_use]
    pub fn fresh(card_count: usize) -> Self {
        Self {
            current_index: 0,
            card_statuses: vec![CardStatus::Unanswered; card_count],
        }
    }

    /// Rebuilds progress from raw parts. Call `normalize` before use.
    #[must_use]
    pub fn from_parts(current_index: usize, card_statuses: Vec<CardStatus>) -> Self {
        Self {
            current_index,
            card_statuses,
        }
    }

    /// Fits persisted progress to a deck of `card_count` cards: extra statuses
    /// are dropped, missing ones become `Unanswered`, the cursor is clamped.
    pub fn normalize(&mut self, card_count: usize) {
        self.card_statuses.resize(card_count, CardStatus::Unanswered);
        self.current_index = self.current_index.min(card_count.saturating_sub(1));
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn statuses(&self) -> &[CardStatus] {
        &self.card_statuses
    }

    #[must_use]
    pub fn status(&self, index: usize) -> Option<CardStatus> {
        self.card_statuses.get(index).copied()
    }

    #[must_use]
    pub fn current_status(&self) -> CardStatus {
        self.status(self.current_index).unwrap_or_default()
    }

    #[must_use]
    pub fn last_index(&self) -> usize {
        self.card_statuses.len().saturating_sub(1)
    }

    #[must_use]
    pub fn can_go_prev(&self) -> bool {
        self.current_index > 0
    }

    #[must_use]
    pub fn can_go_next(&self) -> bool {
        self.current_index < self.last_index()
    }

    /// Moves the cursor forward. Returns `false` at the last card.
    pub fn advance(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }
        self.current_index += 1;
        true
    }

    /// Moves the cursor back. Returns `false` at the first card.
    pub fn retreat(&mut self) -> bool {
        if !self.can_go_prev() {
            return false;
        }
        self.current_index -= 1;
        true
    }

    /// Records `grade` for the card under the cursor.
    ///
    /// Returns `false` without touching anything when the card already holds
    /// that outcome.
    pub fn record(&mut self, grade: Grade) -> bool {
        let next = CardStatus::from(grade);
        match self.card_statuses.get_mut(self.current_index) {
            Some(slot) if *slot != next => {
                *slot = next;
                true
            }
            _ => false,
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_progress_is_unanswered() {
        let progress = DeckProgress::fresh(4);
        assert_eq!(progress.current_index(), 0);
        assert_eq!(progress.statuses().len(), 4);
        assert!(progress.statuses().iter().all(|s| *s == CardStatus::Unanswered));
    }

    #[test]
    fn normalize_pads_short_status_list() {
        let mut progress = DeckProgress::from_parts(
            1,
            vec![CardStatus::Correct, CardStatus::Incorrect, CardStatus::Correct],
        );
        progress.normalize(5);
        assert_eq!(
            progress.statuses(),
            &[
                CardStatus::Correct,
                CardStatus::Incorrect,
                CardStatus::Correct,
                CardStatus::Unanswered,
                CardStatus::Unanswered,
            ]
        );
        assert_eq!(progress.current_index(), 1);
    }

    #[test]
    fn normalize_truncates_and_clamps_cursor() {
        let mut progress = DeckProgress::from_parts(7, vec![CardStatus::Correct; 8]);
        progress.normalize(3);
        assert_eq!(progress.statuses().len(), 3);
        assert_eq!(progress.current_index(), 2);
    }

    #[test]
    fn cursor_stops_at_bounds() {
        let mut progress = DeckProgress::fresh(2);
        assert!(!progress.retreat());
        assert!(progress.advance());
        assert!(!progress.advance());
        assert_eq!(progress.current_index(), 1);
        assert!(progress.retreat());
        assert_eq!(progress.current_index(), 0);
    }

    #[test]
    fn record_is_noop_for_same_grade() {
        let mut progress = DeckProgress::fresh(1);
        assert!(progress.record(Grade::Correct));
        assert!(!progress.record(Grade::Correct));
        assert!(progress.record(Grade::Incorrect));
        assert_eq!(progress.current_status(), CardStatus::Incorrect);
    }

    #[test]
    fn statuses_serialize_with_null_for_unanswered() {
        let progress = DeckProgress::from_parts(
            1,
            vec![CardStatus::Correct, CardStatus::Unanswered, CardStatus::Incorrect],
        );
        let json = serde_json::to_string(&progress).unwrap();
        assert_eq!(
            json,
            r#"{"currentIndex":1,"cardStatuses":["correct",null,"incorrect"]}"#
        );
    }

    #[test]
    fn missing_or_null_index_reads_as_zero() {
        let a: DeckProgress = serde_json::from_str(r#"{"cardStatuses":[null]}"#).unwrap();
        let b: DeckProgress =
            serde_json::from_str(r#"{"currentIndex":null,"cardStatuses":[]}"#).unwrap();
        assert_eq!(a.current_index(), 0);
        assert_eq!(b.current_index(), 0);
    }

    #[test]
    fn malformed_fields_decode_leniently() {
        let progress: DeckProgress = serde_json::from_str(
            r#"{"currentIndex":-1,"cardStatuses":["correct","skipped",7,null,"incorrect"]}"#,
        )
        .unwrap();
        assert_eq!(progress.current_index(), 0);
        assert_eq!(
            progress.statuses(),
            &[
                CardStatus::Correct,
                CardStatus::Unanswered,
                CardStatus::Unanswered,
                CardStatus::Unanswered,
                CardStatus::Incorrect,
            ]
        );

        let progress: DeckProgress =
            serde_json::from_str(r#"{"currentIndex":"2","cardStatuses":"none"}"#).unwrap();
        assert_eq!(progress.current_index(), 0);
        assert!(progress.statuses().is_empty());
    }

    #[test]
    fn grade_from_bool() {
        assert_eq!(Grade::from(true), Grade::Correct);
        assert_eq!(Grade::from(false), Grade::Incorrect);
    }
}
