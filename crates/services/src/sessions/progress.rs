use flash_core::model::CardStatus;

/// Score for one deck, always recounted from the full status list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreSummary {
    pub total: usize,
    pub answered: usize,
    pub correct: usize,
}

impl ScoreSummary {
    #[must_use]
    pub fn from_statuses(statuses: &[CardStatus]) -> Self {
        Self {
            total: statuses.len(),
            answered: statuses.iter().filter(|s| s.is_answered()).count(),
            correct: statuses.iter().filter(|s| s.is_correct()).count(),
        }
    }

    #[must_use]
    pub fn incorrect(&self) -> usize {
        self.answered - self.correct
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.total.saturating_sub(self.answered)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.answered == self.total
    }

    /// Share of answered cards graded correct, `None` until something is answered.
    #[must_use]
    pub fn accuracy_pct(&self) -> Option<u32> {
        rounded_pct(self.correct, self.answered)
    }

    /// Share of the deck answered so far.
    #[must_use]
    pub fn progress_pct(&self) -> u32 {
        rounded_pct(self.answered, self.total).unwrap_or(0)
    }

    #[must_use]
    pub fn accuracy_text(&self) -> String {
        match self.accuracy_pct() {
            Some(pct) => format!("You have {pct}% accuracy on this deck."),
            None => "No cards answered yet.".to_owned(),
        }
    }

    #[must_use]
    pub fn progress_text(&self) -> String {
        format!("{} of {} cards answered", self.answered, self.total)
    }

    #[must_use]
    pub fn completion_text(&self) -> String {
        if self.is_complete() {
            format!(
                "Deck complete! Final score: {} / {} correct.",
                self.correct, self.total
            )
        } else {
            format!(
                "Answer {} more card(s) to finish the deck.",
                self.remaining()
            )
        }
    }
}

/// `part / whole * 100`, rounded half up.
fn rounded_pct(part: usize, whole: usize) -> Option<u32> {
    if whole == 0 {
        return None;
    }
    let pct = (part * 200 + whole) / (whole * 2);
    Some(u32::try_from(pct).unwrap_or(u32::MAX))
}
