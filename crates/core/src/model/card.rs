use thiserror::Error;

//
// ─── CARD ──────────────────────────────────────────────────────────────────────
//

/// A single question/answer pair. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    question: String,
    answer: String,
}

impl Card {
    /// Builds a card, trimming surrounding whitespace from both sides.
    ///
    /// # Errors
    ///
    /// Returns `CardError` if the question or answer is blank.
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Result<Self, CardError> {
        let question = question.into().trim().to_owned();
        let answer = answer.into().trim().to_owned();

        if question.is_empty() {
            return Err(CardError::EmptyQuestion);
        }
        if answer.is_empty() {
            return Err(CardError::EmptyAnswer);
        }

        Ok(Self { question, answer })
    }

    /// Builds a card from trusted, already-trimmed static text.
    pub(crate) fn from_static(question: &str, answer: &str) -> Self {
        Self {
            question: question.to_owned(),
            answer: answer.to_owned(),
        }
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }
}

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardError {
    #[error("card question cannot be empty")]
    EmptyQuestion,

    #[error("card answer cannot be empty")]
    EmptyAnswer,
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_fails_if_question_empty() {
        let err = Card::new("   ", "ok").unwrap_err();
        assert_eq!(err, CardError::EmptyQuestion);
    }

    #[test]
    fn card_fails_if_answer_empty() {
        let err = Card::new("ok", "").unwrap_err();
        assert_eq!(err, CardError::EmptyAnswer);
    }

    #[test]
    fn card_trims_text() {
        let card = Card::new(" What is 2+2? ", "4.\n").unwrap();
        assert_eq!(card.question(), "What is 2+2?");
        assert_eq!(card.answer(), "4.");
    }
}
