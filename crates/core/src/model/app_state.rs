use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::model::deck::Deck;
use crate::model::lenient::{self, Lenient};
use crate::model::ids::DeckKey;
use crate::model::progress::DeckProgress;

//
// ─── THEME ─────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Reads a persisted theme name. Anything other than `light` is dark.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("light") {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Label for the control that switches away from this theme.
    #[must_use]
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "Use Dark Theme",
            Theme::Dark => "Use Light Theme",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Theme {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Lenient::<String>::deserialize(deserializer)?.valid();
        Ok(raw.as_deref().map_or_else(Theme::default, Theme::from_name))
    }
}

//
// ─── APP STATE ─────────────────────────────────────────────────────────────────
//

/// Everything that survives between runs: theme, last deck, per-deck progress.
///
/// `current_deck` and the keys of `decks` are kept as raw strings because they
/// come from disk and may name decks the catalog no longer ships. Progress for
/// such decks is carried along untouched.
///
/// Decoding is field by field: a `null` or malformed `decks` reads as empty,
/// and a deck entry that is not an object is dropped so it starts fresh on the
/// next visit. The other decks and the theme are kept.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppState {
    theme: Theme,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::or_default"
    )]
    current_deck: Option<String>,
    #[serde(deserialize_with = "decks_or_empty")]
    decks: BTreeMap<String, DeckProgress>,
}

fn decks_or_empty<'de, D>(deserializer: D) -> Result<BTreeMap<String, DeckProgress>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = lenient::or_default::<_, BTreeMap<String, Lenient<DeckProgress>>>(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|(key, progress)| Some((key, progress.valid()?)))
        .collect())
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Flips the theme and returns the new value.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    /// The deck key last written to disk, if any. Not validated.
    #[must_use]
    pub fn current_deck(&self) -> Option<&str> {
        self.current_deck.as_deref()
    }

    pub fn set_current_deck(&mut self, key: &DeckKey) {
        self.current_deck = Some(key.as_str().to_owned());
    }

    #[must_use]
    pub fn decks(&self) -> &BTreeMap<String, DeckProgress> {
        &self.decks
    }

    #[must_use]
    pub fn deck_progress(&self, key: &str) -> Option<&DeckProgress> {
        self.decks.get(key)
    }

    /// Returns progress for `key`, creating it on first visit.
    ///
    /// Existing progress is re-fitted to `deck` so a catalog that grew or
    /// shrank since the last run never leaves a status list of the wrong size.
    pub fn ensure_deck_progress(&mut self, key: &DeckKey, deck: &Deck) -> &mut DeckProgress {
        let card_count = deck.card_count();
        let progress = self
            .decks
            .entry(key.as_str().to_owned())
            .or_insert_with(|| DeckProgress::fresh(card_count));
        progress.normalize(card_count);
        progress
    }

    /// Writes a working copy back and marks `key` as the current deck.
    pub fn store_progress(&mut self, key: &DeckKey, progress: DeckProgress) {
        self.current_deck = Some(key.as_str().to_owned());
        self.decks.insert(key.as_str().to_owned(), progress);
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::card::Card;
    use crate::model::progress::{CardStatus, Grade};

    fn deck(n: usize) -> Deck {
        let cards = (1..=n)
            .map(|i| Card::new(format!("Q{i}"), format!("A{i}")).unwrap())
            .collect();
        Deck::new("Deck", cards).unwrap()
    }

    #[test]
    fn default_state_is_dark_and_empty() {
        let state = AppState::default();
        assert_eq!(state.theme(), Theme::Dark);
        assert!(state.current_deck().is_none());
        assert!(state.decks().is_empty());
    }

    #[test]
    fn ensure_creates_fresh_progress_once() {
        let mut state = AppState::new();
        let key = DeckKey::parse("ml").unwrap();
        let deck = deck(10);

        let progress = state.ensure_deck_progress(&key, &deck);
        assert_eq!(progress.statuses().len(), 10);
        assert_eq!(progress.current_index(), 0);
        progress.record(Grade::Correct);

        let again = state.ensure_deck_progress(&key, &deck);
        assert_eq!(again.status(0), Some(CardStatus::Correct));
        assert_eq!(state.decks().len(), 1);
    }

    #[test]
    fn ensure_refits_stale_progress() {
        let json = r#"{"decks":{"sql":{"currentIndex":2,"cardStatuses":["correct","incorrect","correct"]}}}"#;
        let mut state: AppState = serde_json::from_str(json).unwrap();
        let key = DeckKey::parse("sql").unwrap();

        let progress = state.ensure_deck_progress(&key, &deck(5));
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
    }

    #[test]
    fn theme_reads_unknown_names_as_dark() {
        let state: AppState = serde_json::from_str(r#"{"theme":"solarized"}"#).unwrap();
        assert_eq!(state.theme(), Theme::Dark);
        let state: AppState = serde_json::from_str(r#"{"theme":"light"}"#).unwrap();
        assert_eq!(state.theme(), Theme::Light);
    }

    #[test]
    fn null_decks_keep_theme_and_current_deck() {
        let state: AppState =
            serde_json::from_str(r#"{"theme":"light","currentDeck":"sql","decks":null}"#).unwrap();
        assert_eq!(state.theme(), Theme::Light);
        assert_eq!(state.current_deck(), Some("sql"));
        assert!(state.decks().is_empty());
    }

    #[test]
    fn one_bad_deck_entry_does_not_lose_the_others() {
        let json = r#"{"theme":7,"currentDeck":["ml"],"decks":{"ml":{"currentIndex":1,"cardStatuses":["correct","correct"]},"math":{"cardStatuses":["skipped","correct"]},"python":5,"sql":null}}"#;
        let state: AppState = serde_json::from_str(json).unwrap();
        assert_eq!(state.theme(), Theme::Dark);
        assert_eq!(state.current_deck(), None);
        assert_eq!(state.decks().len(), 2);
        let math = state.deck_progress("math").unwrap();
        assert_eq!(math.statuses(), &[CardStatus::Unanswered, CardStatus::Correct]);
        let ml = state.deck_progress("ml").unwrap();
        assert_eq!(ml.current_index(), 1);
        assert_eq!(ml.statuses(), &[CardStatus::Correct, CardStatus::Correct]);
    }

    #[test]
    fn toggle_theme_flips() {
        let mut state = AppState::new();
        assert_eq!(state.toggle_theme(), Theme::Light);
        assert_eq!(state.toggle_theme(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle_label(), "Use Light Theme");
    }

    #[test]
    fn serialized_shape_uses_camel_case_fields() {
        let mut state = AppState::new();
        let key = DeckKey::parse("ml").unwrap();
        state.store_progress(&key, DeckProgress::fresh(2));
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(
            json,
            r#"{"theme":"dark","currentDeck":"ml","decks":{"ml":{"currentIndex":0,"cardStatuses":[null,null]}}}"#
        );
    }

    #[test]
    fn unknown_decks_survive_a_round_trip() {
        let json = r#"{"theme":"light","currentDeck":"rust","decks":{"rust":{"currentIndex":0,"cardStatuses":["correct"]}}}"#;
        let state: AppState = serde_json::from_str(json).unwrap();
        let back: AppState = serde_json::from_str(&serde_json::to_string(&state).unwrap()).unwrap();
        assert_eq!(back, state);
        assert_eq!(back.current_deck(), Some("rust"));
    }
}
