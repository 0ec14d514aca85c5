use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

/// Longest key accepted for a deck.
pub const MAX_DECK_KEY_LEN: usize = 64;

/// Identifier for a deck in the catalog, e.g. `ml` or `python`.
///
/// Keys are short slugs: ASCII letters, digits, `-` and `_`. Whether a key
/// names a deck that actually exists is decided by the catalog, not here.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DeckKey(String);

impl DeckKey {
    /// Validates `raw` as a deck key.
    ///
    /// # Errors
    ///
    /// Returns `ParseKeyError` if the key is empty, too long, or contains
    /// characters outside `[A-Za-z0-9_-]`.
    pub fn parse(raw: &str) -> Result<Self, ParseKeyError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ParseKeyError::Empty);
        }
        if trimmed.len() > MAX_DECK_KEY_LEN {
            return Err(ParseKeyError::TooLong);
        }
        if let Some(bad) = trimmed
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
        {
            return Err(ParseKeyError::InvalidChar(bad));
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Wraps a key known to be valid at compile time.
    pub(crate) fn from_static(raw: &'static str) -> Self {
        Self(raw.to_owned())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for DeckKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DeckKey({})", self.0)
    }
}

impl fmt::Display for DeckKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for DeckKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for DeckKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<DeckKey> for String {
    fn from(key: DeckKey) -> Self {
        key.0
    }
}

impl TryFrom<String> for DeckKey {
    type Error = ParseKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

// ─── FromStr ───────────────────────────────────────────────────────────────────

/// Error type for parsing a deck key from a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseKeyError {
    Empty,
    TooLong,
    InvalidChar(char),
}

impl fmt::Display for ParseKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseKeyError::Empty => f.write_str("deck key cannot be empty"),
            ParseKeyError::TooLong => {
                write!(f, "deck key is longer than {MAX_DECK_KEY_LEN} characters")
            }
            ParseKeyError::InvalidChar(c) => write!(f, "deck key contains invalid character {c:?}"),
        }
    }
}

impl std::error::Error for ParseKeyError {}

impl FromStr for DeckKey {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deck_key_display() {
        let key = DeckKey::parse("python").unwrap();
        assert_eq!(key.to_string(), "python");
    }

    #[test]
    fn deck_key_trims_whitespace() {
        let key: DeckKey = "  sql ".parse().unwrap();
        assert_eq!(key.as_str(), "sql");
    }

    #[test]
    fn deck_key_rejects_empty() {
        assert_eq!("   ".parse::<DeckKey>(), Err(ParseKeyError::Empty));
    }

    #[test]
    fn deck_key_rejects_punctuation() {
        assert_eq!(
            "ml/../etc".parse::<DeckKey>(),
            Err(ParseKeyError::InvalidChar('/'))
        );
    }

    #[test]
    fn deck_key_rejects_overlong() {
        let raw = "a".repeat(MAX_DECK_KEY_LEN + 1);
        assert_eq!(DeckKey::parse(&raw), Err(ParseKeyError::TooLong));
    }

    #[test]
    fn deck_key_serializes_as_plain_string() {
        let key = DeckKey::parse("math").unwrap();
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"math\"");
        let back: DeckKey = serde_json::from_str("\"math\"").unwrap();
        assert_eq!(back, key);
    }
}
