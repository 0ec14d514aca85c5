use flash_core::model::Grade;

/// A user request read from one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Next,
    Prev,
    ToggleReveal,
    Grade(Grade),
    ToggleTheme,
    ResetTimer,
    SelectDeck(String),
    Help,
    Quit,
}

impl Intent {
    /// Parses one input line. Returns `None` for anything unrecognised.
    ///
    /// An empty line flips the card, so pressing enter alone works like the
    /// space/enter binding of a graphical front end. Raw arrow-key escape
    /// sequences are accepted too.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim_end_matches(['\r', '\n']);
        match line {
            "\u{1b}[C" => return Some(Self::Next),
            "\u{1b}[D" => return Some(Self::Prev),
            _ => {}
        }

        let line = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(word, rest)| (word, rest.trim()));

        let intent = match word.to_ascii_lowercase().as_str() {
            "" | "space" | "enter" | "f" | "flip" => Self::ToggleReveal,
            ">" | "n" | "next" | "right" => Self::Next,
            "<" | "p" | "prev" | "left" => Self::Prev,
            "1" => Self::Grade(Grade::Correct),
            "2" => Self::Grade(Grade::Incorrect),
            "t" | "theme" => Self::ToggleTheme,
            "r" | "reset" => Self::ResetTimer,
            "d" | "deck" if !rest.is_empty() => Self::SelectDeck(rest.to_owned()),
            "?" | "h" | "help" => Self::Help,
            "q" | "quit" | "exit" => Self::Quit,
            _ => return None,
        };

        // Only deck selection takes an argument.
        if !rest.is_empty() && !matches!(intent, Self::SelectDeck(_)) {
            return None;
        }
        Some(intent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_bindings() {
        assert_eq!(Intent::parse("\u{1b}[C"), Some(Intent::Next));
        assert_eq!(Intent::parse("\u{1b}[D"), Some(Intent::Prev));
        assert_eq!(Intent::parse(""), Some(Intent::ToggleReveal));
        assert_eq!(Intent::parse(" \n"), Some(Intent::ToggleReveal));
        assert_eq!(Intent::parse("1"), Some(Intent::Grade(Grade::Correct)));
        assert_eq!(Intent::parse("2"), Some(Intent::Grade(Grade::Incorrect)));
        assert_eq!(Intent::parse("t"), Some(Intent::ToggleTheme));
        assert_eq!(Intent::parse("T"), Some(Intent::ToggleTheme));
    }

    #[test]
    fn word_aliases() {
        assert_eq!(Intent::parse("next"), Some(Intent::Next));
        assert_eq!(Intent::parse("<"), Some(Intent::Prev));
        assert_eq!(Intent::parse("r"), Some(Intent::ResetTimer));
        assert_eq!(Intent::parse("quit"), Some(Intent::Quit));
        assert_eq!(Intent::parse("?"), Some(Intent::Help));
    }

    #[test]
    fn deck_selection_takes_a_key() {
        assert_eq!(
            Intent::parse("d python"),
            Some(Intent::SelectDeck("python".into()))
        );
        assert_eq!(
            Intent::parse("deck   sql  "),
            Some(Intent::SelectDeck("sql".into()))
        );
        assert_eq!(Intent::parse("d"), None);
    }

    #[test]
    fn rejects_unknown_and_stray_arguments() {
        assert_eq!(Intent::parse("x"), None);
        assert_eq!(Intent::parse("next please"), None);
    }
}
