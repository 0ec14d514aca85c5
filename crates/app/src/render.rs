use std::fmt::Write as _;

use flash_core::model::Theme;
use services::{DeckOverview, SessionView};

const CLEAR: &str = "\x1b[2J\x1b[H";
const BAR_WIDTH: usize = 20;

/// Full study screen for one snapshot.
pub fn screen(view: &SessionView) -> String {
    let mut out = String::new();
    out.push_str(CLEAR);
    if view.theme == Theme::Light {
        out.push_str("\x1b[30;47m");
    }

    let _ = writeln!(out, "== {} ==", view.window_title);
    let _ = writeln!(out, "theme: {} [t] {}", view.theme, view.theme_label());
    out.push_str("decks:");
    for deck in &view.decks {
        let marker = if deck.selected { "*" } else { " " };
        let _ = write!(out, " {marker}{} ({})", deck.key, deck.title);
    }
    out.push('\n');
    out.push('\n');

    let score = &view.score;
    let _ = write!(
        out,
        "card {} / {}   score {} / {}",
        view.position, view.total, score.correct, score.answered
    );
    if let Some(notice) = &view.notice {
        let _ = write!(out, "  {notice}");
    }
    let timer_note = if view.timer_expired {
        " (time's up)"
    } else if view.timer_running {
        ""
    } else {
        " (paused)"
    };
    let _ = writeln!(out, "   timer {}{timer_note}", view.timer_display);

    let _ = writeln!(
        out,
        "{} {:>3}%  {}",
        progress_bar(score.progress_pct()),
        score.progress_pct(),
        score.progress_text()
    );
    let _ = writeln!(out, "{}", score.accuracy_text());
    out.push('\n');

    let _ = writeln!(out, "Q: {}", view.question);
    if view.revealed {
        let _ = writeln!(out, "A: {}", view.answer);
    } else {
        out.push_str("A: ...\n");
    }
    out.push('\n');

    let _ = writeln!(out, "{}", score.completion_text());
    let _ = writeln!(
        out,
        "[enter] {}  {}  [1] correct  [2] incorrect  [r] reset timer  [?] help",
        view.reveal_label(),
        nav_hint(view)
    );
    if view.theme == Theme::Light {
        out.push_str("\x1b[0m");
    }
    out
}

fn nav_hint(view: &SessionView) -> String {
    let prev = if view.can_go_prev { "[<] prev" } else { "" };
    let next = if view.can_go_next { "[>] next" } else { "" };
    [prev, next]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("  ")
}

fn progress_bar(pct: u32) -> String {
    let filled = (pct.min(100) as usize * BAR_WIDTH) / 100;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

/// One line per deck, for the `stats` command.
pub fn overview(decks: &[DeckOverview]) -> String {
    let mut out = String::new();
    for deck in decks {
        let marker = if deck.current { "*" } else { " " };
        let accuracy = deck
            .score
            .accuracy_pct()
            .map_or_else(|| "-".to_owned(), |pct| format!("{pct}%"));
        let _ = writeln!(
            out,
            "{marker} {:<8} {:<28} {:>3}/{:<3} answered  {:>3}/{:<3} correct  accuracy {accuracy}",
            deck.key.as_str(),
            deck.title,
            deck.score.answered,
            deck.score.total,
            deck.score.correct,
            deck.score.answered,
        );
    }
    out
}

pub fn help() -> &'static str {
    "\
commands (one per line):
  enter, f, space     show or hide the answer
  >, n, right         next card
  <, p, left          previous card
  1 / 2               mark correct / incorrect
  t                   toggle light/dark theme
  r                   restart the timer
  d <key>             switch deck
  q                   quit
"
}

#[cfg(test)]
mod tests {
    use super::*;
    use flash_core::model::DeckKey;
    use services::{DeckOption, ScoreSummary};

    fn view() -> SessionView {
        let key = DeckKey::parse("ml").unwrap();
        SessionView {
            deck_key: key.clone(),
            deck_title: "Machine Learning".into(),
            window_title: "Machine Learning - Flashcards".into(),
            question: "What is overfitting?".into(),
            answer: "Memorising noise.".into(),
            position: 2,
            total: 4,
            revealed: false,
            can_go_prev: true,
            can_go_next: true,
            score: ScoreSummary {
                total: 4,
                answered: 2,
                correct: 1,
            },
            timer_display: "00:30".into(),
            timer_running: true,
            timer_expired: false,
            theme: Theme::Dark,
            notice: Some("+1".into()),
            decks: vec![DeckOption {
                key,
                title: "Machine Learning".into(),
                selected: true,
            }],
        }
    }

    #[test]
    fn hidden_answer_is_masked() {
        let out = screen(&view());
        assert!(out.contains("Q: What is overfitting?"));
        assert!(out.contains("A: ..."));
        assert!(!out.contains("Memorising noise."));
        assert!(out.contains("[enter] Show Answer"));
    }

    #[test]
    fn screen_shows_score_and_timer() {
        let mut v = view();
        v.revealed = true;
        let out = screen(&v);
        assert!(out.contains("A: Memorising noise."));
        assert!(out.contains("card 2 / 4   score 1 / 2  +1"));
        assert!(out.contains("timer 00:30"));
        assert!(out.contains("[##########----------]  50%  2 of 4 cards answered"));
        assert!(out.contains("You have 50% accuracy on this deck."));
        assert!(out.contains("Answer 2 more card(s) to finish the deck."));
    }

    #[test]
    fn expired_timer_is_flagged() {
        let mut v = view();
        v.timer_display = "00:00".into();
        v.timer_running = false;
        v.timer_expired = true;
        assert!(screen(&v).contains("timer 00:00 (time's up)"));
    }

    #[test]
    fn overview_marks_current_deck() {
        let rows = vec![DeckOverview {
            key: DeckKey::parse("sql").unwrap(),
            title: "SQL".into(),
            score: ScoreSummary::default(),
            current: true,
        }];
        let out = overview(&rows);
        assert!(out.starts_with("* sql"));
        assert!(out.contains("accuracy -"));
    }
}
