mod notice;
mod progress;
mod service;
mod timer;
mod view;

// Public API of the session subsystem.
pub use notice::{CORRECT_DELTA_LABEL, NOTICE_TTL, NoticeToken, ScoreNotice};
pub use progress::ScoreSummary;
pub use service::{GradeOutcome, StudySession};
pub use timer::{
    Countdown, CountdownState, REVEAL_SECS, TICK_INTERVAL, Tick, TimerToken, format_clock,
};
pub use view::{DeckOption, DeckOverview, SessionView};
