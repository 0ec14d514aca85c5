#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod progress_store;
pub mod sessions;

pub use sessions as session;

pub use app_services::AppServices;
pub use error::{AppServicesError, ProgressStoreError};
pub use progress_store::{DEFAULT_SLOT_KEY, ProgressStore};

pub use sessions::{
    Countdown, CountdownState, DeckOption, DeckOverview, GradeOutcome, NoticeToken, ScoreSummary,
    SessionView, StudySession, Tick, TimerToken,
};
