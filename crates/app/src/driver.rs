//! Line-mode event loop.
//!
//! One task owns the session and `select!`s over stdin, the countdown
//! interval and the notice deadline. Every event is followed by a resync
//! against the session's current tokens and a redraw.

use std::io;

use services::session::{NOTICE_TTL, TICK_INTERVAL};
use services::{NoticeToken, StudySession, TimerToken};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::input::Intent;
use crate::render;

enum Flow {
    Continue,
    Quit,
}

pub async fn run(mut session: StudySession) -> io::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    let mut ticker = time::interval_at(Instant::now() + TICK_INTERVAL, TICK_INTERVAL);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut armed: Option<TimerToken> = None;
    let mut notice: Option<(NoticeToken, Instant)> = None;
    let mut status: Option<&'static str> = None;

    resync(&session, &mut armed, &mut ticker, &mut notice);
    draw(&mut stdout, &session, status.take()).await?;

    loop {
        let notice_deadline = notice.map(|(_, at)| at);
        let notice_sleep = async move {
            match notice_deadline {
                Some(at) => time::sleep_until(at).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match Intent::parse(&line) {
                    Some(intent) => {
                        if let Flow::Quit = dispatch(&mut session, intent, &mut status).await {
                            break;
                        }
                    }
                    None => status = Some("unknown command, type ? for help"),
                }
            }
            _ = ticker.tick(), if armed.is_some() => {
                if let Some(token) = armed {
                    session.tick(token);
                }
            }
            () = notice_sleep => {
                if let Some((token, _)) = notice.take() {
                    session.expire_notice(token);
                }
            }
        }

        resync(&session, &mut armed, &mut ticker, &mut notice);
        draw(&mut stdout, &session, status.take()).await?;
    }

    tracing::debug!(deck = %session.deck_key(), "session closed");
    Ok(())
}

async fn dispatch(
    session: &mut StudySession,
    intent: Intent,
    status: &mut Option<&'static str>,
) -> Flow {
    match intent {
        Intent::Next => {
            session.next().await;
        }
        Intent::Prev => {
            session.prev().await;
        }
        Intent::ToggleReveal => {
            session.toggle_reveal(None);
        }
        Intent::Grade(grade) => {
            session.grade(grade).await;
        }
        Intent::ToggleTheme => {
            session.toggle_theme().await;
        }
        Intent::ResetTimer => {
            session.reset_timer();
        }
        Intent::SelectDeck(key) => {
            if !session.select_deck(&key).await {
                *status = Some("no such deck, showing the default deck");
            }
        }
        Intent::Help => *status = Some(render::help()),
        Intent::Quit => return Flow::Quit,
    }
    Flow::Continue
}

/// Re-arm the interval when the countdown was restarted and schedule the
/// expiry of a newly shown notice.
fn resync(
    session: &StudySession,
    armed: &mut Option<TimerToken>,
    ticker: &mut time::Interval,
    notice: &mut Option<(NoticeToken, Instant)>,
) {
    let token = session.timer_token();
    if token != *armed {
        if token.is_some() {
            ticker.reset();
        }
        *armed = token;
    }

    let current = session.notice_token();
    if current != notice.map(|(token, _)| token) {
        *notice = current.map(|token| (token, Instant::now() + NOTICE_TTL));
    }
}

async fn draw(
    stdout: &mut tokio::io::Stdout,
    session: &StudySession,
    status: Option<&str>,
) -> io::Result<()> {
    let mut frame = render::screen(&session.view());
    if let Some(status) = status {
        frame.push('\n');
        frame.push_str(status);
        frame.push('\n');
    }
    frame.push_str("> ");
    stdout.write_all(frame.as_bytes()).await?;
    stdout.flush().await
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use flash_core::model::Grade;
    use services::AppServices;

    struct Loop {
        armed: Option<TimerToken>,
        ticker: time::Interval,
        notice: Option<(NoticeToken, Instant)>,
    }

    impl Loop {
        fn new() -> Self {
            Self {
                armed: None,
                ticker: time::interval_at(Instant::now() + TICK_INTERVAL, TICK_INTERVAL),
                notice: None,
            }
        }

        fn resync(&mut self, session: &StudySession) {
            resync(session, &mut self.armed, &mut self.ticker, &mut self.notice);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn restart_rearms_the_interval() {
        let services = AppServices::in_memory();
        let mut session = services.open_session(Some("math")).await;
        let mut driver = Loop::new();

        driver.resync(&session);
        assert_eq!(driver.armed, session.timer_token());
        assert!(driver.armed.is_some());

        time::advance(Duration::from_millis(600)).await;
        session.next().await;
        driver.resync(&session);
        assert_eq!(driver.armed, session.timer_token());

        // The next tick lands a full interval after the restart, not 400 ms later.
        let restarted = Instant::now();
        driver.ticker.tick().await;
        assert_eq!(Instant::now() - restarted, TICK_INTERVAL);
    }

    #[tokio::test(start_paused = true)]
    async fn correct_grade_schedules_notice_expiry() {
        let services = AppServices::in_memory();
        let mut session = services.open_session(Some("math")).await;
        let mut driver = Loop::new();
        driver.resync(&session);
        assert!(driver.notice.is_none());

        session.grade(Grade::Correct).await;
        let shown = Instant::now();
        driver.resync(&session);
        let (token, deadline) = driver.notice.expect("notice scheduled");
        assert_eq!(Some(token), session.notice_token());
        assert_eq!(deadline - shown, NOTICE_TTL);

        // Resyncing without a new notice keeps the original deadline.
        time::advance(Duration::from_millis(300)).await;
        driver.resync(&session);
        assert_eq!(driver.notice, Some((token, deadline)));

        time::sleep_until(deadline).await;
        assert!(session.expire_notice(token));
        driver.resync(&session);
        assert!(driver.notice.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn last_card_grade_disarms_the_ticker() {
        let services = AppServices::in_memory();
        let mut session = services.open_session(Some("math")).await;
        while session.next().await {}
        let mut driver = Loop::new();
        driver.resync(&session);
        assert!(driver.armed.is_some());

        session.grade(Grade::Incorrect).await;
        driver.resync(&session);
        assert!(driver.armed.is_none());
        assert!(driver.notice.is_none());
    }
}
