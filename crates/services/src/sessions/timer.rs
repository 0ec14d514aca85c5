//! Per-card reveal countdown.
//!
//! The countdown does not schedule anything itself. A driver calls `tick`
//! once per `TICK_INTERVAL`, passing back the `TimerToken` it was armed with.
//! Every restart or stop mints a new token, so ticks armed for a previous
//! card are rejected as `Tick::Stale`.

use std::time::Duration;

/// Seconds allowed to consider a card before the answer is shown.
pub const REVEAL_SECS: u32 = 30;

/// Spacing between ticks.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Identifies one run of the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownState {
    Running { remaining: u32 },
    /// Frozen without expiring, e.g. after the last card of a deck is graded.
    Stopped { remaining: u32 },
    Expired,
}

/// Result of delivering one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// The token no longer matches a running countdown; nothing changed.
    Stale,
    Running { remaining: u32 },
    /// Reached zero on this tick.
    Expired,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    duration: u32,
    state: CountdownState,
    generation: u64,
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(REVEAL_SECS)
    }
}

impl Countdown {
    /// A stopped countdown showing `duration` seconds. Zero is raised to one.
    #[must_use]
    pub fn new(duration: u32) -> Self {
        let duration = duration.max(1);
        Self {
            duration,
            state: CountdownState::Stopped {
                remaining: duration,
            },
            generation: 0,
        }
    }

    /// Cancels any run in progress and starts a fresh one.
    pub fn restart(&mut self) -> TimerToken {
        self.generation += 1;
        self.state = CountdownState::Running {
            remaining: self.duration,
        };
        TimerToken(self.generation)
    }

    /// Freezes the countdown at its current value. Pending ticks go stale.
    pub fn stop(&mut self) {
        if let CountdownState::Running { remaining } = self.state {
            self.state = CountdownState::Stopped { remaining };
        }
        self.generation += 1;
    }

    pub fn tick(&mut self, token: TimerToken) -> Tick {
        if self.token() != Some(token) {
            return Tick::Stale;
        }
        let CountdownState::Running { remaining } = self.state else {
            return Tick::Stale;
        };

        let remaining = remaining.saturating_sub(1);
        if remaining == 0 {
            self.state = CountdownState::Expired;
            self.generation += 1;
            Tick::Expired
        } else {
            self.state = CountdownState::Running { remaining };
            Tick::Running { remaining }
        }
    }

    /// Token of the current run, or `None` when not running.
    #[must_use]
    pub fn token(&self) -> Option<TimerToken> {
        match self.state {
            CountdownState::Running { .. } => Some(TimerToken(self.generation)),
            CountdownState::Stopped { .. } | CountdownState::Expired => None,
        }
    }

    #[must_use]
    pub fn state(&self) -> CountdownState {
        self.state
    }

    #[must_use]
    pub fn duration(&self) -> u32 {
        self.duration
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        match self.state {
            CountdownState::Running { remaining } | CountdownState::Stopped { remaining } => {
                remaining
            }
            CountdownState::Expired => 0,
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        matches!(self.state, CountdownState::Running { .. })
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        matches!(self.state, CountdownState::Expired)
    }

    /// Remaining time as `MM:SS`.
    #[must_use]
    pub fn display(&self) -> String {
        format_clock(self.remaining())
    }
}

/// Formats whole seconds as zero-padded `MM:SS`.
#[must_use]
pub fn format_clock(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
