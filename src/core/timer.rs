//! Countdown state machine.
//!
//! The engine owns the remaining-time counter and the session timestamps;
//! rendering and key handling live elsewhere. Time flows in through the
//! `now` parameters, so tests can drive the engine with a fixed clock.

use crate::utils::time::format_mmss;
use chrono::{DateTime, Local};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    Running,
    Stopped,
    Completed,
}

/// Result of advancing the engine by one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tick {
    /// Tick arrived outside Running; nothing changed.
    Ignored,
    Running { remaining_seconds: u32 },
    /// Countdown reached zero. Carries the wall-clock elapsed duration;
    /// fires exactly once per session.
    Completed { elapsed: String },
}

#[derive(Debug, Clone)]
pub struct TimerEngine {
    state: TimerState,
    started_at: Option<DateTime<Local>>,
    remaining_seconds: u32,
    session_minutes: u32,
}

impl TimerEngine {
    pub fn new(session_minutes: u32) -> Self {
        Self {
            state: TimerState::Idle,
            started_at: None,
            remaining_seconds: session_minutes.saturating_mul(60),
            session_minutes,
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn session_minutes(&self) -> u32 {
        self.session_minutes
    }

    pub fn started_at(&self) -> Option<DateTime<Local>> {
        self.started_at
    }

    /// Remaining time as the zero-padded MM:SS countdown display.
    pub fn remaining_display(&self) -> String {
        format_mmss(self.remaining_seconds as i64)
    }

    /// Begin a session of `minutes` from Idle or Stopped: records the
    /// start timestamp and puts the full duration on the clock. In any
    /// other state this is a no-op returning false — in particular a
    /// second start while Running must not stack a second schedule.
    /// Durations beyond the u32 second range saturate.
    pub fn start(&mut self, minutes: u32, now: DateTime<Local>) -> bool {
        match self.state {
            TimerState::Idle | TimerState::Stopped => {
                self.session_minutes = minutes;
                self.remaining_seconds = minutes.saturating_mul(60);
                self.started_at = Some(now);
                self.state = TimerState::Running;
                true
            }
            _ => false,
        }
    }

    /// Advance by one second. Each tick assumes exactly one second passed;
    /// scheduling drift is not corrected.
    pub fn tick(&mut self, now: DateTime<Local>) -> Tick {
        if self.state != TimerState::Running {
            return Tick::Ignored;
        }

        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);

        if self.remaining_seconds == 0 {
            self.state = TimerState::Completed;
            Tick::Completed {
                elapsed: self.elapsed_duration(now),
            }
        } else {
            Tick::Running {
                remaining_seconds: self.remaining_seconds,
            }
        }
    }

    /// Interrupt a running session. The start timestamp is retained so a
    /// later save still knows the real elapsed time.
    pub fn stop(&mut self) -> bool {
        if self.state == TimerState::Running {
            self.state = TimerState::Stopped;
            true
        } else {
            false
        }
    }

    /// Back to Idle with the full configured duration on the clock, ready
    /// for a fresh start. Only meaningful once a session ended.
    pub fn reset(&mut self) -> bool {
        match self.state {
            TimerState::Stopped | TimerState::Completed => {
                self.state = TimerState::Idle;
                self.started_at = None;
                self.remaining_seconds = self.session_minutes.saturating_mul(60);
                true
            }
            _ => false,
        }
    }

    /// Wall-clock time since start as MM:SS, `"00:00"` when never started.
    /// Minutes may exceed 59: a session left sitting for 90 minutes reads
    /// `"90:00"`.
    pub fn elapsed_duration(&self, now: DateTime<Local>) -> String {
        match self.started_at {
            None => "00:00".to_string(),
            Some(t) => format_mmss((now - t).num_seconds()),
        }
    }
}
