//! Session orchestration: wires the engine, the bound task and the
//! session logger together, one session per construction.

use crate::core::session_log::SessionLogger;
use crate::core::timer::{Tick, TimerEngine, TimerState};
use crate::errors::AppResult;
use crate::models::{SessionRecord, Task};
use chrono::{DateTime, Local};

/// What became of a save request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved(SessionRecord),
    /// Preconditions unmet: no task bound, or the engine never started.
    NotStarted,
}

pub struct Controller {
    engine: TimerEngine,
    task: Option<Task>,
}

impl Controller {
    pub fn new(session_minutes: u32, task: Option<Task>) -> Self {
        Self {
            engine: TimerEngine::new(session_minutes),
            task,
        }
    }

    pub fn state(&self) -> TimerState {
        self.engine.state()
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.engine.remaining_seconds()
    }

    pub fn remaining_display(&self) -> String {
        self.engine.remaining_display()
    }

    pub fn start(&mut self, now: DateTime<Local>) -> bool {
        let minutes = self.engine.session_minutes();
        self.engine.start(minutes, now)
    }

    pub fn tick(&mut self, now: DateTime<Local>) -> Tick {
        self.engine.tick(now)
    }

    pub fn stop(&mut self) -> bool {
        self.engine.stop()
    }

    /// Abandon the current run and begin a fresh one: full duration back
    /// on the clock and a new start timestamp.
    pub fn restart(&mut self, now: DateTime<Local>) {
        self.engine.stop();
        self.engine.reset();
        self.start(now);
    }

    /// Save the session that just ran. Requires a bound task and a start
    /// timestamp; the duration is the wall-clock elapsed at save time, so
    /// time spent deciding on the save prompt counts toward it.
    pub fn save(&self, logger: &SessionLogger, now: DateTime<Local>) -> AppResult<SaveOutcome> {
        let Some(task) = &self.task else {
            return Ok(SaveOutcome::NotStarted);
        };

        if self.engine.started_at().is_none() {
            return Ok(SaveOutcome::NotStarted);
        }

        let record = SessionRecord {
            end_time: now.format("%H:%M").to_string(),
            note: task.source.clone(),
            task: task.label(),
            duration: self.engine.elapsed_duration(now),
        };

        logger.append(now.date_naive(), &record)?;

        Ok(SaveOutcome::Saved(record))
    }
}
