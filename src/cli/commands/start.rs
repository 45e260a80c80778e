use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::controller::{Controller, SaveOutcome};
use crate::core::session_log::SessionLogger;
use crate::core::tasks::{TaskRepository, select_task};
use crate::core::timer::Tick;
use crate::errors::{AppError, AppResult};
use crate::ui::{countdown, messages};
use chrono::Local;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::io::{self, IsTerminal, Write};
use std::thread;
use std::time::{Duration, Instant};

/// Longest accepted session: the countdown keeps seconds in a u32.
const MAX_SESSION_MINUTES: u32 = u32::MAX / 60;

/// How a countdown run ended.
enum Outcome {
    Completed { elapsed: String },
    Stopped,
    Aborted,
}

/// Raw-mode guard: key presses reach the countdown loop without Enter,
/// and the terminal is restored on every exit path.
struct RawMode;

impl RawMode {
    fn enable() -> AppResult<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Start {
        task,
        duration,
        save,
        no_save,
        tick_ms,
    } = cmd
    {
        // 1️⃣ pick the task (a task-less run is allowed, it just cannot be saved)
        let selected = match task {
            Some(query) => {
                let repo = TaskRepository::new(cfg.tasks_path());
                let tasks = repo.list_tasks()?;
                Some(select_task(&tasks, query)?.clone())
            }
            None => None,
        };

        // 2️⃣ session length: CLI override or configured default
        let minutes = duration.unwrap_or(cfg.session_minutes);
        if minutes == 0 {
            return Err(AppError::InvalidDuration(
                "session length must be at least 1 minute".to_string(),
            ));
        }
        if minutes > MAX_SESSION_MINUTES {
            return Err(AppError::InvalidDuration(format!(
                "session length must be at most {} minutes",
                MAX_SESSION_MINUTES
            )));
        }

        match &selected {
            Some(t) => println!("🍅 {}", t.label()),
            None => println!("🍅 No task selected"),
        }
        println!("⏱️  Focus for {} minute(s)\n", minutes);

        // 3️⃣ run the countdown
        let mut controller = Controller::new(minutes, selected);
        controller.start(Local::now());

        let tick_rate = Duration::from_millis(tick_ms.unwrap_or(1000));
        let interactive = io::stdout().is_terminal() && io::stdin().is_terminal();

        let outcome = if interactive {
            run_interactive(&mut controller, tick_rate)?
        } else {
            run_plain(&mut controller, tick_rate)?
        };

        match &outcome {
            Outcome::Aborted => {
                messages::info("Session aborted, nothing saved.");
                return Ok(());
            }
            Outcome::Completed { elapsed } => {
                if cfg.sound {
                    messages::bell();
                }
                messages::success(format!("Session completed! Duration: {}", elapsed));
            }
            Outcome::Stopped => {
                messages::info("Session stopped.");
            }
        }

        // 4️⃣ save decision: flags win, then auto_save, then ask
        let save_it = if *save {
            true
        } else if *no_save {
            false
        } else if cfg.auto_save {
            true
        } else {
            ask_save()?
        };

        if save_it {
            let logger = SessionLogger::new(cfg.sessions_path());

            // a failed save must not turn a finished session into an error
            match controller.save(&logger, Local::now()) {
                Ok(SaveOutcome::Saved(_)) => {
                    messages::success("Session saved successfully!");
                }
                Ok(SaveOutcome::NotStarted) => {
                    messages::warning("Please start a session before saving the session.");
                }
                Err(e) => {
                    messages::warning(format!("Failed to save session: {}", e));
                }
            }
        }
    }

    Ok(())
}

/// Countdown with live rendering and single-key controls. Polling idles in
/// the event queue until the next tick is due, so keys answer immediately
/// while the redraw stays at one per tick.
fn run_interactive(controller: &mut Controller, tick_rate: Duration) -> AppResult<Outcome> {
    let _raw = RawMode::enable()?;

    let mut last_tick = Instant::now();
    countdown::render_remaining(
        &controller.remaining_display(),
        controller.remaining_seconds(),
    );

    loop {
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());

        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Char('s') => {
                    controller.stop();
                    countdown::clear_line();
                    return Ok(Outcome::Stopped);
                }
                KeyCode::Char('r') => {
                    controller.restart(Local::now());
                    last_tick = Instant::now();
                    countdown::render_remaining(
                        &controller.remaining_display(),
                        controller.remaining_seconds(),
                    );
                }
                KeyCode::Char('q') | KeyCode::Esc => {
                    countdown::clear_line();
                    return Ok(Outcome::Aborted);
                }
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    countdown::clear_line();
                    return Ok(Outcome::Aborted);
                }
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            match controller.tick(Local::now()) {
                Tick::Running { remaining_seconds } => {
                    countdown::render_remaining(
                        &controller.remaining_display(),
                        remaining_seconds,
                    );
                }
                Tick::Completed { elapsed } => {
                    countdown::clear_line();
                    return Ok(Outcome::Completed { elapsed });
                }
                Tick::Ignored => {}
            }
            last_tick = Instant::now();
        }
    }
}

/// Countdown without a terminal (piped output): no rendering, no keys.
fn run_plain(controller: &mut Controller, tick_rate: Duration) -> AppResult<Outcome> {
    loop {
        thread::sleep(tick_rate);

        match controller.tick(Local::now()) {
            Tick::Running { .. } => {}
            Tick::Completed { elapsed } => return Ok(Outcome::Completed { elapsed }),
            // a timer that is not running cannot progress here
            Tick::Ignored => return Ok(Outcome::Stopped),
        }
    }
}

fn ask_save() -> AppResult<bool> {
    print!("Save this session? [y/N]: ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;

    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}
