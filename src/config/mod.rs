use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod migrate; // use submodule at src/config/migrate.rs

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub tasks_dir: String,
    pub sessions_dir: String,
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_session_minutes")]
    pub session_minutes: u32,
    #[serde(default = "default_auto_save")]
    pub auto_save: bool,
    #[serde(default = "default_sound")]
    pub sound: bool,
}

fn default_theme() -> String {
    "dark".to_string()
}
fn default_session_minutes() -> u32 {
    25
}
fn default_auto_save() -> bool {
    false
}
fn default_sound() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        let dir = Self::config_dir();
        Self {
            tasks_dir: dir.join("tasks").to_string_lossy().to_string(),
            sessions_dir: dir.join("sessions").to_string_lossy().to_string(),
            theme: default_theme(),
            session_minutes: default_session_minutes(),
            auto_save: default_auto_save(),
            sound: default_sound(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rpomodoro")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rpomodoro")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rpomodoro.conf")
    }

    /// Tasks directory as a usable path (tilde expanded)
    pub fn tasks_path(&self) -> PathBuf {
        expand_tilde(&self.tasks_dir)
    }

    /// Sessions directory as a usable path (tilde expanded)
    pub fn sessions_path(&self) -> PathBuf {
        expand_tilde(&self.sessions_dir)
    }

    /// Load configuration from file, or return defaults if not found.
    /// A present but broken file fails here, not at first use: every key
    /// is typed, and `tasks_dir`/`sessions_dir` have no fallback.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).map_err(|e| {
                AppError::Config(format!(
                    "Failed to read configuration file {}: {}",
                    path.display(),
                    e
                ))
            })?;

            let cfg: Config = serde_yaml::from_str(&content).map_err(|e| {
                AppError::Config(format!(
                    "Invalid configuration file {}: {}",
                    path.display(),
                    e
                ))
            })?;

            cfg.validate()?;
            Ok(cfg)
        } else {
            Ok(Config::default())
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.theme != "dark" && self.theme != "light" {
            return Err(AppError::Config(format!(
                "Invalid theme '{}' (expected dark or light)",
                self.theme
            )));
        }

        if self.session_minutes == 0 {
            return Err(AppError::Config(
                "session_minutes must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Initialize configuration file and the tasks/sessions directories
    pub fn init_all(
        tasks_override: Option<&str>,
        sessions_override: Option<&str>,
        is_test: bool,
    ) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // Directories: user provided or defaults under the config dir
        let tasks_dir = resolve_dir(&dir, tasks_override, "tasks");
        let sessions_dir = resolve_dir(&dir, sessions_override, "sessions");

        fs::create_dir_all(&tasks_dir)?;
        fs::create_dir_all(&sessions_dir)?;

        let config = Config {
            tasks_dir: tasks_dir.to_string_lossy().to_string(),
            sessions_dir: sessions_dir.to_string_lossy().to_string(),
            theme: default_theme(),
            session_minutes: default_session_minutes(),
            auto_save: default_auto_save(),
            sound: default_sound(),
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| AppError::Config(format!("Failed to serialize configuration: {e}")))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file  : {:?}", Self::config_file());
        }

        println!("✅ Tasks dir    : {:?}", tasks_dir);
        println!("✅ Sessions dir : {:?}", sessions_dir);

        Ok(())
    }
}

/// Resolve an overridden directory: absolute stays, relative lands under
/// the config dir.
fn resolve_dir(base: &Path, override_dir: Option<&str>, default_name: &str) -> PathBuf {
    match override_dir {
        Some(p) => {
            let path = expand_tilde(p);
            if path.is_absolute() {
                path
            } else {
                base.join(path)
            }
        }
        None => base.join(default_name),
    }
}
