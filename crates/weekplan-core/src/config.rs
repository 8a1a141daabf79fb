use crate::{WeekplanError, WeekplanResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const STORE_FILE_NAME: &str = "tasks.json";

/// Where a new or moved task lands inside its destination panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsertionPolicy {
    /// Directly below the block of "HH:MM" tasks, or at the top if there is none.
    #[default]
    ScheduleAware,
    /// Always at the top of the panel.
    Prepend,
}

/// What loading does when the store is missing or malformed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadFailurePolicy {
    /// Log and start from an empty board.
    #[default]
    Degrade,
    /// Surface the error to the caller.
    FailFast,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default = "default_dated_panels")]
    pub dated_panels: bool,
    #[serde(default)]
    pub insertion_policy: InsertionPolicy,
    #[serde(default)]
    pub load_failure: LoadFailurePolicy,
}

fn default_dated_panels() -> bool {
    true
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            dated_panels: true,
            insertion_policy: InsertionPolicy::default(),
            load_failure: LoadFailurePolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    #[serde(flatten)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub max_backups: Option<usize>,
    #[serde(default)]
    pub week: Option<u32>,
    #[serde(default)]
    pub reference_year: Option<i32>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/weekplan/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("weekplan/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("weekplan\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path).unwrap_or_else(|e| {
                tracing::warn!("Ignoring config {}: {}", path.display(), e);
                Self::default()
            }),
            _ => Self::default(),
        }
    }

    pub fn load_from(path: &Path) -> WeekplanResult<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| WeekplanError::Config(e.to_string()))
    }

    /// Directory holding `tasks.json` and its backups. Defaults to `~/.7d`.
    pub fn effective_data_dir(&self) -> WeekplanResult<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        dirs::home_dir()
            .map(|home| home.join(".7d"))
            .ok_or_else(|| WeekplanError::Config("cannot determine home directory".to_string()))
    }

    pub fn store_path(&self) -> WeekplanResult<PathBuf> {
        Ok(self.effective_data_dir()?.join(STORE_FILE_NAME))
    }
}
