use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Resolve the workspace data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. DRAFTLOCK_PATH environment variable (with tilde expansion)
/// 3. XDG data directory (recommended default)
/// 4. ~/.draftlock (fallback for systems without XDG)
pub fn resolve_workspace_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    // Priority 1: Explicit path
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    // Priority 2: DRAFTLOCK_PATH environment variable
    if let Ok(env_path) = std::env::var("DRAFTLOCK_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    // Priority 3: XDG data directory (recommended default)
    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("draftlock"));
    }

    // Priority 4: Fallback to ~/.draftlock (last resort for systems without XDG)
    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".draftlock"));
    }

    Err(Error::Config(
        "Could not determine workspace path: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

fn default_lock_duration_ms() -> i64 {
    300_000
}

fn default_tick_interval_ms() -> u64 {
    500
}

fn default_max_documents() -> usize {
    20
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// How long destructive edits stay blocked on a new document.
    #[serde(default = "default_lock_duration_ms")]
    pub lock_duration_ms: i64,

    /// Countdown recomputation cadence while a surface is live.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,

    /// Creation limit enforced by the CLI, not by the store.
    #[serde(default = "default_max_documents")]
    pub max_documents: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lock_duration_ms: default_lock_duration_ms(),
            tick_interval_ms: default_tick_interval_ms(),
            max_documents: default_max_documents(),
        }
    }
}

impl Config {
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
