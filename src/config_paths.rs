//! Centralized configuration paths
//!
//! All config files live under:
//! - Unix/macOS: `~/.config/paper/`
//! - Windows: `%APPDATA%\paper\`

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::error::{PaperError, Result};

const APP_DIR: &str = "paper";

/// Base config directory
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/paper`
///   - Else: `~/.config/paper`
///
/// Windows:
///   - `%APPDATA%\paper`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/paper/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// `~/.config/paper/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| {
        PaperError::Config(format!(
            "Failed to create directory {}: {}",
            path.display(),
            e
        ))
    })
}

/// Ensure logs dir exists, returning it
pub fn ensure_logs_dir() -> Result<PathBuf> {
    let logs =
        logs_dir().ok_or_else(|| PaperError::Config("No config directory available".into()))?;
    ensure_dir(&logs)?;
    Ok(logs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_files_live_under_config_dir() {
        let Some(dir) = config_dir() else {
            return;
        };
        assert!(dir.ends_with(APP_DIR));
        assert_eq!(config_file(), Some(dir.join("config.yaml")));
        assert_eq!(logs_dir(), Some(dir.join("logs")));
    }
}
