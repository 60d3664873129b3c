//! Where strata keeps its layout config and log files
//!
//! `config.yaml` and `logs/` sit in one per-user directory: `strata` under
//! `$XDG_CONFIG_HOME` (falling back to `~/.config`) on Unix and macOS, and
//! under `%APPDATA%` on Windows.

use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;

const APP_DIR: &str = "strata";
const CONFIG_FILE: &str = "config.yaml";
const LOGS_DIR: &str = "logs";

/// Resolve the strata directory from an XDG override and a home directory
fn resolve_config_dir(
    xdg_config_home: Option<OsString>,
    home: Option<PathBuf>,
) -> Option<PathBuf> {
    let base = xdg_config_home
        .filter(|xdg| !xdg.is_empty())
        .map(PathBuf::from)
        .or_else(|| home.map(|home| home.join(".config")))?;
    Some(base.join(APP_DIR))
}

/// Per-user strata directory, or `None` when no home can be found
pub fn config_dir() -> Option<PathBuf> {
    if cfg!(target_os = "windows") {
        dirs::config_dir().map(|appdata| appdata.join(APP_DIR))
    } else {
        resolve_config_dir(std::env::var_os("XDG_CONFIG_HOME"), dirs::home_dir())
    }
}

pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(LOGS_DIR))
}

/// Create the logs directory if needed and return it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = logs_dir().ok_or_else(|| "no home directory for strata logs".to_string())?;
    fs::create_dir_all(&logs)
        .map_err(|e| format!("cannot create log directory {}: {}", logs.display(), e))?;
    Ok(logs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xdg_override_wins() {
        let dir = resolve_config_dir(Some("/tmp/xdg".into()), Some(PathBuf::from("/home/a")));
        assert_eq!(dir, Some(PathBuf::from("/tmp/xdg/strata")));
    }

    #[test]
    fn test_empty_xdg_falls_back_to_home() {
        let dir = resolve_config_dir(Some(OsString::new()), Some(PathBuf::from("/home/a")));
        assert_eq!(dir, Some(PathBuf::from("/home/a/.config/strata")));
    }

    #[test]
    fn test_no_home_no_dir() {
        assert_eq!(resolve_config_dir(None, None), None);
    }
}
