//! Platform-aware path resolution for cnapp-dashboard.
//!
//! On **Linux**, follows the XDG Base Directory Specification:
//! `$XDG_CONFIG_HOME/cnapp-dashboard` or `~/.config/cnapp-dashboard`.
//!
//! On **macOS**, uses `~/Library/Application Support/cnapp-dashboard` unless
//! `XDG_CONFIG_HOME` is set.

use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "cnapp-dashboard";

/// Returns the configuration directory for cnapp-dashboard.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/cnapp-dashboard` (if env var set, any platform)
/// 2. Platform default
pub fn config_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join(APP_NAME);
    }
    platform_config_dir().join(APP_NAME)
}

/// Platform-native config base directory (without XDG override).
///
/// Falls back to the current directory when no home directory is known.
fn platform_config_dir() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        dirs::config_dir().unwrap_or_else(|| PathBuf::from("."))
    }
    #[cfg(not(target_os = "macos"))]
    {
        dirs::home_dir()
            .map(|home| home.join(".config"))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Returns the path to the main configuration file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Creates the parent directory of `path` if needed.
pub fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    /// Run a closure with `XDG_CONFIG_HOME` temporarily set, then restore.
    fn with_xdg_config<F: FnOnce()>(value: Option<&str>, f: F) {
        let original = std::env::var("XDG_CONFIG_HOME").ok();
        match value {
            Some(v) => std::env::set_var("XDG_CONFIG_HOME", v),
            None => std::env::remove_var("XDG_CONFIG_HOME"),
        }
        f();
        match original {
            Some(v) => std::env::set_var("XDG_CONFIG_HOME", v),
            None => std::env::remove_var("XDG_CONFIG_HOME"),
        }
    }

    #[test]
    #[serial]
    fn config_dir_respects_xdg_config_home() {
        with_xdg_config(Some("/custom/config"), || {
            assert_eq!(config_dir(), PathBuf::from("/custom/config/cnapp-dashboard"));
        });
    }

    #[test]
    #[serial]
    fn config_path_is_config_toml_in_dir() {
        with_xdg_config(Some("/xdg"), || {
            assert_eq!(
                config_path(),
                PathBuf::from("/xdg/cnapp-dashboard/config.toml")
            );
        });
    }

    #[test]
    #[serial]
    fn config_dir_without_xdg_ends_with_app_name() {
        with_xdg_config(None, || {
            assert!(config_dir().ends_with(APP_NAME));
        });
    }

    #[test]
    fn ensure_parent_dir_creates_missing_dirs() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let file = dir.path().join("a").join("b").join("config.toml");
        ensure_parent_dir(&file).expect("should create parents");
        assert!(dir.path().join("a").join("b").is_dir());
    }

    #[test]
    fn ensure_parent_dir_bare_file_name_is_ok() {
        assert!(ensure_parent_dir(Path::new("config.toml")).is_ok());
    }
}
