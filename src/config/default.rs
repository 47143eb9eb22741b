//! Default configuration template and file creation utilities.
//!
//! Provides a commented TOML template that matches `Config::default()` and
//! functions to write it to the XDG config path.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::error::ConfigError;
use crate::config::xdg;

// ---------------------------------------------------------------------------
// Default TOML template
// ---------------------------------------------------------------------------

/// A commented TOML template with all default values.
///
/// Every active value here must match `Config::default()` from `schema.rs`.
/// The seed and catalog examples stay commented out so the built-ins apply.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# CNAPP Dashboard Configuration
#
# This file was auto-generated with default values.
# Uncomment and modify options to customize your dashboard.
#
# Location: $XDG_CONFIG_HOME/cnapp-dashboard/config.toml

# ==============================================================================
# Logging
# ==============================================================================

[log]

# Log verbosity written to stderr.
# Options: "error", "warn", "info", "debug", "trace"
# The CNAPP_LOG environment variable overrides this value when set,
# e.g. CNAPP_LOG=cnapp_dashboard=debug
level = "info"

# ==============================================================================
# Dashboard seed
# ==============================================================================
#
# Categories the dashboard starts with. Categories are fixed for the life of
# the process; widgets can be added and removed at runtime.
# Leave this section empty to use the built-in CSPM / CWPP / Registry / Ticket
# starter dashboard.
#
# Rules:
#   - category ids must be unique
#   - widget names and widget ids must be unique within a category
#
# [[dashboard.categories]]
# id = "cspm"
# name = "CSPM Executive Dashboard"
#
# [[dashboard.categories.widgets]]
# id = "cloud-accounts"
# name = "Cloud Accounts"
# content = "<CloudAccountsChart />"

# ==============================================================================
# Widget catalog
# ==============================================================================
#
# Entries offered by the "add widget" picker, grouped by `category`.
# Leave empty to use the built-in catalog.
#
# [[catalog.widgets]]
# id = "ticket-overview"
# name = "Ticket Overview"
# category = "Ticket"
# content = "<TicketOverview />"
# description = "Track and manage support tickets"
"#;

/// Writes the default template to the XDG config path.
///
/// With `force`, an existing file is first copied to `config.toml.bak`.
/// Returns the path written.
pub fn create_default_config(force: bool) -> Result<PathBuf, ConfigError> {
    let path = xdg::config_path();
    write_template(&path, force)?;
    Ok(path)
}

/// Writes the default template to `path`.
///
/// Returns `ConfigError::AlreadyExists` if `path` exists and `force` is false.
pub fn write_template(path: &Path, force: bool) -> Result<(), ConfigError> {
    if path.exists() {
        if !force {
            return Err(ConfigError::AlreadyExists {
                path: path.to_path_buf(),
            });
        }
        let backup_path = path.with_extension("toml.bak");
        fs::copy(path, &backup_path).map_err(|e| ConfigError::WriteError {
            path: backup_path.clone(),
            source: e,
        })?;
        tracing::info!("Backed up existing config to {}", backup_path.display());
    }

    xdg::ensure_parent_dir(path).map_err(|e| ConfigError::WriteError {
        path: path.to_path_buf(),
        source: e,
    })?;

    fs::write(path, DEFAULT_CONFIG_TEMPLATE).map_err(|e| ConfigError::WriteError {
        path: path.to_path_buf(),
        source: e,
    })?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600)).map_err(|e| {
            ConfigError::WriteError {
                path: path.to_path_buf(),
                source: e,
            }
        })?;
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
