//! TOML configuration schema types for the CNAPP dashboard.
//!
//! All structs derive `Deserialize` and `Serialize` with defaults via
//! `#[serde(default)]`, so an empty file is a valid configuration.
//! Empty `dashboard.categories` / `catalog.widgets` lists mean "use the
//! built-in seed / catalog".

use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogEntry, WidgetCatalog};
use crate::config::error::ConfigError;
use crate::{Category, DashboardData};

// ---------------------------------------------------------------------------
// Top-level Config
// ---------------------------------------------------------------------------

/// Root configuration encompassing all sections.
///
/// ```toml
/// [log]
/// [dashboard]
/// [catalog]
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Logging settings.
    pub log: LogConfig,
    /// Seed categories for the dashboard store.
    pub dashboard: DashboardConfig,
    /// Entries offered by the "add widget" picker.
    pub catalog: CatalogConfig,
}

impl Config {
    /// Dashboard the store should be seeded with.
    ///
    /// Falls back to [`crate::seed::default_dashboard`] when no categories
    /// are configured.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidSeed`] if configured categories repeat an id, or
    /// a category repeats a widget name or id.
    pub fn seed(&self) -> Result<DashboardData, ConfigError> {
        if self.dashboard.categories.is_empty() {
            return Ok(crate::seed::default_dashboard());
        }
        let data = DashboardData::new(self.dashboard.categories.clone());
        data.validate()?;
        Ok(data)
    }

    /// Catalog for the picker; the built-in catalog when none is configured.
    pub fn catalog(&self) -> WidgetCatalog {
        if self.catalog.widgets.is_empty() {
            WidgetCatalog::builtin()
        } else {
            WidgetCatalog::new(self.catalog.widgets.clone())
        }
    }
}

// ---------------------------------------------------------------------------
// Log
// ---------------------------------------------------------------------------

/// Logging configuration. `CNAPP_LOG` overrides `level` when set.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    pub level: LogLevel,
}

/// Log verbosity levels (kebab-case in TOML).
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LogLevel {
    /// Only errors.
    Error,
    /// Errors and warnings.
    Warn,
    /// Informational messages (default).
    #[default]
    Info,
    /// Debug-level detail.
    Debug,
    /// Full trace output.
    Trace,
}

impl LogLevel {
    /// The `EnvFilter` directive for this level.
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

// ---------------------------------------------------------------------------
// Dashboard / catalog
// ---------------------------------------------------------------------------

/// Seed categories, in display order.
///
/// ```toml
/// [[dashboard.categories]]
/// id = "cspm"
/// name = "CSPM Executive Dashboard"
///
/// [[dashboard.categories.widgets]]
/// id = "cloud-accounts"
/// name = "Cloud Accounts"
/// content = "<CloudAccountsChart />"
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct DashboardConfig {
    pub categories: Vec<Category>,
}

/// Catalog entries, in picker order.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct CatalogConfig {
    pub widgets: Vec<CatalogEntry>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
