//! CNAPP Dashboard - CLI entry point
//!
//! Loads configuration, seeds a dashboard store and either prints it, prints
//! the widget catalog, or runs the command shell on stdin.

use cnapp_dashboard::catalog::WidgetCatalog;
use cnapp_dashboard::config::schema::LogLevel;
use cnapp_dashboard::config::{default, error::ConfigError, loader::ConfigLoader, xdg};
use cnapp_dashboard::shell::{render_catalog, Command, Shell};
use cnapp_dashboard::{logging, store::DashboardStore};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// CNAPP dashboard
#[derive(Parser)]
#[command(name = "cnapp-dash")]
#[command(version, about = "CNAPP dashboard state store and widget catalog")]
struct Cli {
    /// Configuration file (defaults to the XDG config path)
    #[arg(long = "config", global = true, value_name = "PATH")]
    config_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the cnapp-dash CLI
#[derive(Subcommand)]
enum Commands {
    /// Print the seeded dashboard
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the widget catalog grouped by category
    Catalog {
        /// Only show widgets whose name or description contains this text
        #[arg(long, default_value = "")]
        search: String,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run dashboard commands read from stdin
    Shell,

    /// Manage configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Actions for the `config` subcommand.
#[derive(Subcommand)]
enum ConfigAction {
    /// Create default configuration file
    Init {
        /// Overwrite existing configuration (creates backup)
        #[arg(long)]
        force: bool,
    },
    /// Show configuration file path
    Path,
    /// Validate configuration file
    Validate,
}

/// Errors surfaced by a command.
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Show { json } => {
            let (store, catalog) = load_dashboard(cli.config_file.as_deref())?;
            if json {
                serde_json::to_writer_pretty(&mut out, &*store.snapshot())?;
                writeln!(out)?;
            } else {
                Shell::new(store, catalog, &mut out).execute(Command::Show)?;
            }
        }
        Commands::Catalog { search, json } => {
            let (_, catalog) = load_dashboard(cli.config_file.as_deref())?;
            if json {
                serde_json::to_writer_pretty(&mut out, &catalog.grouped(&search))?;
                writeln!(out)?;
            } else {
                write!(out, "{}", render_catalog(&catalog, &search))?;
            }
        }
        Commands::Shell => {
            let (store, catalog) = load_dashboard(cli.config_file.as_deref())?;
            tracing::info!("Dashboard shell started");
            Shell::new(store, catalog, &mut out).run(io::stdin().lock())?;
        }
        Commands::Config { action } => {
            logging::init(LogLevel::default());
            run_config_command(action, cli.config_file)?;
        }
    }
    Ok(())
}

/// Loads configuration, starts logging and seeds the store.
fn load_dashboard(path: Option<&Path>) -> Result<(DashboardStore, WidgetCatalog), CliError> {
    let config = ConfigLoader::load(path)?;
    logging::init(config.log.level);
    let store = DashboardStore::new(config.seed()?).map_err(ConfigError::from)?;
    Ok((store, config.catalog()))
}

fn run_config_command(action: ConfigAction, path: Option<PathBuf>) -> Result<(), CliError> {
    match action {
        ConfigAction::Init { force } => {
            let written = match path {
                Some(path) => {
                    default::write_template(&path, force)?;
                    path
                }
                None => default::create_default_config(force)?,
            };
            println!("Created configuration at {}", written.display());
        }
        ConfigAction::Path => {
            println!("{}", path.unwrap_or_else(xdg::config_path).display());
        }
        ConfigAction::Validate => {
            let config = ConfigLoader::load(path.as_deref())?;
            let seed = config.seed()?;
            println!("Configuration is valid");
            println!(
                "{} categories, {} widgets, {} catalog entries",
                seed.categories.len(),
                seed.widget_count(),
                config.catalog().entries().len()
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_show_defaults_to_text() {
        let cli = Cli::try_parse_from(["cnapp-dash", "show"]).unwrap();
        match cli.command {
            Commands::Show { json } => assert!(!json),
            _ => panic!("unexpected command variant"),
        }
        assert!(cli.config_file.is_none());
    }

    #[test]
    fn test_global_config_flag_after_subcommand() {
        let cli =
            Cli::try_parse_from(["cnapp-dash", "shell", "--config", "/tmp/custom.toml"]).unwrap();
        assert!(matches!(cli.command, Commands::Shell));
        assert_eq!(cli.config_file, Some(PathBuf::from("/tmp/custom.toml")));
    }

    #[test]
    fn test_catalog_search_default_empty() {
        let cli = Cli::try_parse_from(["cnapp-dash", "catalog"]).unwrap();
        match cli.command {
            Commands::Catalog { search, json } => {
                assert_eq!(search, "");
                assert!(!json);
            }
            _ => panic!("unexpected command variant"),
        }
    }

    #[test]
    fn test_config_init_force_flag() {
        let cli = Cli::try_parse_from(["cnapp-dash", "config", "init", "--force"]).unwrap();
        match cli.command {
            Commands::Config {
                action: ConfigAction::Init { force },
            } => assert!(force),
            _ => panic!("unexpected command variant"),
        }
    }

    #[test]
    fn test_config_without_action_fails() {
        assert!(Cli::try_parse_from(["cnapp-dash", "config"]).is_err());
    }
}
