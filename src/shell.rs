//! Line-oriented presentation shell over a [`DashboardStore`].
//!
//! The shell is the thin adapter between a user and the store: it parses one
//! command per line, calls the store, and turns the broadcast notifications
//! into `[ok]` / `[error]` toast lines.
//!
//! ```text
//! show
//! catalog [query]
//! add <category> <catalog-id>...
//! add-custom <category> "<name>" "<content>"
//! remove <category> <widget-id>
//! help
//! quit
//! ```

use crate::catalog::WidgetCatalog;
use crate::notification::{self, Notification, NotificationKind, Notifier};
use crate::store::{DashboardStore, DashboardUpdate};
use crate::{DashboardData, NewWidget};
use std::io::{self, BufRead, Write};
use tokio::sync::broadcast;

const HELP: &str = "\
Commands:
  show                                  list categories and widgets
  catalog [query]                       list catalog widgets, optionally filtered
  add <category> <catalog-id>...        add catalog widgets to a category
  add-custom <category> <name> <content>
                                        add a widget by name and content
  remove <category> <widget-id>         remove a widget
  help                                  show this help
  quit                                  leave the shell";

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Show,
    Catalog(String),
    Add {
        category_id: String,
        catalog_ids: Vec<String>,
    },
    AddCustom {
        category_id: String,
        widget: NewWidget,
    },
    Remove {
        category_id: String,
        widget_id: String,
    },
    Help,
    Quit,
}

/// Errors for lines that are not valid commands.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown command '{0}' (try 'help')")]
    UnknownCommand(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("unterminated quote")]
    UnterminatedQuote,
}

impl Command {
    /// Parses one input line.
    ///
    /// Blank lines and lines starting with `#` yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Command>, ParseError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        let args = split_args(line)?;
        let (name, rest) = match args.split_first() {
            Some((name, rest)) => (name.as_str(), rest),
            None => return Ok(None),
        };

        let command = match (name, rest) {
            ("show", []) => Command::Show,
            ("show", _) => return Err(ParseError::Usage("show")),
            ("catalog", query) => Command::Catalog(query.join(" ")),
            ("add", [category_id, ids @ ..]) if !ids.is_empty() => Command::Add {
                category_id: category_id.clone(),
                catalog_ids: ids.to_vec(),
            },
            ("add", _) => return Err(ParseError::Usage("add <category> <catalog-id>...")),
            ("add-custom", [category_id, name, content]) => Command::AddCustom {
                category_id: category_id.clone(),
                widget: NewWidget::new(name.clone(), content.clone()),
            },
            ("add-custom", _) => {
                return Err(ParseError::Usage("add-custom <category> <name> <content>"))
            }
            ("remove", [category_id, widget_id]) => Command::Remove {
                category_id: category_id.clone(),
                widget_id: widget_id.clone(),
            },
            ("remove", _) => return Err(ParseError::Usage("remove <category> <widget-id>")),
            ("help", _) => Command::Help,
            ("quit" | "exit", _) => Command::Quit,
            (other, _) => return Err(ParseError::UnknownCommand(other.to_string())),
        };
        Ok(Some(command))
    }
}

/// Splits on whitespace, keeping double-quoted runs together.
fn split_args(line: &str) -> Result<Vec<String>, ParseError> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_token = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                has_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_token {
                    args.push(std::mem::take(&mut current));
                    has_token = false;
                }
            }
            c => {
                current.push(c);
                has_token = true;
            }
        }
    }
    if in_quotes {
        return Err(ParseError::UnterminatedQuote);
    }
    if has_token {
        args.push(current);
    }
    Ok(args)
}

/// Resolves a widget content identifier to the panel it renders.
///
/// Unknown identifiers render a placeholder instead of failing the view.
pub fn content_label(content: &str) -> &'static str {
    match content {
        "<CloudAccountsChart />" => "cloud accounts chart",
        "<RiskAssessmentChart />" => "risk assessment chart",
        "<WorkloadAlerts />" => "workload alerts",
        "<RegistryScan />" => "registry scan",
        _ => "No content available",
    }
}

/// Renders the dashboard as text, one block per category.
pub fn render_dashboard(data: &DashboardData) -> String {
    let mut out = String::new();
    for category in &data.categories {
        let count = category.widgets.len();
        let noun = if count == 1 { "widget" } else { "widgets" };
        out.push_str(&format!(
            "{} [{}] ({} {})\n",
            category.name, category.id, count, noun
        ));
        if category.widgets.is_empty() {
            out.push_str("  No widgets added yet\n");
        }
        for widget in &category.widgets {
            out.push_str(&format!(
                "  - {} ({}): {}\n",
                widget.name,
                widget.id,
                content_label(&widget.content)
            ));
        }
    }
    out
}

/// Renders catalog search results grouped by picker category.
pub fn render_catalog(catalog: &WidgetCatalog, query: &str) -> String {
    let mut out = String::new();
    for group in catalog.grouped(query) {
        out.push_str(group.category);
        out.push('\n');
        if group.entries.is_empty() {
            out.push_str("  (no matches)\n");
        }
        for entry in group.entries {
            out.push_str(&format!(
                "  {:<18} {} - {}\n",
                entry.id, entry.name, entry.description
            ));
        }
    }
    out
}

/// Writes notifications as toast lines.
struct ToastWriter<'a, W: Write> {
    out: &'a mut W,
    error: Option<io::Error>,
}

impl<W: Write> Notifier for ToastWriter<'_, W> {
    fn notify(&mut self, notification: &Notification) {
        let tag = match notification.kind {
            NotificationKind::Success => "ok",
            NotificationKind::Error => "error",
        };
        if let Err(e) = writeln!(self.out, "[{}] {}", tag, notification.message) {
            self.error.get_or_insert(e);
        }
    }
}

/// Interactive shell bound to one store.
pub struct Shell<W: Write> {
    store: DashboardStore,
    catalog: WidgetCatalog,
    updates: broadcast::Receiver<DashboardUpdate>,
    out: W,
}

impl<W: Write> Shell<W> {
    /// Creates a shell and subscribes it to `store`.
    pub fn new(store: DashboardStore, catalog: WidgetCatalog, out: W) -> Self {
        let updates = store.subscribe();
        Self {
            store,
            catalog,
            updates,
            out,
        }
    }

    /// Consumes the shell and returns its output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Runs commands from `input` until EOF or `quit`.
    pub fn run<R: BufRead>(&mut self, input: R) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            match Command::parse(&line) {
                Ok(Some(command)) => {
                    if !self.execute(command)? {
                        break;
                    }
                }
                Ok(None) => {}
                Err(e) => writeln!(self.out, "{}", e)?,
            }
        }
        Ok(())
    }

    /// Executes one command. Returns `false` when the shell should stop.
    pub fn execute(&mut self, command: Command) -> io::Result<bool> {
        tracing::trace!("Executing shell command {:?}", command);
        match command {
            Command::Show => {
                let snapshot = self.store.snapshot();
                write!(self.out, "{}", render_dashboard(&snapshot))?;
            }
            Command::Catalog(query) => {
                write!(self.out, "{}", render_catalog(&self.catalog, &query))?;
            }
            Command::Add {
                category_id,
                catalog_ids,
            } => {
                // Flush per id so a long selection cannot outrun the channel.
                for id in &catalog_ids {
                    let added = self.catalog.add_selection(
                        &self.store,
                        &category_id,
                        std::slice::from_ref(id),
                    );
                    if added.is_empty() {
                        writeln!(self.out, "unknown catalog widget '{}'", id)?;
                    }
                    self.flush_notifications()?;
                }
            }
            Command::AddCustom {
                category_id,
                widget,
            } => {
                let _ = self.store.add_widget(&category_id, widget);
            }
            Command::Remove {
                category_id,
                widget_id,
            } => {
                self.store.remove_widget(&category_id, &widget_id);
            }
            Command::Help => writeln!(self.out, "{}", HELP)?,
            Command::Quit => return Ok(false),
        }
        self.flush_notifications()?;
        Ok(true)
    }

    /// Prints every pending notification.
    fn flush_notifications(&mut self) -> io::Result<()> {
        let mut toasts = ToastWriter {
            out: &mut self.out,
            error: None,
        };
        notification::drain(&mut self.updates, &mut toasts);
        match toasts.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_script(script: &str) -> String {
        let mut shell = Shell::new(
            DashboardStore::with_default_seed(),
            WidgetCatalog::builtin(),
            Vec::new(),
        );
        shell.run(script.as_bytes()).expect("in-memory io");
        String::from_utf8(shell.into_output()).expect("utf8 output")
    }

    // -- parsing ------------------------------------------------------------

    #[test]
    fn parse_blank_and_comment_lines() {
        assert_eq!(Command::parse("   "), Ok(None));
        assert_eq!(Command::parse("# note"), Ok(None));
    }

    #[test]
    fn parse_add_with_multiple_ids() {
        assert_eq!(
            Command::parse("add cspm ticket-overview registry-scan"),
            Ok(Some(Command::Add {
                category_id: "cspm".to_string(),
                catalog_ids: vec!["ticket-overview".to_string(), "registry-scan".to_string()],
            }))
        );
    }

    #[test]
    fn parse_add_custom_with_quotes() {
        assert_eq!(
            Command::parse(r#"add-custom cwpp "New Panel" "<Foo />""#),
            Ok(Some(Command::AddCustom {
                category_id: "cwpp".to_string(),
                widget: NewWidget::new("New Panel", "<Foo />"),
            }))
        );
    }

    #[test]
    fn parse_catalog_query_is_optional() {
        assert_eq!(
            Command::parse("catalog"),
            Ok(Some(Command::Catalog(String::new())))
        );
        assert_eq!(
            Command::parse("catalog cloud accounts"),
            Ok(Some(Command::Catalog("cloud accounts".to_string())))
        );
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            Command::parse("frobnicate"),
            Err(ParseError::UnknownCommand("frobnicate".to_string()))
        );
        assert!(matches!(Command::parse("remove cspm"), Err(ParseError::Usage(_))));
        assert!(matches!(Command::parse("add cspm"), Err(ParseError::Usage(_))));
        assert_eq!(
            Command::parse(r#"add-custom a "open"#),
            Err(ParseError::UnterminatedQuote)
        );
    }

    #[test]
    fn split_args_keeps_empty_quoted_token() {
        assert_eq!(
            split_args(r#"a "" b"#),
            Ok(vec!["a".to_string(), String::new(), "b".to_string()])
        );
    }

    // -- rendering ----------------------------------------------------------

    #[test]
    fn content_label_unknown_is_placeholder() {
        assert_eq!(content_label("<CloudAccountsChart />"), "cloud accounts chart");
        assert_eq!(content_label("<Nope />"), "No content available");
    }

    #[test]
    fn render_dashboard_counts_and_empty_categories() {
        let store = DashboardStore::with_default_seed();
        store.remove_widget("cwpp", "workload-alerts");
        let text = render_dashboard(&store.snapshot());
        assert!(text.contains("CSPM Executive Dashboard [cspm] (2 widgets)"));
        assert!(text.contains("Registry Scan [registry] (1 widget)"));
        assert!(text.contains("CWPP Dashboard [cwpp] (0 widgets)\n  No widgets added yet"));
    }

    #[test]
    fn render_catalog_shows_empty_groups() {
        let text = render_catalog(&WidgetCatalog::builtin(), "ticket");
        assert!(text.contains("Ticket\n  ticket-overview"));
        assert!(text.contains("CSPM\n  (no matches)"));
    }

    // -- execution ----------------------------------------------------------

    #[test]
    fn add_custom_prints_success_toast() {
        let out = run_script("add-custom cwpp \"New Panel\" \"<Foo/>\"\n");
        assert_eq!(out, "[ok] Widget added successfully\n");
    }

    #[test]
    fn add_to_unknown_category_prints_error_toast() {
        let out = run_script("add-custom nonexistent X Y\n");
        assert_eq!(out, "[error] Category not found\n");
    }

    #[test]
    fn add_duplicate_prints_error_toast() {
        let out = run_script("add cwpp workload-alerts\n");
        assert_eq!(out, "[error] Widget already exists in this category\n");
    }

    #[test]
    fn add_reports_unknown_catalog_ids() {
        let out = run_script("add cwpp nope ticket-overview\n");
        assert_eq!(
            out,
            "unknown catalog widget 'nope'\n[ok] Widget added successfully\n"
        );
    }

    #[test]
    fn add_long_selection_prints_every_toast() {
        let ids = vec!["ticket-overview"; 300].join(" ");
        let out = run_script(&format!("add cwpp {ids}\n"));
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 300);
        assert_eq!(lines[0], "[ok] Widget added successfully");
        assert!(lines[1..]
            .iter()
            .all(|l| *l == "[error] Widget already exists in this category"));
    }

    #[test]
    fn remove_always_prints_success() {
        let out = run_script("remove cspm cloud-accounts\nremove cspm cloud-accounts\n");
        assert_eq!(
            out,
            "[ok] Widget removed successfully\n[ok] Widget removed successfully\n"
        );
    }

    #[test]
    fn quit_stops_processing() {
        let out = run_script("quit\nremove cspm cloud-accounts\n");
        assert!(out.is_empty());
    }

    #[test]
    fn parse_error_is_reported_and_shell_continues() {
        let out = run_script("bogus\nremove cspm cloud-accounts\n");
        assert!(out.starts_with("unknown command 'bogus'"));
        assert!(out.ends_with("[ok] Widget removed successfully\n"));
    }

    #[test]
    fn show_reflects_mutations() {
        let out = run_script("add-custom ticket Extra \"<RegistryScan />\"\nshow\n");
        assert!(out.contains("Ticket Dashboard [ticket] (2 widgets)"));
        assert!(out.contains("  - Extra (widget-1): registry scan"));
    }
}
