//! Widget catalog for the "add widget" picker.
//!
//! The catalog is static reference data. Its `category` tag only groups
//! entries in the picker; the store is told which dashboard category to add
//! into and does its own validation.

use crate::store::DashboardStore;
use crate::{DashboardError, NewWidget, Widget};

/// One selectable widget definition.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CatalogEntry {
    /// Catalog identifier (not the id the widget gets on the dashboard).
    pub id: String,
    pub name: String,
    /// Picker group, e.g. `CSPM`.
    pub category: String,
    /// Renderer identifier.
    pub content: String,
    #[serde(default)]
    pub description: String,
}

impl CatalogEntry {
    pub fn new(
        id: &str,
        name: &str,
        category: &str,
        content: &str,
        description: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            content: content.to_string(),
            description: description.to_string(),
        }
    }

    /// Returns `true` if `needle` (already lowercased) occurs in the name or
    /// the description, ignoring case.
    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.description.to_lowercase().contains(needle)
    }

    /// The input handed to [`DashboardStore::add_widget`].
    pub fn to_new_widget(&self) -> NewWidget {
        NewWidget::new(self.name.clone(), self.content.clone())
    }
}

/// Catalog entries sharing one picker category.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct CatalogGroup<'a> {
    pub category: &'a str,
    pub entries: Vec<&'a CatalogEntry>,
}

/// Ordered, read-only list of catalog entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetCatalog {
    entries: Vec<CatalogEntry>,
}

impl WidgetCatalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// The stock catalog.
    pub fn builtin() -> Self {
        Self::new(vec![
            CatalogEntry::new(
                "cloud-accounts",
                "Cloud Accounts",
                "CSPM",
                "<CloudAccountsChart />",
                "View and manage your cloud provider accounts",
            ),
            CatalogEntry::new(
                "risk-assessment",
                "Risk Assessment",
                "CSPM",
                "<RiskAssessmentChart />",
                "Assess security risks across your cloud resources",
            ),
            CatalogEntry::new(
                "workload-alerts",
                "Workload Alerts",
                "CWPP",
                "<WorkloadAlerts />",
                "Monitor and respond to workload security alerts",
            ),
            CatalogEntry::new(
                "registry-scan",
                "Registry Scan",
                "Image",
                "<RegistryScan />",
                "Scan container registries for vulnerabilities",
            ),
            CatalogEntry::new(
                "ticket-overview",
                "Ticket Overview",
                "Ticket",
                "<TicketOverview />",
                "Track and manage support tickets",
            ),
        ])
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Entries whose name or description contains `query`, ignoring case.
    ///
    /// An empty query matches every entry. The query is not trimmed, so
    /// whitespace is matched literally. Catalog order is kept.
    pub fn search(&self, query: &str) -> Vec<&CatalogEntry> {
        let needle = query.to_lowercase();
        self.entries.iter().filter(|e| e.matches(&needle)).collect()
    }

    /// Distinct picker categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for entry in &self.entries {
            if !seen.contains(&entry.category.as_str()) {
                seen.push(&entry.category);
            }
        }
        seen
    }

    /// Search results grouped by picker category.
    ///
    /// Every catalog category appears, in [`categories`](Self::categories)
    /// order, even when the search leaves it empty (an empty tab).
    pub fn grouped(&self, query: &str) -> Vec<CatalogGroup<'_>> {
        let matches = self.search(query);
        self.categories()
            .into_iter()
            .map(|category| CatalogGroup {
                category,
                entries: matches
                    .iter()
                    .copied()
                    .filter(|e| e.category == category)
                    .collect(),
            })
            .collect()
    }

    /// Adds every selected catalog entry to `category_id`, in selection order.
    ///
    /// Ids missing from the catalog are skipped. Each added entry goes
    /// through [`DashboardStore::add_widget`] and yields one result.
    pub fn add_selection<S: AsRef<str>>(
        &self,
        store: &DashboardStore,
        category_id: &str,
        selected: &[S],
    ) -> Vec<Result<Widget, DashboardError>> {
        selected
            .iter()
            .filter_map(|id| {
                let entry = self.get(id.as_ref());
                if entry.is_none() {
                    tracing::debug!("Catalog has no widget {}, skipping", id.as_ref());
                }
                entry
            })
            .map(|entry| store.add_widget(category_id, entry.to_new_widget()))
            .collect()
    }
}

impl Default for WidgetCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
