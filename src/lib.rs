//! CNAPP Dashboard library
//!
//! This crate provides the in-memory state behind the CNAPP dashboard: a fixed
//! set of widget categories, the [`store::DashboardStore`] that applies the
//! add/remove mutations, and the static [`catalog::WidgetCatalog`] the
//! presentation layer offers in its "add widget" picker.
//!
//! Rendering is not part of this crate. Presentation code reads snapshots
//! from the store, calls its two mutators, and turns the broadcast
//! [`notification::Notification`]s into toasts.

use std::collections::HashSet;

/// Widget catalog offered by the "add widget" picker.
pub mod catalog;

/// Configuration loading, schema and XDG path resolution.
pub mod config;

/// Tracing subscriber initialization.
pub mod logging;

/// Mutation results mapped to user-facing notifications.
pub mod notification;

/// Built-in starter dashboard.
pub mod seed;

/// Line-oriented presentation shell over a store.
pub mod shell;

/// Dashboard state store with subscriber notifications.
pub mod store;

/// A single visual panel on the dashboard.
///
/// `content` is an opaque identifier the presentation layer resolves to a
/// renderer (e.g. `<CloudAccountsChart />`).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Widget {
    /// Identifier, unique within the owning category.
    pub id: String,
    /// Display name, unique within the owning category.
    pub name: String,
    /// Renderer identifier.
    pub content: String,
}

impl Widget {
    /// Creates a widget from its parts.
    pub fn new(id: impl Into<String>, name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Caller-supplied input for [`store::DashboardStore::add_widget`].
///
/// Carries no id; the store assigns one when the widget is created.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NewWidget {
    /// Display name.
    pub name: String,
    /// Renderer identifier.
    pub content: String,
}

impl NewWidget {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// A named group of widgets. Widget order is display order.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Category {
    /// Identifier, unique across the dashboard.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Widgets in insertion order.
    #[serde(default)]
    pub widgets: Vec<Widget>,
}

impl Category {
    /// Creates a category with the given widgets.
    pub fn new(id: impl Into<String>, name: impl Into<String>, widgets: Vec<Widget>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            widgets,
        }
    }

    /// Looks up a widget by id.
    pub fn widget(&self, id: &str) -> Option<&Widget> {
        self.widgets.iter().find(|w| w.id == id)
    }

    /// Returns `true` if a widget with exactly this name exists (case-sensitive).
    pub fn has_widget_named(&self, name: &str) -> bool {
        self.widgets.iter().any(|w| w.name == name)
    }

    /// Returns `true` if a widget with this id exists.
    pub fn has_widget_id(&self, id: &str) -> bool {
        self.widgets.iter().any(|w| w.id == id)
    }
}

/// The complete dashboard: an ordered list of categories.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DashboardData {
    /// Categories in display order.
    pub categories: Vec<Category>,
}

impl DashboardData {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Looks up a category by id.
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Total number of widgets across all categories.
    pub fn widget_count(&self) -> usize {
        self.categories.iter().map(|c| c.widgets.len()).sum()
    }

    /// Checks the structural invariants a seed must satisfy.
    ///
    /// Category ids must be unique across the dashboard; widget names and
    /// widget ids must each be unique within their category.
    pub fn validate(&self) -> Result<(), SeedError> {
        let mut category_ids = HashSet::new();
        for category in &self.categories {
            if !category_ids.insert(category.id.as_str()) {
                return Err(SeedError::DuplicateCategory(category.id.clone()));
            }
            let mut names = HashSet::new();
            let mut ids = HashSet::new();
            for widget in &category.widgets {
                if !names.insert(widget.name.as_str()) {
                    return Err(SeedError::DuplicateWidgetName {
                        category_id: category.id.clone(),
                        name: widget.name.clone(),
                    });
                }
                if !ids.insert(widget.id.as_str()) {
                    return Err(SeedError::DuplicateWidgetId {
                        category_id: category.id.clone(),
                        widget_id: widget.id.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Rejections produced by [`store::DashboardStore::add_widget`].
///
/// The display text is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DashboardError {
    /// The target category does not exist.
    #[error("Category not found")]
    CategoryNotFound(String),

    /// The target category already has a widget with this name.
    #[error("Widget already exists in this category")]
    DuplicateWidget {
        /// Category that was targeted.
        category_id: String,
        /// Name that collided.
        name: String,
    },
}

/// Seed data that violates the dashboard invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeedError {
    /// Two categories share an id.
    #[error("duplicate category id: {0}")]
    DuplicateCategory(String),

    /// Two widgets in one category share a name.
    #[error("duplicate widget name '{name}' in category {category_id}")]
    DuplicateWidgetName { category_id: String, name: String },

    /// Two widgets in one category share an id.
    #[error("duplicate widget id '{widget_id}' in category {category_id}")]
    DuplicateWidgetId {
        category_id: String,
        widget_id: String,
    },
}

#[cfg(test)]
mod tests;
