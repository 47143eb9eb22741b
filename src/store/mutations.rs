//! The two dashboard mutations.
//!
//! Each mutation computes the next [`DashboardData`] from the current one
//! while holding the write guard, swaps it in only if something changed,
//! and broadcasts one [`DashboardUpdate`] before releasing the guard so
//! subscribers observe updates in revision order.

use super::{Change, DashboardStore, DashboardUpdate, WidgetIdGenerator};
use crate::notification::Notification;
use crate::{DashboardData, DashboardError, NewWidget, Widget};
use std::sync::Arc;

/// Computes the dashboard after appending `input` to `category_id`.
///
/// Checks run in order: category existence, then name uniqueness.
fn with_added_widget(
    data: &DashboardData,
    category_id: &str,
    input: NewWidget,
    ids: &mut WidgetIdGenerator,
) -> Result<(DashboardData, Widget), DashboardError> {
    let category = data
        .category(category_id)
        .ok_or_else(|| DashboardError::CategoryNotFound(category_id.to_string()))?;

    if category.has_widget_named(&input.name) {
        return Err(DashboardError::DuplicateWidget {
            category_id: category_id.to_string(),
            name: input.name,
        });
    }

    let widget = Widget {
        id: ids.next_for(category),
        name: input.name,
        content: input.content,
    };

    let mut next = data.clone();
    if let Some(target) = next.categories.iter_mut().find(|c| c.id == category_id) {
        target.widgets.push(widget.clone());
    }
    Ok((next, widget))
}

/// Computes the dashboard after dropping `widget_id` from `category_id`.
///
/// Returns `None` when the category or the widget does not exist.
fn without_widget(
    data: &DashboardData,
    category_id: &str,
    widget_id: &str,
) -> Option<(DashboardData, Widget)> {
    let position = data
        .category(category_id)?
        .widgets
        .iter()
        .position(|w| w.id == widget_id)?;

    let mut next = data.clone();
    let target = next.categories.iter_mut().find(|c| c.id == category_id)?;
    let removed = target.widgets.remove(position);
    Some((next, removed))
}

impl DashboardStore {
    /// Appends a widget to a category.
    ///
    /// The store assigns the new widget's id. On success the widget is the
    /// last entry of the category; every other category is left untouched.
    ///
    /// # Errors
    ///
    /// * [`DashboardError::CategoryNotFound`] - no category has `category_id`.
    /// * [`DashboardError::DuplicateWidget`] - the category already holds a
    ///   widget with the same name (case-sensitive).
    ///
    /// State is unchanged on error. Either way exactly one update is
    /// broadcast, carrying a success or error notification.
    pub fn add_widget(&self, category_id: &str, widget: NewWidget) -> Result<Widget, DashboardError> {
        let mut state = self.write_state();
        let state = &mut *state;

        let result = match with_added_widget(&state.data, category_id, widget, &mut state.ids) {
            Ok((next, widget)) => {
                state.data = Arc::new(next);
                state.revision += 1;
                tracing::debug!(
                    "Added widget {} ({}) to category {}",
                    widget.id,
                    widget.name,
                    category_id
                );
                Ok(widget)
            }
            Err(e) => {
                tracing::warn!("Rejected widget for category {}: {}", category_id, e);
                Err(e)
            }
        };

        let notification = Notification::for_add(&result);
        let change = match &result {
            Ok(widget) => Change::WidgetAdded(widget.clone()),
            Err(e) => Change::Rejected(e.clone()),
        };
        self.broadcast(DashboardUpdate {
            revision: state.revision,
            category_id: category_id.to_string(),
            change,
            notification,
        });
        result
    }

    /// Removes the widget with `widget_id` from a category.
    ///
    /// Lenient: an unknown category or widget id leaves state unchanged and
    /// is not an error. The broadcast notification is a success in every
    /// case.
    ///
    /// # Returns
    ///
    /// `Some(Widget)` with the removed widget, or `None` if nothing matched.
    pub fn remove_widget(&self, category_id: &str, widget_id: &str) -> Option<Widget> {
        let mut state = self.write_state();

        let removed = match without_widget(&state.data, category_id, widget_id) {
            Some((next, widget)) => {
                state.data = Arc::new(next);
                state.revision += 1;
                tracing::debug!("Removed widget {} from category {}", widget_id, category_id);
                Some(widget)
            }
            None => {
                tracing::debug!(
                    "No widget {} in category {}, nothing removed",
                    widget_id,
                    category_id
                );
                None
            }
        };

        self.broadcast(DashboardUpdate {
            revision: state.revision,
            category_id: category_id.to_string(),
            change: Change::WidgetRemoved {
                widget_id: widget_id.to_string(),
                removed: removed.is_some(),
            },
            notification: Notification::for_remove(),
        });
        removed
    }
}
