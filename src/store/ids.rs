//! Widget id assignment.

use crate::Category;

/// Monotonic widget id source, one per store.
///
/// Ids look like `widget-7`. A value already taken in the target category
/// (e.g. by seed data) is skipped, and removed ids are never handed out again.
#[derive(Debug, Clone)]
pub struct WidgetIdGenerator {
    next: u64,
}

impl WidgetIdGenerator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Returns an id that no widget in `category` currently uses.
    pub fn next_for(&mut self, category: &Category) -> String {
        loop {
            let id = format!("widget-{}", self.next);
            self.next += 1;
            if !category.has_widget_id(&id) {
                return id;
            }
        }
    }
}

impl Default for WidgetIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
