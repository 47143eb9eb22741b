//! Tests for the DashboardStore module.
//!
//! Tests are organized into categories:
//! - `basic`: Construction, seeding and read accessors
//! - `add`: add_widget validation and effects
//! - `remove`: remove_widget lenient semantics
//! - `isolation`: mutations never leak into other categories
//! - `subscriber`: Broadcast channel and notifications
//! - `concurrent`: Concurrent access and thread-safety


use super::DashboardStore;
use crate::{Category, DashboardData, NewWidget, Widget};

/// Helper creating a store with one category holding widgets `a` and `b`
/// plus an empty category.
pub(super) fn create_test_store() -> DashboardStore {
    let seed = DashboardData::new(vec![
        Category::new(
            "cat",
            "Test Category",
            vec![
                Widget::new("a", "Alpha", "<Alpha />"),
                Widget::new("b", "Beta", "<Beta />"),
            ],
        ),
        Category::new("empty", "Empty Category", vec![]),
    ]);
    DashboardStore::new(seed).expect("test seed is valid")
}

/// Helper building a widget input.
pub(super) fn new_widget(name: &str) -> NewWidget {
    NewWidget::new(name, format!("<{} />", name.replace(' ', "")))
}
