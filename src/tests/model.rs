use crate::{Category, DashboardData, SeedError, Widget};

fn sample() -> DashboardData {
    DashboardData::new(vec![
        Category::new(
            "a",
            "Alpha",
            vec![
                Widget::new("w1", "One", "<One />"),
                Widget::new("w2", "Two", "<Two />"),
            ],
        ),
        Category::new("b", "Beta", vec![]),
    ])
}

#[test]
fn category_lookup_by_id() {
    let data = sample();
    assert_eq!(data.category("a").map(|c| c.name.as_str()), Some("Alpha"));
    assert!(data.category("missing").is_none());
}

#[test]
fn widget_lookup_and_name_check() {
    let data = sample();
    let alpha = data.category("a").expect("alpha exists");
    assert_eq!(alpha.widget("w2").map(|w| w.name.as_str()), Some("Two"));
    assert!(alpha.has_widget_named("One"));
    assert!(!alpha.has_widget_named("one"), "name match is case-sensitive");
    assert!(alpha.has_widget_id("w1"));
    assert!(!alpha.has_widget_id("w3"));
}

#[test]
fn widget_count_sums_all_categories() {
    assert_eq!(sample().widget_count(), 2);
    assert_eq!(DashboardData::default().widget_count(), 0);
}

#[test]
fn validate_accepts_well_formed_data() {
    assert_eq!(sample().validate(), Ok(()));
}

#[test]
fn validate_rejects_duplicate_category_ids() {
    let data = DashboardData::new(vec![
        Category::new("dup", "First", vec![]),
        Category::new("dup", "Second", vec![]),
    ]);
    assert_eq!(
        data.validate(),
        Err(SeedError::DuplicateCategory("dup".to_string()))
    );
}

#[test]
fn validate_rejects_duplicate_widget_names() {
    let data = DashboardData::new(vec![Category::new(
        "a",
        "Alpha",
        vec![
            Widget::new("w1", "Same", "<X />"),
            Widget::new("w2", "Same", "<Y />"),
        ],
    )]);
    assert!(matches!(
        data.validate(),
        Err(SeedError::DuplicateWidgetName { ref name, .. }) if name == "Same"
    ));
}

#[test]
fn validate_rejects_duplicate_widget_ids() {
    let data = DashboardData::new(vec![Category::new(
        "a",
        "Alpha",
        vec![
            Widget::new("w1", "One", "<X />"),
            Widget::new("w1", "Two", "<Y />"),
        ],
    )]);
    assert!(matches!(
        data.validate(),
        Err(SeedError::DuplicateWidgetId { ref widget_id, .. }) if widget_id == "w1"
    ));
}

#[test]
fn same_widget_name_allowed_in_different_categories() {
    let data = DashboardData::new(vec![
        Category::new("a", "Alpha", vec![Widget::new("w1", "Shared", "<X />")]),
        Category::new("b", "Beta", vec![Widget::new("w1", "Shared", "<X />")]),
    ]);
    assert_eq!(data.validate(), Ok(()));
}
