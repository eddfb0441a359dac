use facet_core::{
    FacetWidget, FacetWidgetConfig, FieldName, FilterQueryItem, QueryDescriptor, WidgetId,
};

fn item(field: &str, value: &str, hidden: bool, widget: &str) -> FilterQueryItem {
    FilterQueryItem {
        field: FieldName::new(field),
        value: value.to_string(),
        hidden,
        widget_id: WidgetId::new(widget),
    }
}

#[test]
fn alter_query_appends_field_and_one_item_per_value() {
    let mut w = FacetWidget::new("colors", FacetWidgetConfig::new("color"));
    w.select_items(["red", "blue"]);

    let mut query = QueryDescriptor::new();
    query.fields.push("size".into());
    query.fq.push(item("size", "xl", true, "sizes"));

    w.alter_query(&mut query);

    assert_eq!(query.fields, vec!["size".to_string(), "color".to_string()]);
    assert_eq!(
        query.fq,
        vec![
            item("size", "xl", true, "sizes"),
            item("color", "red", false, "colors"),
            item("color", "blue", false, "colors"),
        ]
    );
}

#[test]
fn alter_query_with_empty_selection_still_requests_field() {
    let w = FacetWidget::new("colors", FacetWidgetConfig::new("color"));

    let mut query = QueryDescriptor::new();
    w.alter_query(&mut query);

    assert_eq!(query.fields, vec!["color".to_string()]);
    assert!(query.fq.is_empty());
}

#[test]
fn hidden_flag_is_carried_into_every_item() {
    let mut w = FacetWidget::new("tags", FacetWidgetConfig::new("tag").with_hidden(true));
    w.select_items(["x", "y"]);

    assert!(w.filter_items().iter().all(|i| i.hidden));
}

#[test]
fn filter_items_follow_selection_order() {
    let mut w = FacetWidget::new("tags", FacetWidgetConfig::new("tag"));
    w.select_items(["b"]);
    w.select_items(["a", "c"]);
    w.deselect_items(["a"]);

    let values: Vec<_> = w.filter_items().into_iter().map(|i| i.value).collect();
    assert_eq!(values, vec!["b".to_string(), "c".to_string()]);
}

#[test]
fn several_widgets_contribute_to_one_query() {
    let mut colors = FacetWidget::new("colors", FacetWidgetConfig::new("color"));
    let mut sizes = FacetWidget::new("sizes", FacetWidgetConfig::new("size"));
    colors.select_items(["red"]);
    sizes.select_items(["m"]);

    let mut query = QueryDescriptor::new();
    colors.alter_query(&mut query);
    sizes.alter_query(&mut query);

    assert_eq!(query.fields, vec!["color".to_string(), "size".to_string()]);
    assert_eq!(query.fq[0].widget_id.as_str(), "colors");
    assert_eq!(query.fq[1].widget_id.as_str(), "sizes");
}

#[test]
fn fingerprint_follows_selection() {
    let mut w = FacetWidget::new("colors", FacetWidgetConfig::new("color"));

    let mut empty = QueryDescriptor::new();
    w.alter_query(&mut empty);

    w.select_items(["red"]);
    let mut selected = QueryDescriptor::new();
    w.alter_query(&mut selected);

    let mut again = QueryDescriptor::new();
    w.alter_query(&mut again);

    assert_ne!(empty.fingerprint(), selected.fingerprint());
    assert_eq!(selected.fingerprint(), again.fingerprint());
}
