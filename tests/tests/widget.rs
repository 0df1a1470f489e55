use gridlink::{
    schema::Column, EntityHub, GridConfig, Notification, Settings, Value, View, Widget,
};
use gridlink_driver_memory::MemorySources;
use pretty_assertions::assert_eq;
use tests::GridTest;

#[tokio::test]
async fn the_editor_shows_sample_rows() {
    let test = GridTest::new(250);
    let widget = Widget::new(test.config(), test.hub.clone());

    let View::Build(table) = widget.render(true, &test.sources).unwrap() else {
        panic!("expected the design-time view");
    };

    assert_eq!(table.row_data.len(), 20);
    assert_eq!(table.column_defs.len(), 5);
    assert!(table
        .row_data
        .iter()
        .all(|row| row.get("City") == Some(&Value::from("address.city"))));

    // The preview never touches the collection
    assert!(test.log().is_empty());
}

#[tokio::test]
async fn the_page_shows_the_live_grid() {
    let test = GridTest::new(250);
    let widget = Widget::new(test.config(), test.hub.clone());

    let mut grid = widget
        .render(false, &test.sources)
        .unwrap()
        .into_grid()
        .unwrap();
    let ready = grid.mount().await.unwrap();

    assert_eq!(ready.column_defs.len(), 5);
    assert_eq!(ready.column_defs[3].field, "City");
    assert_eq!(ready.default_col_def.min_width, 100);
    assert_eq!(ready.options.cache_block_size, 100);
    assert_eq!(ready.options.infinite_initial_row_count, 250);
}

#[tokio::test]
async fn sample_size_follows_settings() {
    let test = GridTest::new(1);
    let widget =
        Widget::new(test.config(), EntityHub::new()).settings(Settings::new().sample_rows(3));

    let view = widget.render(true, &test.sources).unwrap();
    assert!(view.is_build());

    let View::Build(table) = view else {
        unreachable!()
    };
    assert_eq!(table.row_data.len(), 3);
}

#[test]
fn a_missing_datasource_shows_the_placeholder() {
    let sources = MemorySources::new();
    let hub = EntityHub::new();

    let unset = GridConfig::new().column(Column::new("Name", "name"));
    let view = Widget::new(unset, hub.clone())
        .render(false, &sources)
        .unwrap();
    assert!(view.is_unbound());

    let unresolved = GridConfig::new()
        .datasource("people")
        .column(Column::new("Name", "name"));
    let view = Widget::new(unresolved, hub).render(false, &sources).unwrap();
    assert!(view.is_unbound());
}

#[test]
fn invalid_columns_are_a_configuration_error() {
    let test = GridTest::new(1);
    let config = test
        .config()
        .column(Column::new("Name", "full_name"));

    let err = Widget::new(config, test.hub.clone())
        .render(false, &test.sources)
        .unwrap_err();

    assert!(err.is_invalid_config());
}

#[tokio::test]
async fn clicks_raise_host_events() {
    let mut test = GridTest::new(5);
    let grid = test.mounted().await;

    grid.on_cell_clicked("Name", Value::from("Person 002"));
    grid.on_header_clicked("Age");

    assert_eq!(
        test.notifications(),
        [
            Notification::CellClick {
                column: "Name".into(),
                value: Value::from("Person 002"),
            },
            Notification::HeaderClick {
                column: "Age".into(),
            },
        ]
    );
}

#[test]
fn widget_properties_are_read_from_json() {
    let config = GridConfig::from_json(serde_json::json!({
        "name": "People",
        "datasource": "ns:$people",
        "currentElement": "ns:person",
        "state": "layout",
        "columns": [
            { "title": "Name", "source": "name", "dataType": "string", "sorting": true },
        ],
    }))
    .unwrap();

    let paths: Vec<_> = config
        .declarations()
        .into_iter()
        .map(|declaration| (declaration.path, declaration.iterable))
        .collect();

    assert_eq!(
        paths,
        [
            ("ns:$people".to_string(), true),
            ("ns:person".to_string(), false),
            ("ns:person.name".to_string(), false),
            ("ns:$people.[].name".to_string(), true),
        ]
    );
}
