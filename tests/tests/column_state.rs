use gridlink::{
    model::{ColumnState, ColumnStateItem, Direction},
    Notification, StateEvent, ValueStore,
};
use gridlink_driver_memory::Op;
use pretty_assertions::assert_eq;
use serde_json::json;
use tests::GridTest;

fn layout() -> ColumnState {
    ColumnState::new(vec![
        ColumnStateItem::new("City")
            .with("width", 240)
            .with("sort", "desc")
            .with("sortIndex", 0),
        ColumnStateItem::new("Name").with("width", 120).with("hide", false),
        ColumnStateItem::new("Age").with("hide", true),
    ])
}

#[tokio::test]
async fn saved_layout_is_restored_on_mount() {
    let mut test = GridTest::new(20);
    let mut grid = test.grid();

    let ready = grid.mount().await.unwrap();
    assert_eq!(ready.column_state, None);

    let saved = grid
        .on_state_updated(&StateEvent::updated(layout()))
        .await
        .unwrap();

    assert!(saved);
    assert_eq!(test.layout.get(), layout().to_json().unwrap());
    assert_eq!(
        test.notifications(),
        [Notification::SaveState {
            column_state: layout()
        }]
    );

    grid.unmount();

    let mut next = test.grid();
    let ready = next.mount().await.unwrap();
    assert_eq!(ready.column_state, Some(layout()));
}

#[tokio::test]
async fn every_update_replaces_the_whole_layout() {
    let test = GridTest::new(20);
    let mut grid = test.mounted().await;

    grid.on_state_updated(&StateEvent::updated(layout()))
        .await
        .unwrap();

    let narrowed = ColumnState::new(vec![ColumnStateItem::new("Name").with("width", 90)]);
    grid.on_state_updated(&StateEvent::updated(narrowed.clone()))
        .await
        .unwrap();

    assert_eq!(test.layout.get(), json!([{ "colId": "Name", "width": 90 }]));
    assert_eq!(
        test.log()
            .ops()
            .into_iter()
            .filter(|op| matches!(op, Op::SetValue(_)))
            .count(),
        2
    );
}

#[tokio::test]
async fn other_state_events_are_not_persisted() {
    let mut test = GridTest::new(20);
    let mut grid = test.mounted().await;

    let event = StateEvent {
        kind: "gridPreDestroyed".to_string(),
        column_state: layout(),
    };

    assert!(!grid.on_state_updated(&event).await.unwrap());
    assert!(test.log().is_empty());
    assert!(test.notifications().is_empty());
}

#[tokio::test]
async fn nothing_is_persisted_without_a_state_binding() {
    let mut test = GridTest::new(20);
    let mut config = test.config();
    config.state = None;

    let mut grid = test.grid_with(config);
    let ready = grid.mount().await.unwrap();
    assert_eq!(ready.column_state, None);

    assert!(!grid
        .on_state_updated(&StateEvent::updated(layout()))
        .await
        .unwrap());
    assert_eq!(test.layout.get(), serde_json::Value::Null);
    assert!(test.notifications().is_empty());
}

#[tokio::test]
async fn malformed_layouts_are_ignored() {
    let test = GridTest::new(20);
    test.layout
        .set_value(json!({ "columns": "not a layout" }))
        .await
        .unwrap();

    let mut grid = test.grid();
    let ready = grid.mount().await.unwrap();

    assert_eq!(ready.column_state, None);
    assert_eq!(grid.total(), 20);
}

#[tokio::test]
async fn failed_writes_are_not_reported_to_the_grid() {
    let mut test = GridTest::new(20);
    let mut grid = test.mounted().await;
    test.layout.fail_writes(true);

    let saved = grid
        .on_state_updated(&StateEvent::updated(layout()))
        .await
        .unwrap();

    assert!(saved);
    assert_eq!(test.layout.get(), serde_json::Value::Null);
    assert_eq!(test.notifications().len(), 1);
}

#[test]
fn state_events_read_the_grid_payload() {
    let event: StateEvent = serde_json::from_value(json!({
        "type": "stateUpdated",
        "columnState": [
            { "colId": "City", "width": 240, "sort": "desc", "sortIndex": 0 },
            { "colId": "Name", "width": 120, "hide": false },
            { "colId": "Age", "hide": true },
        ],
    }))
    .unwrap();

    assert_eq!(event, StateEvent::updated(layout()));
}

#[tokio::test]
async fn grid_layouts_are_persisted_verbatim() {
    let mut test = GridTest::new(20);
    let mut grid = test.mounted().await;

    let payload = json!([
        {
            "colId": "Name",
            "width": 150,
            "hide": false,
            "pinned": null,
            "sort": null,
            "sortIndex": null,
            "aggFunc": null,
            "rowGroup": false,
            "rowGroupIndex": null,
            "pivot": false,
            "pivotIndex": null,
            "flex": null,
        },
        { "colId": "City", "width": 240, "sort": "desc", "sortIndex": 0, "pinned": "left" },
    ]);

    let event: StateEvent = serde_json::from_value(json!({
        "type": "stateUpdated",
        "columnState": payload.clone(),
    }))
    .unwrap();

    assert!(grid.on_state_updated(&event).await.unwrap());
    assert_eq!(test.layout.get(), payload);
    assert_eq!(test.notifications().len(), 1);

    grid.unmount();

    let mut next = test.grid();
    let ready = next.mount().await.unwrap();
    let restored = ready.column_state.unwrap();

    assert_eq!(restored.to_json().unwrap(), payload);
    assert_eq!(restored.columns[1].sort(), Some(Direction::Desc));
}
