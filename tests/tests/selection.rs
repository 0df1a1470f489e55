use gridlink::{CurrentElement, EntityMessage, Notification};
use gridlink_driver_memory::Op;
use pretty_assertions::assert_eq;
use std::time::Duration;
use tests::{people, GridTest, WIDGET_ID};

#[tokio::test]
async fn clicking_a_row_moves_the_current_element() {
    let mut test = GridTest::new(250);
    let mut grid = test.mounted().await;
    let mut sibling = test.hub.subscribe();

    grid.select_row(3).await.unwrap();

    assert_eq!(test.person.index(), Some(3));
    assert_eq!(grid.selected(), Some(3));
    assert_eq!(test.log().ops(), [Op::SetIndex { index: 3, force: false }]);
    assert_eq!(test.notifications(), [Notification::Select]);

    assert_eq!(grid.sync().await.unwrap(), 1);
    assert_eq!(
        sibling.try_recv().unwrap(),
        EntityMessage::update(WIDGET_ID, "people", Some(3))
    );
}

#[tokio::test]
async fn shrinking_the_collection_resets_the_selection() {
    let test = GridTest::new(250);
    let mut grid = test.mounted().await;

    grid.select_row(3).await.unwrap();
    grid.sync().await.unwrap();
    test.log().clear();

    test.people.set_records(people(2));
    grid.sync().await.unwrap();

    assert_eq!(grid.selected(), Some(0));
    assert_eq!(grid.total(), 2);
    assert_eq!(test.person.index(), Some(0));
    assert_eq!(
        test.log().ops(),
        [
            Op::Fetch {
                collection: "people".into(),
                start: 0,
                len: 100,
            },
            Op::SetIndex {
                index: 0,
                force: true,
            },
        ]
    );
}

#[tokio::test]
async fn a_selection_still_in_range_is_forced() {
    let test = GridTest::new(250);
    let mut grid = test.mounted().await;
    let mut sibling = test.hub.subscribe();

    grid.select_row(1).await.unwrap();
    grid.sync().await.unwrap();
    let _ = sibling.try_recv();
    test.log().clear();

    test.people.set_records(people(10));
    grid.sync().await.unwrap();

    assert_eq!(grid.selected(), Some(1));
    assert_eq!(test.log().ops()[1], Op::SetIndex { index: 1, force: true });

    // The forced update reaches sibling widgets even though the row is the same
    assert_eq!(sibling.try_recv().unwrap().row_index, Some(1));
}

#[tokio::test]
async fn nothing_selected_stays_unselected() {
    let test = GridTest::new(250);
    let mut grid = test.mounted().await;

    test.people.set_records(people(10));
    grid.sync().await.unwrap();

    assert_eq!(grid.selected(), None);
    assert_eq!(grid.total(), 10);
    assert!(!test.log().ops().iter().any(|op| matches!(op, Op::SetIndex { .. })));
}

#[tokio::test]
async fn emptying_the_collection_clears_the_selection() {
    let test = GridTest::new(250);
    let mut grid = test.mounted().await;

    grid.select_row(3).await.unwrap();
    grid.sync().await.unwrap();
    test.log().clear();

    test.people.set_records(vec![]);
    grid.sync().await.unwrap();

    assert_eq!(grid.selected(), None);
    assert_eq!(grid.total(), 0);
    assert_eq!(test.log().fetches().len(), test.log().len());
}

#[tokio::test]
async fn external_pointer_moves_are_followed_and_relayed() {
    let test = GridTest::new(250);
    let mut grid = test.mounted().await;
    let mut sibling = test.hub.subscribe();

    test.person.move_to(Some(7));
    grid.sync().await.unwrap();

    assert_eq!(grid.selected(), Some(7));
    assert_eq!(grid.scroll_index(), 7);
    assert_eq!(
        sibling.try_recv().unwrap(),
        EntityMessage::update(WIDGET_ID, "people", Some(7))
    );
}

#[tokio::test]
async fn sibling_widgets_move_the_selection() {
    let test = GridTest::new(250);
    let mut grid = test.mounted().await;

    test.hub
        .publish(EntityMessage::update("orders-grid", "orders", Some(9)));
    test.hub
        .publish(EntityMessage::update("people-form", "people", Some(5)));
    grid.sync().await.unwrap();

    assert_eq!(grid.selected(), Some(5));
    assert!(test.log().is_empty());

    assert!(!grid.on_entity_message(&EntityMessage::update(WIDGET_ID, "people", Some(1))));
    assert_eq!(grid.selected(), Some(5));
}

#[tokio::test]
async fn clicks_select_locally_without_a_current_element() {
    let mut test = GridTest::new(20);
    let mut config = test.config();
    config.current_element = None;

    let mut grid = test.grid_with(config);
    grid.mount().await.unwrap();
    test.log().clear();

    grid.select_row(2).await.unwrap();

    assert_eq!(grid.selected(), Some(2));
    assert_eq!(grid.scroll_index(), 2);
    assert!(test.log().is_empty());
    assert_eq!(test.notifications(), [Notification::Select]);
    assert_eq!(test.person.index(), None);
}

#[tokio::test]
async fn unmounting_removes_every_listener() {
    let test = GridTest::new(20);
    let mut grid = test.grid();
    assert_eq!(test.people.listeners(), 0);

    grid.mount().await.unwrap();
    assert!(grid.is_mounted());
    assert_eq!(test.people.listeners(), 1);
    assert_eq!(test.hub.subscribers(), 1);

    grid.unmount();
    assert!(!grid.is_mounted());
    assert_eq!(test.people.listeners(), 0);
    assert_eq!(test.hub.subscribers(), 0);
    assert_eq!(grid.sync().await.unwrap(), 0);
}

#[tokio::test]
async fn run_relays_pointer_moves() {
    let test = GridTest::new(20);
    let mut grid = test.mounted().await;
    let mut sibling = test.hub.subscribe();

    let task = tokio::spawn(async move { grid.run().await });

    test.person.move_to(Some(2));

    let message = tokio::time::timeout(Duration::from_secs(5), sibling.recv())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(message, EntityMessage::update(WIDGET_ID, "people", Some(2)));

    task.abort();
}
