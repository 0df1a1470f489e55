use gridlink::{
    model::{Condition, Direction, FilterModel, FilterOp, SortModel},
    PageRequest, Value,
};
use gridlink_driver_memory::Op;
use pretty_assertions::assert_eq;
use tests::{people, GridTest};

fn first_name(page: &gridlink::Page) -> Value {
    page.rows[0].get("Name").cloned().unwrap_or_default()
}

#[tokio::test]
async fn an_unchanged_sort_model_is_applied_once() {
    let test = GridTest::new(250);
    let mut grid = test.mounted().await;

    let request = PageRequest::new(0).sort(SortModel::new().by("Name", Direction::Desc));

    let page = grid.request_page(&request).await.unwrap();
    assert_eq!(first_name(&page), Value::from("Person 249"));

    grid.request_page(&request).await.unwrap();
    grid.request_page(&PageRequest::new(100).sort(request.sort_model.clone()))
        .await
        .unwrap();

    assert_eq!(
        test.log().order_bys(),
        [Op::OrderBy {
            collection: "people".into(),
            expr: "name desc".into(),
        }]
    );
}

#[tokio::test]
async fn a_changed_sort_model_is_applied_again() {
    let test = GridTest::new(250);
    let mut grid = test.mounted().await;

    let by_name = SortModel::new().by("Name", Direction::Desc);
    let by_city_then_age = SortModel::new()
        .by("City", Direction::Asc)
        .by("Age", Direction::Desc);

    grid.request_page(&PageRequest::new(0).sort(by_name)).await.unwrap();
    let page = grid
        .request_page(&PageRequest::new(0).sort(by_city_then_age))
        .await
        .unwrap();

    let order_bys = test.log().order_bys();
    assert_eq!(order_bys.len(), 2);
    assert_eq!(
        order_bys[1],
        Op::OrderBy {
            collection: "people".into(),
            expr: "address.city asc, age desc".into(),
        }
    );

    let first = &page.rows[0];
    assert_eq!(first.get("City"), Some(&Value::from("Berlin")));
    assert_eq!(first.get("Age"), Some(&Value::I64(68)));
}

#[tokio::test]
async fn an_empty_sort_model_issues_nothing() {
    let test = GridTest::new(20);
    let mut grid = test.mounted().await;

    grid.request_page(&PageRequest::new(0)).await.unwrap();
    assert!(test.log().order_bys().is_empty());
}

#[tokio::test]
async fn sorting_unknown_columns_issues_nothing() {
    let test = GridTest::new(20);
    let mut grid = test.mounted().await;

    let request = PageRequest::new(0).sort(SortModel::new().by("Salary", Direction::Asc));
    grid.request_page(&request).await.unwrap();

    assert!(test.log().order_bys().is_empty());
}

#[tokio::test]
async fn filtered_pages_sort_the_search_fork() {
    let test = GridTest::new(250);
    let mut grid = test.mounted().await;

    let by_age = SortModel::new().by("Age", Direction::Asc);
    let paris = FilterModel::new().with("City", Condition::text(FilterOp::Equals, "Paris"));
    let rome = FilterModel::new().with("City", Condition::text(FilterOp::Equals, "Rome"));

    grid.request_page(&PageRequest::new(0).filter(paris.clone()).sort(by_age.clone()))
        .await
        .unwrap();
    grid.request_page(&PageRequest::new(0).filter(paris).sort(by_age.clone()))
        .await
        .unwrap();

    // A new filter replaces the fork's selection, which is sorted again
    let page = grid
        .request_page(&PageRequest::new(0).filter(rome).sort(by_age))
        .await
        .unwrap();

    let order_bys = test.log().order_bys();
    assert_eq!(order_bys.len(), 2);
    assert!(order_bys.iter().all(|op| matches!(
        op,
        Op::OrderBy { collection, .. } if collection == "people_clone"
    )));

    assert_eq!(page.rows[0].get("Age"), Some(&Value::I64(21)));
    assert_eq!(page.rows[0].get("City"), Some(&Value::from("Rome")));
}

#[tokio::test]
async fn base_and_search_sorts_are_tracked_separately() {
    let test = GridTest::new(40);
    let mut grid = test.mounted().await;

    let by_name = SortModel::new().by("Name", Direction::Desc);
    let berlin = FilterModel::new().with("City", Condition::text(FilterOp::Equals, "Berlin"));

    grid.request_page(&PageRequest::new(0).sort(by_name.clone()))
        .await
        .unwrap();
    grid.request_page(&PageRequest::new(0).filter(berlin).sort(by_name))
        .await
        .unwrap();

    let collections: Vec<_> = test
        .log()
        .order_bys()
        .into_iter()
        .map(|op| match op {
            Op::OrderBy { collection, .. } => collection,
            _ => unreachable!(),
        })
        .collect();

    assert_eq!(collections, ["people", "people_clone"]);
}

#[tokio::test]
async fn a_collection_change_keeps_the_base_sort_memo() {
    let test = GridTest::new(250);
    let mut grid = test.mounted().await;

    let by_name = SortModel::new().by("Name", Direction::Desc);
    let filter = FilterModel::new().with("Name", Condition::text(FilterOp::Contains, "person"));

    grid.request_page(&PageRequest::new(0).sort(by_name.clone()))
        .await
        .unwrap();
    grid.request_page(&PageRequest::new(0).filter(filter.clone()).sort(by_name.clone()))
        .await
        .unwrap();

    test.people.set_records(people(50));
    grid.sync().await.unwrap();
    test.log().clear();

    grid.request_page(&PageRequest::new(0).sort(by_name.clone()))
        .await
        .unwrap();
    grid.request_page(&PageRequest::new(0).filter(filter).sort(by_name))
        .await
        .unwrap();

    assert_eq!(
        test.log().order_bys(),
        [Op::OrderBy {
            collection: "people_clone".into(),
            expr: "name desc".into(),
        }]
    );
}
