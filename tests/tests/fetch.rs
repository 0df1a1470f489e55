use gridlink::{
    model::{CombinedFilter, Condition, FilterModel, FilterOp, FilterType, Join},
    Collection, PageRequest, Value,
};
use gridlink_driver_memory::Op;
use pretty_assertions::assert_eq;
use tests::GridTest;

fn names(rows: &[gridlink::schema::Row]) -> Vec<String> {
    rows.iter()
        .map(|row| row.get("Name").map(Value::to_text).unwrap_or_default())
        .collect()
}

#[tokio::test]
async fn page_past_the_first_block_reports_the_base_count() {
    let test = GridTest::new(250);
    let mut grid = test.mounted().await;

    let mut reported = None;
    let mut failed = false;

    grid.get_rows(
        &PageRequest::new(200),
        |rows, total| reported = Some((rows, total)),
        || failed = true,
    )
    .await;

    let (rows, total) = reported.unwrap();
    assert!(!failed);
    assert_eq!(rows.len(), 50);
    assert_eq!(total, 250);
    assert_eq!(names(&rows[..1]), ["Person 200"]);

    assert_eq!(
        test.log().ops(),
        [Op::Fetch {
            collection: "people".into(),
            start: 200,
            len: 100,
        }]
    );
}

#[tokio::test]
async fn first_page_is_one_block() {
    let test = GridTest::new(250);
    let mut grid = test.mounted().await;

    let page = grid.request_page(&PageRequest::new(0)).await.unwrap();

    assert_eq!(page.rows.len(), 100);
    assert_eq!(page.total, 250);
}

#[tokio::test]
async fn rows_are_keyed_by_title() {
    let test = GridTest::new(3);
    let mut grid = test.mounted().await;

    let page = grid.request_page(&PageRequest::new(0)).await.unwrap();
    let row = &page.rows[1];

    assert_eq!(
        row.iter().map(|(title, _)| title).collect::<Vec<_>>(),
        ["Name", "Age", "Born", "City", "Active"]
    );
    assert_eq!(row.get("City"), Some(&Value::from("London")));
    assert_eq!(row.get("Age"), Some(&Value::I64(21)));
    assert_eq!(row.get("Active"), Some(&Value::Bool(false)));
}

#[tokio::test]
async fn total_is_a_single_row_until_mounted() {
    let test = GridTest::new(250);
    let mut grid = test.grid();
    assert_eq!(grid.total(), 1);

    let page = grid.request_page(&PageRequest::new(0)).await.unwrap();
    assert_eq!(page.rows.len(), 100);
    assert_eq!(page.total, 1);

    grid.mount().await.unwrap();
    assert_eq!(grid.total(), 250);
}

#[tokio::test]
async fn filtered_pages_come_from_the_search_fork() {
    let test = GridTest::new(250);
    let mut grid = test.mounted().await;

    let filter = FilterModel::new().with("City", Condition::text(FilterOp::Equals, "Paris"));
    let page = grid
        .request_page(&PageRequest::new(0).filter(filter))
        .await
        .unwrap();

    let search = &test.people.forks()[0];
    assert_eq!(search.id(), "people_clone");
    assert_eq!(page.total, 63);
    assert_eq!(page.total, search.len());
    assert_eq!(page.rows.len(), 63);
    assert!(page
        .rows
        .iter()
        .all(|row| row.get("City") == Some(&Value::from("Paris"))));

    assert_eq!(
        test.log().ops(),
        [
            Op::Query {
                collection: "people_clone".into(),
                predicate: "address.city == Paris".into(),
                dataset: Some("people#0".into()),
            },
            Op::Fetch {
                collection: "people_clone".into(),
                start: 0,
                len: 100,
            },
        ]
    );

    // The base collection keeps its selection
    assert_eq!(test.people.len(), 250);
}

#[tokio::test]
async fn an_unchanged_filter_is_queried_once() {
    let test = GridTest::new(250);
    let mut grid = test.mounted().await;

    let adults = FilterModel::new().with(
        "Age",
        Condition::number(FilterOp::GreaterThanOrEqual, 60_i64),
    );
    let request = PageRequest::new(0).filter(adults.clone());

    grid.request_page(&request).await.unwrap();
    grid.request_page(&PageRequest::new(100).filter(adults)).await.unwrap();
    assert_eq!(test.log().queries().len(), 1);

    let seniors =
        FilterModel::new().with("Age", Condition::number(FilterOp::GreaterThan, 65_i64));
    let page = grid
        .request_page(&PageRequest::new(0).filter(seniors))
        .await
        .unwrap();

    assert_eq!(test.log().queries().len(), 2);
    assert_eq!(test.people.forks().len(), 1);
    // ages 66..=69, five people each
    assert_eq!(page.total, 20);
}

#[tokio::test]
async fn combined_conditions_are_grouped() {
    let test = GridTest::new(250);
    let mut grid = test.mounted().await;

    let filter = FilterModel::new().with(
        "Age",
        CombinedFilter {
            filter_type: Some(FilterType::Number),
            operator: Join::Or,
            conditions: vec![
                Condition::number(FilterOp::LessThan, 21_i64),
                Condition::number(FilterOp::GreaterThan, 68_i64),
            ],
        },
    );

    let page = grid
        .request_page(&PageRequest::new(0).filter(filter))
        .await
        .unwrap();

    assert_eq!(page.total, 10);
    assert_eq!(
        test.log().queries()[0],
        Op::Query {
            collection: "people_clone".into(),
            predicate: "(age < 21 OR age > 68)".into(),
            dataset: Some("people#0".into()),
        }
    );
}

#[tokio::test]
async fn filters_on_several_columns_are_joined() {
    let test = GridTest::new(250);
    let mut grid = test.mounted().await;

    let filter = FilterModel::new()
        .with("City", Condition::text(FilterOp::StartsWith, "ber"))
        .with("Name", Condition::text(FilterOp::Contains, "son 01"));

    let page = grid
        .request_page(&PageRequest::new(0).filter(filter))
        .await
        .unwrap();

    // Person 010..=019 living in Berlin: 010, 014, 018
    assert_eq!(page.total, 3);
    assert_eq!(
        test.log().queries()[0],
        Op::Query {
            collection: "people_clone".into(),
            predicate: "address.city begin ber AND name == @son 01@".into(),
            dataset: Some("people#0".into()),
        }
    );
}

#[tokio::test]
async fn date_equality_matches_the_day() {
    let test = GridTest::new(250);
    let mut grid = test.mounted().await;

    let filter = FilterModel::new().with(
        "Born",
        Condition::date(FilterOp::Equals, "1970-01-11 00:00:00"),
    );

    let page = grid
        .request_page(&PageRequest::new(0).filter(filter))
        .await
        .unwrap();

    assert_eq!(names(&page.rows), ["Person 010"]);
}

#[tokio::test]
async fn unsupported_filters_fall_back_to_the_base_collection() {
    let test = GridTest::new(250);
    let mut grid = test.mounted().await;

    let filter = FilterModel::new()
        .with("Salary", Condition::number(FilterOp::Equals, 10_i64))
        .with("Name", Condition::text(FilterOp::Blank, ""));

    let page = grid
        .request_page(&PageRequest::new(0).filter(filter))
        .await
        .unwrap();

    assert_eq!(page.total, 250);
    assert!(test.log().queries().is_empty());
    assert!(test.people.forks().is_empty());
}

#[tokio::test]
async fn failed_fetches_call_fail() {
    let test = GridTest::new(250);
    let mut grid = test.mounted().await;
    test.people.fail_fetches(true);

    let mut succeeded = false;
    let mut failed = false;
    grid.get_rows(
        &PageRequest::new(100),
        |_, _| succeeded = true,
        || failed = true,
    )
    .await;

    assert!(failed);
    assert!(!succeeded);

    let err = grid.request_page(&PageRequest::new(100)).await.unwrap_err();
    assert!(err.is_fetch_failed());
    assert_eq!(
        err.to_string(),
        "fetch failed at row 100: collection error: collection `people` is unavailable"
    );
}

#[tokio::test]
async fn malformed_predicates_fail_the_page() {
    let test = GridTest::new(10);
    let mut grid = test.mounted().await;

    // An unterminated quote survives translation but not the collection
    let filter = FilterModel::new().with("Name", Condition::text(FilterOp::NotEqual, "O'Brien"));

    let err = grid
        .request_page(&PageRequest::new(0).filter(filter))
        .await
        .unwrap_err();
    assert!(err.is_invalid_query());
}
