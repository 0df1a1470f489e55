use chrono::{Days, NaiveDate};
use gridlink_core::{
    record,
    schema::{Column, DataType},
    Record,
};

pub const CITIES: [&str; 4] = ["Paris", "London", "Berlin", "Rome"];

/// The `i`th person: ages cycle through 20..70, cities through [`CITIES`],
/// birthdays are consecutive days from 1970-01-01.
pub fn person(i: usize) -> Record {
    let born = NaiveDate::from_ymd_opt(1970, 1, 1)
        .and_then(|epoch| epoch.checked_add_days(Days::new(i as u64)))
        .unwrap();

    record! {
        "name" => format!("Person {i:03}"),
        "age" => 20 + (i % 50) as i64,
        "born" => born,
        "active" => i % 2 == 0,
        "address" => record! { "city" => CITIES[i % CITIES.len()] },
    }
}

pub fn people(n: usize) -> Vec<Record> {
    (0..n).map(person).collect()
}

/// Columns of a grid over [`people`].
pub fn columns() -> Vec<Column> {
    vec![
        Column::new("Name", "name")
            .data_type(DataType::String)
            .sorting(true)
            .filtering(true),
        Column::new("Age", "age")
            .data_type(DataType::Long)
            .sorting(true)
            .filtering(true),
        Column::new("Born", "born")
            .data_type(DataType::Date)
            .filtering(true),
        Column::new("City", "address.city")
            .data_type(DataType::String)
            .sorting(true)
            .filtering(true),
        Column::new("Active", "active").data_type(DataType::Bool),
    ]
}
