use crate::cmp;

use gridlink_core::{model::Direction, Error, Record, Result};
use std::cmp::Ordering;

/// One `path dir` key of an order-by expression.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SortKey {
    path: Vec<String>,
    direction: Direction,
}

/// Parses `path [asc|desc], ...`. A key without direction sorts ascending.
pub(crate) fn parse(src: &str) -> Result<Vec<SortKey>> {
    src.split(',')
        .map(|key| {
            let mut words = key.split_whitespace();

            let Some(path) = words.next() else {
                return Err(Error::invalid_query(src, "empty sort key"));
            };

            let direction = match words.next() {
                None => Direction::Asc,
                Some(word) if word.eq_ignore_ascii_case("asc") => Direction::Asc,
                Some(word) if word.eq_ignore_ascii_case("desc") => Direction::Desc,
                Some(word) => {
                    return Err(Error::invalid_query(
                        src,
                        format!("unknown sort direction `{word}`"),
                    ))
                }
            };

            if words.next().is_some() {
                return Err(Error::invalid_query(src, "unexpected token after direction"));
            }

            Ok(SortKey {
                path: path.split('.').map(str::to_string).collect(),
                direction,
            })
        })
        .collect()
}

pub(crate) fn compare(keys: &[SortKey], a: &Record, b: &Record) -> Ordering {
    for key in keys {
        let ordering = cmp::values(&a.lookup(&key.path), &b.lookup(&key.path));
        let ordering = match key.direction {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        };

        if ordering != Ordering::Equal {
            return ordering;
        }
    }

    Ordering::Equal
}
