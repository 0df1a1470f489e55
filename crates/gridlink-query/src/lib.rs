pub mod date;

pub mod lower;

pub mod predicate;
pub use predicate::{Compare, Literal, Op, OrderBy, OrderByExpr, Predicate};

pub mod serializer;
pub use serializer::Serializer;

use gridlink_core::model::Condition;

/// Translates one filter condition on the column bound to `source` into
/// query text. Unsupported filters translate to an empty string.
pub fn build_filter_query(condition: &Condition, source: &str) -> String {
    Serializer::serialize(&lower::condition(condition, source))
}
