#[macro_use]
mod fmt;
use fmt::ToQuery;

mod delim;
use delim::{Comma, Delimited};

mod expr;

use crate::{lower, OrderBy, Predicate};

use gridlink_core::{
    model::{FilterModel, SortModel},
    Schema,
};

/// Serializes grid filter and sort models to the collection's query text.
#[derive(Debug)]
pub struct Serializer<'a> {
    /// Columns the grid's column ids resolve against
    schema: &'a Schema,
}

struct Formatter<'a> {
    /// Where to write the serialized query
    dst: &'a mut String,
}

impl<'a> Serializer<'a> {
    pub fn new(schema: &'a Schema) -> Serializer<'a> {
        Serializer { schema }
    }

    /// Serializes a single predicate.
    pub fn serialize(predicate: &Predicate) -> String {
        let mut ret = String::new();
        let mut f = Formatter { dst: &mut ret };
        predicate.to_query(&mut f);
        ret
    }

    /// One query fragment per filtered column, in filter model order.
    ///
    /// Columns missing from the schema and unsupported filters yield empty
    /// fragments.
    pub fn filters(&self, model: &FilterModel) -> Vec<String> {
        lower::filter_model(model, self.schema)
            .iter()
            .map(Serializer::serialize)
            .collect()
    }

    /// The full query: every non-empty column fragment joined with `AND`.
    pub fn filter(&self, model: &FilterModel) -> String {
        self.filters(model)
            .into_iter()
            .filter(|fragment| !fragment.is_empty())
            .collect::<Vec<_>>()
            .join(" AND ")
    }

    /// The order-by expression for a sort model, or `None` when no sorted
    /// column resolves to a source.
    pub fn order_by(&self, model: &SortModel) -> Option<String> {
        let order_by = lower::sort_model(model, self.schema);

        if order_by.is_empty() {
            return None;
        }

        Some(Serializer::serialize_order_by(&order_by))
    }

    fn serialize_order_by(order_by: &OrderBy) -> String {
        let mut ret = String::new();
        let mut f = Formatter { dst: &mut ret };
        fmt!(&mut f, Comma(&order_by.exprs));
        ret
    }
}
