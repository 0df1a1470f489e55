//! Lowers grid filter and sort models to typed predicates.

use crate::{date, Literal, Op, OrderBy, OrderByExpr, Predicate};

use gridlink_core::{
    model::{ColumnFilter, Condition, FilterModel, FilterOp, FilterType, SortModel},
    Schema,
};
use tracing::{debug, warn};

/// Lowers every column filter of `model`, in model order. A column id with no
/// descriptor lowers to [`Predicate::Empty`].
pub fn filter_model(model: &FilterModel, schema: &Schema) -> Vec<Predicate> {
    model
        .iter()
        .map(|(col_id, filter)| match schema.column(col_id) {
            Some(column) => column_filter(filter, &column.source),
            None => {
                debug!(col_id, "filter on unknown column ignored");
                Predicate::Empty
            }
        })
        .collect()
}

/// Lowers the filter of one column. Combined filters keep every condition,
/// empty ones included, inside one parenthesized group.
pub fn column_filter(filter: &ColumnFilter, source: &str) -> Predicate {
    match filter {
        ColumnFilter::Single(condition) => self::condition(condition, source),
        ColumnFilter::Combined(combined) => Predicate::Group {
            join: combined.operator,
            operands: combined
                .conditions
                .iter()
                .map(|condition| self::condition(condition, source))
                .collect(),
        },
    }
}

/// Lowers one condition on the column bound to `source`.
pub fn condition(condition: &Condition, source: &str) -> Predicate {
    match condition.filter_type {
        FilterType::Text => text(condition, source),
        FilterType::Number => number(condition, source),
        FilterType::Date => date(condition, source),
        FilterType::Other => Predicate::Empty,
    }
}

fn text(condition: &Condition, source: &str) -> Predicate {
    let Some(operand) = &condition.filter else {
        return Predicate::Empty;
    };
    let value = operand.to_string();

    let (op, rhs) = match condition.op {
        FilterOp::Contains => (Op::Eq, pattern(value, true, true)),
        FilterOp::Equals => (Op::Eq, Literal::Bare(value)),
        FilterOp::NotEqual => (Op::Ne, Literal::Quoted(value)),
        FilterOp::StartsWith => (Op::Begin, Literal::Bare(value)),
        FilterOp::EndsWith => (Op::Eq, pattern(value, true, false)),
        _ => return Predicate::Empty,
    };

    Predicate::compare(source, op, rhs)
}

fn number(condition: &Condition, source: &str) -> Predicate {
    let Some(operand) = &condition.filter else {
        return Predicate::Empty;
    };
    let value = Literal::Bare(operand.to_string());

    let op = match condition.op {
        FilterOp::Equals => Op::Eq,
        FilterOp::NotEqual => Op::Ne,
        FilterOp::GreaterThan => Op::Gt,
        FilterOp::GreaterThanOrEqual => Op::Ge,
        FilterOp::LessThan => Op::Lt,
        FilterOp::LessThanOrEqual => Op::Le,
        FilterOp::InRange => {
            let Some(to) = &condition.filter_to else {
                return Predicate::Empty;
            };

            return Predicate::And(vec![
                Predicate::compare(source, Op::Ge, value),
                Predicate::compare(source, Op::Le, Literal::Bare(to.to_string())),
            ]);
        }
        _ => return Predicate::Empty,
    };

    Predicate::compare(source, op, value)
}

fn date(condition: &Condition, source: &str) -> Predicate {
    let op = match condition.op {
        FilterOp::Equals => Op::Eq,
        FilterOp::NotEqual => Op::Ne,
        FilterOp::GreaterThan => Op::Gt,
        FilterOp::LessThan => {
            return Predicate::compare(
                source,
                Op::Lt,
                Literal::DoubleQuoted(date::LESS_THAN_PLACEHOLDER.to_string()),
            );
        }
        FilterOp::InRange => {
            let (Some(from), Some(to)) = (
                date_operand(condition.date_from.as_deref()),
                date_operand(condition.date_to.as_deref()),
            ) else {
                return Predicate::Empty;
            };

            return Predicate::And(vec![
                Predicate::compare(
                    source,
                    Op::Gt,
                    Literal::DoubleQuoted(date::day_month_year(from)),
                ),
                Predicate::compare(
                    source,
                    Op::Lt,
                    Literal::DoubleQuoted(date::day_month_year(to)),
                ),
            ]);
        }
        _ => return Predicate::Empty,
    };

    match date_operand(condition.date_from.as_deref()) {
        Some(from) => Predicate::compare(source, op, Literal::DoubleQuoted(date::long_form(from))),
        None => Predicate::Empty,
    }
}

fn date_operand(src: Option<&str>) -> Option<chrono::NaiveDateTime> {
    let src = src?;
    let parsed = date::parse(src);
    if parsed.is_none() {
        warn!(operand = src, "date filter operand is not a date");
    }
    parsed
}

fn pattern(value: String, leading: bool, trailing: bool) -> Literal {
    Literal::Pattern {
        value,
        leading,
        trailing,
    }
}

/// Lowers a sort model. Sorted columns missing from the schema are skipped.
pub fn sort_model(model: &SortModel, schema: &Schema) -> OrderBy {
    OrderBy {
        exprs: model
            .iter()
            .filter_map(|item| match schema.column(&item.col_id) {
                Some(column) => Some(OrderByExpr {
                    path: column.source.trim().to_string(),
                    direction: item.sort,
                }),
                None => {
                    debug!(col_id = %item.col_id, "sort on unknown column ignored");
                    None
                }
            })
            .collect(),
    }
}
