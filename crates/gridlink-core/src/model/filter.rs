use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Kind of filter the grid raised for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterType {
    Text,
    Number,
    Date,
    #[serde(other)]
    Other,
}

/// Operator selected in a column filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterOp {
    Contains,
    NotContains,
    Equals,
    NotEqual,
    StartsWith,
    EndsWith,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
    InRange,
    Blank,
    NotBlank,
    #[serde(other)]
    Other,
}

/// A filter operand as typed into the grid: text for text filters, a
/// number for number filters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Operand {
    Number(f64),
    Text(String),
}

impl core::fmt::Display for Operand {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Operand::Number(n) => write!(f, "{n}"),
            Operand::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Operand {
    fn from(src: &str) -> Self {
        Operand::Text(src.to_string())
    }
}

impl From<String> for Operand {
    fn from(src: String) -> Self {
        Operand::Text(src)
    }
}

impl From<f64> for Operand {
    fn from(src: f64) -> Self {
        Operand::Number(src)
    }
}

impl From<i64> for Operand {
    fn from(src: i64) -> Self {
        Operand::Number(src as f64)
    }
}

/// One filter condition on a column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    pub filter_type: FilterType,

    #[serde(rename = "type")]
    pub op: FilterOp,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<Operand>,

    /// Upper bound of a number range
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_to: Option<Operand>,

    /// `YYYY-MM-DD hh:mm:ss`, as produced by the date filter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
}

impl Condition {
    fn new(filter_type: FilterType, op: FilterOp) -> Condition {
        Condition {
            filter_type,
            op,
            filter: None,
            filter_to: None,
            date_from: None,
            date_to: None,
        }
    }

    pub fn text(op: FilterOp, filter: impl Into<Operand>) -> Condition {
        Condition {
            filter: Some(filter.into()),
            ..Condition::new(FilterType::Text, op)
        }
    }

    pub fn number(op: FilterOp, filter: impl Into<Operand>) -> Condition {
        Condition {
            filter: Some(filter.into()),
            ..Condition::new(FilterType::Number, op)
        }
    }

    pub fn number_range(from: impl Into<Operand>, to: impl Into<Operand>) -> Condition {
        Condition {
            filter: Some(from.into()),
            filter_to: Some(to.into()),
            ..Condition::new(FilterType::Number, FilterOp::InRange)
        }
    }

    pub fn date(op: FilterOp, from: impl Into<String>) -> Condition {
        Condition {
            date_from: Some(from.into()),
            ..Condition::new(FilterType::Date, op)
        }
    }

    pub fn date_range(from: impl Into<String>, to: impl Into<String>) -> Condition {
        Condition {
            date_from: Some(from.into()),
            date_to: Some(to.into()),
            ..Condition::new(FilterType::Date, FilterOp::InRange)
        }
    }
}

/// Boolean operator joining the conditions of a combined filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Join {
    #[serde(rename = "AND")]
    And,
    #[serde(rename = "OR")]
    Or,
}

impl Join {
    pub fn as_str(self) -> &'static str {
        match self {
            Join::And => "AND",
            Join::Or => "OR",
        }
    }
}

/// Several conditions on the same column joined by one operator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_type: Option<FilterType>,
    pub operator: Join,
    pub conditions: Vec<Condition>,
}

/// The filter on one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnFilter {
    Combined(CombinedFilter),
    Single(Condition),
}

impl From<Condition> for ColumnFilter {
    fn from(src: Condition) -> Self {
        ColumnFilter::Single(src)
    }
}

impl From<CombinedFilter> for ColumnFilter {
    fn from(src: CombinedFilter) -> Self {
        ColumnFilter::Combined(src)
    }
}

/// The grid's filter model: column id to its filter, in the order the grid
/// reported them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterModel {
    pub columns: IndexMap<String, ColumnFilter>,
}

impl FilterModel {
    pub fn new() -> FilterModel {
        FilterModel::default()
    }

    pub fn with(mut self, col_id: impl Into<String>, filter: impl Into<ColumnFilter>) -> Self {
        self.columns.insert(col_id.into(), filter.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColumnFilter)> {
        self.columns.iter().map(|(k, v)| (k.as_str(), v))
    }
}
