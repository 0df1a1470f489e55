use super::Direction;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as Json};

/// Layout of one column as reported by the grid.
///
/// Only the column id is interpreted. Every other attribute is kept as the
/// grid reported it: a missing attribute leaves the column unchanged when the
/// layout is applied, while an explicit `null` clears it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnStateItem {
    pub col_id: String,

    #[serde(flatten)]
    pub attributes: Map<String, Json>,
}

impl ColumnStateItem {
    pub fn new(col_id: impl Into<String>) -> ColumnStateItem {
        ColumnStateItem {
            col_id: col_id.into(),
            attributes: Map::new(),
        }
    }

    /// Sets one attribute, `null` included.
    pub fn with(mut self, attribute: impl Into<String>, value: impl Into<Json>) -> Self {
        self.attributes.insert(attribute.into(), value.into());
        self
    }

    pub fn get(&self, attribute: &str) -> Option<&Json> {
        self.attributes.get(attribute)
    }

    pub fn width(&self) -> Option<u64> {
        self.get("width").and_then(Json::as_u64)
    }

    pub fn hide(&self) -> Option<bool> {
        self.get("hide").and_then(Json::as_bool)
    }

    pub fn sort(&self) -> Option<Direction> {
        self.get("sort")
            .and_then(|sort| Direction::deserialize(sort).ok())
    }
}

/// The grid's full column layout: order, width, visibility and sort.
///
/// Persisted as a whole; the order of items is the column order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnState {
    pub columns: Vec<ColumnStateItem>,
}

impl ColumnState {
    pub fn new(columns: Vec<ColumnStateItem>) -> ColumnState {
        ColumnState { columns }
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn to_json(&self) -> crate::Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Reads a persisted layout. A null value means nothing was saved yet.
    pub fn from_json(value: serde_json::Value) -> crate::Result<Option<ColumnState>> {
        if value.is_null() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_value(value)?))
    }
}
