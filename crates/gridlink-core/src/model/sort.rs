use serde::{Deserialize, Serialize};

/// Ascending or descending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }
}

/// One entry of the grid's sort model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortItem {
    /// Grid column id, which is the column title
    pub col_id: String,
    pub sort: Direction,
}

/// The grid's ordered sort model; the first item is the primary key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SortModel {
    pub items: Vec<SortItem>,
}

impl SortModel {
    pub fn new() -> SortModel {
        SortModel::default()
    }

    pub fn by(mut self, col_id: impl Into<String>, sort: Direction) -> Self {
        self.items.push(SortItem {
            col_id: col_id.into(),
            sort,
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SortItem> {
        self.items.iter()
    }
}
