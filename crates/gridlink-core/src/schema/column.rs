use super::DataType;

use serde::{Deserialize, Serialize};

/// Describes one grid column: its binding, display and capability flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    /// Stable identifier assigned by the editor
    #[serde(default)]
    pub id: String,

    /// Display label, also the grid field key. Unique within a grid.
    pub title: String,

    /// Dotted attribute path read from each entity
    pub source: String,

    #[serde(default = "default_width")]
    pub width: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flex: Option<f64>,

    #[serde(default)]
    pub sorting: bool,

    #[serde(default = "default_true")]
    pub hidden: bool,

    #[serde(default = "default_true")]
    pub sizing: bool,

    #[serde(default)]
    pub filtering: bool,

    /// Display-format hint handed to the cell renderer
    #[serde(default)]
    pub format: String,

    /// Absent for blob and object bindings generated by the editor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_type: Option<DataType>,
}

impl Column {
    /// Creates a column with the editor's defaults.
    pub fn new(title: impl Into<String>, source: impl Into<String>) -> Column {
        Column {
            id: String::new(),
            title: title.into(),
            source: source.into(),
            width: default_width(),
            flex: None,
            sorting: false,
            hidden: true,
            sizing: true,
            filtering: false,
            format: String::new(),
            data_type: None,
        }
    }

    pub fn data_type(mut self, data_type: DataType) -> Self {
        self.data_type = Some(data_type);
        self
    }

    pub fn sorting(mut self, sorting: bool) -> Self {
        self.sorting = sorting;
        self
    }

    pub fn filtering(mut self, filtering: bool) -> Self {
        self.filtering = filtering;
        self
    }

    pub fn width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    /// Source path split on `.`, trimmed.
    pub fn path(&self) -> Vec<String> {
        self.source
            .trim()
            .split('.')
            .map(|segment| segment.trim().to_string())
            .collect()
    }
}

fn default_width() -> u32 {
    150
}

fn default_true() -> bool {
    true
}
