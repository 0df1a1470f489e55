mod declaration;
pub use declaration::Declaration;

mod settings;
pub use settings::Settings;

use gridlink_core::{schema::Column, Error, Result, Schema};
use serde::{Deserialize, Serialize};

/// Widget properties supplied by the host editor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridConfig {
    #[serde(default)]
    pub name: String,

    /// Binding of the entity collection shown by the grid
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datasource: Option<String>,

    /// Binding of the current-element pointer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_element: Option<String>,

    /// Binding of the value persisting the column layout
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    #[serde(default)]
    pub server_side_ref: Option<String>,

    #[serde(default)]
    pub columns: Vec<Column>,
}

impl GridConfig {
    pub fn new() -> GridConfig {
        GridConfig::default()
    }

    /// Parses the widget properties, rejecting unknown data types.
    pub fn from_json(value: serde_json::Value) -> Result<GridConfig> {
        serde_json::from_value(value)
            .map_err(|err| Error::invalid_config(format!("widget properties: {err}")))
    }

    pub fn datasource(mut self, datasource: impl Into<String>) -> Self {
        self.datasource = Some(datasource.into());
        self
    }

    pub fn current_element(mut self, current_element: impl Into<String>) -> Self {
        self.current_element = Some(current_element.into());
        self
    }

    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    pub fn column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// Validates the columns and compiles their projection.
    pub fn schema(&self) -> Result<Schema> {
        Schema::new(self.columns.clone())
    }

    /// Binding paths the widget reads, as the editor registers them.
    pub fn declarations(&self) -> Vec<Declaration> {
        declaration::declarations(
            self.datasource.as_deref().unwrap_or_default(),
            self.current_element.as_deref().unwrap_or_default(),
            &self.columns,
        )
    }
}

/// Binding name with surrounding blanks removed, `None` when empty.
pub(crate) fn binding(name: Option<&str>) -> Option<&str> {
    name.map(str::trim).filter(|name| !name.is_empty())
}
