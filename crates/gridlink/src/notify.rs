use gridlink_core::{model::ColumnState, Value};
use serde::Serialize;

/// Events raised to the host application.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum Notification {
    /// A row click moved the current element
    #[serde(rename = "onselect")]
    Select,

    #[serde(rename = "oncellclick")]
    CellClick { column: String, value: Value },

    #[serde(rename = "onheaderclick")]
    HeaderClick { column: String },

    /// The column layout was written to the state binding
    #[serde(rename = "onsavestate", rename_all = "camelCase")]
    SaveState { column_state: ColumnState },
}

impl Notification {
    /// Event name as the host registers handlers for it.
    pub fn name(&self) -> &'static str {
        match self {
            Notification::Select => "onselect",
            Notification::CellClick { .. } => "oncellclick",
            Notification::HeaderClick { .. } => "onheaderclick",
            Notification::SaveState { .. } => "onsavestate",
        }
    }
}
