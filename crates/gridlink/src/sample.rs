use gridlink_core::{schema::Column, Record, Value};
use serde::Serialize;

/// Design-time column definition: the title only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SampleColDef {
    pub field: String,
}

/// The static table shown in the editor canvas: every cell displays the
/// source its column is bound to.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleTable {
    pub column_defs: Vec<SampleColDef>,
    pub row_data: Vec<Record>,
}

impl SampleTable {
    pub fn new(columns: &[Column], rows: usize) -> SampleTable {
        let row: Record = columns
            .iter()
            .map(|column| (column.title.clone(), Value::from(column.source.as_str())))
            .collect();

        SampleTable {
            column_defs: columns
                .iter()
                .map(|column| SampleColDef {
                    field: column.title.clone(),
                })
                .collect(),
            row_data: vec![row; rows],
        }
    }
}
