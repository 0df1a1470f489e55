mod column;
pub use column::Column;

mod data_type;
pub use data_type::DataType;

mod projection;
pub use projection::{Projection, Row};

use crate::{Error, Result};

use std::collections::HashSet;

/// The validated column layout of one grid instance.
#[derive(Debug, Clone)]
pub struct Schema {
    columns: Vec<Column>,
    projection: Projection,
}

impl Schema {
    /// Validates the column descriptors and compiles the row projection.
    ///
    /// Titles must be non-empty and unique because they join grid column ids
    /// back to their descriptor. Sources must be non-empty.
    pub fn new(columns: Vec<Column>) -> Result<Schema> {
        let mut titles = HashSet::new();

        for column in &columns {
            if column.title.trim().is_empty() {
                return Err(Error::invalid_config(format!(
                    "column bound to `{}` has no title",
                    column.source
                )));
            }

            if column.source.trim().is_empty() {
                return Err(Error::invalid_config(format!(
                    "column `{}` has no source",
                    column.title
                )));
            }

            if !titles.insert(column.title.as_str()) {
                return Err(Error::invalid_config(format!(
                    "duplicate column title `{}`",
                    column.title
                )));
            }
        }

        let projection = Projection::new(&columns);

        Ok(Schema {
            columns,
            projection,
        })
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Finds the descriptor for a grid column id.
    pub fn column(&self, title: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.title == title)
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }
}
