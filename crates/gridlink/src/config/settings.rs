use gridlink_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Tuning of the infinite row model and the design-time preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Rows per page request, also the grid's cache block size
    pub page_size: usize,

    pub max_blocks_in_cache: usize,

    pub cache_overflow_size: usize,

    pub max_concurrent_requests: usize,

    pub row_buffer: usize,

    pub min_column_width: u32,

    /// Rows of the design-time sample table
    pub sample_rows: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            page_size: 100,
            max_blocks_in_cache: 10,
            cache_overflow_size: 2,
            max_concurrent_requests: 1,
            row_buffer: 0,
            min_column_width: 100,
            sample_rows: 20,
        }
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn max_blocks_in_cache(mut self, blocks: usize) -> Self {
        self.max_blocks_in_cache = blocks;
        self
    }

    pub fn sample_rows(mut self, rows: usize) -> Self {
        self.sample_rows = rows;
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::invalid_config("page size must be positive"));
        }

        if self.max_concurrent_requests == 0 {
            return Err(Error::invalid_config(
                "at least one concurrent datasource request is required",
            ));
        }

        Ok(())
    }
}
