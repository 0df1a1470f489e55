//! Column definitions and options handed to the grid UI.

use crate::Settings;

use gridlink_core::{
    model::{Direction, FilterOp},
    schema::{Column, DataType},
};
use serde::Serialize;

/// Filter component the grid shows in a column header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FilterKind {
    #[serde(rename = "agTextColumnFilter")]
    Text,
    #[serde(rename = "agNumberColumnFilter")]
    Number,
    #[serde(rename = "agDateColumnFilter")]
    Date,
}

impl FilterKind {
    fn of(data_type: Option<DataType>) -> Option<FilterKind> {
        match data_type? {
            DataType::Text | DataType::String => Some(FilterKind::Text),
            DataType::Long | DataType::Number => Some(FilterKind::Number),
            DataType::Date => Some(FilterKind::Date),
            _ => None,
        }
    }

    /// Operators offered by the filter, all of which translate to a query.
    pub fn options(self) -> &'static [FilterOp] {
        use FilterOp::*;

        match self {
            FilterKind::Text => &[Contains, Equals, NotEqual, StartsWith, EndsWith],
            FilterKind::Number => &[
                Equals,
                NotEqual,
                GreaterThan,
                GreaterThanOrEqual,
                LessThan,
                LessThanOrEqual,
                InRange,
            ],
            FilterKind::Date => &[Equals, NotEqual, GreaterThan, LessThan, InRange],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellRendererParams {
    pub format: String,
    pub data_type: Option<DataType>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterParams {
    pub filter_options: Vec<FilterOp>,
    pub default_option: FilterOp,
}

/// Definition of one grid column.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColDef {
    /// Column title, also the key of the column's cells in every row
    pub field: String,

    pub cell_renderer_params: CellRendererParams,

    pub sortable: bool,
    pub resizable: bool,

    pub width: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex: Option<f64>,

    /// `None` disables filtering on the column
    pub filter: Option<FilterKind>,

    pub filter_params: FilterParams,
}

impl ColDef {
    pub fn from_column(column: &Column) -> ColDef {
        let kind = FilterKind::of(column.data_type);

        ColDef {
            field: column.title.clone(),
            cell_renderer_params: CellRendererParams {
                format: column.format.clone(),
                data_type: column.data_type,
            },
            sortable: column.sorting && column.data_type.map_or(true, DataType::is_sortable),
            resizable: column.sizing,
            width: column.width,
            flex: column.flex,
            filter: kind.filter(|_| column.filtering),
            filter_params: FilterParams {
                filter_options: kind.map(|kind| kind.options().to_vec()).unwrap_or_default(),
                default_option: FilterOp::Equals,
            },
        }
    }
}

/// Properties shared by every column.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultColDef {
    pub min_width: u32,
    pub sorting_order: Vec<Direction>,
}

impl DefaultColDef {
    pub fn new(settings: &Settings) -> DefaultColDef {
        DefaultColDef {
            min_width: settings.min_column_width,
            sorting_order: vec![Direction::Asc, Direction::Desc],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RowSelectionMode {
    SingleRow,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowSelection {
    pub mode: RowSelectionMode,
    pub enable_click_selection: bool,
    pub checkboxes: bool,
}

/// Options of the grid's infinite row model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridOptions {
    pub row_model_type: &'static str,
    pub row_selection: RowSelection,
    pub cache_block_size: usize,
    pub max_blocks_in_cache: usize,
    pub cache_overflow_size: usize,
    pub max_concurrent_datasource_requests: usize,
    pub infinite_initial_row_count: usize,
    pub row_buffer: usize,
}

impl GridOptions {
    pub fn new(settings: &Settings, initial_row_count: usize) -> GridOptions {
        GridOptions {
            row_model_type: "infinite",
            row_selection: RowSelection {
                mode: RowSelectionMode::SingleRow,
                enable_click_selection: true,
                checkboxes: false,
            },
            cache_block_size: settings.page_size,
            max_blocks_in_cache: settings.max_blocks_in_cache,
            cache_overflow_size: settings.cache_overflow_size,
            max_concurrent_datasource_requests: settings.max_concurrent_requests,
            infinite_initial_row_count: initial_row_count,
            row_buffer: settings.row_buffer,
        }
    }
}
