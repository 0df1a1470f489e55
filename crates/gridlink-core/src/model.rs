//! The grid's event payloads: filter model, sort model and column state.

mod column_state;
pub use column_state::{ColumnState, ColumnStateItem};

mod filter;
pub use filter::{ColumnFilter, CombinedFilter, Condition, FilterModel, FilterOp, FilterType, Join, Operand};

mod sort;
pub use sort::{Direction, SortItem, SortModel};
