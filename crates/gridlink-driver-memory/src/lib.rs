//! In-memory implementations of the grid's collaborators.
//!
//! Collections evaluate the query and order-by text produced by
//! `gridlink-query`, so a grid bound to them exercises the exact strings a
//! host would receive. Every call is recorded in an [`OpLog`].

mod cmp;

mod collection;
pub use collection::MemoryCollection;

mod current;
pub use current::MemoryCurrentElement;

mod op_log;
pub use op_log::{Op, OpLog};

mod order;
mod query;

mod sources;
pub use sources::MemorySources;

mod value;
pub use value::MemoryValue;

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Locks `mutex`, recovering the guard if a panicking holder poisoned it.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
