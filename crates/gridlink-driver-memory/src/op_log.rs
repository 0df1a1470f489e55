use std::sync::{Arc, Mutex, MutexGuard};

/// An operation executed against a memory collaborator.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Fetch {
        collection: String,
        start: usize,
        len: usize,
    },
    Query {
        collection: String,
        predicate: String,
        dataset: Option<String>,
    },
    OrderBy {
        collection: String,
        expr: String,
    },
    SetIndex {
        index: usize,
        force: bool,
    },
    SetValue(serde_json::Value),
}

impl Op {
    pub fn is_fetch(&self) -> bool {
        matches!(self, Op::Fetch { .. })
    }

    pub fn is_query(&self) -> bool {
        matches!(self, Op::Query { .. })
    }

    pub fn is_order_by(&self) -> bool {
        matches!(self, Op::OrderBy { .. })
    }
}

/// Shared log of every operation, in execution order.
///
/// Forks of a collection write to their parent's log.
#[derive(Clone, Default)]
pub struct OpLog {
    ops: Arc<Mutex<Vec<Op>>>,
}

impl OpLog {
    pub fn new() -> OpLog {
        OpLog::default()
    }

    pub(crate) fn push(&self, op: Op) {
        self.lock().push(op);
    }

    /// Get the number of logged operations
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Remove and return the oldest operation
    pub fn pop(&self) -> Option<Op> {
        let mut ops = self.lock();
        if ops.is_empty() {
            None
        } else {
            Some(ops.remove(0))
        }
    }

    /// Snapshot of the log
    pub fn ops(&self) -> Vec<Op> {
        self.lock().clone()
    }

    pub fn fetches(&self) -> Vec<Op> {
        self.matching(Op::is_fetch)
    }

    pub fn queries(&self) -> Vec<Op> {
        self.matching(Op::is_query)
    }

    pub fn order_bys(&self) -> Vec<Op> {
        self.matching(Op::is_order_by)
    }

    fn matching(&self, f: fn(&Op) -> bool) -> Vec<Op> {
        self.lock().iter().filter(|op| f(op)).cloned().collect()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Op>> {
        crate::lock(&self.ops)
    }
}

impl core::fmt::Debug for OpLog {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("OpLog").field("ops", &*self.lock()).finish()
    }
}
