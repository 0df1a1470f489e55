use crate::{lock, order, query, Op, OpLog};

use gridlink_core::{
    async_trait,
    source::{Change, Notifier, QueryScope},
    Collection, Error, Record, Result,
};
use std::{
    io,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex, RwLock, RwLockReadGuard,
    },
};
use tokio::sync::broadcast;

/// A collection over an in-memory entity class.
///
/// Cloning yields another handle to the same collection. Forks share the
/// entity class, the operation log and the failure switch of their parent
/// but keep their own selection.
#[derive(Clone)]
pub struct MemoryCollection {
    inner: Arc<Inner>,
}

struct Inner {
    id: String,

    /// Every entity of the class, addressed by position
    class: Arc<RwLock<Vec<Record>>>,

    state: Mutex<State>,

    parent: Option<MemoryCollection>,

    forks: Mutex<Vec<MemoryCollection>>,

    notifier: Notifier,

    log: OpLog,

    fail_fetches: Arc<AtomicBool>,
}

#[derive(Debug, Default)]
struct State {
    /// Positions in the entity class, in selection order
    selection: Vec<usize>,

    /// Bumped every time the selection is replaced
    generation: u64,
}

impl MemoryCollection {
    /// Creates a collection selecting all of `records`, with its own log.
    pub fn new(id: impl Into<String>, records: Vec<Record>) -> MemoryCollection {
        MemoryCollection::with_log(id, records, OpLog::new())
    }

    pub fn with_log(id: impl Into<String>, records: Vec<Record>, log: OpLog) -> MemoryCollection {
        let state = State {
            selection: (0..records.len()).collect(),
            generation: 0,
        };

        MemoryCollection {
            inner: Arc::new(Inner {
                id: id.into(),
                class: Arc::new(RwLock::new(records)),
                state: Mutex::new(state),
                parent: None,
                forks: Mutex::new(vec![]),
                notifier: Notifier::new(),
                log,
                fail_fetches: Arc::new(AtomicBool::new(false)),
            }),
        }
    }

    /// Replaces the entity class with `records` and selects all of them,
    /// notifying listeners.
    pub fn set_records(&self, records: Vec<Record>) {
        let len = records.len();
        *self.class_mut() = records;

        self.replace_selection((0..len).collect());
    }

    /// Makes every subsequent fetch, on this collection and its forks, fail.
    pub fn fail_fetches(&self, fail: bool) {
        self.inner.fail_fetches.store(fail, Ordering::SeqCst);
    }

    pub fn log(&self) -> &OpLog {
        &self.inner.log
    }

    /// Forks created so far, oldest first.
    pub fn forks(&self) -> Vec<MemoryCollection> {
        lock(&self.inner.forks).clone()
    }

    /// Entities of the current selection, in order.
    pub fn records(&self) -> Vec<Record> {
        let class = self.class();
        lock(&self.inner.state)
            .selection
            .iter()
            .filter_map(|&pos| class.get(pos).cloned())
            .collect()
    }

    /// Number of listeners subscribed to this collection.
    pub fn listeners(&self) -> usize {
        self.inner.notifier.listeners()
    }

    fn replace_selection(&self, selection: Vec<usize>) {
        {
            let mut state = lock(&self.inner.state);
            state.selection = selection;
            state.generation += 1;
        }

        self.inner.notifier.notify(Change::Selection);
    }

    fn selection(&self) -> Vec<usize> {
        lock(&self.inner.state).selection.clone()
    }

    fn class(&self) -> RwLockReadGuard<'_, Vec<Record>> {
        self.inner
            .class
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn class_mut(&self) -> std::sync::RwLockWriteGuard<'_, Vec<Record>> {
        self.inner
            .class
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Positions a query may select from: the parent's selection when the
    /// scope names it, the whole class otherwise.
    fn candidates(&self, scope: &QueryScope) -> Vec<usize> {
        match (&self.inner.parent, &scope.dataset) {
            (Some(parent), Some(dataset)) if parent.dataset().as_ref() == Some(dataset) => {
                parent.selection()
            }
            _ => (0..self.class().len()).collect(),
        }
    }
}

#[async_trait]
impl Collection for MemoryCollection {
    fn id(&self) -> &str {
        &self.inner.id
    }

    fn len(&self) -> usize {
        lock(&self.inner.state).selection.len()
    }

    fn dataset(&self) -> Option<String> {
        let generation = lock(&self.inner.state).generation;
        Some(format!("{}#{generation}", self.inner.id))
    }

    async fn fetch_window(&self, start: usize, len: usize) -> Result<Vec<Record>> {
        self.inner.log.push(Op::Fetch {
            collection: self.inner.id.clone(),
            start,
            len,
        });

        if self.inner.fail_fetches.load(Ordering::SeqCst) {
            return Err(Error::collection(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                format!("collection `{}` is unavailable", self.inner.id),
            )));
        }

        let selection = self.selection();
        let class = self.class();

        Ok(selection
            .iter()
            .skip(start)
            .take(len)
            .filter_map(|&pos| class.get(pos).cloned())
            .collect())
    }

    fn fork(&self) -> Arc<dyn Collection> {
        let fork = MemoryCollection {
            inner: Arc::new(Inner {
                id: format!("{}_clone", self.inner.id),
                class: self.inner.class.clone(),
                state: Mutex::new(State::default()),
                parent: Some(self.clone()),
                forks: Mutex::new(vec![]),
                notifier: Notifier::new(),
                log: self.inner.log.clone(),
                fail_fetches: self.inner.fail_fetches.clone(),
            }),
        };

        lock(&self.inner.forks).push(fork.clone());
        Arc::new(fork)
    }

    async fn query(&self, predicate: &str, scope: &QueryScope) -> Result<()> {
        self.inner.log.push(Op::Query {
            collection: self.inner.id.clone(),
            predicate: predicate.to_string(),
            dataset: scope.dataset.clone(),
        });

        let expr = query::parse(predicate)?;
        let candidates = self.candidates(scope);

        let selection = {
            let class = self.class();
            candidates
                .into_iter()
                .filter(|&pos| class.get(pos).is_some_and(|record| expr.eval(record)))
                .collect::<Vec<_>>()
        };

        tracing::trace!(
            collection = %self.inner.id,
            predicate,
            matched = selection.len(),
            "query"
        );

        self.replace_selection(selection);
        Ok(())
    }

    async fn order_by(&self, expr: &str) -> Result<()> {
        self.inner.log.push(Op::OrderBy {
            collection: self.inner.id.clone(),
            expr: expr.to_string(),
        });

        let keys = order::parse(expr)?;
        let class = self.class();
        let mut state = lock(&self.inner.state);

        state.selection.sort_by(|&a, &b| match (class.get(a), class.get(b)) {
            (Some(a), Some(b)) => order::compare(&keys, a, b),
            _ => a.cmp(&b),
        });

        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<Change> {
        self.inner.notifier.subscribe()
    }
}

impl core::fmt::Debug for MemoryCollection {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MemoryCollection")
            .field("id", &self.inner.id)
            .field("len", &self.len())
            .finish()
    }
}
