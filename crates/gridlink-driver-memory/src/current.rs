use crate::{lock, Op, OpLog};

use gridlink_core::{
    async_trait,
    source::{Change, Notifier},
    CurrentElement, Result,
};
use std::sync::{Arc, Mutex};
use tokio::sync::broadcast;

/// A current-element pointer held in memory.
#[derive(Clone)]
pub struct MemoryCurrentElement {
    inner: Arc<Inner>,
}

struct Inner {
    index: Mutex<Option<usize>>,
    notifier: Notifier,
    log: OpLog,
}

impl MemoryCurrentElement {
    pub fn new() -> MemoryCurrentElement {
        MemoryCurrentElement::with_log(OpLog::new())
    }

    pub fn with_log(log: OpLog) -> MemoryCurrentElement {
        MemoryCurrentElement {
            inner: Arc::new(Inner {
                index: Mutex::new(None),
                notifier: Notifier::new(),
                log,
            }),
        }
    }

    /// Moves the pointer as another widget of the host would. Listeners are
    /// notified; nothing is logged.
    pub fn move_to(&self, index: Option<usize>) {
        *lock(&self.inner.index) = index;
        self.inner.notifier.notify(Change::Current);
    }

    pub fn log(&self) -> &OpLog {
        &self.inner.log
    }
}

impl Default for MemoryCurrentElement {
    fn default() -> Self {
        MemoryCurrentElement::new()
    }
}

#[async_trait]
impl CurrentElement for MemoryCurrentElement {
    fn index(&self) -> Option<usize> {
        *lock(&self.inner.index)
    }

    async fn set_index(&self, index: usize, force: bool) -> Result<()> {
        self.inner.log.push(Op::SetIndex { index, force });

        let moved = lock(&self.inner.index).replace(index) != Some(index);

        if moved || force {
            self.inner.notifier.notify(Change::Current);
        }

        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<Change> {
        self.inner.notifier.subscribe()
    }
}

impl core::fmt::Debug for MemoryCurrentElement {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MemoryCurrentElement")
            .field("index", &self.index())
            .finish()
    }
}
