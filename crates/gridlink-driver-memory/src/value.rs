use crate::{lock, Op, OpLog};

use gridlink_core::{async_trait, err, Result, ValueStore};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex,
};

/// A persisted value held in memory.
#[derive(Clone)]
pub struct MemoryValue {
    inner: Arc<Inner>,
}

struct Inner {
    value: Mutex<serde_json::Value>,
    fail_writes: AtomicBool,
    log: OpLog,
}

impl MemoryValue {
    pub fn new(value: serde_json::Value) -> MemoryValue {
        MemoryValue::with_log(value, OpLog::new())
    }

    pub fn with_log(value: serde_json::Value, log: OpLog) -> MemoryValue {
        MemoryValue {
            inner: Arc::new(Inner {
                value: Mutex::new(value),
                fail_writes: AtomicBool::new(false),
                log,
            }),
        }
    }

    /// The value as last written.
    pub fn get(&self) -> serde_json::Value {
        lock(&self.inner.value).clone()
    }

    /// Makes every subsequent write fail.
    pub fn fail_writes(&self, fail: bool) {
        self.inner.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn log(&self) -> &OpLog {
        &self.inner.log
    }
}

#[async_trait]
impl ValueStore for MemoryValue {
    async fn get_value(&self) -> Result<serde_json::Value> {
        Ok(self.get())
    }

    async fn set_value(&self, value: serde_json::Value) -> Result<()> {
        self.inner.log.push(Op::SetValue(value.clone()));

        if self.inner.fail_writes.load(Ordering::SeqCst) {
            return Err(err!("value store is read-only"));
        }

        *lock(&self.inner.value) = value;
        Ok(())
    }
}

impl core::fmt::Debug for MemoryValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MemoryValue")
            .field("value", &self.get())
            .finish()
    }
}
