use crate::{MemoryCollection, MemoryCurrentElement, MemoryValue, OpLog};

use gridlink_core::{Collection, CurrentElement, Record, Sources, ValueStore};
use std::{collections::HashMap, sync::Arc};

/// Binding names to memory collaborators, all writing to one [`OpLog`].
#[derive(Debug, Default)]
pub struct MemorySources {
    collections: HashMap<String, MemoryCollection>,
    current_elements: HashMap<String, MemoryCurrentElement>,
    values: HashMap<String, MemoryValue>,
    log: OpLog,
}

impl MemorySources {
    pub fn new() -> MemorySources {
        MemorySources::default()
    }

    pub fn log(&self) -> &OpLog {
        &self.log
    }

    /// Registers a collection named `name` selecting all of `records`.
    pub fn add_collection(&mut self, name: &str, records: Vec<Record>) -> MemoryCollection {
        let collection = MemoryCollection::with_log(name, records, self.log.clone());
        self.collections.insert(name.to_string(), collection.clone());
        collection
    }

    pub fn add_current_element(&mut self, name: &str) -> MemoryCurrentElement {
        let current = MemoryCurrentElement::with_log(self.log.clone());
        self.current_elements
            .insert(name.to_string(), current.clone());
        current
    }

    pub fn add_value(&mut self, name: &str, value: serde_json::Value) -> MemoryValue {
        let store = MemoryValue::with_log(value, self.log.clone());
        self.values.insert(name.to_string(), store.clone());
        store
    }
}

impl Sources for MemorySources {
    fn collection(&self, name: &str) -> Option<Arc<dyn Collection>> {
        let collection = self.collections.get(name)?;
        Some(Arc::new(collection.clone()))
    }

    fn current_element(&self, name: &str) -> Option<Arc<dyn CurrentElement>> {
        let current = self.current_elements.get(name)?;
        Some(Arc::new(current.clone()))
    }

    fn value(&self, name: &str) -> Option<Arc<dyn ValueStore>> {
        let store = self.values.get(name)?;
        Some(Arc::new(store.clone()))
    }
}
