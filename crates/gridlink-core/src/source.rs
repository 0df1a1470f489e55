//! Contracts of the external systems a grid is bound to.
//!
//! The host application owns the entity collections, the shared
//! current-element pointers and the persisted values. A grid only holds
//! handles to them and drives them through these traits.

mod change;
pub use change::{Change, Notifier};

mod scope;
pub use scope::QueryScope;

use crate::{async_trait, Record, Result};

use std::{fmt::Debug, sync::Arc};
use tokio::sync::broadcast;

/// A remote, ordered, filterable and paginated collection of entities.
#[async_trait]
pub trait Collection: Debug + Send + Sync + 'static {
    /// Identity of the collection, unique within the host.
    fn id(&self) -> &str;

    /// Number of entities in the current selection.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Server-side reference of the current selection, used to scope
    /// queries run on a fork.
    fn dataset(&self) -> Option<String> {
        None
    }

    /// Attributes the host restricts queries to, if any.
    fn filter_attributes(&self) -> Option<String> {
        None
    }

    /// Fetches up to `len` entities starting at `start`.
    async fn fetch_window(&self, start: usize, len: usize) -> Result<Vec<Record>>;

    /// Creates a collection over the same entity class with its own,
    /// initially empty, selection. Its id is this id suffixed `_clone`.
    fn fork(&self) -> Arc<dyn Collection>;

    /// Replaces this collection's selection with the entities matching
    /// `predicate` within `scope`.
    async fn query(&self, predicate: &str, scope: &QueryScope) -> Result<()>;

    /// Reorders the current selection.
    async fn order_by(&self, expr: &str) -> Result<()>;

    /// Listens for changes to the selection. Dropping the receiver removes
    /// the listener.
    fn subscribe(&self) -> broadcast::Receiver<Change>;
}

/// The "currently selected entity" shared by every widget bound to the same
/// collection.
#[async_trait]
pub trait CurrentElement: Debug + Send + Sync + 'static {
    /// Position of the current entity in its collection.
    fn index(&self) -> Option<usize>;

    /// Points at the entity at `index`. With `force`, listeners are notified
    /// even when the pointer does not move.
    async fn set_index(&self, index: usize, force: bool) -> Result<()>;

    fn subscribe(&self) -> broadcast::Receiver<Change>;
}

/// An opaque value persisted by the host.
#[async_trait]
pub trait ValueStore: Debug + Send + Sync + 'static {
    async fn get_value(&self) -> Result<serde_json::Value>;

    async fn set_value(&self, value: serde_json::Value) -> Result<()>;
}

/// Resolves binding names from the widget properties to collaborators.
pub trait Sources: Send + Sync {
    fn collection(&self, name: &str) -> Option<Arc<dyn Collection>>;

    fn current_element(&self, name: &str) -> Option<Arc<dyn CurrentElement>>;

    fn value(&self, name: &str) -> Option<Arc<dyn ValueStore>>;
}
