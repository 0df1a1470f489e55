//! Cross-widget selection fan-out.
//!
//! Every widget bound to the same collection subscribes to one hub. When a
//! widget's current element moves, it publishes the new row so the others
//! can follow without re-querying the collection.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Messages buffered per subscriber before it starts lagging.
const CAPACITY: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityAction {
    Update,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityMessage {
    pub action: EntityAction,

    /// The publishing widget
    pub widget_id: String,

    /// Id of the collection the row belongs to
    pub source: String,

    /// `None` when nothing is selected
    pub row_index: Option<usize>,
}

impl EntityMessage {
    pub fn update(
        widget_id: impl Into<String>,
        source: impl Into<String>,
        row_index: Option<usize>,
    ) -> EntityMessage {
        EntityMessage {
            action: EntityAction::Update,
            widget_id: widget_id.into(),
            source: source.into(),
            row_index,
        }
    }
}

/// Publish/subscribe service shared by the widgets of one page.
///
/// Cloning yields another handle to the same hub.
#[derive(Debug, Clone)]
pub struct EntityHub {
    tx: broadcast::Sender<EntityMessage>,
}

impl EntityHub {
    pub fn new() -> EntityHub {
        let (tx, _) = broadcast::channel(CAPACITY);
        EntityHub { tx }
    }

    /// Returns the number of subscribers the message reached.
    pub fn publish(&self, message: EntityMessage) -> usize {
        self.tx.send(message).unwrap_or(0)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<EntityMessage> {
        self.tx.subscribe()
    }

    pub fn subscribers(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for EntityHub {
    fn default() -> Self {
        EntityHub::new()
    }
}
