use tokio::sync::broadcast;

/// Raised by a collaborator when its state moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    /// The selection's entities, length or order changed
    Selection,

    /// The current-element pointer moved, or was forcibly re-set
    Current,
}

/// Fan-out of [`Change`]s to every listener of a collaborator.
///
/// Sending never fails; a change raised with no listener is dropped.
#[derive(Debug, Clone)]
pub struct Notifier {
    tx: broadcast::Sender<Change>,
}

impl Notifier {
    pub fn new() -> Notifier {
        let (tx, _) = broadcast::channel(64);
        Notifier { tx }
    }

    pub fn notify(&self, change: Change) -> usize {
        self.tx.send(change).unwrap_or(0)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Change> {
        self.tx.subscribe()
    }

    pub fn listeners(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Notifier::new()
    }
}
