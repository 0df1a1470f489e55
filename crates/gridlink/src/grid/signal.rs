use super::Grid;
use crate::{EntityHub, EntityMessage};

use gridlink_core::{source::Change, Collection, CurrentElement, Result};
use tokio::sync::broadcast::{
    self,
    error::{RecvError, TryRecvError},
};

/// A change raised by one of the grid's collaborators.
#[derive(Debug, Clone, PartialEq)]
pub enum Signal {
    /// The datasource's selection changed
    Collection,

    /// The current element moved
    Current,

    /// A sibling widget published a selection
    Entity(EntityMessage),
}

/// The grid's listeners. Dropping them unsubscribes.
pub(super) struct Receivers {
    collection: broadcast::Receiver<Change>,
    current: Option<broadcast::Receiver<Change>>,
    hub: broadcast::Receiver<EntityMessage>,
}

impl Receivers {
    pub(super) fn new(
        collection: &dyn Collection,
        current: Option<&dyn CurrentElement>,
        hub: &EntityHub,
    ) -> Receivers {
        Receivers {
            collection: collection.subscribe(),
            current: current.map(|current| current.subscribe()),
            hub: hub.subscribe(),
        }
    }
}

impl Grid {
    /// Waits for the next signal. Returns `None` once unmounted or when the
    /// datasource is gone.
    pub async fn next_signal(&mut self) -> Option<Signal> {
        let widget_id = self.widget_id.clone();
        let receivers = self.receivers.as_mut()?;

        loop {
            tokio::select! {
                res = receivers.collection.recv() => match res {
                    Ok(_) | Err(RecvError::Lagged(_)) => return Some(Signal::Collection),
                    Err(RecvError::Closed) => return None,
                },
                res = recv_current(&mut receivers.current) => match res {
                    Ok(_) | Err(RecvError::Lagged(_)) => return Some(Signal::Current),
                    Err(RecvError::Closed) => receivers.current = None,
                },
                res = receivers.hub.recv() => match res {
                    Ok(message) if message.widget_id != widget_id => {
                        return Some(Signal::Entity(message))
                    }
                    Ok(_) => {}
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::debug!(%widget_id, skipped, "entity hub lagged");
                    }
                    Err(RecvError::Closed) => return None,
                },
            }
        }
    }

    /// Returns a pending signal without waiting.
    pub fn try_next_signal(&mut self) -> Option<Signal> {
        let widget_id = &self.widget_id;
        let receivers = self.receivers.as_mut()?;

        match receivers.collection.try_recv() {
            Ok(_) | Err(TryRecvError::Lagged(_)) => return Some(Signal::Collection),
            Err(_) => {}
        }

        if let Some(current) = &mut receivers.current {
            match current.try_recv() {
                Ok(_) | Err(TryRecvError::Lagged(_)) => return Some(Signal::Current),
                Err(_) => {}
            }
        }

        loop {
            match receivers.hub.try_recv() {
                Ok(message) if message.widget_id != *widget_id => {
                    return Some(Signal::Entity(message))
                }
                Ok(_) | Err(TryRecvError::Lagged(_)) => continue,
                Err(_) => return None,
            }
        }
    }

    /// Handles one signal.
    pub async fn dispatch(&mut self, signal: Signal) -> Result<()> {
        match signal {
            Signal::Collection => {
                self.on_collection_changed().await?;
            }
            Signal::Current => self.on_current_changed(),
            Signal::Entity(message) => {
                self.on_entity_message(&message);
            }
        }

        Ok(())
    }

    /// Handles every pending signal, including those raised while handling.
    /// Returns how many were handled.
    pub async fn sync(&mut self) -> Result<usize> {
        let mut handled = 0;

        while let Some(signal) = self.try_next_signal() {
            self.dispatch(signal).await?;
            handled += 1;
        }

        Ok(handled)
    }

    /// Handles signals until the grid is unmounted or its datasource is
    /// gone. Failures are logged.
    pub async fn run(&mut self) {
        while let Some(signal) = self.next_signal().await {
            if let Err(err) = self.dispatch(signal).await {
                tracing::warn!(widget_id = %self.widget_id, error = %err, "signal failed");
            }
        }
    }
}

async fn recv_current(
    current: &mut Option<broadcast::Receiver<Change>>,
) -> std::result::Result<Change, RecvError> {
    match current {
        Some(current) => current.recv().await,
        None => std::future::pending().await,
    }
}
