use super::Grid;
use crate::Notification;

use gridlink_core::{model::ColumnState, Result};
use serde::{Deserialize, Serialize};

/// Kind of state event whose layout is persisted.
const STATE_UPDATED: &str = "stateUpdated";

/// A state event raised by the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateEvent {
    #[serde(rename = "type")]
    pub kind: String,

    /// The grid's full column layout at the time of the event
    pub column_state: ColumnState,
}

impl StateEvent {
    pub fn updated(column_state: ColumnState) -> StateEvent {
        StateEvent {
            kind: STATE_UPDATED.to_string(),
            column_state,
        }
    }
}

impl Grid {
    /// The grid's layout changed: replaces the persisted layout with the
    /// event's and raises `onsavestate`.
    ///
    /// Returns whether the layout was persisted. Writes are not retried; a
    /// failed write is logged.
    pub async fn on_state_updated(&mut self, event: &StateEvent) -> Result<bool> {
        if event.kind != STATE_UPDATED {
            return Ok(false);
        }

        let Some(state) = &self.state else {
            return Ok(false);
        };

        let value = event.column_state.to_json()?;

        if let Err(err) = state.set_value(value).await {
            tracing::warn!(
                widget_id = %self.widget_id,
                error = %err,
                "failed to persist column state"
            );
        }

        self.emit(Notification::SaveState {
            column_state: event.column_state.clone(),
        });

        Ok(true)
    }

    /// Reads the persisted layout. Unreadable layouts are logged and
    /// skipped.
    pub(super) async fn restore_state(&self) -> Option<ColumnState> {
        let state = self.state.as_ref()?;

        let value = match state.get_value().await {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(
                    widget_id = %self.widget_id,
                    error = %err,
                    "failed to read column state"
                );
                return None;
            }
        };

        match ColumnState::from_json(value) {
            Ok(column_state) => column_state,
            Err(err) => {
                tracing::warn!(
                    widget_id = %self.widget_id,
                    error = %err,
                    "ignoring malformed column state"
                );
                None
            }
        }
    }
}
