//! The run-time grid engine.
//!
//! A [`Grid`] binds one grid UI instance to an entity collection. The UI
//! pulls pages through [`Grid::request_page`], raises clicks and layout
//! changes through the `on_*` handlers, and the grid keeps the collection's
//! current element, sibling widgets and the persisted layout in step.
//!
//! Changes raised by the collaborators are delivered as [`Signal`]s. The
//! host either drives them with [`Grid::run`] or drains them with
//! [`Grid::sync`] after each UI event.

mod builder;
pub use builder::Builder;

mod fetch;
pub use fetch::{Page, PageRequest};

mod selection;

mod signal;
pub use signal::Signal;
use signal::Receivers;

mod sort;
use sort::SortMemo;

mod state;
pub use state::StateEvent;

mod window;
use window::Window;

use crate::{ColDef, DefaultColDef, EntityHub, GridOptions, Notification, Settings};

use gridlink_core::{
    model::ColumnState, Collection, CurrentElement, Result, Schema, Value, ValueStore,
};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Everything the grid UI needs once the grid is mounted.
#[derive(Debug, Clone)]
pub struct GridReady {
    pub column_defs: Vec<ColDef>,
    pub default_col_def: DefaultColDef,
    pub options: GridOptions,

    /// Persisted layout to apply before the first page is shown
    pub column_state: Option<ColumnState>,
}

pub struct Grid {
    /// Identifies this grid on the entity hub
    widget_id: String,

    schema: Arc<Schema>,

    settings: Settings,

    datasource: Arc<dyn Collection>,

    current: Option<Arc<dyn CurrentElement>>,

    state: Option<Arc<dyn ValueStore>>,

    hub: EntityHub,

    notifications: Option<mpsc::UnboundedSender<Notification>>,

    /// Paging and selection state
    window: Window,

    /// Filter-scoped fork of the datasource, created on the first filtered
    /// page request
    search: Option<Arc<dyn Collection>>,

    /// Listeners, registered while mounted
    receivers: Option<Receivers>,
}

impl Grid {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn widget_id(&self) -> &str {
        &self.widget_id
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn datasource(&self) -> &Arc<dyn Collection> {
        &self.datasource
    }

    /// Row count last reported for the unfiltered collection.
    pub fn total(&self) -> usize {
        self.window.total
    }

    /// Selected row, `None` when nothing is selected.
    pub fn selected(&self) -> Option<usize> {
        self.window.selected
    }

    /// Row the grid should keep scrolled into view.
    pub fn scroll_index(&self) -> usize {
        self.window.scroll_index
    }

    pub fn is_mounted(&self) -> bool {
        self.receivers.is_some()
    }

    /// Registers the grid's listeners, restores the persisted layout and
    /// loads the first page.
    pub async fn mount(&mut self) -> Result<GridReady> {
        self.receivers = Some(Receivers::new(
            &*self.datasource,
            self.current.as_deref(),
            &self.hub,
        ));

        let column_state = self.restore_state().await;
        self.on_collection_changed().await?;

        tracing::debug!(
            widget_id = %self.widget_id,
            datasource = self.datasource.id(),
            total = self.window.total,
            "grid mounted"
        );

        Ok(GridReady {
            column_defs: self.column_defs(),
            default_col_def: DefaultColDef::new(&self.settings),
            options: GridOptions::new(&self.settings, self.window.total),
            column_state,
        })
    }

    /// Drops every listener and the search fork.
    pub fn unmount(&mut self) {
        self.receivers = None;
        self.search = None;
        self.window.forget_filter();
    }

    pub fn column_defs(&self) -> Vec<ColDef> {
        self.schema.columns().iter().map(ColDef::from_column).collect()
    }

    /// A cell was clicked.
    pub fn on_cell_clicked(&self, column: impl Into<String>, value: Value) {
        self.emit(Notification::CellClick {
            column: column.into(),
            value,
        });
    }

    /// A column header was clicked.
    pub fn on_header_clicked(&self, column: impl Into<String>) {
        self.emit(Notification::HeaderClick {
            column: column.into(),
        });
    }

    fn emit(&self, notification: Notification) {
        let Some(tx) = &self.notifications else {
            return;
        };

        tracing::trace!(widget_id = %self.widget_id, event = notification.name(), "emit");
        let _ = tx.send(notification);
    }
}

impl core::fmt::Debug for Grid {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Grid")
            .field("widget_id", &self.widget_id)
            .field("datasource", &self.datasource.id())
            .field("window", &self.window)
            .field("mounted", &self.is_mounted())
            .finish()
    }
}
