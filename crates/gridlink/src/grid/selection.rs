use super::{Grid, Page};
use crate::{EntityMessage, Notification};

use gridlink_core::{Error, Result};

impl Grid {
    /// A row was clicked: points the current element at it, when one is
    /// bound, and raises `onselect`.
    pub async fn select_row(&mut self, row_index: usize) -> Result<()> {
        self.update_current(row_index, false).await?;
        self.emit(Notification::Select);
        Ok(())
    }

    /// The datasource's selection changed: reloads the first page and
    /// re-validates the selected row against the new length.
    ///
    /// A selection past the end resets to the first row. The current element
    /// is always re-set with `force`, so listeners refresh even when the
    /// index is unchanged.
    pub async fn on_collection_changed(&mut self) -> Result<Page> {
        self.search = None;
        self.window.forget_filter();

        let records = self
            .datasource
            .fetch_window(0, self.settings.page_size)
            .await
            .map_err(|err| err.context(Error::fetch_failed(0)))?;

        let len = self.datasource.len();
        self.window.total = len;

        let page = Page {
            rows: records
                .iter()
                .map(|record| self.schema.projection().project(record))
                .collect(),
            total: len,
        };

        match self.window.selected {
            _ if len == 0 => {
                self.window.select(None);
            }
            Some(selected) => {
                let index = if selected < len { selected } else { 0 };

                tracing::debug!(
                    widget_id = %self.widget_id,
                    selected,
                    index,
                    len,
                    "selection re-validated"
                );

                self.update_current(index, true).await?;
            }
            None => {}
        }

        Ok(page)
    }

    /// The current element moved, by this grid or another widget: follows it
    /// and tells sibling widgets.
    pub fn on_current_changed(&mut self) {
        let index = self.current.as_ref().and_then(|current| current.index());
        self.window.select(index);

        self.hub.publish(EntityMessage::update(
            self.widget_id.clone(),
            self.datasource.id(),
            index,
        ));
    }

    /// A sibling widget bound to the same collection moved its selection.
    ///
    /// Returns `false` for messages about other collections or published by
    /// this grid.
    pub fn on_entity_message(&mut self, message: &EntityMessage) -> bool {
        if message.widget_id == self.widget_id || message.source != self.datasource.id() {
            return false;
        }

        self.window.select(message.row_index);
        true
    }

    async fn update_current(&mut self, index: usize, force: bool) -> Result<()> {
        if let Some(current) = &self.current {
            current.set_index(index, force).await?;
        }

        self.window.select(Some(index));
        Ok(())
    }
}
