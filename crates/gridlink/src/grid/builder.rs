use super::{Grid, Window};
use crate::{config, EntityHub, GridConfig, Notification, Settings};

use gridlink_core::{Error, Result, Sources};
use std::sync::Arc;
use tokio::sync::mpsc;
use uuid::Uuid;

#[derive(Debug, Default)]
pub struct Builder {
    config: GridConfig,

    settings: Settings,

    /// Hub shared with sibling widgets. A private hub is created if unset.
    hub: Option<EntityHub>,

    notifications: Option<mpsc::UnboundedSender<Notification>>,

    widget_id: Option<String>,
}

impl Builder {
    pub fn config(&mut self, config: GridConfig) -> &mut Self {
        self.config = config;
        self
    }

    pub fn settings(&mut self, settings: Settings) -> &mut Self {
        self.settings = settings;
        self
    }

    pub fn hub(&mut self, hub: EntityHub) -> &mut Self {
        self.hub = Some(hub);
        self
    }

    /// Channel receiving the events raised to the host.
    pub fn notifications(&mut self, tx: mpsc::UnboundedSender<Notification>) -> &mut Self {
        self.notifications = Some(tx);
        self
    }

    /// Identity on the entity hub; a random id is generated if unset.
    pub fn widget_id(&mut self, widget_id: impl Into<String>) -> &mut Self {
        self.widget_id = Some(widget_id.into());
        self
    }

    /// Validates the configuration and resolves its bindings.
    ///
    /// Fails with a missing binding error when the datasource is not set or
    /// `sources` cannot resolve it. Unresolved current-element and state
    /// bindings are ignored.
    pub fn build(&self, sources: &dyn Sources) -> Result<Grid> {
        self.settings.validate()?;
        let schema = self.config.schema()?;

        let Some(name) = config::binding(self.config.datasource.as_deref()) else {
            return Err(Error::missing_binding("datasource"));
        };

        let Some(datasource) = sources.collection(name) else {
            return Err(Error::missing_binding(format!("datasource `{name}`")));
        };

        let current = config::binding(self.config.current_element.as_deref()).and_then(|name| {
            let current = sources.current_element(name);
            if current.is_none() {
                tracing::warn!(binding = name, "current element not found; selection is local");
            }
            current
        });

        let state = config::binding(self.config.state.as_deref()).and_then(|name| {
            let state = sources.value(name);
            if state.is_none() {
                tracing::warn!(binding = name, "state value not found; layout is not persisted");
            }
            state
        });

        Ok(Grid {
            widget_id: self
                .widget_id
                .clone()
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            schema: Arc::new(schema),
            settings: self.settings.clone(),
            datasource,
            current,
            state,
            hub: self.hub.clone().unwrap_or_default(),
            notifications: self.notifications.clone(),
            window: Window::new(),
            search: None,
            receivers: None,
        })
    }
}
