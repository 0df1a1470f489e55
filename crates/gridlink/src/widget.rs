use crate::{EntityHub, Grid, GridConfig, Notification, SampleTable, Settings};

use gridlink_core::{Result, Sources};
use tokio::sync::mpsc;

/// What the widget shows.
#[derive(Debug)]
pub enum View {
    /// Design-time preview
    Build(SampleTable),

    /// Live grid bound to its datasource
    Render(Box<Grid>),

    /// Placeholder shown when the datasource binding is missing
    Unbound,
}

impl View {
    pub fn is_build(&self) -> bool {
        matches!(self, View::Build(_))
    }

    pub fn is_render(&self) -> bool {
        matches!(self, View::Render(_))
    }

    pub fn is_unbound(&self) -> bool {
        matches!(self, View::Unbound)
    }

    pub fn into_grid(self) -> Option<Grid> {
        match self {
            View::Render(grid) => Some(*grid),
            _ => None,
        }
    }
}

/// The grid widget as placed on a page.
#[derive(Debug, Clone)]
pub struct Widget {
    config: GridConfig,
    settings: Settings,
    hub: EntityHub,
    notifications: Option<mpsc::UnboundedSender<Notification>>,
}

impl Widget {
    pub fn new(config: GridConfig, hub: EntityHub) -> Widget {
        Widget {
            config,
            settings: Settings::default(),
            hub,
            notifications: None,
        }
    }

    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    pub fn notifications(mut self, tx: mpsc::UnboundedSender<Notification>) -> Self {
        self.notifications = Some(tx);
        self
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Picks the view for the editor state: the sample table while the
    /// editor is enabled, the live grid otherwise.
    pub fn render(&self, editor_enabled: bool, sources: &dyn Sources) -> Result<View> {
        if editor_enabled {
            return Ok(View::Build(SampleTable::new(
                &self.config.columns,
                self.settings.sample_rows,
            )));
        }

        let mut builder = Grid::builder();
        builder
            .config(self.config.clone())
            .settings(self.settings.clone())
            .hub(self.hub.clone());

        if let Some(tx) = &self.notifications {
            builder.notifications(tx.clone());
        }

        match builder.build(sources) {
            Ok(grid) => Ok(View::Render(Box::new(grid))),
            Err(err) if err.is_missing_binding() => {
                tracing::warn!(widget = %self.config.name, error = %err, "grid is unbound");
                Ok(View::Unbound)
            }
            Err(err) => Err(err),
        }
    }
}
