use crate::{columns, people};

use gridlink::{EntityHub, Grid, GridConfig, Notification};
use gridlink_core::Record;
use gridlink_driver_memory::{
    MemoryCollection, MemoryCurrentElement, MemorySources, MemoryValue, OpLog,
};
use tokio::sync::mpsc;

/// Widget id of grids built by [`GridTest::grid`].
pub const WIDGET_ID: &str = "grid-1";

/// A page with one grid bound to `people`, its `person` pointer and its
/// `layout` value, all in memory.
pub struct GridTest {
    pub sources: MemorySources,
    pub people: MemoryCollection,
    pub person: MemoryCurrentElement,
    pub layout: MemoryValue,
    pub hub: EntityHub,
    tx: mpsc::UnboundedSender<Notification>,
    rx: mpsc::UnboundedReceiver<Notification>,
}

impl GridTest {
    /// Binds `len` people.
    pub fn new(len: usize) -> GridTest {
        GridTest::with_records(people(len))
    }

    pub fn with_records(records: Vec<Record>) -> GridTest {
        crate::init_tracing();

        let mut sources = MemorySources::new();
        let people = sources.add_collection("people", records);
        let person = sources.add_current_element("person");
        let layout = sources.add_value("layout", serde_json::Value::Null);
        let (tx, rx) = mpsc::unbounded_channel();

        GridTest {
            sources,
            people,
            person,
            layout,
            hub: EntityHub::new(),
            tx,
            rx,
        }
    }

    pub fn config(&self) -> GridConfig {
        GridConfig {
            name: "People".to_string(),
            columns: columns(),
            ..GridConfig::new()
        }
        .datasource("people")
        .current_element("person")
        .state("layout")
    }

    /// A grid built from [`GridTest::config`].
    pub fn grid(&self) -> Grid {
        self.grid_with(self.config())
    }

    pub fn grid_with(&self, config: GridConfig) -> Grid {
        Grid::builder()
            .config(config)
            .hub(self.hub.clone())
            .notifications(self.tx.clone())
            .widget_id(WIDGET_ID)
            .build(&self.sources)
            .unwrap()
    }

    /// A grid built and mounted, with the mount's operations cleared from
    /// the log.
    pub async fn mounted(&self) -> Grid {
        let mut grid = self.grid();
        grid.mount().await.unwrap();
        self.log().clear();
        grid
    }

    pub fn log(&self) -> &OpLog {
        self.sources.log()
    }

    /// Notifications raised so far.
    pub fn notifications(&mut self) -> Vec<Notification> {
        let mut ret = vec![];
        while let Ok(notification) = self.rx.try_recv() {
            ret.push(notification);
        }
        ret
    }
}
