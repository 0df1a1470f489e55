pub mod col_def;
pub use col_def::{ColDef, DefaultColDef, GridOptions};

pub mod config;
pub use config::{Declaration, GridConfig, Settings};

pub mod grid;
pub use grid::{Grid, GridReady, Page, PageRequest, Signal, StateEvent};

pub mod hub;
pub use hub::{EntityAction, EntityHub, EntityMessage};

pub mod notify;
pub use notify::Notification;

pub mod sample;
pub use sample::{SampleColDef, SampleTable};

pub mod widget;
pub use widget::{View, Widget};

pub use gridlink_core::{
    err, model, record, schema, source, Collection, CurrentElement, Error, Record, Result,
    Schema, Sources, Value, ValueStore,
};
