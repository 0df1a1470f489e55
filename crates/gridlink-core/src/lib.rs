#[macro_use]
mod macros;

mod error;
pub use error::{Error, IntoError};

pub mod model;

pub mod schema;
pub use schema::Schema;

pub mod source;
pub use source::{Collection, CurrentElement, Sources, ValueStore};

pub mod value;
pub use value::{Record, Value};

/// A Result type alias that uses gridlink's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
