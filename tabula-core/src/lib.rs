mod active_record;
mod as_value;
mod column;
mod content;
mod driver;
mod entity;
mod error;
mod executor;
mod query;
mod schema;
mod sql_writer;
mod table_ref;
mod util;
mod value;

pub use ::anyhow::Context;
pub use active_record::*;
pub use as_value::*;
pub use column::*;
pub use content::*;
pub use driver::*;
pub use entity::*;
pub use error::*;
pub use executor::*;
pub use query::*;
pub use schema::*;
pub use sql_writer::*;
pub use table_ref::*;
pub use util::*;
pub use value::*;
pub mod stream {
    pub use ::futures::stream::*;
}
pub use ::futures::future;

pub type Result<T> = anyhow::Result<T>;
pub type Error = anyhow::Error;
