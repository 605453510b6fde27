//! Domain types.

mod configuration;
mod value;

pub use configuration::{Configuration, Entry, Stored};
pub use value::Value;
