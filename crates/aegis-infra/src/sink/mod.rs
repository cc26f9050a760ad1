//! Enriched post sinks.

mod log;
mod memory;

pub use log::TracingSink;
pub use memory::InMemorySink;
