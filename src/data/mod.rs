//! Data module - tick CSV loading and grouping

mod loader;
mod processor;

pub use loader::{Table, TickLoader};
pub use processor::{Curve, DataProcessor, GroupOrder};
