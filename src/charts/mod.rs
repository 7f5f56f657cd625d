//! Charts module - Chart rendering

mod plotter;
mod renderer;

pub use plotter::{Figure, TickPlotter};
pub use renderer::{StaticChartRenderer, EXPORT_HEIGHT, EXPORT_WIDTH};
