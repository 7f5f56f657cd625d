//! Chart Viewer Widget
//! Central panel showing the tick chart, or a placeholder when there is nothing to draw.

use crate::charts::{Figure, TickPlotter};
use egui::RichText;

/// Holds the figure for the lifetime of the window.
pub struct ChartViewer {
    pub figure: Figure,
}

impl ChartViewer {
    pub fn new(figure: Figure) -> Self {
        Self { figure }
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        if self.figure.curves.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Data").size(20.0));
            });
            return;
        }

        TickPlotter::draw_figure(ui, &self.figure);
    }
}
