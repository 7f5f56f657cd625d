//! Tickplot Main Application
//! Single window with the tick chart and a status bar.

use crate::charts::Figure;
use crate::gui::ChartViewer;
use eframe::egui;
use egui::{Color32, RichText, TopBottomPanel};

const APP_NAME: &str = "Tickplot";

/// Main application window.
pub struct TickplotApp {
    chart_viewer: ChartViewer,
    status: String,
}

impl TickplotApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, figure: Figure, status: String) -> Self {
        Self {
            chart_viewer: ChartViewer::new(figure),
            status,
        }
    }

    /// Open the viewer window and block until the user closes it.
    pub fn run(figure: Figure, status: String) -> eframe::Result<()> {
        let title = figure.title.clone().unwrap_or_else(|| APP_NAME.to_string());
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1200.0, 750.0])
                .with_min_inner_size([600.0, 400.0])
                .with_title(title),
            ..Default::default()
        };

        tracing::info!(curves = figure.curves.len(), "opening viewer");
        let result = eframe::run_native(
            APP_NAME,
            options,
            Box::new(|cc| Ok(Box::new(TickplotApp::new(cc, figure, status)))),
        );
        tracing::info!("viewer closed");
        result
    }
}

impl eframe::App for TickplotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.label(RichText::new(&self.status).size(12.0).color(Color32::GRAY));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer.show(ui);
        });
    }
}
