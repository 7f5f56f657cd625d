//! Chart Plotter Module
//! Builds the tick figure and draws it interactively using egui_plot.

use crate::config::FigureConfig;
use crate::data::{Curve, DataProcessor, Table};
use egui::{Color32, RichText};
use egui_plot::{Corner, Legend, Line, Plot, PlotPoints};
use std::ops::Range;

/// Color palette for curves, cycled in draw order
pub const PALETTE: [Color32; 10] = [
    Color32::from_rgb(52, 152, 219),  // Blue
    Color32::from_rgb(231, 76, 60),   // Red
    Color32::from_rgb(46, 204, 113),  // Green
    Color32::from_rgb(155, 89, 182),  // Purple
    Color32::from_rgb(243, 156, 18),  // Orange
    Color32::from_rgb(26, 188, 156),  // Teal
    Color32::from_rgb(233, 30, 99),   // Pink
    Color32::from_rgb(0, 188, 212),   // Cyan
    Color32::from_rgb(121, 85, 72),   // Brown
    Color32::from_rgb(96, 125, 139),  // Blue Grey
];

/// Axes extend by 1/20 of the data span on each side
const AXIS_PADDING_DIVISOR: f64 = 20.0;

/// Everything needed to draw the tick chart, in draw order.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub title: Option<String>,
    pub x_label: String,
    pub y_label: String,
    pub show_legend: bool,
    pub curves: Vec<Curve>,
}

impl Figure {
    /// Partition the table and derive one curve per pid.
    pub fn build(table: &Table, config: &FigureConfig) -> Self {
        let groups = DataProcessor::partition(table, config.order);
        let curves = DataProcessor::curves(table, &groups);

        Self {
            title: config.title.clone(),
            x_label: config.x_label.clone(),
            y_label: config.y_label.clone(),
            show_legend: config.show_legend,
            curves,
        }
    }

    pub fn point_count(&self) -> usize {
        self.curves.iter().map(|c| c.points.len()).sum()
    }

    /// Padded x and y ranges covering every point.
    pub fn bounds(&self) -> (Range<f64>, Range<f64>) {
        let mut x = (f64::INFINITY, f64::NEG_INFINITY);
        let mut y = (f64::INFINITY, f64::NEG_INFINITY);

        for [px, py] in self.curves.iter().flat_map(|c| c.points.iter().copied()) {
            x = (x.0.min(px), x.1.max(px));
            y = (y.0.min(py), y.1.max(py));
        }

        (Self::padded(x), Self::padded(y))
    }

    fn padded((min, max): (f64, f64)) -> Range<f64> {
        if min > max {
            return 0.0..1.0;
        }
        let span = max - min;
        let pad = if span == 0.0 { 1.0 } else { span / AXIS_PADDING_DIVISOR };
        (min - pad)..(max + pad)
    }
}

/// Draws the figure with egui_plot.
pub struct TickPlotter;

impl TickPlotter {
    pub fn curve_color(idx: usize) -> Color32 {
        PALETTE[idx % PALETTE.len()]
    }

    /// Legend entries follow draw order, matching the exported image.
    pub fn legend() -> Legend {
        Legend::default()
            .position(Corner::LeftTop)
            .follow_insertion_order(true)
    }

    /// Draw the title and line chart, filling the remaining space.
    pub fn draw_figure(ui: &mut egui::Ui, figure: &Figure) {
        if let Some(title) = &figure.title {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(title).size(18.0).strong());
            });
            ui.add_space(6.0);
        }

        let mut plot = Plot::new("tick_chart")
            .x_axis_label(figure.x_label.clone())
            .y_axis_label(figure.y_label.clone())
            .allow_scroll(false);

        if figure.show_legend {
            plot = plot.legend(Self::legend());
        }

        plot.show(ui, |plot_ui| {
            for (idx, curve) in figure.curves.iter().enumerate() {
                plot_ui.line(
                    Line::new(PlotPoints::from_iter(curve.points.iter().copied()))
                        .color(Self::curve_color(idx))
                        .width(1.5)
                        .name(&curve.label),
                );
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{GroupOrder, TickLoader};
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_build_applies_config() {
        let table = Table::from_rows(&[(1.0, 10.0, 100.0), (2.0, 5.0, 100.0)]);
        let config = FigureConfig {
            title: None,
            show_legend: false,
            ..FigureConfig::default()
        };

        let figure = Figure::build(&table, &config);
        assert_eq!(figure.title, None);
        assert!(!figure.show_legend);
        assert_eq!(figure.x_label, "Global Ticks");
        assert_eq!(figure.y_label, "Process Ticks");
        assert_eq!(figure.curves.len(), 2);
        assert_eq!(figure.point_count(), 2);
    }

    #[test]
    fn test_build_respects_order() {
        let table = Table::from_rows(&[
            (1.0, 1.0, 1.0),
            (2.0, 1.0, 1.0),
            (3.0, 1.0, 1.0),
            (4.0, 1.0, 1.0),
        ]);
        let config = FigureConfig {
            order: GroupOrder::Shuffled { seed: Some(3) },
            ..FigureConfig::default()
        };

        let first = Figure::build(&table, &config);
        let second = Figure::build(&table, &config);
        assert_eq!(first, second);
    }

    #[test]
    fn test_bounds_are_padded() {
        let table = Table::from_rows(&[(1.0, 10.0, 100.0), (1.0, 20.0, 200.0)]);
        let figure = Figure::build(&table, &FigureConfig::default());
        let (x, y) = figure.bounds();

        assert_eq!(x, 95.0..205.0);
        assert_eq!(y, 9.5..20.5);
    }

    #[test]
    fn test_bounds_of_empty_and_flat_figures() {
        let empty = Figure::build(&Table::default(), &FigureConfig::default());
        assert_eq!(empty.bounds(), (0.0..1.0, 0.0..1.0));

        let flat = Figure::build(&Table::from_rows(&[(1.0, 3.0, 7.0)]), &FigureConfig::default());
        assert_eq!(flat.bounds(), (6.0..8.0, 2.0..4.0));
    }

    #[test]
    fn test_scenario_from_csv_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"1,10,100\n1,12,105\n2,5,100\n2,9,110\n")
            .unwrap();
        file.flush().unwrap();

        let table = TickLoader::load_csv(file.path()).unwrap();
        let figure = Figure::build(&table, &FigureConfig::default());

        assert_eq!(figure.curves.len(), 2);
        assert_eq!(figure.curves[0].label, "pid = 1");
        assert_eq!(figure.curves[0].points, vec![[100.0, 10.0], [105.0, 12.0]]);
        assert_eq!(figure.curves[1].label, "pid = 2");
        assert_eq!(figure.curves[1].points, vec![[100.0, 5.0], [110.0, 9.0]]);
    }

    #[test]
    fn test_legend_labels_follow_pid_order_not_name_order() {
        let table = Table::from_rows(&[(10.0, 1.0, 1.0), (2.0, 1.0, 1.0), (1.0, 1.0, 1.0)]);
        let figure = Figure::build(&table, &FigureConfig::default());
        let labels: Vec<&str> = figure.curves.iter().map(|c| c.label.as_str()).collect();

        assert_eq!(labels, vec!["pid = 1", "pid = 2", "pid = 10"]);
    }

    #[test]
    fn test_curve_colors_cycle() {
        assert_eq!(TickPlotter::curve_color(0), TickPlotter::curve_color(PALETTE.len()));
        assert_ne!(TickPlotter::curve_color(0), TickPlotter::curve_color(1));
    }
}
