//! Static Chart Renderer
//! Writes the tick figure to a PNG file with plotters.
//!
//! Layout matches the interactive view: optional caption, one line per pid
//! in draw order, axis descriptions and an optional legend box.

use crate::charts::plotter::{Figure, TickPlotter};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;
use thiserror::Error;

pub const EXPORT_WIDTH: u32 = 1400;
pub const EXPORT_HEIGHT: u32 = 800;

const LINE_WIDTH: u32 = 2;
const LEGEND_SWATCH: i32 = 20;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to draw chart: {0}")]
    Draw(String),
}

fn draw_err<E: std::error::Error + Send + Sync>(err: DrawingAreaErrorKind<E>) -> RenderError {
    RenderError::Draw(err.to_string())
}

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Render the figure to a PNG at `path`.
    pub fn render_png(
        figure: &Figure,
        path: &Path,
        width: u32,
        height: u32,
    ) -> Result<(), RenderError> {
        let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
        Self::draw(figure, &root)?;
        root.present().map_err(draw_err)?;

        tracing::info!(
            path = %path.display(),
            curves = figure.curves.len(),
            "exported chart image"
        );
        Ok(())
    }

    fn draw<DB: DrawingBackend>(
        figure: &Figure,
        root: &DrawingArea<DB, Shift>,
    ) -> Result<(), RenderError> {
        root.fill(&WHITE).map_err(draw_err)?;

        let (x_range, y_range) = figure.bounds();

        let mut builder = ChartBuilder::on(root);
        builder
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(70);
        if let Some(title) = &figure.title {
            builder.caption(title, ("sans-serif", 28));
        }

        let mut chart = builder
            .build_cartesian_2d(x_range, y_range)
            .map_err(draw_err)?;

        chart
            .configure_mesh()
            .x_desc(figure.x_label.as_str())
            .y_desc(figure.y_label.as_str())
            .draw()
            .map_err(draw_err)?;

        for (idx, curve) in figure.curves.iter().enumerate() {
            let color = Self::rgb(idx);
            chart
                .draw_series(LineSeries::new(
                    curve.points.iter().map(|p| (p[0], p[1])),
                    color.stroke_width(LINE_WIDTH),
                ))
                .map_err(draw_err)?
                .label(curve.label.as_str())
                .legend(move |(x, y)| {
                    PathElement::new(
                        vec![(x, y), (x + LEGEND_SWATCH, y)],
                        color.stroke_width(LINE_WIDTH),
                    )
                });
        }

        if figure.show_legend && !figure.curves.is_empty() {
            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::UpperLeft)
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .draw()
                .map_err(draw_err)?;
        }

        Ok(())
    }

    /// Same palette as the interactive chart.
    fn rgb(idx: usize) -> RGBColor {
        let c = TickPlotter::curve_color(idx);
        RGBColor(c.r(), c.g(), c.b())
    }
}
