//! Tickplot - Per-process tick chart viewer
//!
//! Reads `data.csv` (pid, process ticks, global ticks) from the working
//! directory and plots process ticks against global ticks, one line per pid.

mod charts;
mod config;
mod data;
mod gui;

use anyhow::{anyhow, Context, Result};
use charts::{Figure, StaticChartRenderer, EXPORT_HEIGHT, EXPORT_WIDTH};
use clap::Parser;
use config::FigureConfig;
use data::{GroupOrder, TickLoader};
use gui::TickplotApp;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Input trace, relative to the working directory
const DATA_FILE: &str = "data.csv";

#[derive(Parser, Debug)]
#[command(name = "tickplot")]
#[command(about = "Plot per-process ticks against global ticks from data.csv", long_about = None)]
struct Args {
    /// Draw process curves in random order
    #[arg(long)]
    shuffle: bool,

    /// Seed for the random draw order (implies --shuffle)
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file with title, axis labels, legend and order settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Also write the chart to this PNG file
    #[arg(long)]
    export: Option<PathBuf>,

    /// Do not open the interactive viewer
    #[arg(long)]
    no_window: bool,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

impl Args {
    /// Draw order requested on the command line, if any.
    fn group_order(&self) -> Option<GroupOrder> {
        match (self.shuffle, self.seed) {
            (_, Some(seed)) => Some(GroupOrder::Shuffled { seed: Some(seed) }),
            (true, None) => Some(GroupOrder::Shuffled { seed: None }),
            (false, None) => None,
        }
    }
}

fn init_logging(log_path: &Path) -> Result<()> {
    let file = std::fs::File::create(log_path)
        .with_context(|| format!("failed to open log file {}", log_path.display()))?;
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(log_path) = &args.log {
        init_logging(log_path)?;
        tracing::info!("Starting tickplot");
    }

    let mut figure_config = match &args.config {
        Some(path) => FigureConfig::from_json_file(path)?,
        None => FigureConfig::default(),
    };
    if let Some(order) = args.group_order() {
        figure_config.order = order;
    }

    let table = TickLoader::load_csv(Path::new(DATA_FILE))
        .with_context(|| format!("failed to load {}", DATA_FILE))?;
    if table.is_empty() {
        tracing::warn!("{} has no rows, nothing to plot", DATA_FILE);
    }
    let figure = Figure::build(&table, &figure_config);
    tracing::info!(
        curves = figure.curves.len(),
        points = figure.point_count(),
        "built figure"
    );

    if let Some(path) = &args.export {
        StaticChartRenderer::render_png(&figure, path, EXPORT_WIDTH, EXPORT_HEIGHT)
            .with_context(|| format!("failed to export {}", path.display()))?;
    }

    if args.no_window {
        return Ok(());
    }

    let status = format!(
        "{}: {} rows, {} processes",
        DATA_FILE,
        table.len(),
        figure.curves.len()
    );
    TickplotApp::run(figure, status).map_err(|e| anyhow!("viewer failed: {}", e))?;

    Ok(())
}
