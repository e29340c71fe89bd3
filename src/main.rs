use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod chart;
mod model;
mod render;
mod timing;
mod viewer;

pub type Result<T> = anyhow::Result<T>;

/// Reads `timing_results.json` from the working directory; takes no arguments.
#[derive(Parser)]
#[command(name = "timing-chart", version)]
#[command(about = "Grouped bar chart of per-day execution times", long_about = None)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // 1) Load.
    let records = timing::load_timing_file(timing::TIMING_RESULTS_PATH)?;
    info!(records = records.len(), path = timing::TIMING_RESULTS_PATH, "loaded timings");

    // 2) Transform.
    let series = model::build_series(&records)?;
    if series.is_empty() {
        info!("no records; the chart will be empty");
    }

    // 3) Build the chart object and render it.
    let chart = chart::build_bar_chart(&series, &chart::ChartStyle::default());
    debug!(bars = chart.bar_count(), categories = chart.categories.len(), "built chart");
    let html = render::render_html_chart(&chart)?;

    // 4) Display.
    viewer::show_chart(&html)?;

    Ok(())
}
