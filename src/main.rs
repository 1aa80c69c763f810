//! Stock Index Insights - NSE index OHLC bar chart viewer.

use anyhow::Context;
use eframe::egui;
use index_insights::data::IndexDataset;
use index_insights::gui::IndexViewerApp;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let dataset = IndexDataset::embedded().context("embedded index table failed to parse")?;

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1600.0, 900.0])
            .with_min_inner_size([1200.0, 700.0])
            .with_title("Stock Index Insights"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Stock Index Insights",
        options,
        Box::new(move |cc| Ok(Box::new(IndexViewerApp::new(cc, dataset)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to run viewer: {e}"))
}
