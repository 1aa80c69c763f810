//! OHLC Chart Plotter Module
//! Builds the four-bar chart data for one index record and renders it
//! with egui_plot.

use crate::data::{format_thousands, IndexRecord};
use crate::theme;
use egui::{Align2, RichText};
use egui_plot::{Bar, BarChart, Plot, PlotBounds, PlotPoint, Text};

/// X-axis labels in bar order.
pub const BAR_LABELS: [&str; 4] = ["Open", "High", "Low", "Close"];

/// Fixed padding factors for the value axis. Bars start near their own
/// range instead of zero so intraday moves stay visually distinct.
const LOWER_PAD: f64 = 0.98;
const UPPER_PAD: f64 = 1.02;

const BAR_WIDTH: f64 = 0.6;

/// Everything the chart draws for one record, computed up front so the
/// render path stays a pure function of the selected record.
#[derive(Debug, Clone, PartialEq)]
pub struct OhlcChartData {
    pub index_name: String,
    pub values: [f64; 4],
    pub value_labels: [String; 4],
    pub y_bounds: (f64, f64),
}

impl OhlcChartData {
    pub fn from_record(record: &IndexRecord) -> Self {
        let values = record.ohlc();
        Self {
            index_name: record.name.clone(),
            value_labels: values.map(|v| format_thousands(v, 2)),
            y_bounds: axis_bounds(&values),
            values,
        }
    }
}

/// Value-axis bounds: [min x 0.98, max x 1.02]. A table of all-zero
/// values would collapse the range to [0, 0], so that case widens to
/// [-1, 1] instead.
pub fn axis_bounds(values: &[f64; 4]) -> (f64, f64) {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if min == 0.0 && max == 0.0 {
        return (-1.0, 1.0);
    }

    (min * LOWER_PAD, max * UPPER_PAD)
}

/// Renders the OHLC bar chart using egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Draw the four-bar chart with gold-edged bars and value annotations.
    pub fn draw_ohlc_chart(ui: &mut egui::Ui, chart: &OhlcChartData) {
        let bars: Vec<Bar> = chart
            .values
            .iter()
            .enumerate()
            .map(|(i, &value)| {
                Bar::new(i as f64, value)
                    .width(BAR_WIDTH)
                    .fill(theme::BAR_PALETTE[i])
                    .stroke(egui::Stroke::new(1.5, theme::ACCENT_COLOR))
                    .name(BAR_LABELS[i])
            })
            .collect();

        let (y_min, y_max) = chart.y_bounds;

        Plot::new(format!("ohlc_{}", chart.index_name))
            .y_axis_label("Index Value")
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .show_grid([false, true])
            .x_axis_formatter(|mark, _range| {
                let idx = mark.value.round() as usize;
                if (mark.value - idx as f64).abs() < 1e-6 && idx < BAR_LABELS.len() {
                    BAR_LABELS[idx].to_string()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                    [-0.5, y_min],
                    [3.5, y_max],
                ));

                plot_ui.bar_chart(BarChart::new(bars));

                // Value annotation above each bar top
                for (i, (&value, label)) in
                    chart.values.iter().zip(&chart.value_labels).enumerate()
                {
                    plot_ui.text(
                        Text::new(
                            PlotPoint::new(i as f64, value),
                            RichText::new(label)
                                .size(14.0)
                                .strong()
                                .color(theme::TEXT_COLOR),
                        )
                        .anchor(Align2::CENTER_BOTTOM),
                    );
                }
            });
    }
}
