//! Charts module - OHLC bar chart rendering

mod plotter;

pub use plotter::{axis_bounds, ChartPlotter, OhlcChartData, BAR_LABELS};
