//! Stock Index Insights
//!
//! Single-window viewer for NSE index OHLC snapshots: pick an index from
//! the sidebar, see its open/high/low/close bars and summary statistics.

pub mod charts;
pub mod data;
pub mod gui;
pub mod theme;
