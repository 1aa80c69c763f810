//! Index Record Module
//! The row type of the index table, plus display number formatting.

use serde::Deserialize;

/// One day of summary statistics for a market index.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IndexRecord {
    #[serde(rename = "index_name")]
    pub name: String,
    #[serde(rename = "index_date")]
    pub date: String,
    #[serde(rename = "open_index_value")]
    pub open: f64,
    #[serde(rename = "high_index_value")]
    pub high: f64,
    #[serde(rename = "low_index_value")]
    pub low: f64,
    #[serde(rename = "closing_index_value")]
    pub close: f64,
    pub points_change: f64,
    pub change_percent: f64,
    pub volume: u64,
    #[serde(rename = "turnover_rs_cr")]
    pub turnover_cr: f64,
    pub pe_ratio: f64,
    pub pb_ratio: f64,
    pub div_yield: f64,
}

impl IndexRecord {
    /// The four headline values in chart order: Open, High, Low, Close.
    pub fn ohlc(&self) -> [f64; 4] {
        [self.open, self.high, self.low, self.close]
    }
}

/// Format a value with thousands separators and a fixed number of decimals.
pub fn format_thousands(value: f64, decimals: usize) -> String {
    let rendered = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match rendered.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rendered.as_str(), None),
    };

    let grouped = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap())
        .collect::<Vec<_>>()
        .join(",");

    let sign = if value < 0.0 { "-" } else { "" };
    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}
