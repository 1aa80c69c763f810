//! Index Dataset Module
//! Parses the embedded index table and serves ordered name lookups.

use crate::data::IndexRecord;
use thiserror::Error;

/// The sample index table, one row per NSE index for 2024-03-22.
const EMBEDDED_CSV: &str = "\
index_name,index_date,open_index_value,high_index_value,low_index_value,closing_index_value,points_change,change_percent,volume,turnover_rs_cr,pe_ratio,pb_ratio,div_yield
Nifty 50,2024-03-22,21932.20,22180.70,21883.30,22096.75,84.80,0.39,388656439,39023.19,22.81,3.87,1.21
Nifty Next 50,2024-03-22,58987.10,59326.25,58644.30,59188.90,270.60,0.46,239966115,10207.54,25.60,4.75,1.24
Nifty 100,2024-03-22,22476.70,22709.35,22414.50,22633.80,94.90,0.42,630024734,49320.98,23.48,4.04,1.19
Nifty 200,2024-03-22,12084.35,12204.85,12050.50,12168.75,54.25,0.45,1921544340,67660.17,23.64,4.00,1.15
Nifty 500,2024-03-22,19855.00,20048.60,19806.70,19994.60,97.20,0.49,2601583232,82714.83,24.25,4.02,1.11
Nifty Midcap 50,2024-03-22,13262.80,13357.75,13210.90,13329.95,24.55,0.18,699267974,9603.95,20.40,3.62,1.17
";

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to parse index table: {0}")]
    CsvError(#[from] csv::Error),
    #[error("Duplicate index name: {0}")]
    DuplicateName(String),
    #[error("Index table is empty")]
    Empty,
}

/// Immutable, ordered collection of index records keyed by name.
/// Loaded once at startup; iteration preserves table order.
pub struct IndexDataset {
    records: Vec<IndexRecord>,
}

impl IndexDataset {
    /// Load the table embedded in the binary.
    pub fn embedded() -> Result<Self, DatasetError> {
        Self::from_csv(EMBEDDED_CSV)
    }

    /// Parse a CSV table with the index schema.
    pub fn from_csv(csv_text: &str) -> Result<Self, DatasetError> {
        let mut reader = csv::Reader::from_reader(csv_text.as_bytes());
        let mut records: Vec<IndexRecord> = Vec::new();

        for row in reader.deserialize() {
            let record: IndexRecord = row?;
            if records.iter().any(|r| r.name == record.name) {
                return Err(DatasetError::DuplicateName(record.name));
            }
            records.push(record);
        }

        if records.is_empty() {
            return Err(DatasetError::Empty);
        }

        Ok(Self { records })
    }

    /// Build a dataset from records already in memory.
    pub fn from_records(records: Vec<IndexRecord>) -> Self {
        Self { records }
    }

    /// Look up one record by index name.
    pub fn get(&self, name: &str) -> Option<&IndexRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    /// Index names in table order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.name.as_str())
    }

    /// All records in table order.
    pub fn records(&self) -> &[IndexRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_table_has_six_indices_in_order() {
        let dataset = IndexDataset::embedded().unwrap();
        let names: Vec<&str> = dataset.names().collect();
        assert_eq!(
            names,
            [
                "Nifty 50",
                "Nifty Next 50",
                "Nifty 100",
                "Nifty 200",
                "Nifty 500",
                "Nifty Midcap 50",
            ]
        );
    }

    #[test]
    fn lookup_resolves_full_record() {
        let dataset = IndexDataset::embedded().unwrap();
        let record = dataset.get("Nifty 50").unwrap();
        assert_eq!(record.date, "2024-03-22");
        assert_eq!(record.ohlc(), [21932.20, 22180.70, 21883.30, 22096.75]);
        assert_eq!(record.volume, 388_656_439);
        assert_eq!(record.pe_ratio, 22.81);
    }

    #[test]
    fn lookup_of_unknown_name_is_none() {
        let dataset = IndexDataset::embedded().unwrap();
        assert!(dataset.get("Nifty Bank").is_none());
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let csv_text = "\
index_name,index_date,open_index_value,high_index_value,low_index_value,closing_index_value,points_change,change_percent,volume,turnover_rs_cr,pe_ratio,pb_ratio,div_yield
Nifty 50,2024-03-22,1.0,1.0,1.0,1.0,0.0,0.0,1,1.0,1.0,1.0,1.0
Nifty 50,2024-03-22,2.0,2.0,2.0,2.0,0.0,0.0,2,2.0,2.0,2.0,2.0
";
        assert!(matches!(
            IndexDataset::from_csv(csv_text),
            Err(DatasetError::DuplicateName(_))
        ));
    }

    #[test]
    fn empty_table_is_rejected() {
        let csv_text = "index_name,index_date,open_index_value,high_index_value,low_index_value,closing_index_value,points_change,change_percent,volume,turnover_rs_cr,pe_ratio,pb_ratio,div_yield\n";
        assert!(matches!(
            IndexDataset::from_csv(csv_text),
            Err(DatasetError::Empty)
        ));
    }
}
