#![deny(unsafe_code)]

use std::cmp::Ordering;
use std::fmt;

use crate::ParameterKey;

/// Rendering of a missing cell in serialized output.
pub const NA_MARKER: &str = "NA";

/// Name of the join-key column every input and output table carries.
pub const TIME_COLUMN_NAME: &str = "Time";

/// A sample time used as the join key.
///
/// Timestamps are opaque numeric values: they need not be evenly spaced, and
/// the pipeline never does arithmetic on them. Total ordering via
/// `f64::total_cmp` makes them usable as `BTreeMap` keys so that equal
/// timestamps across inputs coalesce into one row.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct Timestamp(f64);

impl Timestamp {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl PartialEq for Timestamp {
    fn eq(&self, other: &Self) -> bool {
        self.0.total_cmp(&other.0) == Ordering::Equal
    }
}

impl Eq for Timestamp {}

impl PartialOrd for Timestamp {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Timestamp {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_number(self.0))
    }
}

/// One cell of a parameter column.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Number(f64),
    Text(String),
    Missing,
}

impl CellValue {
    /// Interpret one raw CSV cell. Empty cells and the literal `NA` marker
    /// are missing; anything that parses as a number is numeric.
    pub fn from_raw(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == NA_MARKER {
            return Self::Missing;
        }
        match trimmed.parse::<f64>() {
            Ok(number) => Self::Number(number),
            Err(_) => Self::Text(trimmed.to_string()),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => f.write_str(&format_number(*value)),
            Self::Text(value) => f.write_str(value),
            Self::Missing => f.write_str(NA_MARKER),
        }
    }
}

/// One parameter column: a `PGN:SPN` key plus one cell per table row.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Column {
    pub key: ParameterKey,
    pub values: Vec<CellValue>,
}

impl Column {
    pub fn new(key: ParameterKey, values: Vec<CellValue>) -> Self {
        Self { key, values }
    }
}

/// One loaded input file: its sample times and parameter columns, in file
/// order. Every column holds exactly one cell per timestamp.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Dataset {
    pub timestamps: Vec<Timestamp>,
    pub columns: Vec<Column>,
}

/// The time-aligned union of all input datasets.
///
/// Rows are sorted ascending by timestamp; columns appear in first-appearance
/// order across the inputs. A cell is [`CellValue::Missing`] exactly when no
/// input supplied a value for that parameter at that timestamp.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MergedTable {
    pub timestamps: Vec<Timestamp>,
    pub columns: Vec<Column>,
}

impl MergedTable {
    pub fn row_count(&self) -> usize {
        self.timestamps.len()
    }

    pub fn column(&self, key: ParameterKey) -> Option<&Column> {
        self.columns.iter().find(|column| column.key == key)
    }
}

/// Render a numeric cell for serialized output. `f64`'s `Display` already
/// prints integral values without a fractional part, which matches how the
/// time column arrives in the inputs.
pub fn format_number(value: f64) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_cells_classify_into_number_text_missing() {
        assert_eq!(CellValue::from_raw(" 1.5 "), CellValue::Number(1.5));
        assert_eq!(
            CellValue::from_raw("reverse"),
            CellValue::Text("reverse".to_string())
        );
        assert_eq!(CellValue::from_raw(""), CellValue::Missing);
        assert_eq!(CellValue::from_raw("  "), CellValue::Missing);
        assert_eq!(CellValue::from_raw("NA"), CellValue::Missing);
    }

    #[test]
    fn equal_timestamps_coalesce_under_total_order() {
        assert_eq!(Timestamp::new(1.0), Timestamp::new(1.0));
        assert!(Timestamp::new(1.0) < Timestamp::new(2.5));
    }

    #[test]
    fn display_renders_na_for_missing() {
        assert_eq!(CellValue::Missing.to_string(), "NA");
        assert_eq!(CellValue::Number(2.0).to_string(), "2");
        assert_eq!(CellValue::Number(2.5).to_string(), "2.5");
    }
}
