#![deny(unsafe_code)]

use std::path::Path;

use tracing::debug;

use pgnmerge_model::{CellValue, Column, Dataset, ParameterKey, TIME_COLUMN_NAME, Timestamp};

use crate::IngestError;

/// Bookkeeping columns the exporter adds around the readings. They carry no
/// merge-relevant data and are stripped; their absence is an input-format
/// error because it means the file is not in the expected export layout.
pub const BOOKKEEPING_COLUMNS: [&str; 4] = ["RowId", "TimeInterval", "Difference", "Label"];

/// Headers may carry incidental padding and an occasional BOM.
fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').trim().to_string()
}

/// Read one input file into a [`Dataset`]: the time column plus every
/// `PGN:SPN` parameter column, with bookkeeping columns removed.
pub fn read_dataset(path: &Path) -> Result<Dataset, IngestError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;
    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(normalize_header)
        .collect();

    let missing = |column: &str| IngestError::MissingColumn {
        path: path.to_path_buf(),
        column: column.to_string(),
    };

    let time_index = headers
        .iter()
        .position(|header| header == TIME_COLUMN_NAME)
        .ok_or_else(|| missing(TIME_COLUMN_NAME))?;
    for column in BOOKKEEPING_COLUMNS {
        if !headers.iter().any(|header| header == column) {
            return Err(missing(column));
        }
    }

    let mut parameter_indices: Vec<(usize, ParameterKey)> = Vec::new();
    for (index, header) in headers.iter().enumerate() {
        if index == time_index || BOOKKEEPING_COLUMNS.contains(&header.as_str()) {
            continue;
        }
        let key: ParameterKey =
            header
                .parse()
                .map_err(|source| IngestError::BadHeader {
                    path: path.to_path_buf(),
                    source,
                })?;
        parameter_indices.push((index, key));
    }

    let mut timestamps = Vec::new();
    let mut columns: Vec<Column> = parameter_indices
        .iter()
        .map(|(_, key)| Column::new(*key, Vec::new()))
        .collect();

    for (record_index, record) in reader.records().enumerate() {
        let record = record?;
        let row = record_index + 1;
        let raw_time = record.get(time_index).unwrap_or("").trim();
        let time: f64 = raw_time
            .parse()
            .map_err(|_| IngestError::BadTimestamp {
                path: path.to_path_buf(),
                row,
                value: raw_time.to_string(),
            })?;
        timestamps.push(Timestamp::new(time));
        for (column, (index, _)) in columns.iter_mut().zip(&parameter_indices) {
            let raw = record.get(*index).unwrap_or("");
            column.values.push(CellValue::from_raw(raw));
        }
    }

    debug!(
        path = %path.display(),
        rows = timestamps.len(),
        parameters = columns.len(),
        "read dataset"
    );
    Ok(Dataset {
        timestamps,
        columns,
    })
}
