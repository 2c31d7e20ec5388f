#![deny(unsafe_code)]

use std::io::Write;
use std::path::Path;

use tracing::debug;

use pgnmerge_model::{MergedTable, TIME_COLUMN_NAME};

use crate::ReportError;

/// Write the merged table as flat CSV: the time column plus every parameter
/// column in table order, rows ascending by time, missing cells as `NA`, no
/// index column.
pub fn write_merged_csv(table: &MergedTable, path: &Path) -> Result<(), ReportError> {
    let file = std::fs::File::create(path)?;
    write_merged_csv_to(table, file)?;
    debug!(
        path = %path.display(),
        rows = table.row_count(),
        columns = table.columns.len(),
        "wrote merged table"
    );
    Ok(())
}

pub fn write_merged_csv_to<W: Write>(table: &MergedTable, target: W) -> Result<(), ReportError> {
    let mut writer = csv::Writer::from_writer(target);

    let mut header = vec![TIME_COLUMN_NAME.to_string()];
    header.extend(table.columns.iter().map(|column| column.key.to_string()));
    writer.write_record(&header)?;

    for (row, timestamp) in table.timestamps.iter().enumerate() {
        let mut record = vec![timestamp.to_string()];
        record.extend(
            table
                .columns
                .iter()
                .map(|column| column.values[row].to_string()),
        );
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}
