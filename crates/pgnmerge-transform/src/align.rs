#![deny(unsafe_code)]

use std::collections::BTreeMap;

use tracing::debug;

use pgnmerge_model::{CellValue, Column, Dataset, MergedTable, ParameterKey, Timestamp};

use crate::TransformError;

/// Full outer join of all datasets on the time column.
///
/// Datasets fold left-to-right into one table whose row set is the union of
/// all input timestamps, sorted ascending. A cell is missing exactly when no
/// input supplied a value for that parameter at that timestamp. An outer join
/// is required here: the inputs are sampled independently, so an inner join
/// would silently drop every reading taken at a time the other files lack.
///
/// When two inputs carry the same parameter column with a present value at
/// the same timestamp, the later input wins under the fold order. Inputs are
/// expected to have disjoint parameter coverage per timestamp.
pub fn merge_datasets(datasets: &[Dataset]) -> Result<MergedTable, TransformError> {
    if datasets.is_empty() {
        return Err(TransformError::NoInputs);
    }

    // Columns keep first-appearance order; rows sort through the BTreeMap key.
    let mut column_order: Vec<ParameterKey> = Vec::new();
    let mut cells: BTreeMap<Timestamp, BTreeMap<ParameterKey, CellValue>> = BTreeMap::new();

    for dataset in datasets {
        for &timestamp in &dataset.timestamps {
            cells.entry(timestamp).or_default();
        }
        for column in &dataset.columns {
            if !column_order.contains(&column.key) {
                column_order.push(column.key);
            }
            for (&timestamp, value) in dataset.timestamps.iter().zip(&column.values) {
                if value.is_missing() {
                    continue;
                }
                cells
                    .entry(timestamp)
                    .or_default()
                    .insert(column.key, value.clone());
            }
        }
    }

    let timestamps: Vec<Timestamp> = cells.keys().copied().collect();
    let columns: Vec<Column> = column_order
        .into_iter()
        .map(|key| {
            let values = cells
                .values()
                .map(|row| row.get(&key).cloned().unwrap_or(CellValue::Missing))
                .collect();
            Column::new(key, values)
        })
        .collect();

    debug!(
        inputs = datasets.len(),
        rows = timestamps.len(),
        columns = columns.len(),
        "merged datasets"
    );
    Ok(MergedTable {
        timestamps,
        columns,
    })
}
