#![deny(unsafe_code)]

use std::io;

use tracing::debug;

use pgnmerge_metadata::{DescriptionStore, classify};
use pgnmerge_model::{CellValue, Classification, Column, MergedTable, ParameterKey};

use crate::TransformError;

/// Receives one record per processed column. The run-scoped classification
/// log implements this; tests collect records in memory instead.
pub trait ClassificationSink {
    fn record(
        &mut self,
        key: ParameterKey,
        classification: Classification,
    ) -> io::Result<()>;
}

impl ClassificationSink for Vec<(ParameterKey, Classification)> {
    fn record(
        &mut self,
        key: ParameterKey,
        classification: Classification,
    ) -> io::Result<()> {
        self.push((key, classification));
        Ok(())
    }
}

/// Fill every gap the merge created, column by column, in place.
///
/// Each column's fill strategy follows its classification: continuous columns
/// interpolate linearly over row positions, discrete columns hold their last
/// known state (with a backward pass covering gaps before the first
/// observation). Columns with no present value at all stay missing. Each
/// column's classification is resolved once and recorded through the sink.
///
/// Columns are mutated independently, so a second pass over an already-filled
/// table changes nothing.
pub fn fill_gaps<S>(
    table: &mut MergedTable,
    store: &S,
    sink: &mut dyn ClassificationSink,
) -> Result<(), TransformError>
where
    S: DescriptionStore + ?Sized,
{
    // One lookup per column, resolved up front for the whole pass.
    let classifications: Vec<Classification> = table
        .columns
        .iter()
        .map(|column| classify(store, column.key))
        .collect::<Result<_, _>>()?;

    for (column, classification) in table.columns.iter_mut().zip(classifications) {
        match classification {
            Classification::Continuous => fill_continuous(column)?,
            Classification::Discrete => fill_discrete(&mut column.values),
        }
        sink.record(column.key, classification)?;
        debug!(key = %column.key, %classification, "filled column");
    }
    Ok(())
}

/// Linear interpolation over row positions.
///
/// A gap between present values at rows `i < j` blends them by relative row
/// distance; gaps before the first or after the last present value take the
/// nearest present value, since no two-sided data exists there. The fill
/// limit is the row count, i.e. unbounded within one table.
fn fill_continuous(column: &mut Column) -> Result<(), TransformError> {
    let mut anchors: Vec<(usize, f64)> = Vec::new();
    for (row, value) in column.values.iter().enumerate() {
        match value {
            CellValue::Number(number) => anchors.push((row, *number)),
            CellValue::Text(text) => {
                return Err(TransformError::NonNumeric {
                    column: column.key,
                    row,
                    value: text.clone(),
                });
            }
            CellValue::Missing => {}
        }
    }
    let Some(&(first_row, first_value)) = anchors.first() else {
        return Ok(()); // nothing to interpolate from
    };
    let &(last_row, last_value) = anchors.last().unwrap_or(&(first_row, first_value));

    for value in &mut column.values[..first_row] {
        *value = CellValue::Number(first_value);
    }
    for window in anchors.windows(2) {
        let (start, start_value) = window[0];
        let (end, end_value) = window[1];
        for row in start + 1..end {
            let weight = (row - start) as f64 / (end - start) as f64;
            let blended = start_value + (end_value - start_value) * weight;
            column.values[row] = CellValue::Number(blended);
        }
    }
    for value in &mut column.values[last_row + 1..] {
        *value = CellValue::Number(last_value);
    }
    Ok(())
}

/// Hold-last-value fill for state-valued columns.
///
/// Forward pass propagates each present value over the gaps that follow it;
/// the backward pass then covers rows before the first observation. No
/// intermediate value is ever synthesized.
fn fill_discrete(values: &mut [CellValue]) {
    let mut last: Option<CellValue> = None;
    for value in values.iter_mut() {
        if value.is_missing() {
            if let Some(known) = &last {
                *value = known.clone();
            }
        } else {
            last = Some(value.clone());
        }
    }
    let mut next: Option<CellValue> = None;
    for value in values.iter_mut().rev() {
        if value.is_missing() {
            if let Some(known) = &next {
                *value = known.clone();
            }
        } else {
            next = Some(value.clone());
        }
    }
}
