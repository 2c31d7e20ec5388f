//! Run orchestration with explicit stages.
//!
//! 1. **Ingest**: read each input CSV into a dataset
//! 2. **Merge**: full outer join on the time column, rows ascending
//! 3. **Fill**: classification-driven gap filling (skipped with `--no-fill`)
//! 4. **Write**: merged CSV plus the classification log
//!
//! All-or-nothing: any stage error aborts the run with no partial output.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, info_span};

use pgnmerge_ingest::read_dataset;
use pgnmerge_metadata::SqliteStore;
use pgnmerge_model::{Classification, Dataset, ParameterKey};
use pgnmerge_report::{ClassificationLog, write_merged_csv};
use pgnmerge_transform::{ClassificationSink, fill_gaps, merge_datasets};

/// Everything one invocation needs; built from CLI args, or directly by
/// integration tests.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub output: PathBuf,
    pub inputs: Vec<PathBuf>,
    /// When false, merge only and leave `NA` markers in place.
    pub fill: bool,
    pub db: PathBuf,
    pub classification_log: Option<PathBuf>,
}

/// What a successful run produced, for the end-of-run summary.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub output: PathBuf,
    pub inputs: usize,
    pub rows: usize,
    pub columns: usize,
    /// Per-classification column counts; `None` in merge-only mode.
    pub fill_counts: Option<FillCounts>,
    pub classification_log: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FillCounts {
    pub continuous: usize,
    pub discrete: usize,
}

/// Forwards each record to the run log while keeping summary counts.
struct CountingLog {
    log: ClassificationLog,
    counts: FillCounts,
}

impl ClassificationSink for CountingLog {
    fn record(
        &mut self,
        key: ParameterKey,
        classification: Classification,
    ) -> io::Result<()> {
        match classification {
            Classification::Continuous => self.counts.continuous += 1,
            Classification::Discrete => self.counts.discrete += 1,
        }
        self.log.record(key, classification)
    }
}

pub fn run(options: &RunOptions) -> Result<RunSummary> {
    let datasets = ingest(&options.inputs)?;

    let merge_span = info_span!("merge");
    let mut merged = {
        let _guard = merge_span.enter();
        info!(inputs = datasets.len(), "merging datasets");
        merge_datasets(&datasets).context("merge datasets")?
    };

    let (fill_counts, classification_log) = if options.fill {
        let fill_span = info_span!("fill");
        let _guard = fill_span.enter();
        info!("filling missing values");
        let store = SqliteStore::open(&options.db).with_context(|| {
            format!("open metadata database {}", options.db.display())
        })?;
        let log_path = options
            .classification_log
            .clone()
            .unwrap_or_else(|| default_log_path(&options.output));
        let log = ClassificationLog::create(&log_path)
            .with_context(|| format!("create classification log {}", log_path.display()))?;
        let mut sink = CountingLog {
            log,
            counts: FillCounts::default(),
        };
        fill_gaps(&mut merged, &store, &mut sink).context("fill gaps")?;
        sink.log.finish().context("close classification log")?;
        (Some(sink.counts), Some(log_path))
    } else {
        (None, None)
    };

    let write_span = info_span!("write");
    {
        let _guard = write_span.enter();
        info!(path = %options.output.display(), "writing merged output");
        write_merged_csv(&merged, &options.output)
            .with_context(|| format!("write {}", options.output.display()))?;
    }

    Ok(RunSummary {
        output: options.output.clone(),
        inputs: options.inputs.len(),
        rows: merged.row_count(),
        columns: merged.columns.len(),
        fill_counts,
        classification_log,
    })
}

fn ingest(inputs: &[PathBuf]) -> Result<Vec<Dataset>> {
    let ingest_span = info_span!("ingest");
    let _guard = ingest_span.enter();
    info!(files = inputs.len(), "reading input datasets");
    inputs
        .iter()
        .map(|path| {
            read_dataset(path).with_context(|| format!("read {}", path.display()))
        })
        .collect()
}

fn default_log_path(output: &Path) -> PathBuf {
    output.with_file_name("classification.log")
}
