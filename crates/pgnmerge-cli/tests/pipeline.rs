//! End-to-end tests for the run pipeline.

use std::path::{Path, PathBuf};

use rusqlite::Connection;
use tempfile::TempDir;

use pgnmerge_cli::pipeline::{RunOptions, run};

/// Two inputs sampled at disjoint times: a continuous parameter (100:200)
/// and a discrete one (100:300).
fn write_inputs(dir: &Path) -> Vec<PathBuf> {
    let file_a = dir.join("a.csv");
    std::fs::write(
        &file_a,
        "RowId, Time ,TimeInterval,Difference,Label,100:200\n\
         1,0,0,0,run,1.0\n\
         2,2,2,2,run,3.0\n",
    )
    .unwrap();
    let file_b = dir.join("b.csv");
    std::fs::write(
        &file_b,
        "RowId,Time,TimeInterval,Difference,Label,100:300\n\
         1,1,1,1,run,X\n",
    )
    .unwrap();
    vec![file_a, file_b]
}

fn write_metadata_db(dir: &Path, entries: &[(u32, &str)]) -> PathBuf {
    let path = dir.join("metadata.db");
    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("CREATE TABLE SPNandPGN (SPN INTEGER PRIMARY KEY, Resolution TEXT)")
        .unwrap();
    for (spn, resolution) in entries {
        conn.execute(
            "INSERT INTO SPNandPGN VALUES (?1, ?2)",
            (spn, resolution),
        )
        .unwrap();
    }
    path
}

#[test]
fn merges_two_files_and_fills_by_classification() {
    let dir = TempDir::new().unwrap();
    let inputs = write_inputs(dir.path());
    let db = write_metadata_db(
        dir.path(),
        &[(200, "0.5 kPa/bit"), (300, "4 states/2 bit")],
    );
    let output = dir.path().join("merged.csv");

    let summary = run(&RunOptions {
        output: output.clone(),
        inputs,
        fill: true,
        db,
        classification_log: None,
    })
    .unwrap();

    assert_eq!(summary.rows, 3);
    assert_eq!(summary.columns, 2);
    let counts = summary.fill_counts.unwrap();
    assert_eq!(counts.continuous, 1);
    assert_eq!(counts.discrete, 1);

    let merged = std::fs::read_to_string(&output).unwrap();
    assert_eq!(
        merged,
        "Time,100:200,100:300\n\
         0,1,X\n\
         1,2,X\n\
         2,3,X\n"
    );

    let log_path = summary.classification_log.unwrap();
    assert_eq!(log_path, dir.path().join("classification.log"));
    let log = std::fs::read_to_string(&log_path).unwrap();
    assert_eq!(log, "100:200, continuous\n100:300, discrete\n");
}

#[test]
fn no_fill_leaves_na_markers_and_never_opens_the_store() {
    let dir = TempDir::new().unwrap();
    let inputs = write_inputs(dir.path());
    let output = dir.path().join("merged.csv");

    let summary = run(&RunOptions {
        output: output.clone(),
        inputs,
        fill: false,
        // Deliberately nonexistent: merge-only mode must not touch it.
        db: dir.path().join("absent.db"),
        classification_log: None,
    })
    .unwrap();

    assert!(summary.fill_counts.is_none());
    assert!(summary.classification_log.is_none());
    let merged = std::fs::read_to_string(&output).unwrap();
    assert_eq!(
        merged,
        "Time,100:200,100:300\n\
         0,1,NA\n\
         1,NA,X\n\
         2,3,NA\n"
    );
}

#[test]
fn missing_metadata_entry_aborts_without_output() {
    let dir = TempDir::new().unwrap();
    let inputs = write_inputs(dir.path());
    // SPN 300 is absent from the store.
    let db = write_metadata_db(dir.path(), &[(200, "0.5 kPa/bit")]);
    let output = dir.path().join("merged.csv");

    let error = run(&RunOptions {
        output: output.clone(),
        inputs,
        fill: true,
        db,
        classification_log: None,
    })
    .unwrap_err();

    assert!(format!("{error:#}").contains("no metadata entry for SPN 300"));
    assert!(!output.exists());
}

#[test]
fn unreachable_metadata_database_aborts() {
    let dir = TempDir::new().unwrap();
    let inputs = write_inputs(dir.path());
    let output = dir.path().join("merged.csv");

    let error = run(&RunOptions {
        output: output.clone(),
        inputs,
        fill: true,
        db: dir.path().join("absent.db"),
        classification_log: None,
    })
    .unwrap_err();

    assert!(format!("{error:#}").contains("open metadata database"));
    assert!(!output.exists());
}

#[test]
fn malformed_input_aborts_before_any_merge_work() {
    let dir = TempDir::new().unwrap();
    let bad = dir.path().join("bad.csv");
    // No Label column.
    std::fs::write(&bad, "RowId,Time,TimeInterval,Difference,100:200\n1,0,0,0,1.0\n").unwrap();
    let output = dir.path().join("merged.csv");

    let error = run(&RunOptions {
        output: output.clone(),
        inputs: vec![bad],
        fill: false,
        db: dir.path().join("absent.db"),
        classification_log: None,
    })
    .unwrap_err();

    assert!(format!("{error:#}").contains("\"Label\" is missing"));
    assert!(!output.exists());
}
