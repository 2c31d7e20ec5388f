#![deny(unsafe_code)]

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use pgnmerge_model::{Classification, ParameterKey};
use pgnmerge_transform::ClassificationSink;

/// Run-scoped audit log: one `"<PGN:SPN>, <classification>"` line per
/// processed column.
///
/// Created fresh at the start of a fill pass, truncating the previous run's
/// log; append-only for the rest of the pass, single writer.
pub struct ClassificationLog {
    writer: BufWriter<File>,
    path: PathBuf,
}

impl ClassificationLog {
    pub fn create(path: &Path) -> io::Result<Self> {
        let file = File::create(path)?;
        debug!(path = %path.display(), "opened classification log");
        Ok(Self {
            writer: BufWriter::new(file),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flush and close at the end of the fill pass.
    pub fn finish(mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl ClassificationSink for ClassificationLog {
    fn record(
        &mut self,
        key: ParameterKey,
        classification: Classification,
    ) -> io::Result<()> {
        writeln!(self.writer, "{key}, {classification}")
    }
}

#[cfg(test)]
mod tests {
    use pgnmerge_model::{Pgn, Spn};

    use super::*;

    #[test]
    fn writes_one_line_per_column_and_truncates_previous_runs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("classification.log");

        let mut log = ClassificationLog::create(&path).unwrap();
        log.record(
            ParameterKey::new(Pgn::new(61444), Spn::new(190)),
            Classification::Continuous,
        )
        .unwrap();
        log.record(
            ParameterKey::new(Pgn::new(61444), Spn::new(523)),
            Classification::Discrete,
        )
        .unwrap();
        log.finish().unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "61444:190, continuous\n61444:523, discrete\n");

        // A new run starts over.
        ClassificationLog::create(&path).unwrap().finish().unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }
}
