//! CSV file sink for the finished table.

use std::path::{Path, PathBuf};

use sift_core::{OutputRecord, SearchQuery, COLUMNS};
use sift_pipeline::TableSink;

/// Writes `<dir>/<since>---<until>.csv`, replacing any earlier file for the
/// same date range.
#[derive(Debug, Clone)]
pub struct CsvSink {
    dir: PathBuf,
}

impl CsvSink {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn path_for(&self, query: &SearchQuery) -> PathBuf {
        self.dir.join(format!("{}.csv", query.range_key()))
    }
}

impl TableSink for CsvSink {
    type Error = csv::Error;

    fn persist(&mut self, query: &SearchQuery, records: &[OutputRecord]) -> Result<(), csv::Error> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.path_for(query);

        // Header written by hand so an empty table still gets one.
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&path)?;
        writer.write_record(COLUMNS)?;
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;

        tracing::info!(path = %path.display(), rows = records.len(), "wrote table");
        Ok(())
    }
}
