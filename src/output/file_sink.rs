//! File-backed output sink

use crate::output::traits::RecordSink;
use crate::CrawlError;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Output file for one crawl run
///
/// The file is truncated on creation and flushed after every record.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    file: File,
}

impl FileSink {
    /// Creates (or truncates) the output file
    ///
    /// # Returns
    ///
    /// * `Ok(FileSink)` - File is open for writing
    /// * `Err(CrawlError::Output)` - File could not be created
    pub fn create(path: &Path) -> Result<Self, CrawlError> {
        let file = File::create(path).map_err(|source| CrawlError::Output {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSink for FileSink {
    fn write_record(&mut self, record: &str) -> io::Result<()> {
        self.file.write_all(record.as_bytes())?;
        self.file.flush()
    }
}
