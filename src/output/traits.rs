//! Output sink trait
//!
//! A sink is an append-only text stream owned by one crawl run. Records must
//! be durable once `write_record` returns, so an interrupted crawl keeps every
//! page written so far.

use std::io;

/// Append-only destination for crawl records
pub trait RecordSink {
    /// Appends one record and makes it durable
    ///
    /// # Arguments
    ///
    /// * `record` - Fully formatted record text
    fn write_record(&mut self, record: &str) -> io::Result<()>;
}

/// In-memory sink, one entry per record
impl RecordSink for Vec<String> {
    fn write_record(&mut self, record: &str) -> io::Result<()> {
        self.push(record.to_string());
        Ok(())
    }
}
