//! Batch model
//!
//! A [`Batch`] is the ordered sequence of records parsed from one staged
//! file, together with the provenance the rest of the pipeline needs to
//! write faithful output artifacts: originating filename, detected text
//! encoding, field delimiter, and the declared column order.

use crate::domain::Record;
use encoding_rs::Encoding;
use std::sync::Arc;

/// Ordered collection of records parsed from one staged file
///
/// Row order is preserved from the source file and is the only ordering
/// guarantee downstream components rely on: it determines the row order of
/// both the `_ok` and `_error` artifacts, which operators reconcile
/// against the original file.
#[derive(Debug, Clone)]
pub struct Batch {
    file_name: String,
    encoding: &'static Encoding,
    delimiter: u8,
    columns: Arc<[String]>,
    records: Vec<Record>,
}

impl Batch {
    /// Assemble a batch; only the parser constructs these
    pub fn new(
        file_name: String,
        encoding: &'static Encoding,
        delimiter: u8,
        columns: Arc<[String]>,
        records: Vec<Record>,
    ) -> Self {
        Self {
            file_name,
            encoding,
            delimiter,
            columns,
            records,
        }
    }

    /// Name of the originating file (no directory components)
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Text encoding detected from the raw file bytes
    ///
    /// Reused for every artifact derived from this file so round-tripping
    /// preserves character fidelity.
    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    /// Field delimiter of the source file
    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    /// Declared column order from the header row
    pub fn columns(&self) -> &Arc<[String]> {
        &self.columns
    }

    /// Records in original row order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records (header excluded)
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the batch holds no data rows
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
