//! Record model
//!
//! A [`Record`] is one logical row of a staged file: an ordered mapping
//! from column name to an optional text value. Values are never coerced to
//! typed data here; empty or NaN-like tokens become `None` at parse time
//! and any further interpretation belongs to the sink.

use std::sync::Arc;

/// One parsed row with named, optional text fields
///
/// The column universe is shared with the owning batch via `Arc`, so
/// cloning a record into a result group does not duplicate the header.
/// Records are immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    columns: Arc<[String]>,
    values: Vec<Option<String>>,
}

impl Record {
    /// Create a record from the shared column list and one value per column
    ///
    /// Callers must pass exactly one value slot per column; the parser is
    /// the only producer and pads short rows before constructing.
    pub fn new(columns: Arc<[String]>, values: Vec<Option<String>>) -> Self {
        debug_assert_eq!(columns.len(), values.len());
        Self { columns, values }
    }

    /// Look up a value by column name
    ///
    /// Returns `None` both for unknown columns and for absent values;
    /// use [`Record::has_column`] to distinguish when it matters.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.columns
            .iter()
            .position(|c| c == column)
            .and_then(|idx| self.values[idx].as_deref())
    }

    /// Whether the record's schema contains the named column
    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    /// Column names in declared order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Values in declared column order
    pub fn values(&self) -> impl Iterator<Item = Option<&str>> {
        self.values.iter().map(|v| v.as_deref())
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the record has no columns
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
