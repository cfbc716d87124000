//! Delimited file parsing into batches
//!
//! Parses one staged file into an ordered [`Batch`] of [`Record`]s.
//! Schema validation happens before any record is produced: a header
//! missing any required column fails the whole file with a
//! [`StevedoreError::Schema`] naming every missing column, and no sink
//! call is ever made for it.

use crate::core::source::encoding::decode;
use crate::domain::{Batch, Record, Result, StevedoreError};
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Tokens that mean "absent" rather than an empty text value
const ABSENT_TOKENS: &[&str] = &["", "NaN", "nan", "NULL"];

/// Parse a staged file into a batch
///
/// All values are kept as raw text; absent markers become `None`. Row
/// order is preserved exactly, short rows are padded with absent values,
/// and extra unnamed trailing fields are dropped.
///
/// # Errors
///
/// - [`StevedoreError::LocalIo`] if the file cannot be read
/// - [`StevedoreError::Schema`] if any required column is missing
/// - [`StevedoreError::Source`] if the content is not parseable as
///   delimited text
pub fn parse(path: &Path, delimiter: u8, required_columns: &[&str]) -> Result<Batch> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| StevedoreError::LocalIo("staged path has no file name".to_string()))?;

    let bytes = fs::read(path)?;
    let (text, encoding) = decode(&bytes);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| StevedoreError::Source(format!("failed to read header row: {e}")))?
        .clone();

    let columns: Arc<[String]> = headers
        .iter()
        .map(str::to_string)
        .collect::<Vec<_>>()
        .into();

    let missing: Vec<&str> = required_columns
        .iter()
        .filter(|required| !columns.iter().any(|c| c == *required))
        .copied()
        .collect();
    if !missing.is_empty() {
        return Err(StevedoreError::missing_columns(missing));
    }

    let mut records = Vec::new();
    for (row_index, row) in reader.records().enumerate() {
        let row = row.map_err(|e| {
            StevedoreError::Source(format!("failed to parse data row {}: {e}", row_index + 1))
        })?;

        let mut values = Vec::with_capacity(columns.len());
        for field_index in 0..columns.len() {
            let token = row.get(field_index).unwrap_or("");
            values.push(if ABSENT_TOKENS.contains(&token) {
                None
            } else {
                Some(token.to_string())
            });
        }
        records.push(Record::new(columns.clone(), values));
    }

    tracing::debug!(
        file = %file_name,
        encoding = encoding.name(),
        columns = columns.len(),
        records = records.len(),
        "Parsed staged file"
    );

    Ok(Batch::new(file_name, encoding, delimiter, columns, records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn staged_file(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_parse_preserves_row_order() {
        let file = staged_file(b"ID;AMOUNT\n1;100\n2;200\n3;300\n");
        let batch = parse(file.path(), b';', &["ID", "AMOUNT"]).unwrap();

        assert_eq!(batch.len(), 3);
        let ids: Vec<Option<&str>> = batch.records().iter().map(|r| r.get("ID")).collect();
        assert_eq!(ids, vec![Some("1"), Some("2"), Some("3")]);
    }

    #[test]
    fn test_parse_missing_columns_names_them_all() {
        let file = staged_file(b"ID\n1\n");
        let err = parse(file.path(), b';', &["ID", "AMOUNT", "CURRENCY"]).unwrap_err();

        match err {
            StevedoreError::Schema { missing } => {
                assert_eq!(missing, vec!["AMOUNT".to_string(), "CURRENCY".to_string()]);
            }
            other => panic!("expected schema error, got {other}"),
        }
    }

    #[test]
    fn test_parse_absent_tokens_map_to_none() {
        let file = staged_file(b"ID;AMOUNT;NOTE\n1;;NaN\n2;NULL;ok\n");
        let batch = parse(file.path(), b';', &["ID"]).unwrap();

        assert_eq!(batch.records()[0].get("AMOUNT"), None);
        assert_eq!(batch.records()[0].get("NOTE"), None);
        assert_eq!(batch.records()[1].get("AMOUNT"), None);
        assert_eq!(batch.records()[1].get("NOTE"), Some("ok"));
    }

    #[test]
    fn test_parse_values_stay_raw_text() {
        let file = staged_file(b"ID;AMOUNT\n007;0100.50\n");
        let batch = parse(file.path(), b';', &["ID", "AMOUNT"]).unwrap();

        // No numeric coercion: leading zeros survive
        assert_eq!(batch.records()[0].get("ID"), Some("007"));
        assert_eq!(batch.records()[0].get("AMOUNT"), Some("0100.50"));
    }

    #[test]
    fn test_parse_short_rows_padded_with_absent() {
        let file = staged_file(b"ID;AMOUNT;NOTE\n1;100\n");
        let batch = parse(file.path(), b';', &["ID"]).unwrap();

        assert_eq!(batch.records()[0].get("AMOUNT"), Some("100"));
        assert_eq!(batch.records()[0].get("NOTE"), None);
    }

    #[test]
    fn test_parse_comma_delimiter() {
        let file = staged_file(b"RATE_DATE,MID_RATE\n2025-01-31,1.0842\n");
        let batch = parse(file.path(), b',', &["RATE_DATE", "MID_RATE"]).unwrap();

        assert_eq!(batch.delimiter(), b',');
        assert_eq!(batch.records()[0].get("MID_RATE"), Some("1.0842"));
    }

    #[test]
    fn test_parse_quoted_fields() {
        let file = staged_file(b"ID;COMMENT\n1;\"adjusted; see note\"\n");
        let batch = parse(file.path(), b';', &["ID", "COMMENT"]).unwrap();

        assert_eq!(
            batch.records()[0].get("COMMENT"),
            Some("adjusted; see note")
        );
    }

    #[test]
    fn test_parse_windows_1252_content() {
        let file = staged_file(&[
            b'I', b'D', b';', b'N', b'A', b'M', b'E', b'\n', b'1', b';', b'Z', 0xE9, b'R', b'O',
            b'\n',
        ]);
        let batch = parse(file.path(), b';', &["ID", "NAME"]).unwrap();

        assert_eq!(batch.encoding().name(), "windows-1252");
        assert_eq!(batch.records()[0].get("NAME"), Some("ZéRO"));
    }

    #[test]
    fn test_parse_empty_file_has_no_records() {
        let file = staged_file(b"ID;AMOUNT\n");
        let batch = parse(file.path(), b';', &["ID", "AMOUNT"]).unwrap();
        assert!(batch.is_empty());
    }
}
