//! Wire models for the remote import service

use serde::{Deserialize, Serialize};

/// Request body for one import submission
///
/// The service takes the record as a single delimited line, fields in the
/// rate feed column order, absent values as empty fields.
#[derive(Debug, Serialize)]
pub struct ImportRequest {
    pub record: String,
}

/// Error body the import service returns for a rejected record
#[derive(Debug, Deserialize)]
pub struct ImportFault {
    #[serde(default)]
    pub explanation: String,
}
