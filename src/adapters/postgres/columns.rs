//! Staging table column orders
//!
//! The financial feed carries two distinct column orders for the same set
//! of sixteen columns: the order records appear in the staged file, and
//! the order the insert statement binds them in. Both are fixed by the
//! downstream table definition; neither may be derived from the other.

/// Column order as it appears in the staged file header
pub const DISPLAY_COLUMNS: &[&str] = &[
    "PID",
    "STATUS",
    "IMPORT_TS",
    "BATCH_NAME",
    "CREATION_TS",
    "RECORD_TYPE",
    "RECORD_UNIQUE_ID",
    "ACCOUNT",
    "COMPANY",
    "CURRENCY",
    "AMOUNT",
    "BOOKING_YEAR",
    "BOOKING_PERIOD",
    "COUNTRY",
    "CLASS",
    "COMMENT",
];

/// Column order the insert statement binds parameters in
pub const INSERT_COLUMNS: &[&str] = &[
    "IMPORT_TS",
    "CREATION_TS",
    "AMOUNT",
    "BOOKING_YEAR",
    "BOOKING_PERIOD",
    "PID",
    "STATUS",
    "BATCH_NAME",
    "RECORD_TYPE",
    "RECORD_UNIQUE_ID",
    "ACCOUNT",
    "COMPANY",
    "CURRENCY",
    "COUNTRY",
    "CLASS",
    "COMMENT",
];
