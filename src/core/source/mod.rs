//! Record source: delimited files to ordered batches
//!
//! Encoding detection happens on the raw bytes first; parsing and schema
//! validation operate on the decoded text. A file either yields a full
//! [`Batch`](crate::domain::Batch) or fails before any sink call is made.

pub mod encoding;
pub mod parser;

pub use encoding::{decode, detect_encoding, encode};
pub use parser::parse;
