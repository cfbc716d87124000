//! PostgreSQL sink adapter

pub mod columns;
pub mod sink;

pub use columns::{DISPLAY_COLUMNS, INSERT_COLUMNS};
pub use sink::PostgresSink;
