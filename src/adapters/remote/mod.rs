//! Remote import service sink adapter

pub mod models;
pub mod sink;

pub use sink::{RemoteSink, RATE_COLUMNS, TRANSPORT_FAILURE_REASON};
