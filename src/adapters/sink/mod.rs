//! Record sink trait and factory

pub mod factory;
pub mod traits;

pub use factory::create_sink;
pub use traits::{FeedProfile, RecordSink};
