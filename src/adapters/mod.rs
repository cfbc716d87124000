//! External system adapters
//!
//! Everything that talks to the outside world lives here, behind the
//! [`sink::RecordSink`] and [`store::ObjectStore`] traits. Core pipeline
//! code never names an SDK or driver type.

pub mod postgres;
pub mod remote;
pub mod sink;
pub mod store;
