//! Report channels and run summary
//!
//! - [`sink`]: the [`ReportSink`] trait with file and in-memory implementations
//! - [`summary`]: per-run [`Summary`] statistics

pub mod sink;
pub mod summary;

pub use sink::{ChannelPaths, FileSink, MemorySink, ReportSink, RESERVED_TABLE_HEADER};
pub use summary::Summary;
