//! Output: format reports as Markdown and persist them.
//!
//! - **markdown**: pure string formatting of a report and its tables
//! - **sink**: the `ReportSink` seam, with a directory-backed and an
//!   in-memory implementation

pub mod markdown;
pub mod sink;

pub use markdown::{format_report, format_table, Partition, EMPTY_PARTITION};
pub use sink::{report_file_name, DirSink, MemorySink, ReportSink};
