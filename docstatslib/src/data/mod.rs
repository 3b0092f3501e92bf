//! Data collection: analyze documents and walk the tree.
//!
//! This module handles the second stage of the pipeline. It provides:
//!
//! - **Statistics**: `FileStat` and the run-wide `Accumulator`
//! - **Traversal**: the recursive walk and the high-level
//!   `generate_reports` entry point
//!
//! ## Example
//!
//! ```rust
//! use docstatslib::data::FileStat;
//! use docstatslib::ScriptRange;
//!
//! let stat = FileStat::from_content("intro.md", "one\nمرحبا", &ScriptRange::ARABIC);
//! assert!(stat.is_translated);
//! assert_eq!(stat.lines, 2);
//! ```

pub mod stats;
pub mod traverse;

pub use stats::{count_characters, count_lines, count_words, Accumulator, FileStat};
pub use traverse::{
    child_output_name, generate_reports, generate_reports_with, DirectoryReport, RunSummary,
    Traversal, GLOBAL_REPORT,
};
