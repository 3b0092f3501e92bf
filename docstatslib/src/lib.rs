//! # docstatslib
//!
//! Per-directory size and translation statistics for trees of text
//! documents.
//!
//! ## Overview
//!
//! The library walks a documentation tree, measures every file, and writes
//! one Markdown report per directory plus a global `ALL_FILES` report. Each
//! report splits the documents into untranslated and translated ones, where
//! "translated" means the text contains at least one character of a target
//! script (Arabic by default).
//!
//! The pipeline has three stages:
//!
//! - **source**: list directories (sorted) and read documents
//! - **data**: compute a `FileStat` per document and walk the tree
//! - **output**: format reports and hand them to a `ReportSink`
//!
//! ## Counting rules
//!
//! Counts follow literal splitting so they stay comparable with existing
//! reports:
//!
//! - **Lines**: `1 + count('\n')`
//! - **Words**: `1 + count(' ')`, so a double space adds an empty word
//! - **Characters**: UTF-16 code units
//!
//! ## Example
//!
//! ```rust
//! use docstatslib::{generate_reports, RunOptions};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! let learn = dir.path().join("content/learn");
//! fs::create_dir_all(&learn).unwrap();
//! fs::write(learn.join("intro.md"), "Hello world").unwrap();
//! fs::write(learn.join("state.md"), "مرحبا").unwrap();
//!
//! let options = RunOptions::new()
//!     .base(dir.path().join("content"))
//!     .directories(["learn"])
//!     .output_dir(dir.path().join("stats"));
//! let summary = generate_reports(&options).unwrap();
//!
//! assert_eq!(summary.total_files(), 2);
//! assert_eq!(summary.translated(), 1);
//! assert!(dir.path().join("stats/learn.md").exists());
//! assert!(dir.path().join("stats/ALL_FILES.md").exists());
//! ```

pub mod data;
pub mod error;
pub mod options;
pub mod output;
pub mod source;

pub use data::{
    generate_reports, generate_reports_with, Accumulator, DirectoryReport, FileStat, RunSummary,
    Traversal, GLOBAL_REPORT,
};
pub use error::DocstatsError;
pub use options::{RunOptions, ScriptRange};
pub use output::{format_report, DirSink, MemorySink, ReportSink};

/// Result type for docstatslib operations
pub type Result<T> = std::result::Result<T, DocstatsError>;
