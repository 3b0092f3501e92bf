//! Error types for docstatslib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while collecting statistics or writing reports
#[derive(Error, Debug)]
pub enum DocstatsError {
    /// Path does not exist
    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),

    /// Failed to list a directory
    #[error("failed to read directory '{path}': {source}")]
    DirRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to create the report output directory
    #[error("failed to create output directory '{path}': {source}")]
    CreateOutputDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write a report file
    #[error("failed to write report '{path}': {source}")]
    ReportWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Directory nesting went past the configured depth guard
    #[error("directory nesting exceeds {max_depth} levels at '{path}'")]
    DepthExceeded { path: PathBuf, max_depth: usize },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
