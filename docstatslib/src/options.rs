//! Input options for a statistics run.
//!
//! This module contains the configuration types that control where the
//! library looks for documents, how it classifies them, and where the
//! reports go.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default base path, relative to the working directory.
pub const DEFAULT_BASE: &str = "src/content";

/// Default report directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "stats";

/// Directories scanned when none are given.
pub const DEFAULT_DIRECTORIES: &[&str] = &["learn", "reference"];

/// Default depth guard for the recursive walk.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// An inclusive range of Unicode code points belonging to one script.
///
/// A document counts as translated into the script as soon as a single
/// character of the range appears anywhere in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptRange {
    /// First code point of the range
    pub start: char,
    /// Last code point of the range (inclusive)
    pub end: char,
}

impl ScriptRange {
    /// The Arabic block, `U+0600..=U+06FF`.
    pub const ARABIC: ScriptRange = ScriptRange {
        start: '\u{0600}',
        end: '\u{06FF}',
    };

    /// Create a range from its first and last code point.
    pub const fn new(start: char, end: char) -> Self {
        Self { start, end }
    }

    /// Whether `c` falls inside the range.
    pub fn contains(&self, c: char) -> bool {
        (self.start..=self.end).contains(&c)
    }

    /// Whether any character of `text` falls inside the range.
    pub fn matches(&self, text: &str) -> bool {
        text.chars().any(|c| self.contains(c))
    }
}

impl Default for ScriptRange {
    fn default() -> Self {
        Self::ARABIC
    }
}

/// Options for a statistics run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Root that the selected directories are resolved against
    pub base: PathBuf,
    /// Top-level directories to scan (empty = scan `base` as one tree)
    pub directories: Vec<String>,
    /// Where reports are written
    pub output_dir: PathBuf,
    /// Script that marks a document as translated
    pub script: ScriptRange,
    /// Maximum nesting below a scan root before the run aborts
    pub max_depth: usize,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            base: PathBuf::from(DEFAULT_BASE),
            directories: DEFAULT_DIRECTORIES.iter().map(|d| d.to_string()).collect(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            script: ScriptRange::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl RunOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base path.
    pub fn base(mut self, base: impl AsRef<Path>) -> Self {
        self.base = base.as_ref().to_path_buf();
        self
    }

    /// Select the top-level directories to scan.
    pub fn directories<I, S>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.directories = dirs.into_iter().map(Into::into).collect();
        self
    }

    /// Scan the whole base path as a single tree.
    pub fn all_directories(mut self) -> Self {
        self.directories.clear();
        self
    }

    /// Set the report directory.
    pub fn output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.output_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Set the script used for translation detection.
    pub fn script(mut self, script: ScriptRange) -> Self {
        self.script = script;
        self
    }

    /// Set the depth guard.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }
}
