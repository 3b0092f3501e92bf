//! Report destinations.
//!
//! The traversal hands every finished report to a [`ReportSink`]. The
//! production sink writes `<output-name>.md` files into a directory; the
//! in-memory sink keeps them for inspection.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::DocstatsError;
use crate::Result;

/// Somewhere finished reports go.
pub trait ReportSink {
    /// Store `contents` under `output_name` and return where it ended up.
    fn write_report(&mut self, output_name: &str, contents: &str) -> Result<PathBuf>;
}

/// File name for a report: the first `/` of the output name becomes `_`.
pub fn report_file_name(output_name: &str) -> String {
    format!("{}.md", output_name.replacen('/', "_", 1))
}

/// Writes reports as Markdown files into a directory.
///
/// The directory is created on demand before every write, so it may be
/// removed or never exist up front.
#[derive(Debug, Clone)]
pub struct DirSink {
    dir: PathBuf,
}

impl DirSink {
    /// Create a sink writing into `dir`.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }
}

impl ReportSink for DirSink {
    fn write_report(&mut self, output_name: &str, contents: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir).map_err(|source| DocstatsError::CreateOutputDir {
            path: self.dir.clone(),
            source,
        })?;

        let path = self.dir.join(report_file_name(output_name));
        fs::write(&path, contents).map_err(|source| DocstatsError::ReportWrite {
            path: path.clone(),
            source,
        })?;

        Ok(path)
    }
}

/// Keeps reports in memory, in write order.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    /// `(file name, contents)` pairs
    pub reports: Vec<(String, String)>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Contents of the report stored under `file_name`, if any.
    pub fn get(&self, file_name: &str) -> Option<&str> {
        self.reports
            .iter()
            .find(|(name, _)| name == file_name)
            .map(|(_, contents)| contents.as_str())
    }

    /// File names in write order.
    pub fn names(&self) -> Vec<&str> {
        self.reports.iter().map(|(name, _)| name.as_str()).collect()
    }
}

impl ReportSink for MemorySink {
    fn write_report(&mut self, output_name: &str, contents: &str) -> Result<PathBuf> {
        let file_name = report_file_name(output_name);
        self.reports.push((file_name.clone(), contents.to_string()));
        Ok(PathBuf::from(file_name))
    }
}
