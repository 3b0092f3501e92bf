//! High-level statistics API.
//!
//! This module walks the document tree, analyzes every file, writes one
//! report per directory that directly contains files, and finishes with the
//! global `ALL_FILES` report.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::data::stats::{Accumulator, FileStat};
use crate::error::DocstatsError;
use crate::options::{RunOptions, ScriptRange};
use crate::output::markdown::{format_report, Partition};
use crate::output::sink::{DirSink, ReportSink};
use crate::source::entries::{read_entries, read_text, EntryKind};
use crate::Result;

/// Label and output name of the report covering every document.
pub const GLOBAL_REPORT: &str = "ALL_FILES";

/// One written report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryReport {
    /// Report title (the directory name, or `ALL_FILES`)
    pub label: String,
    /// Underscore-joined chain of labels the file name derives from
    pub output_name: String,
    /// Documents directly inside the directory
    pub file_count: usize,
    /// Documents without any character of the target script
    pub untranslated: usize,
    /// Documents with at least one character of the target script
    pub translated: usize,
    /// Where the sink stored the report
    pub path: PathBuf,
}

/// Outcome of a whole run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Per-directory reports in write order
    pub reports: Vec<DirectoryReport>,
    /// The `ALL_FILES` report
    pub global: DirectoryReport,
}

impl RunSummary {
    /// Number of documents seen across the run.
    pub fn total_files(&self) -> usize {
        self.global.file_count
    }

    /// Number of translated documents across the run.
    pub fn translated(&self) -> usize {
        self.global.translated
    }

    /// Number of untranslated documents across the run.
    pub fn untranslated(&self) -> usize {
        self.global.untranslated
    }
}

/// Recursive walk state shared by every directory of a run.
pub struct Traversal<'a> {
    script: ScriptRange,
    max_depth: usize,
    accumulator: &'a mut Accumulator,
    sink: &'a mut dyn ReportSink,
    reports: Vec<DirectoryReport>,
}

impl<'a> Traversal<'a> {
    /// Create a traversal feeding `accumulator` and writing into `sink`.
    pub fn new(
        options: &RunOptions,
        accumulator: &'a mut Accumulator,
        sink: &'a mut dyn ReportSink,
    ) -> Self {
        Self {
            script: options.script,
            max_depth: options.max_depth,
            accumulator,
            sink,
            reports: Vec::new(),
        }
    }

    /// Walk `dir`, reporting it under `label` and `output_name`.
    ///
    /// An empty label marks the synthetic top level: its own files still
    /// reach the accumulator but get no report, and its subdirectories start
    /// fresh output names.
    pub fn walk(&mut self, dir: &Path, label: &str, output_name: &str) -> Result<()> {
        self.visit(dir, label, output_name, 0)
    }

    /// Reports written so far, in write order.
    pub fn into_reports(self) -> Vec<DirectoryReport> {
        self.reports
    }

    fn visit(&mut self, dir: &Path, label: &str, output_name: &str, depth: usize) -> Result<()> {
        if depth > self.max_depth {
            return Err(DocstatsError::DepthExceeded {
                path: dir.to_path_buf(),
                max_depth: self.max_depth,
            });
        }

        debug!(dir = %dir.display(), label, "entering directory");

        let mut files = Vec::new();

        for entry in read_entries(dir)? {
            match entry.kind {
                EntryKind::Dir => {
                    let child_output = child_output_name(label, output_name, &entry.name);
                    self.visit(&entry.path, &entry.name, &child_output, depth + 1)?;
                }
                EntryKind::File => {
                    let content = read_text(&entry.path)?;
                    let stat = FileStat::from_content(entry.name, &content, &self.script);
                    debug!(
                        file = %entry.path.display(),
                        lines = stat.lines,
                        words = stat.words,
                        translated = stat.is_translated,
                        "analyzed document"
                    );
                    self.accumulator.push(stat.clone());
                    files.push(stat);
                }
            }
        }

        if files.is_empty() || label.is_empty() {
            return Ok(());
        }

        let report = emit_report(self.sink, label, output_name, &files)?;
        self.reports.push(report);
        Ok(())
    }
}

/// Output name of a subdirectory: joined to the parent's with `_`, or just
/// its own name below the synthetic top level.
pub fn child_output_name(parent_label: &str, parent_output: &str, child: &str) -> String {
    if parent_label.is_empty() {
        child.to_string()
    } else {
        format!("{parent_output}_{child}")
    }
}

fn emit_report(
    sink: &mut dyn ReportSink,
    label: &str,
    output_name: &str,
    files: &[FileStat],
) -> Result<DirectoryReport> {
    let contents = format_report(label, files);
    let path = sink.write_report(output_name, &contents)?;
    info!("Done: {output_name}");

    let partition = Partition::split(files);
    Ok(DirectoryReport {
        label: label.to_string(),
        output_name: output_name.to_string(),
        file_count: partition.total(),
        untranslated: partition.untranslated.len(),
        translated: partition.translated.len(),
        path,
    })
}

/// Run the whole pipeline and write reports into `options.output_dir`.
///
/// # Example
///
/// ```rust,ignore
/// use docstatslib::{generate_reports, RunOptions};
///
/// // Scan src/content/learn and src/content/reference into ./stats
/// let summary = generate_reports(&RunOptions::new())?;
///
/// // Scan everything below ./docs
/// let summary = generate_reports(&RunOptions::new().base("docs").all_directories())?;
/// ```
pub fn generate_reports(options: &RunOptions) -> Result<RunSummary> {
    let mut sink = DirSink::new(&options.output_dir);
    generate_reports_with(options, &mut sink)
}

/// Run the whole pipeline, handing reports to `sink`.
///
/// Any error aborts the run; reports already handed to the sink stay
/// there.
pub fn generate_reports_with(
    options: &RunOptions,
    sink: &mut dyn ReportSink,
) -> Result<RunSummary> {
    let mut accumulator = Accumulator::new();

    let reports = {
        let mut traversal = Traversal::new(options, &mut accumulator, &mut *sink);
        if options.directories.is_empty() {
            traversal.walk(&options.base, "", GLOBAL_REPORT)?;
        } else {
            for dir in &options.directories {
                traversal.walk(&options.base.join(dir), dir, dir)?;
            }
        }
        traversal.into_reports()
    };

    let global = emit_report(sink, GLOBAL_REPORT, GLOBAL_REPORT, accumulator.files())?;

    Ok(RunSummary { reports, global })
}
