//! # docstats
//!
//! A CLI tool that writes Markdown translation-progress reports for a tree of
//! text documents.
//!
//! ## Overview
//!
//! docstats is built on top of docstatslib. It scans selected top-level
//! directories below a base path, writes one report per directory that
//! directly contains documents, and always finishes with a global
//! `ALL_FILES` report.
//!
//! ## Usage
//!
//! ```bash
//! # Scan src/content/learn and src/content/reference into ./stats
//! docstats
//!
//! # Scan other directories
//! docstats blog community
//!
//! # Scan the whole base path as one tree
//! docstats --all --base docs
//!
//! # Print the run summary as JSON
//! docstats --output json
//! ```
//!
//! Logs go to stderr; `RUST_LOG` overrides `-v` / `-q`.

use std::io::IsTerminal;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use console::Style;
use docstatslib::options::{DEFAULT_BASE, DEFAULT_OUTPUT_DIR};
use docstatslib::{generate_reports, RunOptions, RunSummary};
use tracing_subscriber::EnvFilter;

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("docstats")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Per-directory translation statistics for documentation trees")
        .arg(
            Arg::new("dirs")
                .action(ArgAction::Append)
                .num_args(1..)
                .help("Top-level directories to scan (defaults to learn and reference)"),
        )
        .arg(
            Arg::new("all")
                .long("all")
                .action(ArgAction::SetTrue)
                .conflicts_with("dirs")
                .help("Scan the whole base path as a single tree"),
        )
        .arg(
            Arg::new("base")
                .short('b')
                .long("base")
                .default_value(DEFAULT_BASE)
                .help("Base path the directories are resolved against"),
        )
        .arg(
            Arg::new("out")
                .short('o')
                .long("out")
                .default_value(DEFAULT_OUTPUT_DIR)
                .help("Directory the reports are written to"),
        )
        .arg(
            Arg::new("max-depth")
                .long("max-depth")
                .value_parser(clap::value_parser!(usize))
                .help("Abort when directories nest deeper than this [default: 64]"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .value_parser(["text", "json"])
                .default_value("text")
                .help("Format of the run summary printed to stdout"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Log every directory and document"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .conflicts_with("verbose")
                .help("Only log warnings and errors"),
        )
}

/// Set up the stderr logger
fn init_logging(matches: &ArgMatches) {
    let level = if matches.get_flag("verbose") {
        "debug"
    } else if matches.get_flag("quiet") {
        "warn"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();
}

/// Build run options from matches
fn build_options(matches: &ArgMatches) -> RunOptions {
    let mut options = RunOptions::new();

    if let Some(base) = matches.get_one::<String>("base") {
        options = options.base(base);
    }
    if let Some(out) = matches.get_one::<String>("out") {
        options = options.output_dir(out);
    }
    if let Some(depth) = matches.get_one::<usize>("max-depth") {
        options = options.max_depth(*depth);
    }

    if matches.get_flag("all") {
        options = options.all_directories();
    } else if let Some(dirs) = matches.get_many::<String>("dirs") {
        options = options.directories(dirs.cloned());
    }

    options
}

/// Render the summary as an aligned text table
fn render_text(summary: &RunSummary) -> String {
    let bold = Style::new().bold();
    let mut out = String::new();

    out.push_str(&format!(
        "{}\n",
        bold.apply_to(format!(
            "{:<40} {:>8} {:>12} {:>10}",
            "Report", "Files", "Untranslated", "Translated"
        ))
    ));
    for report in &summary.reports {
        out.push_str(&format!(
            "{:<40} {:>8} {:>12} {:>10}\n",
            display_path(&report.path),
            report.file_count,
            report.untranslated,
            report.translated
        ));
    }
    out.push_str(&format!(
        "{}\n",
        bold.apply_to(format!(
            "{:<40} {:>8} {:>12} {:>10}",
            display_path(&summary.global.path),
            summary.total_files(),
            summary.untranslated(),
            summary.translated()
        ))
    ));

    out
}

fn display_path(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let options = build_options(matches);

    let summary = generate_reports(&options).with_context(|| {
        format!(
            "failed to generate reports from '{}'",
            options.base.display()
        )
    })?;

    match matches.get_one::<String>("output").map(|s| s.as_str()) {
        Some("json") => println!("{}", serde_json::to_string_pretty(&summary)?),
        _ => print!("{}", render_text(&summary)),
    }

    Ok(())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    init_logging(&matches);

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docstatslib::DirectoryReport;
    use std::path::PathBuf;

    fn report(name: &str, files: usize, translated: usize) -> DirectoryReport {
        DirectoryReport {
            label: name.to_string(),
            output_name: name.to_string(),
            file_count: files,
            untranslated: files - translated,
            translated,
            path: PathBuf::from(format!("stats/{name}.md")),
        }
    }

    #[test]
    fn test_command_is_valid() {
        build_command().debug_assert();
    }

    #[test]
    fn test_default_options() {
        let matches = build_command().get_matches_from(["docstats"]);
        let options = build_options(&matches);

        assert_eq!(options.base, PathBuf::from("src/content"));
        assert_eq!(options.directories, vec!["learn", "reference"]);
        assert_eq!(options.output_dir, PathBuf::from("stats"));
        assert_eq!(options.max_depth, 64);
    }

    #[test]
    fn test_selected_directories() {
        let matches = build_command().get_matches_from([
            "docstats", "blog", "community", "-b", "docs", "-o", "out", "--max-depth", "5",
        ]);
        let options = build_options(&matches);

        assert_eq!(options.directories, vec!["blog", "community"]);
        assert_eq!(options.base, PathBuf::from("docs"));
        assert_eq!(options.output_dir, PathBuf::from("out"));
        assert_eq!(options.max_depth, 5);
    }

    #[test]
    fn test_all_flag_clears_directories() {
        let matches = build_command().get_matches_from(["docstats", "--all"]);
        assert!(build_options(&matches).directories.is_empty());

        let conflict = build_command().try_get_matches_from(["docstats", "--all", "learn"]);
        assert!(conflict.is_err());
    }

    #[test]
    fn test_render_text() {
        console::set_colors_enabled(false);
        let summary = RunSummary {
            reports: vec![report("learn", 3, 1), report("reference", 2, 0)],
            global: report("ALL_FILES", 5, 1),
        };
        let text = render_text(&summary);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Report"));
        assert!(lines[1].starts_with("stats/learn.md"));
        let cells: Vec<&str> = lines[1].split_whitespace().collect();
        assert_eq!(cells, vec!["stats/learn.md", "3", "2", "1"]);
        assert!(lines[3].starts_with("stats/ALL_FILES.md"));
    }
}
