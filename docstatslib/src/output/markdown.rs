//! Markdown report formatting.
//!
//! A report is a header table with the file counts, followed by one
//! sub-table per partition ("Untranslated" first, then "Translated").
//! This module only formats strings; it never touches the filesystem.

use crate::data::stats::FileStat;

/// Text emitted instead of a table when a partition is empty.
pub const EMPTY_PARTITION: &str = "There's no files here.";

/// Column header of a partition table.
pub const TABLE_HEADER: &str = "| Idx | File | Lines | Words | Characters | isTranslated |";

/// Separator line under [`TABLE_HEADER`].
pub const TABLE_SEPARATOR: &str = "| --- | ---- | ----- | ----- | ---------- | ------------ |";

/// A list of documents split by translation status, input order preserved.
#[derive(Debug, Clone, Default)]
pub struct Partition<'a> {
    pub untranslated: Vec<&'a FileStat>,
    pub translated: Vec<&'a FileStat>,
}

impl<'a> Partition<'a> {
    /// Split `files` by their translated flag.
    pub fn split(files: &'a [FileStat]) -> Self {
        let (translated, untranslated) = files.iter().partition(|f| f.is_translated);
        Self {
            untranslated,
            translated,
        }
    }

    /// Total number of documents in both halves.
    pub fn total(&self) -> usize {
        self.untranslated.len() + self.translated.len()
    }
}

/// Format the full report for `label`.
pub fn format_report(label: &str, files: &[FileStat]) -> String {
    let partition = Partition::split(files);

    [
        format!("# {label}"),
        format!("| Total Files | {} |", files.len()),
        "| ----------- | -------------- |".to_string(),
        format!("| Untranslated Files | {} |", partition.untranslated.len()),
        format!("| Translated Files | {} |", partition.translated.len()),
        String::new(),
        "## Untranslated:".to_string(),
        format_table(&partition.untranslated),
        String::new(),
        "## Translated:".to_string(),
        format_table(&partition.translated),
    ]
    .join("\n")
}

/// Format one partition as a table sorted by ascending line count.
///
/// The sort is stable, so documents with equal line counts keep their
/// visiting order.
pub fn format_table(files: &[&FileStat]) -> String {
    if files.is_empty() {
        return EMPTY_PARTITION.to_string();
    }

    let mut sorted = files.to_vec();
    sorted.sort_by_key(|f| f.lines);

    let rows: Vec<String> = sorted
        .iter()
        .enumerate()
        .map(|(idx, file)| format_row(idx + 1, file))
        .collect();

    format!("{TABLE_HEADER}\n{TABLE_SEPARATOR}\n{}\n", rows.join("\n"))
}

fn format_row(index: usize, file: &FileStat) -> String {
    let mark = if file.is_translated { "[x]" } else { "[ ]" };
    format!(
        "| {} | {} | {} | {} | {} | {} |",
        index, file.name, file.lines, file.words, file.characters, mark
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(name: &str, lines: u64, is_translated: bool) -> FileStat {
        FileStat {
            name: name.to_string(),
            is_translated,
            lines,
            words: 10,
            characters: 100,
        }
    }

    /// Line counts of the data rows of a rendered table.
    fn row_lines(table: &str) -> Vec<u64> {
        table
            .lines()
            .skip(2)
            .map(|row| {
                let cells: Vec<&str> = row.split('|').map(str::trim).collect();
                cells[3].parse().unwrap()
            })
            .collect()
    }

    #[test]
    fn test_partition_preserves_order() {
        let files = vec![
            stat("a", 1, false),
            stat("b", 1, true),
            stat("c", 1, false),
        ];
        let partition = Partition::split(&files);

        let untranslated: Vec<&str> = partition
            .untranslated
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(untranslated, vec!["a", "c"]);
        assert_eq!(partition.translated[0].name, "b");
        assert_eq!(partition.total(), 3);
    }

    #[test]
    fn test_empty_table_placeholder() {
        assert_eq!(format_table(&[]), "There's no files here.");
    }

    #[test]
    fn test_table_layout() {
        let file = FileStat {
            name: "a.txt".to_string(),
            is_translated: false,
            lines: 1,
            words: 2,
            characters: 7,
        };
        let table = format_table(&[&file]);

        assert_eq!(
            table,
            "| Idx | File | Lines | Words | Characters | isTranslated |\n\
             | --- | ---- | ----- | ----- | ---------- | ------------ |\n\
             | 1 | a.txt | 1 | 2 | 7 | [ ] |\n"
        );
    }

    #[test]
    fn test_table_sorted_by_lines() {
        let files = [
            stat("long", 30, true),
            stat("short", 2, true),
            stat("mid", 10, true),
            stat("tie", 10, true),
        ];
        let refs: Vec<&FileStat> = files.iter().collect();
        let table = format_table(&refs);

        let lines = row_lines(&table);
        assert!(lines.windows(2).all(|w| w[0] <= w[1]));
        assert!(table.contains("| 1 | short | 2 |"));
        // Stable: mid stays before tie
        assert!(table.contains("| 2 | mid | 10 |"));
        assert!(table.contains("| 3 | tie | 10 |"));
        assert!(table.contains("| 4 | long | 30 | 10 | 100 | [x] |"));
    }

    #[test]
    fn test_report_layout() {
        let files = vec![stat("a.md", 3, false), stat("b.md", 1, true)];
        let report = format_report("learn", &files);

        let expected = "# learn\n\
            | Total Files | 2 |\n\
            | ----------- | -------------- |\n\
            | Untranslated Files | 1 |\n\
            | Translated Files | 1 |\n\
            \n\
            ## Untranslated:\n\
            | Idx | File | Lines | Words | Characters | isTranslated |\n\
            | --- | ---- | ----- | ----- | ---------- | ------------ |\n\
            | 1 | a.md | 3 | 10 | 100 | [ ] |\n\
            \n\
            \n\
            ## Translated:\n\
            | Idx | File | Lines | Words | Characters | isTranslated |\n\
            | --- | ---- | ----- | ----- | ---------- | ------------ |\n\
            | 1 | b.md | 1 | 10 | 100 | [x] |\n";
        assert_eq!(report, expected);
    }

    #[test]
    fn test_report_with_empty_translated_section() {
        let files = vec![stat("a.md", 3, false), stat("b.md", 1, false)];
        let report = format_report("reference", &files);

        assert!(report.contains("| Untranslated Files | 2 |"));
        assert!(report.contains("| Translated Files | 0 |"));
        assert!(report.ends_with("## Translated:\nThere's no files here."));
    }
}
