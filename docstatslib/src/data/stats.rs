//! Core data structures for document statistics

use serde::{Deserialize, Serialize};

use crate::options::ScriptRange;

/// Statistics for a single document.
///
/// The counts deliberately follow literal splitting rather than linguistic
/// rules so that reports stay comparable with previously generated ones:
///
/// - `lines` is the number of `'\n'`-separated segments (`1 + count('\n')`)
/// - `words` is the number of `' '`-separated segments (`1 + count(' ')`),
///   so a double space adds an empty word
/// - `characters` is the length in UTF-16 code units
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStat {
    /// Base name of the file
    pub name: String,
    /// Whether the content contains a character of the target script
    pub is_translated: bool,
    /// Newline-separated segments
    pub lines: u64,
    /// Space-separated segments
    pub words: u64,
    /// UTF-16 code units
    pub characters: u64,
}

impl FileStat {
    /// Analyze `content` and record the result under `name`.
    pub fn from_content(name: impl Into<String>, content: &str, script: &ScriptRange) -> Self {
        Self {
            name: name.into(),
            is_translated: script.matches(content),
            lines: count_lines(content),
            words: count_words(content),
            characters: count_characters(content),
        }
    }
}

/// Number of segments produced by splitting on `'\n'`.
pub fn count_lines(content: &str) -> u64 {
    content.split('\n').count() as u64
}

/// Number of segments produced by splitting on a single ASCII space.
pub fn count_words(content: &str) -> u64 {
    content.split(' ').count() as u64
}

/// Length of `content` in UTF-16 code units.
pub fn count_characters(content: &str) -> u64 {
    content.encode_utf16().count() as u64
}

/// Every document seen during a run, in visiting order.
///
/// The traversal appends to it; nothing else writes to it and nothing is
/// ever removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accumulator {
    files: Vec<FileStat>,
}

impl Accumulator {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a document.
    pub fn push(&mut self, stat: FileStat) {
        self.files.push(stat);
    }

    /// All recorded documents.
    pub fn files(&self) -> &[FileStat] {
        &self.files
    }

    /// Number of recorded documents.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Number of recorded documents flagged as translated.
    pub fn translated(&self) -> usize {
        self.files.iter().filter(|f| f.is_translated).count()
    }
}
