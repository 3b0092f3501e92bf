//! Directory listing and document reading.
//!
//! The walk itself is recursive and lives in the data stage; this module
//! only answers "what is directly inside this directory" and "what does this
//! file say".

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::DocstatsError;
use crate::Result;

/// Kind of a directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A directory to descend into
    Dir,
    /// Anything else; read as a document
    File,
}

/// A direct child of a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Base name of the entry
    pub name: String,
    /// Full path of the entry
    pub path: PathBuf,
    /// Whether to descend or read
    pub kind: EntryKind,
}

/// List the direct children of `dir`, sorted by file name.
///
/// Symlinks are not followed when deciding the kind, so a link is always
/// treated as a file.
pub fn read_entries(dir: impl AsRef<Path>) -> Result<Vec<Entry>> {
    let dir = dir.as_ref();

    if !dir.exists() {
        return Err(DocstatsError::PathNotFound(dir.to_path_buf()));
    }
    if !dir.is_dir() {
        return Err(DocstatsError::DirRead {
            path: dir.to_path_buf(),
            source: io::Error::new(io::ErrorKind::NotADirectory, "not a directory"),
        });
    }

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    let mut entries = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(dir).to_path_buf();
            let source = e
                .into_io_error()
                .unwrap_or_else(|| io::Error::other("filesystem loop"));
            DocstatsError::DirRead { path, source }
        })?;

        let kind = if entry.file_type().is_dir() {
            EntryKind::Dir
        } else {
            EntryKind::File
        };

        entries.push(Entry {
            name: entry.file_name().to_string_lossy().into_owned(),
            path: entry.into_path(),
            kind,
        });
    }

    Ok(entries)
}

/// Read a document as text, replacing invalid UTF-8 with U+FFFD.
pub fn read_text(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| DocstatsError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_entries_sorted_with_kinds() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("b.md"), "b").unwrap();
        fs::write(temp.path().join("a.md"), "a").unwrap();
        fs::create_dir_all(temp.path().join("c/inner")).unwrap();
        fs::write(temp.path().join("c/inner/deep.md"), "deep").unwrap();

        let entries = read_entries(temp.path()).unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();

        // Only direct children
        assert_eq!(names, vec!["a.md", "b.md", "c"]);
        assert_eq!(entries[0].kind, EntryKind::File);
        assert_eq!(entries[2].kind, EntryKind::Dir);
        assert_eq!(entries[2].path, temp.path().join("c"));
    }

    #[test]
    fn test_empty_directory() {
        let temp = tempdir().unwrap();
        assert!(read_entries(temp.path()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_directory() {
        let result = read_entries("/nonexistent/docstats/path");
        assert!(matches!(result, Err(DocstatsError::PathNotFound(_))));
    }

    #[test]
    fn test_file_is_not_a_directory() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("README.md");
        fs::write(&path, "readme").unwrap();

        let result = read_entries(&path);
        assert!(matches!(result, Err(DocstatsError::DirRead { .. })));
    }

    #[test]
    fn test_read_text_lossy() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("bad.txt");
        fs::write(&path, [b'o', b'k', 0xFF]).unwrap();

        assert_eq!(read_text(&path).unwrap(), "ok\u{FFFD}");
    }

    #[test]
    fn test_read_text_missing_file() {
        let temp = tempdir().unwrap();
        let result = read_text(temp.path().join("missing.md"));
        assert!(matches!(result, Err(DocstatsError::FileRead { .. })));
    }
}
