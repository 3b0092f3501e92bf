//! Source discovery: list directories and read documents.
//!
//! This module handles the first stage of the pipeline. Directory entries
//! come back sorted by name so reports are deterministic.

pub mod entries;

pub use entries::{read_entries, read_text, Entry, EntryKind};
