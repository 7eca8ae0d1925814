//! Directory entry types and name rules

use fill_abi::EntryMetadata;
use libc::off_t;
use std::ffi::CString;
use thiserror::Error;

/// Errors that can occur while building a listing
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ListingError {
    /// Name is empty or contains `/` or NUL
    #[error("Invalid entry name: {0:?}")]
    InvalidName(String),

    /// An entry with this name is already listed
    #[error("Duplicate entry: {0}")]
    DuplicateEntry(String),
}

/// A single entry in a listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Name as handed to the filler
    pub name: CString,
    /// Attributes, if known
    pub metadata: Option<EntryMetadata>,
    /// Offset a later `readdir` passes to resume after this entry
    pub next_offset: off_t,
}

impl DirectoryEntry {
    /// Creates a new directory entry
    pub fn new(name: CString, metadata: Option<EntryMetadata>, next_offset: off_t) -> Self {
        Self {
            name,
            metadata,
            next_offset,
        }
    }

    /// Name as UTF-8, lossily
    pub fn display_name(&self) -> String {
        self.name.to_string_lossy().into_owned()
    }
}

/// Returns true for `.` and `..`
pub fn is_dot_entry(name: &str) -> bool {
    name == "." || name == ".."
}

/// Returns true if `name` can name a regular entry
///
/// Dot entries are rejected here; a listing adds them explicitly.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && !is_dot_entry(name) && !name.contains('/') && !name.contains('\0')
}
