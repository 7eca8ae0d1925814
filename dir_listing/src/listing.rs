//! Ordered directory listings and resumable filling

use crate::entry::{is_dot_entry, is_valid_name, DirectoryEntry, ListingError};
use fill_abi::{forward_entry, DirectoryFiller, EntryMetadata, FillerBuffer, FILL_CONTINUE};
use libc::off_t;
use std::ffi::CString;

/// Result of one fill pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillOutcome {
    /// Every remaining entry was accepted
    Complete { emitted: usize },
    /// The filler refused an entry; a later call at `resume_offset` retries it
    BufferFull { emitted: usize, resume_offset: off_t },
}

impl FillOutcome {
    /// Number of entries the filler accepted
    pub fn emitted(&self) -> usize {
        match *self {
            FillOutcome::Complete { emitted } => emitted,
            FillOutcome::BufferFull { emitted, .. } => emitted,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, FillOutcome::Complete { .. })
    }
}

/// An ordered directory listing
///
/// Entries keep insertion order, which is the order `readdir` reports them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryListing {
    entries: Vec<DirectoryEntry>,
}

impl DirectoryListing {
    /// Creates a new empty listing
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry and returns its `next_offset`
    ///
    /// `.` and `..` are accepted alongside names passing [`is_valid_name`].
    pub fn push(
        &mut self,
        name: &str,
        metadata: Option<EntryMetadata>,
    ) -> Result<off_t, ListingError> {
        if !is_dot_entry(name) && !is_valid_name(name) {
            return Err(ListingError::InvalidName(name.to_string()));
        }
        if self.get(name).is_some() {
            return Err(ListingError::DuplicateEntry(name.to_string()));
        }

        let c_name =
            CString::new(name).map_err(|_| ListingError::InvalidName(name.to_string()))?;
        let next_offset = (self.entries.len() + 1) as off_t;
        self.entries
            .push(DirectoryEntry::new(c_name, metadata, next_offset));
        Ok(next_offset)
    }

    /// Appends `.` and `..`
    pub fn push_dot_entries(
        &mut self,
        this: Option<EntryMetadata>,
        parent: Option<EntryMetadata>,
    ) -> Result<(), ListingError> {
        self.push(".", this)?;
        self.push("..", parent)?;
        Ok(())
    }

    /// Gets an entry by name
    pub fn get(&self, name: &str) -> Option<&DirectoryEntry> {
        self.entries
            .iter()
            .find(|entry| entry.name.as_bytes() == name.as_bytes())
    }

    /// All entries, in listing order
    pub fn entries(&self) -> &[DirectoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Hands entries to `filler`, starting after the first `offset` entries
    ///
    /// Negative offsets start from the beginning; offsets past the end fill
    /// nothing. Stops at the first verdict other than `FILL_CONTINUE`.
    pub fn fill<F: DirectoryFiller + ?Sized>(
        &self,
        filler: &mut F,
        buffer: FillerBuffer,
        offset: off_t,
    ) -> FillOutcome {
        let start = usize::try_from(offset)
            .unwrap_or(0)
            .min(self.entries.len());
        let mut emitted = 0;

        for entry in &self.entries[start..] {
            let stat = entry.metadata.as_ref().map(EntryMetadata::to_stat);
            let verdict = forward_entry(
                filler,
                buffer,
                &entry.name,
                stat.as_ref(),
                entry.next_offset,
            );
            if verdict != FILL_CONTINUE {
                let resume_offset = entry.next_offset - 1;
                log::trace!(
                    "filler stopped at {:?} (verdict {}), resume at {}",
                    entry.display_name(),
                    verdict,
                    resume_offset
                );
                return FillOutcome::BufferFull {
                    emitted,
                    resume_offset,
                };
            }
            emitted += 1;
        }

        FillOutcome::Complete { emitted }
    }
}
