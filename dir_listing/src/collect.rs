//! A filler that records what it is given
//!
//! [`CollectingFiller`] stands in for FUSE's reply buffer when a listing is
//! consumed in-process. It can be used directly as a Rust
//! [`DirectoryFiller`], or behind the native ABI via [`collect_entry`] with
//! the collector itself as the opaque buffer.

use fill_abi::{DirectoryFiller, EntryKind, FillerBuffer, FILL_BUFFER_FULL, FILL_CONTINUE};
use libc::{c_char, c_int, c_void, off_t, stat};
use std::ffi::CStr;

/// One entry as seen by a filler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilledEntry {
    pub name: String,
    /// Kind decoded from `st_mode`, when attributes were supplied
    pub kind: Option<EntryKind>,
    pub offset: off_t,
}

/// Records entries, optionally refusing once `capacity` is reached
#[derive(Debug, Clone, Default)]
pub struct CollectingFiller {
    entries: Vec<FilledEntry>,
    capacity: Option<usize>,
}

impl CollectingFiller {
    /// Creates a collector with no capacity limit
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a collector that reports "full" after `capacity` entries
    pub fn bounded(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity: Some(capacity),
        }
    }

    pub fn entries(&self) -> &[FilledEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<FilledEntry> {
        self.entries
    }

    pub fn is_full(&self) -> bool {
        self.capacity
            .is_some_and(|capacity| self.entries.len() >= capacity)
    }

    /// This collector as an opaque buffer for [`collect_entry`]
    ///
    /// The handle is only meaningful while `self` is alive and not
    /// otherwise borrowed.
    pub fn as_buffer(&mut self) -> FillerBuffer {
        FillerBuffer::from_raw(self as *mut CollectingFiller as *mut c_void)
    }
}

impl DirectoryFiller for CollectingFiller {
    fn fill(
        &mut self,
        _buffer: FillerBuffer,
        name: &CStr,
        metadata: Option<&stat>,
        offset: off_t,
    ) -> c_int {
        if self.is_full() {
            return FILL_BUFFER_FULL;
        }
        self.entries.push(FilledEntry {
            name: name.to_string_lossy().into_owned(),
            kind: metadata.and_then(|st| EntryKind::from_mode(st.st_mode)),
            offset,
        });
        FILL_CONTINUE
    }
}

/// Native fill callback whose buffer is a [`CollectingFiller`]
///
/// # Safety
///
/// `buf` must come from [`CollectingFiller::as_buffer`] on a collector that
/// is still alive and not borrowed elsewhere. `name` must be a valid
/// NUL-terminated string; `stbuf` is null or points to a valid `stat`.
pub unsafe extern "C" fn collect_entry(
    buf: *mut c_void,
    name: *const c_char,
    stbuf: *const stat,
    off: off_t,
) -> c_int {
    // SAFETY: upheld by the caller, see above.
    let collector = unsafe { &mut *(buf as *mut CollectingFiller) };
    let name = unsafe { CStr::from_ptr(name) };
    let metadata = unsafe { stbuf.as_ref() };
    collector.fill(FillerBuffer::from_raw(buf), name, metadata, off)
}
