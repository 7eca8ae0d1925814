//! Fill capability and the forwarding trampoline
//!
//! A directory driver hands entries to a [`DirectoryFiller`]. In production
//! that is a [`RawFiller`] wrapping the callback FUSE passed to `readdir`;
//! in tests and tools it can be any Rust type.

use crate::raw::{FillerBuffer, FuseFillDir};
use libc::{c_int, off_t, stat};
use std::ffi::CStr;
use std::ptr;

/// Capability to append one entry to a directory listing
///
/// The returned verdict follows the framework's convention (`0` to continue,
/// non-zero when the buffer is full), but implementors decide it.
pub trait DirectoryFiller {
    fn fill(
        &mut self,
        buffer: FillerBuffer,
        name: &CStr,
        metadata: Option<&stat>,
        offset: off_t,
    ) -> c_int;
}

impl<F: DirectoryFiller + ?Sized> DirectoryFiller for &mut F {
    #[inline]
    fn fill(
        &mut self,
        buffer: FillerBuffer,
        name: &CStr,
        metadata: Option<&stat>,
        offset: off_t,
    ) -> c_int {
        (**self).fill(buffer, name, metadata, offset)
    }
}

/// Forwards one entry to `filler` and returns its verdict verbatim.
///
/// Arguments reach the filler in the order and form they were received.
/// Nothing is allocated, checked, or retained.
#[inline]
pub fn forward_entry<F: DirectoryFiller + ?Sized>(
    filler: &mut F,
    buffer: FillerBuffer,
    name: &CStr,
    metadata: Option<&stat>,
    offset: off_t,
) -> c_int {
    filler.fill(buffer, name, metadata, offset)
}

/// A [`DirectoryFiller`] backed by a native `fuse_fill_dir_t`
#[derive(Debug, Clone, Copy)]
pub struct RawFiller {
    callback: FuseFillDir,
}

impl RawFiller {
    /// Wraps a native fill callback
    ///
    /// # Safety
    ///
    /// `callback` must be a valid fill function for every buffer later passed
    /// to [`DirectoryFiller::fill`] on this value, and must not unwind.
    pub const unsafe fn new(callback: FuseFillDir) -> Self {
        Self { callback }
    }
}

impl DirectoryFiller for RawFiller {
    #[inline]
    fn fill(
        &mut self,
        buffer: FillerBuffer,
        name: &CStr,
        metadata: Option<&stat>,
        offset: off_t,
    ) -> c_int {
        let stbuf = metadata.map_or(ptr::null(), |st| st as *const stat);
        // SAFETY: `RawFiller::new` obliges the creator to supply a callback
        // valid for `buffer`; `name` and `stbuf` are borrowed for the call.
        unsafe { (self.callback)(buffer.as_ptr(), name.as_ptr(), stbuf, offset) }
    }
}
