//! Native types shared with the filesystem framework.

use libc::{c_char, c_int, c_void, off_t, stat};
use std::ptr;

/// Native directory-fill callback, layout-compatible with `fuse_fill_dir_t`.
pub type FuseFillDir = unsafe extern "C" fn(
    buf: *mut c_void,
    name: *const c_char,
    stbuf: *const stat,
    off: off_t,
) -> c_int;

/// Framework convention: the entry was accepted, keep going.
pub const FILL_CONTINUE: c_int = 0;

/// Framework convention: the listing buffer is full, stop.
pub const FILL_BUFFER_FULL: c_int = 1;

/// Opaque handle to an in-progress directory listing
///
/// The pointee is owned by the caller of the enumeration. This type only
/// carries the address from one side of the boundary to the other and
/// never reads through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct FillerBuffer(*mut c_void);

impl FillerBuffer {
    /// Wraps a raw buffer pointer
    pub const fn from_raw(ptr: *mut c_void) -> Self {
        Self(ptr)
    }

    /// A handle with no buffer behind it
    pub const fn null() -> Self {
        Self(ptr::null_mut())
    }

    /// Returns the raw pointer, unchanged
    pub const fn as_ptr(self) -> *mut c_void {
        self.0
    }

    pub fn is_null(self) -> bool {
        self.0.is_null()
    }
}
