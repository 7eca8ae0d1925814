//! Unmangled entry points for native callers

use crate::raw::FuseFillDir;
use libc::{c_char, c_int, c_void, off_t, stat};

/// Calls `filler(buf, name, stbuf, off)` and returns its result.
///
/// This is the native face of [`crate::forward_entry`]: a managed caller
/// that cannot invoke a C function pointer directly calls this instead.
///
/// # Safety
///
/// `filler` must be a valid directory-fill callback for `buf`. `name` must
/// point to a NUL-terminated string that stays alive and unmodified for the
/// duration of the call. `stbuf` is either null or points to a valid `stat`.
/// None of this is checked.
#[no_mangle]
pub unsafe extern "C" fn call_filler_function(
    filler: FuseFillDir,
    buf: *mut c_void,
    name: *const c_char,
    stbuf: *const stat,
    off: off_t,
) -> c_int {
    // SAFETY: upheld by the caller, see above.
    unsafe { filler(buf, name, stbuf, off) }
}
