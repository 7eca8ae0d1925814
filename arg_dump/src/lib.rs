//! # Argument Dump
//!
//! Diagnostic helper that prints an invocation's arguments: a count line,
//! then one argument per line. Useful for checking what a mount helper
//! actually received.
//!
//! The argument list is always passed in explicitly; nothing here reads
//! process-global state.

use libc::{c_char, c_int};
use std::ffi::CStr;
use std::io::{self, Write};

/// Writes `"{n} arguments"` followed by each argument on its own line.
///
/// # Examples
///
/// ```
/// let mut out = Vec::new();
/// arg_dump::dump_arguments(&mut out, &["prog", "-x", "/mnt"]).unwrap();
/// assert_eq!(out, b"3 arguments\nprog\n-x\n/mnt\n");
/// ```
pub fn dump_arguments<W, S>(out: &mut W, args: &[S]) -> io::Result<()>
where
    W: Write,
    S: AsRef<str>,
{
    writeln!(out, "{} arguments", args.len())?;
    for arg in args {
        writeln!(out, "{}", arg.as_ref())?;
    }
    out.flush()
}

/// Writes a C `argc`/`argv` pair to `out` in the [`dump_arguments`] format.
///
/// Arguments that are not valid UTF-8 are decoded lossily. A negative
/// `argc` is treated as zero.
///
/// # Safety
///
/// `argv` must point to at least `argc` valid, NUL-terminated strings.
pub unsafe fn dump_raw_arguments<W: Write>(
    out: &mut W,
    argc: c_int,
    argv: *const *const c_char,
) -> io::Result<()> {
    let count = usize::try_from(argc).unwrap_or(0);
    let args: Vec<_> = (0..count)
        // SAFETY: the caller guarantees `argc` readable, NUL-terminated entries.
        .map(|i| unsafe { CStr::from_ptr(*argv.add(i)) }.to_string_lossy())
        .collect();
    dump_arguments(out, &args)
}

/// Native entry point: dumps `argc`/`argv` to standard output.
///
/// # Safety
///
/// Same contract as [`dump_raw_arguments`].
#[no_mangle]
pub unsafe extern "C" fn dump_argc_argv(argc: c_int, argv: *const *const c_char) {
    let stdout = io::stdout();
    // SAFETY: forwarded from the caller.
    if let Err(err) = unsafe { dump_raw_arguments(&mut stdout.lock(), argc, argv) } {
        log::warn!("failed to write arguments: {}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;
    use std::ptr;

    #[test]
    fn test_dump_three_arguments() {
        let mut out = Vec::new();
        dump_arguments(&mut out, &["prog", "-x", "/mnt"]).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "3 arguments\nprog\n-x\n/mnt\n");
    }

    #[test]
    fn test_dump_no_arguments() {
        let mut out = Vec::new();
        let args: [&str; 0] = [];
        dump_arguments(&mut out, &args).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "0 arguments\n");
    }

    #[test]
    fn test_dump_owned_strings() {
        let mut out = Vec::new();
        let args = vec!["hello_fs".to_string(), "/tmp/mnt".to_string()];
        dump_arguments(&mut out, &args).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "2 arguments\nhello_fs\n/tmp/mnt\n"
        );
    }

    #[test]
    fn test_dump_write_failure_propagates() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let err = dump_arguments(&mut Broken, &["prog"]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn test_raw_arguments_decoded_lossily() {
        let owned = [
            CString::new("prog").unwrap(),
            CString::new(&b"a\xffb"[..]).unwrap(),
        ];
        let argv: Vec<*const c_char> = owned.iter().map(|s| s.as_ptr()).collect();
        let mut out = Vec::new();

        unsafe { dump_raw_arguments(&mut out, argv.len() as c_int, argv.as_ptr()) }.unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "2 arguments\nprog\na\u{FFFD}b\n"
        );
    }

    #[test]
    fn test_raw_arguments_negative_argc() {
        let mut out = Vec::new();

        unsafe { dump_raw_arguments(&mut out, -1, ptr::null()) }.unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "0 arguments\n");
    }

    #[test]
    fn test_native_entry_accepts_argv() {
        let owned: Vec<CString> = ["prog", "-x"]
            .iter()
            .map(|s| CString::new(*s).unwrap())
            .collect();
        let argv: Vec<*const c_char> = owned.iter().map(|s| s.as_ptr()).collect();

        unsafe { dump_argc_argv(argv.len() as c_int, argv.as_ptr()) };
    }
}
