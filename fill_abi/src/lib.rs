//! # Fill ABI
//!
//! This crate relays directory entries to FUSE's native directory-fill
//! callback (`fuse_fill_dir_t`).
//!
//! ## Philosophy
//!
//! - **Forward, never interpret**: the verdict of the callback is returned exactly as produced
//! - **Borrow, never own**: the listing buffer belongs to whoever started the enumeration
//! - **No hidden work**: no allocation, no validation, no retained state
//!
//! ## Key Types
//!
//! - [`DirectoryFiller`]: the single-method fill capability
//! - [`RawFiller`]: a `DirectoryFiller` backed by a native callback
//! - [`FillerBuffer`]: opaque handle to the in-progress listing
//! - [`EntryMetadata`]: Rust-side entry attributes, convertible to `libc::stat`
//!
//! The native entry point [`export::call_filler_function`] is exported
//! unmangled so C code linking the `cdylib`/`staticlib` can call it.

pub mod export;
pub mod filler;
pub mod metadata;
pub mod raw;

pub use export::call_filler_function;
pub use filler::{forward_entry, DirectoryFiller, RawFiller};
pub use metadata::{EntryKind, EntryMetadata};
pub use raw::{FillerBuffer, FuseFillDir, FILL_BUFFER_FULL, FILL_CONTINUE};
