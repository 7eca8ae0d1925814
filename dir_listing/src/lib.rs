//! # Directory Listing
//!
//! This crate is the driver side of `readdir`: it decides which entries a
//! directory has, where a listing resumes, and when to stop. Entries are
//! handed to a [`fill_abi::DirectoryFiller`] one at a time.
//!
//! ## Design
//!
//! - A listing is an ordered list of entries; an entry's `next_offset` is its
//!   position plus one, so an offset is simply "how many entries to skip"
//! - Enumeration stops at the first non-zero verdict, and the outcome tells
//!   the caller where to resume
//! - Names are validated when entries are added, never while filling

pub mod collect;
pub mod entry;
pub mod listing;

pub use collect::{collect_entry, CollectingFiller, FilledEntry};
pub use entry::{is_dot_entry, is_valid_name, DirectoryEntry, ListingError};
pub use listing::{DirectoryListing, FillOutcome};
