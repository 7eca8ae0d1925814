//! # Hello Filesystem
//!
//! A minimal read-only filesystem: a root directory holding a single file.
//! It is the smallest complete user of the directory listing driver and the
//! fill trampoline.
//!
//! ## Operations
//!
//! - `getattr(ino)`: attributes of the root or the file
//! - `lookup(parent, name)`: resolve the file by name
//! - `readdir(ino, offset, filler)`: list `.`, `..` and the file
//! - `open(ino, flags)`: read-only open of the file
//! - `read(ino, size, offset)`: file contents

pub mod config;
pub mod fs;

pub use config::{ConfigError, HelloConfig, HELLO_CONFIG_NAME};
pub use fs::{FsError, HelloFs, Ino, LookupReply, OpenReply, FILE_INO, ROOT_INO};
