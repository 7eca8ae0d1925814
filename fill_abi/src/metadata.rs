//! Entry attributes
//!
//! Drivers describe entries with [`EntryMetadata`] and convert to a
//! `libc::stat` only when handing the entry to a filler.

use libc::{mode_t, off_t, stat, S_IFDIR, S_IFLNK, S_IFMT, S_IFREG};
use std::mem;

/// Kind of a directory entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Directory,
    RegularFile,
    Symlink,
}

impl EntryKind {
    /// File-type bits for `st_mode`
    pub fn type_bits(self) -> mode_t {
        match self {
            EntryKind::Directory => S_IFDIR,
            EntryKind::RegularFile => S_IFREG,
            EntryKind::Symlink => S_IFLNK,
        }
    }

    /// Recovers the kind from a full `st_mode`
    ///
    /// Returns `None` for file types this crate does not model
    /// (devices, fifos, sockets).
    pub fn from_mode(mode: mode_t) -> Option<Self> {
        match mode & S_IFMT {
            S_IFDIR => Some(EntryKind::Directory),
            S_IFREG => Some(EntryKind::RegularFile),
            S_IFLNK => Some(EntryKind::Symlink),
            _ => None,
        }
    }
}

/// Attributes of one directory entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryMetadata {
    pub kind: EntryKind,
    /// Permission bits (`0o7777` mask)
    pub permissions: u16,
    pub size: u64,
    pub nlink: u32,
    pub inode: u64,
    /// Modification time, seconds since the epoch
    pub mtime: i64,
}

impl EntryMetadata {
    /// Creates metadata for a directory
    pub fn directory(permissions: u16) -> Self {
        Self {
            kind: EntryKind::Directory,
            permissions,
            size: 0,
            nlink: 2,
            inode: 0,
            mtime: 0,
        }
    }

    /// Creates metadata for a regular file of `size` bytes
    pub fn file(permissions: u16, size: u64) -> Self {
        Self {
            kind: EntryKind::RegularFile,
            permissions,
            size,
            nlink: 1,
            inode: 0,
            mtime: 0,
        }
    }

    pub fn with_inode(mut self, inode: u64) -> Self {
        self.inode = inode;
        self
    }

    pub fn with_mtime(mut self, mtime: i64) -> Self {
        self.mtime = mtime;
        self
    }

    /// Full `st_mode`: type bits plus permissions
    pub fn mode(&self) -> mode_t {
        self.kind.type_bits() | mode_t::from(self.permissions & 0o7777)
    }

    /// Builds a `stat` with every field this type does not model zeroed
    pub fn to_stat(&self) -> stat {
        // SAFETY: `stat` is plain old data and all-zero is a valid value.
        let mut st: stat = unsafe { mem::zeroed() };
        st.st_mode = self.mode();
        st.st_nlink = self.nlink as libc::nlink_t;
        st.st_size = self.size as off_t;
        st.st_ino = self.inode as libc::ino_t;
        st.st_mtime = self.mtime as libc::time_t;
        st
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_stat() {
        let st = EntryMetadata::directory(0o755).with_inode(1).to_stat();

        assert_eq!(st.st_mode & S_IFMT, S_IFDIR);
        assert_eq!(st.st_mode & 0o7777, 0o755);
        assert_eq!(st.st_nlink as u64, 2);
        assert_eq!(st.st_ino as u64, 1);
        assert_eq!(st.st_size, 0);
    }

    #[test]
    fn test_file_stat() {
        let st = EntryMetadata::file(0o444, 19)
            .with_inode(2)
            .with_mtime(1_700_000_000)
            .to_stat();

        assert_eq!(st.st_mode & S_IFMT, S_IFREG);
        assert_eq!(st.st_mode & 0o7777, 0o444);
        assert_eq!(st.st_nlink as u64, 1);
        assert_eq!(st.st_size, 19);
        assert_eq!(st.st_mtime as i64, 1_700_000_000);
    }

    #[test]
    fn test_permissions_are_masked() {
        let mut meta = EntryMetadata::file(0o644, 0);
        meta.permissions = 0o170644;

        assert_eq!(meta.mode() & S_IFMT, S_IFREG);
        assert_eq!(meta.mode() & 0o7777, 0o644);
    }

    #[test]
    fn test_kind_from_mode() {
        assert_eq!(EntryKind::from_mode(S_IFDIR | 0o755), Some(EntryKind::Directory));
        assert_eq!(EntryKind::from_mode(S_IFREG | 0o600), Some(EntryKind::RegularFile));
        assert_eq!(EntryKind::from_mode(S_IFLNK | 0o777), Some(EntryKind::Symlink));
        assert_eq!(EntryKind::from_mode(libc::S_IFIFO | 0o600), None);
    }
}
