//! The hello filesystem
//!
//! One read-only directory holding one read-only file. Operations mirror the
//! low-level FUSE callbacks they would back.

use crate::config::{ConfigError, HelloConfig};
use dir_listing::{DirectoryListing, FillOutcome, ListingError};
use fill_abi::{DirectoryFiller, EntryMetadata, FillerBuffer};
use libc::{c_int, off_t, EACCES, EINVAL, ENOENT, O_ACCMODE, O_RDONLY};
use thiserror::Error;

/// Inode number
pub type Ino = u64;

pub const ROOT_INO: Ino = 1;
pub const FILE_INO: Ino = 2;

/// Errors returned by filesystem operations
#[derive(Debug, Error)]
pub enum FsError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Listing error: {0}")]
    Listing(#[from] ListingError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

impl FsError {
    /// The errno FUSE should reply with
    pub fn errno(&self) -> c_int {
        match self {
            FsError::NotFound(_) => ENOENT,
            FsError::AccessDenied(_) => EACCES,
            FsError::InvalidArgument(_) | FsError::Listing(_) | FsError::Config(_) => EINVAL,
        }
    }
}

/// Reply to a successful lookup
#[derive(Debug, Clone, PartialEq)]
pub struct LookupReply {
    pub ino: Ino,
    pub generation: u64,
    pub metadata: EntryMetadata,
    pub attr_timeout: f64,
    pub entry_timeout: f64,
}

/// Reply to a successful open
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpenReply {
    pub fh: u64,
    pub direct_io: bool,
    pub keep_cache: bool,
}

/// The hello filesystem
#[derive(Debug, Clone)]
pub struct HelloFs {
    config: HelloConfig,
    root: DirectoryListing,
}

impl HelloFs {
    /// Builds the filesystem from a configuration
    pub fn new(config: HelloConfig) -> Result<Self, FsError> {
        config.validate()?;

        let root_meta = Self::root_metadata();
        let file_meta = Self::file_metadata_for(&config);

        let mut root = DirectoryListing::new();
        root.push_dot_entries(Some(root_meta), Some(root_meta))?;
        root.push(&config.file_name, Some(file_meta))?;

        Ok(Self { config, root })
    }

    pub fn config(&self) -> &HelloConfig {
        &self.config
    }

    fn root_metadata() -> EntryMetadata {
        EntryMetadata::directory(0o755).with_inode(ROOT_INO)
    }

    fn file_metadata_for(config: &HelloConfig) -> EntryMetadata {
        EntryMetadata::file(0o444, config.contents.len() as u64).with_inode(FILE_INO)
    }

    pub fn getattr(&self, ino: Ino) -> Result<EntryMetadata, FsError> {
        match ino {
            ROOT_INO => Ok(Self::root_metadata()),
            FILE_INO => Ok(Self::file_metadata_for(&self.config)),
            _ => Err(FsError::NotFound(format!("inode {}", ino))),
        }
    }

    pub fn lookup(&self, parent: Ino, name: &str) -> Result<LookupReply, FsError> {
        if parent != ROOT_INO || name != self.config.file_name {
            log::debug!("lookup miss: parent={} name={:?}", parent, name);
            return Err(FsError::NotFound(name.to_string()));
        }
        Ok(LookupReply {
            ino: FILE_INO,
            generation: 0,
            metadata: Self::file_metadata_for(&self.config),
            attr_timeout: self.config.attr_timeout_secs,
            entry_timeout: self.config.entry_timeout_secs,
        })
    }

    /// Lists the root directory into `filler`, resuming at `offset`
    pub fn readdir<F: DirectoryFiller + ?Sized>(
        &self,
        ino: Ino,
        offset: off_t,
        filler: &mut F,
        buffer: FillerBuffer,
    ) -> Result<FillOutcome, FsError> {
        if ino != ROOT_INO {
            return Err(FsError::NotFound(format!("directory inode {}", ino)));
        }
        let outcome = self.root.fill(filler, buffer, offset);
        log::debug!("readdir ino={} offset={} -> {:?}", ino, offset, outcome);
        Ok(outcome)
    }

    pub fn open(&self, ino: Ino, flags: c_int) -> Result<OpenReply, FsError> {
        if ino != FILE_INO {
            return Err(FsError::NotFound(format!("inode {}", ino)));
        }
        if flags & O_ACCMODE != O_RDONLY {
            return Err(FsError::AccessDenied(format!(
                "{} is read-only",
                self.config.file_name
            )));
        }
        Ok(OpenReply::default())
    }

    /// Reads up to `size` bytes at `offset`; empty at or past end of file
    pub fn read(&self, ino: Ino, size: usize, offset: off_t) -> Result<&[u8], FsError> {
        if ino != FILE_INO {
            return Err(FsError::NotFound(format!("inode {}", ino)));
        }
        let start = usize::try_from(offset)
            .map_err(|_| FsError::InvalidArgument(format!("negative offset {}", offset)))?;

        let data = self.config.contents.as_bytes();
        let start = start.min(data.len());
        let end = start.saturating_add(size).min(data.len());
        Ok(&data[start..end])
    }
}
