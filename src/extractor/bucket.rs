use crate::error::{DaySortError, Result};
use crate::extractor::file_copier::FileCopier;
use crate::scanner::FileEntry;
use log::debug;
use std::ffi::OsStr;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const UNKNOWN_BUCKET: &str = "unknown";

/// Destination subdirectory name derived from a file name's extension.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExtensionBucket(String);

impl ExtensionBucket {
    /// Lower-cased text after the last dot, or `unknown` when that is empty.
    /// Dot-files count as extensions: `.bashrc` lands in `bashrc`.
    pub fn for_file_name(name: &OsStr) -> Self {
        let name = name.to_string_lossy();
        let extension = name.rfind('.').map(|dot| &name[dot + 1..]).unwrap_or("");

        if extension.is_empty() {
            Self(UNKNOWN_BUCKET.to_string())
        } else {
            Self(extension.to_lowercase())
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExtensionBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where one matching file goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub bucket: ExtensionBucket,
    pub destination: PathBuf,
}

/// Owns the target root and copies files into their extension buckets under it.
pub struct BucketWriter {
    target_root: PathBuf,
    copier: FileCopier,
}

impl BucketWriter {
    pub fn new<P: Into<PathBuf>>(target_root: P) -> Self {
        Self {
            target_root: target_root.into(),
            copier: FileCopier::new(),
        }
    }

    pub fn target_root(&self) -> &Path {
        &self.target_root
    }

    /// Creates the target root and any missing ancestors.
    pub fn initialize(&self) -> Result<()> {
        if self.target_root.as_os_str().is_empty() {
            return Err(DaySortError::CreateTargetRoot {
                path: self.target_root.clone(),
                source: io::Error::new(io::ErrorKind::InvalidInput, "targetDir is empty"),
            });
        }

        fs::create_dir_all(&self.target_root).map_err(|e| DaySortError::CreateTargetRoot {
            path: self.target_root.clone(),
            source: e,
        })
    }

    pub fn placement_for(&self, entry: &FileEntry) -> Placement {
        let bucket = ExtensionBucket::for_file_name(&entry.file_name);
        let destination = self
            .target_root
            .join(bucket.as_str())
            .join(&entry.file_name);

        Placement {
            bucket,
            destination,
        }
    }

    pub fn ensure_bucket(&self, bucket: &ExtensionBucket) -> Result<PathBuf> {
        let dir = self.target_root.join(bucket.as_str());
        fs::create_dir_all(&dir).map_err(|e| DaySortError::CreateBucket {
            path: dir.clone(),
            source: e,
        })?;
        Ok(dir)
    }

    /// Copies `entry` to its placement, creating the bucket on demand. Returns bytes copied.
    pub fn place(&self, entry: &FileEntry, placement: &Placement) -> Result<u64> {
        let dir = self.ensure_bucket(&placement.bucket)?;
        debug!("bucket ready: {}", dir.display());

        self.copier.copy(&entry.path, &placement.destination)
    }
}
