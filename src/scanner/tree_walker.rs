use log::{debug, trace};
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use walkdir::{DirEntry, WalkDir};

/// One visited filesystem node. Only lives for a single walk step.
#[derive(Debug, Clone)]
pub struct FileEntry {
    pub path: PathBuf,
    pub file_name: OsString,
    pub is_dir: bool,
    pub modified: SystemTime,
}

impl FileEntry {
    pub fn new<P: Into<PathBuf>>(path: P, is_dir: bool, modified: SystemTime) -> Self {
        let path = path.into();
        let file_name = path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| path.as_os_str().to_os_string());

        Self {
            path,
            file_name,
            is_dir,
            modified,
        }
    }

    fn from_dir_entry(entry: &DirEntry) -> io::Result<Self> {
        // Symlinks are not followed, so this is the link's own metadata.
        let metadata = entry.metadata().map_err(io::Error::from)?;
        let modified = metadata.modified()?;

        Ok(Self {
            path: entry.path().to_path_buf(),
            file_name: entry.file_name().to_os_string(),
            is_dir: entry.file_type().is_dir(),
            modified,
        })
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WalkStatistics {
    pub entries_visited: usize,
    pub directories: usize,
    pub traversal_errors: usize,
}

/// Depth-first walk over everything under a root.
///
/// Entries that cannot be visited, the root included, are dropped from the iteration and
/// only counted. A missing root therefore yields an empty walk.
pub struct TreeWalker {
    entries: walkdir::IntoIter,
    stats: WalkStatistics,
}

impl TreeWalker {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            entries: WalkDir::new(root).follow_links(false).into_iter(),
            stats: WalkStatistics::default(),
        }
    }

    pub fn statistics(&self) -> &WalkStatistics {
        &self.stats
    }

    fn skip(&mut self, path: Option<&Path>, reason: &dyn std::fmt::Display) {
        self.stats.traversal_errors += 1;
        match path {
            Some(path) => debug!("skipping {}: {}", path.display(), reason),
            None => debug!("skipping unreadable entry: {}", reason),
        }
    }
}

impl Iterator for TreeWalker {
    type Item = FileEntry;

    fn next(&mut self) -> Option<FileEntry> {
        loop {
            let entry = match self.entries.next()? {
                Ok(entry) => entry,
                Err(err) => {
                    let path = err.path().map(Path::to_path_buf);
                    self.skip(path.as_deref(), &err);
                    continue;
                }
            };

            match FileEntry::from_dir_entry(&entry) {
                Ok(file_entry) => {
                    self.stats.entries_visited += 1;
                    if file_entry.is_dir {
                        self.stats.directories += 1;
                    }
                    trace!("visiting {}", file_entry.path.display());
                    return Some(file_entry);
                }
                Err(err) => self.skip(Some(entry.path()), &err),
            }
        }
    }
}
