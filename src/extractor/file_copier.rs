use crate::error::{CopyStage, DaySortError, Result};
use std::fs;
use std::io::{self, BufReader, BufWriter};
use std::path::Path;

pub struct FileCopier {
    buffer_size: usize,
}

impl FileCopier {
    pub fn new() -> Self {
        Self {
            buffer_size: 64 * 1024, // 64KB buffer
        }
    }

    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size.max(4096); // Minimum 4KB buffer
        self
    }

    /// Byte-exact copy of `source` into `dest`, creating or truncating `dest`.
    ///
    /// The copy only succeeds once `dest` is flushed and synced. A failure partway
    /// through leaves whatever was written in `dest`.
    pub fn copy(&self, source: &Path, dest: &Path) -> Result<u64> {
        let fail = |stage: CopyStage, error: io::Error| DaySortError::Copy {
            from: source.to_path_buf(),
            to: dest.to_path_buf(),
            stage,
            source: error,
        };

        let source_file = fs::File::open(source).map_err(|e| fail(CopyStage::Open, e))?;

        if is_same_file(source, dest) {
            return Err(fail(
                CopyStage::SameFile,
                io::Error::new(io::ErrorKind::InvalidInput, "destination is the source file"),
            ));
        }

        let dest_file = fs::File::create(dest).map_err(|e| fail(CopyStage::Create, e))?;

        let mut reader = BufReader::with_capacity(self.buffer_size, source_file);
        let mut writer = BufWriter::with_capacity(self.buffer_size, dest_file);

        let total_bytes =
            io::copy(&mut reader, &mut writer).map_err(|e| fail(CopyStage::Transfer, e))?;

        // Buffered bytes and the data on disk both count as part of the copy.
        let dest_file = writer
            .into_inner()
            .map_err(|e| fail(CopyStage::Finalize, e.into_error()))?;
        dest_file
            .sync_all()
            .map_err(|e| fail(CopyStage::Finalize, e))?;

        Ok(total_bytes)
    }
}

impl Default for FileCopier {
    fn default() -> Self {
        Self::new()
    }
}

fn is_same_file(source: &Path, dest: &Path) -> bool {
    match (fs::canonicalize(source), fs::canonicalize(dest)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
