use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Stage of a single file copy that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyStage {
    Open,
    Create,
    Transfer,
    Finalize,
    SameFile,
}

impl fmt::Display for CopyStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CopyStage::Open => "cannot open source",
            CopyStage::Create => "cannot create destination",
            CopyStage::Transfer => "transfer failed",
            CopyStage::Finalize => "cannot finalize destination",
            CopyStage::SameFile => "source and destination are the same file",
        };
        f.write_str(label)
    }
}

#[derive(Error, Debug)]
pub enum DaySortError {
    #[error("Failed to read configuration {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Cannot create target directory {}: {source}", .path.display())]
    CreateTargetRoot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid date {value:?}: {reason}")]
    InvalidDate { value: String, reason: String },

    #[error("Cannot create directory {}: {source}", .path.display())]
    CreateBucket {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Copy {} => {} failed ({stage}): {source}", .from.display(), .to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        stage: CopyStage,
        #[source]
        source: std::io::Error,
    },

    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),
}

impl DaySortError {
    /// Setup errors that end the run; everything else only skips one file.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            DaySortError::ConfigRead { .. }
                | DaySortError::ConfigParse { .. }
                | DaySortError::CreateTargetRoot { .. }
                | DaySortError::InvalidDate { .. }
        )
    }
}

pub trait UserFriendlyError {
    fn user_message(&self) -> String;
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for DaySortError {
    fn user_message(&self) -> String {
        match self {
            DaySortError::ConfigRead { path, source } => {
                format!("Failed to read configuration {}: {}", path.display(), source)
            }
            DaySortError::ConfigParse { path, source } => {
                format!("Failed to parse configuration {}: {}", path.display(), source)
            }
            DaySortError::CreateTargetRoot { path, source } => {
                format!("Cannot create target directory {}: {}", path.display(), source)
            }
            DaySortError::InvalidDate { value, reason } => {
                format!("Invalid sourceDate {:?}: {}", value, reason)
            }
            DaySortError::CreateBucket { path, source } => {
                format!("Failed to create subdirectory {}: {}", path.display(), source)
            }
            DaySortError::Copy { from, stage, source, .. } => {
                format!("Copy failed for {} ({}): {}", from.display(), stage, source)
            }
            _ => self.to_string(),
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            DaySortError::ConfigRead { .. } => Some(
                "Create the file with --generate-config or point to another one with --config.".to_string()
            ),
            DaySortError::ConfigParse { .. } => Some(
                "The configuration must be a JSON object with sourceDir, targetDir and sourceDate strings.".to_string()
            ),
            DaySortError::CreateTargetRoot { .. } => Some(
                "Check that targetDir is set and that you can write to its parent directory.".to_string()
            ),
            DaySortError::InvalidDate { .. } => Some(
                "Write sourceDate as YYYY-MM-DD, for example 2024-03-05.".to_string()
            ),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, DaySortError>;
