use crate::error::{DaySortError, Result};
use crate::scanner::TargetDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "config.json";

/// Run configuration. Keys missing from the file load as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub source_dir: String,
    pub target_dir: String,
    pub source_date: String,
}

impl Config {
    pub fn new<S: Into<String>>(source_dir: S, target_dir: S, source_date: S) -> Self {
        Self {
            source_dir: source_dir.into(),
            target_dir: target_dir.into(),
            source_date: source_date.into(),
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| DaySortError::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::from_json(&content).map_err(|e| DaySortError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    pub fn from_json(content: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    pub fn source_path(&self) -> PathBuf {
        PathBuf::from(&self.source_dir)
    }

    pub fn target_path(&self) -> PathBuf {
        PathBuf::from(&self.target_dir)
    }

    pub fn target_date(&self) -> Result<TargetDate> {
        TargetDate::parse(&self.source_date)
    }

    pub fn create_sample_config() -> String {
        let sample = Self::new("./photos", "./sorted", "2024-03-05");
        serde_json::to_string_pretty(&sample).unwrap_or_default()
    }
}
