use crate::error::DaySortError;
use crate::extractor::bucket::ExtensionBucket;
use crate::scanner::WalkStatistics;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Counters for one run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub files_matched: usize,
    pub files_copied: usize,
    pub copy_failures: usize,
    pub bucket_failures: usize,
    pub bytes_copied: u64,
    pub files_by_bucket: BTreeMap<String, usize>,
    pub walk: WalkStatistics,
    pub start_time: Instant,
    pub errors: Vec<String>,
}

impl RunSummary {
    pub fn new() -> Self {
        Self {
            files_matched: 0,
            files_copied: 0,
            copy_failures: 0,
            bucket_failures: 0,
            bytes_copied: 0,
            files_by_bucket: BTreeMap::new(),
            walk: WalkStatistics::default(),
            start_time: Instant::now(),
            errors: Vec::new(),
        }
    }

    pub fn record_match(&mut self) {
        self.files_matched += 1;
    }

    pub fn record_copy(&mut self, bucket: &ExtensionBucket, bytes: u64) {
        self.files_copied += 1;
        self.bytes_copied += bytes;
        *self
            .files_by_bucket
            .entry(bucket.as_str().to_string())
            .or_insert(0) += 1;
    }

    /// Dry runs count the bucket without touching the filesystem.
    pub fn record_planned(&mut self, bucket: &ExtensionBucket) {
        *self
            .files_by_bucket
            .entry(bucket.as_str().to_string())
            .or_insert(0) += 1;
    }

    pub fn record_failure(&mut self, error: &DaySortError) {
        match error {
            DaySortError::CreateBucket { .. } => self.bucket_failures += 1,
            _ => self.copy_failures += 1,
        }
        self.errors.push(error.to_string());
    }

    pub fn failures(&self) -> usize {
        self.copy_failures + self.bucket_failures
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

impl Default for RunSummary {
    fn default() -> Self {
        Self::new()
    }
}
