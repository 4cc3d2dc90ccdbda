pub mod bucket;
pub mod file_copier;
pub mod summary;

pub use bucket::{BucketWriter, ExtensionBucket, Placement, UNKNOWN_BUCKET};
pub use file_copier::FileCopier;
pub use summary::RunSummary;
