pub mod date_matcher;
pub mod tree_walker;

pub use date_matcher::{same_day, TargetDate};
pub use tree_walker::{FileEntry, TreeWalker, WalkStatistics};
