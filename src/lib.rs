//! dirtext - print a directory tree, skipping hidden entries and .gitignore matches

pub mod error;
pub mod filter;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Error, Result};
pub use filter::{IgnorePattern, PathFilter, PatternSet};
pub use output::{OutputConfig, TreeFormatter};
pub use tree::{Exclusion, TreeOutput, TreeWalker, WalkSummary, WalkerConfig};
