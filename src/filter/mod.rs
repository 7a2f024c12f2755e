//! Path filtering based on .gitignore-style patterns
//!
//! - `pattern` - Ignore file loading and the keep/ignore decision
//! - `matcher` - Matching one pattern against one relative path

mod matcher;
mod pattern;

use std::path::Path;

pub use matcher::{RECURSIVE_WILDCARD, SEPARATOR, glob_match, matches};
pub use pattern::{IgnorePattern, PatternSet};

use crate::error::Result;

/// Decides which relative paths are excluded by an ignore file.
#[derive(Debug, Clone, Default)]
pub struct PathFilter {
    patterns: PatternSet,
}

impl PathFilter {
    pub fn new(patterns: PatternSet) -> Self {
        Self { patterns }
    }

    /// Load the filter from an ignore file.
    pub fn load(path: &Path) -> Result<Self> {
        PatternSet::load(path).map(Self::new)
    }

    /// Check if a `/`-separated path relative to the tree root is ignored.
    pub fn is_ignored(&self, path: &str, is_dir: bool) -> bool {
        self.patterns.should_ignore(path, is_dir)
    }

    pub fn patterns(&self) -> &PatternSet {
        &self.patterns
    }
}
