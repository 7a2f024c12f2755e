//! Ignore patterns and the ignore file loader

use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

use super::matcher::{SEPARATOR, matches};

/// One line of an ignore file, cleaned up for matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnorePattern {
    body: String,
    negated: bool,
}

impl IgnorePattern {
    /// Parse a single ignore file line.
    ///
    /// Returns `None` for blank lines, `#` comments, and lines that are empty
    /// once the leading and trailing `/` are stripped.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }

        let line = line.strip_prefix(SEPARATOR).unwrap_or(line);
        let line = line.strip_suffix(SEPARATOR).unwrap_or(line);

        let (body, negated) = match line.strip_prefix('!') {
            Some(rest) => (rest, true),
            None => (line, false),
        };
        if body.is_empty() {
            return None;
        }

        Some(Self {
            body: body.to_string(),
            negated,
        })
    }

    /// The glob text without the `!` prefix.
    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    pub fn matches(&self, path: &str, is_dir: bool) -> bool {
        matches(path, &self.body, is_dir)
    }
}

impl fmt::Display for IgnorePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            write!(f, "!{}", self.body)
        } else {
            f.write_str(&self.body)
        }
    }
}

/// Ordered patterns loaded from a single ignore file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternSet {
    patterns: Vec<IgnorePattern>,
}

impl PatternSet {
    /// Build a set from individual lines, skipping blanks and comments.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = lines
            .into_iter()
            .filter_map(|line| IgnorePattern::parse(line.as_ref()))
            .collect();
        Self { patterns }
    }

    /// Build a set from the full text of an ignore file.
    pub fn from_content(content: &str) -> Self {
        Self::from_lines(content.lines())
    }

    /// Read and parse an ignore file.
    ///
    /// A missing or unreadable file is reported as [`Error::IgnoreFile`];
    /// callers that want to carry on use an empty set instead.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|source| Error::IgnoreFile {
            path: path.to_path_buf(),
            source,
        })?;
        let set = Self::from_content(&String::from_utf8_lossy(&bytes));

        tracing::debug!(
            path = %path.display(),
            patterns = set.len(),
            negations = set.iter().filter(|p| p.is_negated()).count(),
            "loaded ignore patterns"
        );

        Ok(set)
    }

    /// Decide whether `path` is ignored.
    ///
    /// A matching negation keeps the path no matter where it appears in the
    /// set; otherwise any matching plain pattern ignores it.
    pub fn should_ignore(&self, path: &str, is_dir: bool) -> bool {
        let mut ignored = false;
        for pattern in &self.patterns {
            if pattern.matches(path, is_dir) {
                if pattern.is_negated() {
                    return false;
                }
                ignored = true;
            }
        }
        ignored
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &IgnorePattern> {
        self.patterns.iter()
    }
}
