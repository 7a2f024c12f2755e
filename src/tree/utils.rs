//! Shared utility functions for tree walking

use std::path::Path;

use crate::filter::SEPARATOR;

/// Check if any segment of a relative path starts with `.`.
pub fn is_hidden(path: &str) -> bool {
    path.split(SEPARATOR).any(|segment| segment.starts_with('.'))
}

/// Number of separators in a relative path, i.e. how deep below the root
/// its entry sits.
pub fn path_depth(path: &str) -> usize {
    path.matches(SEPARATOR).count()
}

/// Append `name` to a relative path, yielding a `/`-separated path.
pub fn join_relative(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}{SEPARATOR}{name}")
    }
}

/// Get the display name of a path, falling back to the whole path when it
/// has no final component (e.g. `/`).
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .to_string()
}
