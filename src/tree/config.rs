//! Configuration types for the tree walker

/// Default name of the ignore file, looked up at the tree root.
pub const DEFAULT_IGNORE_FILE: &str = ".gitignore";

/// Configuration for tree walking behavior.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Ignore file name, relative to the walked root
    pub ignore_file: String,
    /// Prune entries with any path segment starting with `.`
    pub skip_hidden: bool,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            ignore_file: DEFAULT_IGNORE_FILE.to_string(),
            skip_hidden: true,
        }
    }
}
