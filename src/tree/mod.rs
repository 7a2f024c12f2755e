//! Directory tree walking logic
//!
//! `TreeWalker` visits entries depth-first in lexical order and streams each
//! kept entry to a `TreeOutput`. Hidden entries and entries matched by the
//! ignore file are dropped; dropped directories are never descended into.

mod config;
mod utils;
mod walker;

// Re-export public types
pub use config::{DEFAULT_IGNORE_FILE, WalkerConfig};
pub use utils::{display_name, is_hidden, join_relative, path_depth};
pub use walker::{Exclusion, TreeOutput, TreeWalker, WalkSummary};
