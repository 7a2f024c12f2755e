//! Tree formatting and display
//!
//! - `config` - Output configuration types
//! - `tree` - Line-per-entry formatter fed by `TreeWalker`

mod config;
mod tree;

// Re-export public types
pub use config::OutputConfig;
pub use tree::{BRANCH, DEPTH_INDENT, TreeFormatter};
