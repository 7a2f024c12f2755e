//! Error types for dirtext

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading ignore patterns or walking a tree.
#[derive(Debug, Error)]
pub enum Error {
    #[error("error getting current directory: {0}")]
    CurrentDir(#[source] io::Error),

    /// The ignore file is missing or unreadable. Callers treat this as a
    /// warning and continue with an empty pattern set.
    #[error("couldn't load {}: {source}", path.display())]
    IgnoreFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error walking directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error writing output: {0}")]
    Output(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
