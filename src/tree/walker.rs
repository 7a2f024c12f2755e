//! TreeWalker - depth-first walk that streams entries to an output

use std::fs::{self, DirEntry};
use std::io;
use std::path::Path;

use crate::error::{Error, Result};
use crate::filter::PathFilter;

use super::config::WalkerConfig;
use super::utils::{display_name, is_hidden, join_relative, path_depth};

/// Receives tree entries in walk order.
pub trait TreeOutput {
    /// Called once for the root (`is_root`, depth 0) and then for every
    /// entry that survives filtering. `depth` counts separators in the
    /// entry's path relative to the root.
    fn output_node(&mut self, name: &str, is_dir: bool, depth: usize, is_root: bool)
    -> io::Result<()>;

    fn finish(&mut self, _summary: &WalkSummary) -> io::Result<()> {
        Ok(())
    }
}

/// Why an entry was left out of the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exclusion {
    /// A path segment starts with `.`
    Hidden,
    /// Matched by the ignore file
    Ignored,
}

/// Counts gathered during a walk. The root is not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSummary {
    pub dirs: usize,
    pub files: usize,
    /// Excluded entries; a pruned directory counts once, its contents are
    /// never visited.
    pub pruned: usize,
}

/// Walks a directory in lexical order, pruning hidden and ignored subtrees.
pub struct TreeWalker {
    config: WalkerConfig,
    filter: PathFilter,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self {
            config,
            filter: PathFilter::default(),
        }
    }

    pub fn with_filter(mut self, filter: PathFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Walk `root`, emitting the root and then every kept entry.
    ///
    /// Any read error aborts the walk; entries already emitted stay emitted.
    pub fn walk<O: TreeOutput>(&self, root: &Path, output: &mut O) -> Result<WalkSummary> {
        output.output_node(&display_name(root), true, 0, true)?;

        let mut summary = WalkSummary::default();
        self.walk_dir(root, "", output, &mut summary)?;
        output.finish(&summary)?;

        tracing::debug!(
            root = %root.display(),
            dirs = summary.dirs,
            files = summary.files,
            pruned = summary.pruned,
            "walk complete"
        );
        Ok(summary)
    }

    /// Decide whether the entry at a relative path is left out.
    ///
    /// Hidden paths are excluded before the ignore patterns are consulted.
    pub fn exclusion(&self, path: &str, is_dir: bool) -> Option<Exclusion> {
        if self.config.skip_hidden && is_hidden(path) {
            Some(Exclusion::Hidden)
        } else if self.filter.is_ignored(path, is_dir) {
            Some(Exclusion::Ignored)
        } else {
            None
        }
    }

    fn walk_dir<O: TreeOutput>(
        &self,
        dir: &Path,
        relative: &str,
        output: &mut O,
        summary: &mut WalkSummary,
    ) -> Result<()> {
        for entry in read_sorted_entries(dir)? {
            let name = entry.file_name().to_string_lossy().to_string();
            let entry_path = entry.path();
            let relative_path = join_relative(relative, &name);

            // Symlinks report their own type, so linked directories are leaves
            let is_dir = entry
                .file_type()
                .map_err(|source| Error::ReadDir {
                    path: entry_path.clone(),
                    source,
                })?
                .is_dir();

            if let Some(reason) = self.exclusion(&relative_path, is_dir) {
                tracing::trace!(path = %relative_path, ?reason, is_dir, "pruned");
                summary.pruned += 1;
                continue;
            }

            output.output_node(&name, is_dir, path_depth(&relative_path), false)?;

            if is_dir {
                summary.dirs += 1;
                self.walk_dir(&entry_path, &relative_path, output, summary)?;
            } else {
                summary.files += 1;
            }
        }

        Ok(())
    }
}

/// Read a directory's entries sorted by file name.
fn read_sorted_entries(dir: &Path) -> Result<Vec<DirEntry>> {
    let read_error = |source| Error::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = fs::read_dir(dir)
        .map_err(read_error)?
        .collect::<io::Result<Vec<_>>>()
        .map_err(read_error)?;
    entries.sort_by_key(|entry| entry.file_name());
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::PatternSet;
    use crate::test_utils::TestTree;

    /// Records every node as "depth:name" with a trailing "/" for directories.
    #[derive(Default)]
    struct Recorder {
        nodes: Vec<String>,
        finished: Option<WalkSummary>,
    }

    impl TreeOutput for Recorder {
        fn output_node(
            &mut self,
            name: &str,
            is_dir: bool,
            depth: usize,
            is_root: bool,
        ) -> io::Result<()> {
            let marker = if is_root { "root:" } else { "" };
            let slash = if is_dir { "/" } else { "" };
            self.nodes.push(format!("{marker}{depth}:{name}{slash}"));
            Ok(())
        }

        fn finish(&mut self, summary: &WalkSummary) -> io::Result<()> {
            self.finished = Some(*summary);
            Ok(())
        }
    }

    fn walk_with(tree: &TestTree, ignore: &str) -> (Recorder, WalkSummary) {
        let walker = TreeWalker::new(WalkerConfig::default())
            .with_filter(PathFilter::new(PatternSet::from_content(ignore)));
        let mut recorder = Recorder::default();
        let summary = walker.walk(tree.path(), &mut recorder).unwrap();
        (recorder, summary)
    }

    #[test]
    fn test_walk_lexical_order_and_depth() {
        let tree = TestTree::new();
        tree.add_file("b.txt", "");
        tree.add_file("a/z.txt", "");
        tree.add_file("a/m/deep.txt", "");
        tree.add_file("c.txt", "");

        let (recorder, summary) = walk_with(&tree, "");
        let root = format!("root:0:{}/", display_name(tree.path()));
        assert_eq!(
            recorder.nodes,
            vec![
                root.as_str(),
                "0:a/",
                "1:m/",
                "2:deep.txt",
                "1:z.txt",
                "0:b.txt",
                "0:c.txt",
            ]
        );
        assert_eq!(summary.dirs, 2);
        assert_eq!(summary.files, 4);
        assert_eq!(recorder.finished, Some(summary));
    }

    #[test]
    fn test_hidden_subtree_pruned() {
        let tree = TestTree::new();
        tree.add_file(".git/config", "");
        tree.add_file(".env", "");
        tree.add_file("src/.cache/blob", "");
        tree.add_file("src/main.rs", "");

        let (recorder, summary) = walk_with(&tree, "");
        assert!(recorder.nodes.iter().all(|n| !n.contains("config")));
        assert!(recorder.nodes.iter().all(|n| !n.contains(".env")));
        assert!(recorder.nodes.iter().all(|n| !n.contains("blob")));
        assert!(recorder.nodes.contains(&"1:main.rs".to_string()));
        // .env, .git, src/.cache
        assert_eq!(summary.pruned, 3);
    }

    #[test]
    fn test_hidden_wins_over_negation() {
        let walker = TreeWalker::new(WalkerConfig::default())
            .with_filter(PathFilter::new(PatternSet::from_lines(["!.env"])));
        assert_eq!(walker.exclusion(".env", false), Some(Exclusion::Hidden));
    }

    #[test]
    fn test_hidden_entries_kept_when_disabled() {
        let config = WalkerConfig {
            skip_hidden: false,
            ..Default::default()
        };
        let walker = TreeWalker::new(config);
        assert_eq!(walker.exclusion(".github/workflows", true), None);
    }

    #[test]
    fn test_ignored_directory_pruned() {
        let tree = TestTree::new();
        tree.add_file("src/main.go", "");
        tree.add_file("build/out.bin", "");
        tree.add_file("build/keep.txt", "");

        let (recorder, summary) = walk_with(&tree, "build/\n!build/keep.txt\n");
        // The directory itself is ignored, so keep.txt is never reached
        assert!(recorder.nodes.iter().all(|n| !n.contains("build")));
        assert!(recorder.nodes.iter().all(|n| !n.contains("keep.txt")));
        assert_eq!(summary.pruned, 1);
    }

    #[test]
    fn test_ignored_files_skipped() {
        let tree = TestTree::new();
        tree.add_file("debug.log", "");
        tree.add_file("main.rs", "");

        let (recorder, _) = walk_with(&tree, "*.log\n");
        assert_eq!(recorder.nodes.len(), 2);
        assert_eq!(recorder.nodes[1], "0:main.rs");
    }

    #[test]
    fn test_empty_directory_is_listed() {
        let tree = TestTree::new();
        tree.add_dir("empty");

        let (recorder, summary) = walk_with(&tree, "");
        assert_eq!(recorder.nodes[1], "0:empty/");
        assert_eq!(summary.dirs, 1);
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let tree = TestTree::new();
        let walker = TreeWalker::new(WalkerConfig::default());
        let mut recorder = Recorder::default();

        let err = walker
            .walk(&tree.path().join("missing"), &mut recorder)
            .unwrap_err();
        assert!(matches!(err, Error::ReadDir { .. }));
        // The root line was already emitted before the read failed
        assert_eq!(recorder.nodes.len(), 1);
        assert!(recorder.finished.is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_directory_is_a_leaf() {
        let tree = TestTree::new();
        tree.add_file("real/inner.txt", "");
        std::os::unix::fs::symlink(tree.path().join("real"), tree.path().join("link")).unwrap();

        let (recorder, _) = walk_with(&tree, "");
        assert!(recorder.nodes.contains(&"0:link".to_string()));
        assert_eq!(
            recorder
                .nodes
                .iter()
                .filter(|n| n.contains("inner.txt"))
                .count(),
            1
        );
    }
}
