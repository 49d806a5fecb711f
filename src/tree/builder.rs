//! Directory scanning
//!
//! Walks a root directory and records every directory as a [`DirTree`] node.
//! Files are not part of the tree; the sequencer lists them per directory.

use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::node::DirTree;
use crate::error::{OrderError, Result};
use crate::filter::PathFilter;
use crate::paths;

/// Builds directory trees in discovery order
///
/// Siblings are sorted by file name, so the default order does not depend
/// on what the platform's directory listing returns.
#[derive(Debug, Clone, Default)]
pub struct TreeBuilder {
    filter: PathFilter,
}

impl TreeBuilder {
    pub fn new(filter: PathFilter) -> Self {
        Self { filter }
    }

    /// Scan `root` into a fresh tree
    ///
    /// Any directory that cannot be listed aborts the scan; no partial tree
    /// is returned.
    pub fn build<P: AsRef<Path>>(&self, root: P) -> Result<DirTree> {
        let root = root.as_ref();
        let metadata = std::fs::metadata(root).map_err(|e| OrderError::file_system(root, e))?;
        if !metadata.is_dir() {
            return Err(OrderError::file_system(
                root,
                io::Error::new(io::ErrorKind::InvalidInput, "path is not a directory"),
            ));
        }

        let mut tree = DirTree::new(root);

        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                if entry.depth() == 0 {
                    return true;
                }
                if !entry.file_type().is_dir() {
                    return false;
                }
                let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
                if self.filter.excludes_dir(relative) {
                    tracing::debug!("Skipping excluded directory: {}", entry.path().display());
                    return false;
                }
                true
            });

        for entry in walker {
            let entry = entry.map_err(|err| {
                let path = err
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| root.to_path_buf());
                OrderError::file_system(path, err.into())
            })?;

            if entry.depth() == 0 {
                continue;
            }

            let parent_path: PathBuf = entry
                .path()
                .parent()
                .map(paths::normalize)
                .unwrap_or_else(|| tree.root_path().to_path_buf());

            // Pre-order walk: the parent has always been inserted already
            let Some(parent) = tree.find(&parent_path) else {
                tracing::debug!("No parent node for {}", entry.path().display());
                continue;
            };
            tree.insert(parent, entry.path());
        }

        tracing::debug!(
            "Built directory tree for {} ({} directories)",
            root.display(),
            tree.len()
        );
        Ok(tree)
    }
}
