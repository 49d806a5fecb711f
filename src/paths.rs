//! Path helpers
//!
//! Every identifier in the tree and every rule target goes through
//! [`normalize`], so comparisons never depend on separators, `./` prefixes
//! or `..` segments. Normalization is purely lexical; rules may name paths
//! that do not exist.
//!
//! Symlinks are not resolved: `link/..` collapses to the directory holding
//! `link`, not to the parent of its target.

use std::path::{Component, Path, PathBuf};

use path_clean::PathClean;

/// Lexically normalize a path into its canonical identifier form
pub fn normalize(path: impl AsRef<Path>) -> PathBuf {
    path.as_ref().clean()
}

/// Number of normal segments of `path` below `root`
///
/// Returns `None` when `path` is not inside `root`. Both arguments are
/// expected to be normalized already.
pub fn depth_below(root: &Path, path: &Path) -> Option<usize> {
    let relative = if root == Path::new(".") && path.is_relative() {
        path
    } else {
        path.strip_prefix(root).ok()?
    };

    let mut depth = 0;
    for component in relative.components() {
        match component {
            Component::Normal(_) => depth += 1,
            Component::CurDir => {}
            _ => return None,
        }
    }
    Some(depth)
}

/// Display name of a path: its last component, or the whole path for roots
pub fn tag_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}
