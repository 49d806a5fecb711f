//! File sequencing
//!
//! Walks a reordered [`DirTree`] depth-first and emits the files of each
//! directory. Per directory:
//!
//! 1. list eligible files in name order,
//! 2. move file-rule targets to the front ([`apply_precedence`]),
//! 3. group files by root name and place headers before or after their
//!    implementation files,
//! 4. with headers-only set, drop implementation files that have a header.

pub mod classify;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use walkdir::WalkDir;

pub use classify::{FileClass, FileClassifier};

use crate::error::{OrderError, Result};
use crate::filter::PathFilter;
use crate::order::apply_precedence;
use crate::paths;
use crate::rules::RuleSet;
use crate::tree::DirTree;

/// Files emitted for one directory, in final order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryFiles {
    pub directory: PathBuf,
    pub depth: usize,
    pub files: Vec<PathBuf>,
}

/// Result of sequencing a tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Sequence {
    /// Per-directory breakdown in tree order
    pub directories: Vec<DirectoryFiles>,
}

impl Sequence {
    /// The flat print order
    pub fn paths(&self) -> Vec<PathBuf> {
        self.directories
            .iter()
            .flat_map(|d| d.files.iter().cloned())
            .collect()
    }

    /// Files emitted for `directory`, empty if it has none
    pub fn files_in(&self, directory: &Path) -> &[PathBuf] {
        self.directories
            .iter()
            .find(|d| d.directory == directory)
            .map(|d| d.files.as_slice())
            .unwrap_or(&[])
    }

    /// Files keyed by directory, for repeated lookups
    pub fn by_directory(&self) -> HashMap<&Path, &[PathBuf]> {
        self.directories
            .iter()
            .map(|d| (d.directory.as_path(), d.files.as_slice()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.directories.iter().map(|d| d.files.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Produces the flat file order from a reordered tree
#[derive(Debug, Clone, Default)]
pub struct FileSequencer {
    classifier: FileClassifier,
    filter: PathFilter,
}

impl FileSequencer {
    pub fn new(classifier: FileClassifier, filter: PathFilter) -> Self {
        Self { classifier, filter }
    }

    /// Sequence every directory of `tree` in pre-order
    pub fn sequence(&self, tree: &DirTree, rules: &RuleSet) -> Result<Sequence> {
        let mut sequence = Sequence::default();

        for id in tree.pre_order() {
            let Some(node) = tree.get(id) else {
                continue;
            };

            let listed = self.list_files(tree.root_path(), &node.identifier)?;
            let ranked = apply_precedence(listed, &rules.file_rules, node.depth + 1);
            let files = self.arrange_groups(ranked, rules.headers_first, rules.headers_only);

            sequence.directories.push(DirectoryFiles {
                directory: node.identifier.clone(),
                depth: node.depth,
                files,
            });
        }

        tracing::debug!("Sequenced {} files", sequence.len());
        Ok(sequence)
    }

    /// Eligible files directly inside `directory`, sorted by name
    fn list_files(&self, root: &Path, directory: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        let walker = WalkDir::new(directory)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();

        for entry in walker {
            let entry = entry.map_err(|err| {
                let path = err
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| directory.to_path_buf());
                OrderError::file_system(path, err.into())
            })?;

            let is_file = entry.file_type().is_file()
                || (entry.path_is_symlink() && entry.path().is_file());
            if !is_file {
                continue;
            }

            let path = paths::normalize(entry.path());
            let relative = path.strip_prefix(root).unwrap_or(&path);
            if self.filter.excludes_file(relative) {
                tracing::debug!("Skipping excluded file: {}", path.display());
                continue;
            }
            if self.classifier.classify(&path).is_none() {
                tracing::trace!("Skipping ineligible file: {}", path.display());
                continue;
            }
            files.push(path);
        }

        Ok(files)
    }

    /// Group by root name, then apply the pairing and headers-only policy
    fn arrange_groups(
        &self,
        files: Vec<PathBuf>,
        headers_first: bool,
        headers_only: bool,
    ) -> Vec<PathBuf> {
        let mut groups: Vec<Vec<(PathBuf, FileClass)>> = Vec::new();
        let mut by_root: HashMap<String, usize> = HashMap::new();

        for path in files {
            let Some(class) = self.classifier.classify(&path) else {
                continue;
            };
            let root_name = root_name(&path);
            match by_root.get(&root_name) {
                Some(&index) => groups[index].push((path, class)),
                None => {
                    by_root.insert(root_name, groups.len());
                    groups.push(vec![(path, class)]);
                }
            }
        }

        let mut ordered = Vec::new();
        for mut group in groups {
            let has_header = group.iter().any(|(_, c)| *c == FileClass::Header);
            let has_impl = group.iter().any(|(_, c)| *c == FileClass::Implementation);

            if has_header && has_impl {
                // Stable: members keep their rule/name order within a class
                group.sort_by_key(|(_, class)| {
                    let is_header = *class == FileClass::Header;
                    if headers_first {
                        !is_header
                    } else {
                        is_header
                    }
                });

                if headers_only {
                    if group.len() > 2 {
                        tracing::warn!(
                            "Headers-only group with {} members, dropping implementation files: {}",
                            group.len(),
                            group[0].0.display()
                        );
                    }
                    group.retain(|(_, class)| *class != FileClass::Implementation);
                }
            }

            ordered.extend(group.into_iter().map(|(path, _)| path));
        }
        ordered
    }
}

/// File name without its last extension
fn root_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn names(files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect()
    }

    fn arrange(files: &[&str], headers_first: bool, headers_only: bool) -> Vec<String> {
        let sequencer = FileSequencer::default();
        let files = files.iter().map(|f| PathBuf::from("/r").join(f)).collect();
        names(&sequencer.arrange_groups(files, headers_first, headers_only))
    }

    #[test]
    fn test_header_pairing() {
        assert_eq!(arrange(&["calc.cpp", "calc.hpp"], true, false), vec!["calc.hpp", "calc.cpp"]);
        assert_eq!(arrange(&["calc.cpp", "calc.hpp"], false, false), vec!["calc.cpp", "calc.hpp"]);
        assert_eq!(arrange(&["calc.hpp", "calc.cpp"], false, false), vec!["calc.cpp", "calc.hpp"]);
    }

    #[test]
    fn test_headers_only_keeps_unpaired_files() {
        assert_eq!(
            arrange(&["calc.cpp", "calc.hpp", "util.py"], true, true),
            vec!["calc.hpp", "util.py"]
        );
        assert_eq!(arrange(&["main.cpp"], true, true), vec!["main.cpp"]);
    }

    #[test]
    fn test_groups_are_contiguous_by_first_appearance() {
        assert_eq!(
            arrange(&["b.cpp", "a.py", "b.hpp"], true, false),
            vec!["b.hpp", "b.cpp", "a.py"]
        );
    }

    #[test]
    fn test_single_member_groups_untouched() {
        assert_eq!(
            arrange(&["z.h", "a.cpp", "m.md"], false, true),
            vec!["z.h", "a.cpp", "m.md"]
        );
    }

    #[test]
    fn test_three_member_group_headers_only() {
        assert_eq!(
            arrange(&["motor.cpp", "motor.hpp", "motor.txt"], true, true),
            vec!["motor.hpp", "motor.txt"]
        );
    }

    #[test]
    fn test_root_name_uses_last_extension() {
        assert_eq!(root_name(Path::new("/r/calc.test.cpp")), "calc.test");
        assert_eq!(root_name(Path::new("/r/Makefile")), "Makefile");
    }

    #[cfg(unix)]
    #[test]
    fn test_sequence_unreadable_directory_fails() {
        use crate::tree::TreeBuilder;
        use std::fs;
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let locked = dir.path().join("locked");
        fs::create_dir_all(&locked).unwrap();
        fs::write(locked.join("main.py"), "").unwrap();

        let tree = TreeBuilder::default().build(dir.path()).unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Permission bits do not apply to root
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let result = FileSequencer::default().sequence(&tree, &RuleSet::default());
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        match result {
            Err(OrderError::FileSystem { path, .. }) => assert!(path.ends_with("locked")),
            other => panic!("expected a file system error, got {:?}", other),
        }
    }

    #[test]
    fn test_sequence_len_and_lookup() {
        let sequence = Sequence {
            directories: vec![
                DirectoryFiles {
                    directory: PathBuf::from("/r"),
                    depth: 0,
                    files: vec![PathBuf::from("/r/a.py")],
                },
                DirectoryFiles {
                    directory: PathBuf::from("/r/sub"),
                    depth: 1,
                    files: vec![PathBuf::from("/r/sub/b.py"), PathBuf::from("/r/sub/c.py")],
                },
            ],
        };
        assert_eq!(sequence.len(), 3);
        assert_eq!(sequence.files_in(Path::new("/r/sub")).len(), 2);
        assert!(sequence.files_in(Path::new("/r/none")).is_empty());

        let index = sequence.by_directory();
        assert_eq!(index.len(), 2);
        assert_eq!(index[Path::new("/r")], [PathBuf::from("/r/a.py")]);
        assert!(!index.contains_key(Path::new("/r/none")));
        assert_eq!(
            sequence.paths(),
            vec![
                PathBuf::from("/r/a.py"),
                PathBuf::from("/r/sub/b.py"),
                PathBuf::from("/r/sub/c.py")
            ]
        );
    }
}
