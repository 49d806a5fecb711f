//! Tree rendering
//!
//! Box-drawing rendering of a reordered directory tree, optionally with the
//! sequenced files listed under each directory.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::sequence::Sequence;
use crate::tree::{DirTree, NodeId};

const BRANCH: &str = "├── ";
const LAST: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";

/// Renders a [`DirTree`] as indented text
pub struct TreeRenderer<'a> {
    tree: &'a DirTree,
    files: HashMap<&'a Path, &'a [PathBuf]>,
    root_label: Option<String>,
}

impl<'a> TreeRenderer<'a> {
    pub fn new(tree: &'a DirTree) -> Self {
        Self {
            tree,
            files: HashMap::new(),
            root_label: None,
        }
    }

    /// Also list each directory's files, in print order, before its subdirectories
    pub fn with_files(mut self, sequence: &'a Sequence) -> Self {
        self.files = sequence.by_directory();
        self
    }

    /// Replace the root's tag in the first line
    pub fn with_root_label(mut self, label: impl Into<String>) -> Self {
        self.root_label = Some(label.into());
        self
    }

    pub fn render(&self) -> String {
        let root = self.tree.root();
        let label = self
            .root_label
            .clone()
            .or_else(|| self.tree.get(root).map(|n| n.tag.clone()))
            .unwrap_or_default();

        let mut out = String::new();
        out.push_str(&label);
        out.push('\n');
        self.render_children(root, "", &mut out);
        out
    }

    fn render_children(&self, id: NodeId, prefix: &str, out: &mut String) {
        let Some(node) = self.tree.get(id) else {
            return;
        };

        let files: Vec<String> = self
            .files
            .get(node.identifier.as_path())
            .map(|listed| {
                listed
                    .iter()
                    .filter_map(|p| p.file_name())
                    .map(|n| n.to_string_lossy().to_string())
                    .collect()
            })
            .unwrap_or_default();
        let dirs = self.tree.children(id);
        let total = files.len() + dirs.len();

        for (i, name) in files.iter().enumerate() {
            let connector = if i + 1 == total { LAST } else { BRANCH };
            out.push_str(prefix);
            out.push_str(connector);
            out.push_str(name);
            out.push('\n');
        }

        for (i, child) in dirs.iter().enumerate() {
            let is_last = files.len() + i + 1 == total;
            let tag = self.tree.get(*child).map(|n| n.tag.as_str()).unwrap_or("");
            out.push_str(prefix);
            out.push_str(if is_last { LAST } else { BRANCH });
            out.push_str(tag);
            out.push_str("/\n");

            let next = format!("{}{}", prefix, if is_last { SPACE } else { PIPE });
            self.render_children(*child, &next, out);
        }
    }
}
