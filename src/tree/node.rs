//! Arena-backed directory tree

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::paths;

/// Unique identifier for a node within a tree
///
/// Internally an index into the arena. Only meaningful for the tree that
/// produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// The root node always has ID 0
    pub const ROOT: NodeId = NodeId(0);

    pub const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// One directory in the tree
#[derive(Debug, Clone)]
pub struct DirNode {
    /// Canonical normalized path, unique within the tree
    pub identifier: PathBuf,
    /// Display name (last path component)
    pub tag: String,
    /// Owning parent, `None` for the root
    pub parent: Option<NodeId>,
    /// Ordered children; the order is significant after reordering
    pub children: Vec<NodeId>,
    /// Segments below the root (root = 0)
    pub depth: usize,
}

/// A directory hierarchy keyed by canonical path
///
/// Nodes live in an arena and are never removed, so the parent/child links
/// always form a tree rooted at [`NodeId::ROOT`].
#[derive(Debug, Clone)]
pub struct DirTree {
    nodes: Vec<DirNode>,
    index: HashMap<PathBuf, NodeId>,
}

impl DirTree {
    /// Create a tree holding only the root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        let identifier = paths::normalize(root);
        let root = DirNode {
            tag: paths::tag_of(&identifier),
            identifier: identifier.clone(),
            parent: None,
            children: Vec::new(),
            depth: 0,
        };

        let mut index = HashMap::new();
        index.insert(identifier, NodeId::ROOT);

        Self {
            nodes: vec![root],
            index,
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    pub fn root_path(&self) -> &Path {
        &self.nodes[NodeId::ROOT.0].identifier
    }

    pub fn get(&self, id: NodeId) -> Option<&DirNode> {
        self.nodes.get(id.0)
    }

    /// Look up a node by canonical path
    pub fn find(&self, identifier: &Path) -> Option<NodeId> {
        self.index.get(identifier).copied()
    }

    pub fn contains(&self, identifier: &Path) -> bool {
        self.index.contains_key(identifier)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Children in their current order; empty for invalid IDs
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Insert `identifier` as the last child of `parent`
    ///
    /// Inserting an identifier that already exists is a no-op and returns
    /// the existing node. Returns `None` only when `parent` is invalid.
    pub fn insert(&mut self, parent: NodeId, identifier: impl AsRef<Path>) -> Option<NodeId> {
        let identifier = paths::normalize(identifier);
        if let Some(existing) = self.index.get(&identifier) {
            return Some(*existing);
        }

        let depth = self.get(parent)?.depth + 1;
        let id = NodeId(self.nodes.len());
        self.nodes.push(DirNode {
            tag: paths::tag_of(&identifier),
            identifier: identifier.clone(),
            parent: Some(parent),
            children: Vec::new(),
            depth,
        });
        self.nodes[parent.0].children.push(id);
        self.index.insert(identifier, id);
        Some(id)
    }

    /// Visit parent before children, following the stored child order
    pub fn pre_order(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![NodeId::ROOT];

        while let Some(current) = stack.pop() {
            order.push(current);
            // Reverse so the first child is popped first
            for child in self.children(current).iter().rev() {
                stack.push(*child);
            }
        }
        order
    }

    /// Check if a node is an ancestor of another
    pub fn is_ancestor_of(&self, ancestor: NodeId, descendant: NodeId) -> bool {
        let mut current = self.parent(descendant);
        while let Some(parent_id) = current {
            if parent_id == ancestor {
                return true;
            }
            current = self.parent(parent_id);
        }
        false
    }
}
