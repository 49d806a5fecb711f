//! Directory tree model and scanner

pub mod builder;
mod node;

pub use builder::TreeBuilder;
pub use node::{DirNode, DirTree, NodeId};
