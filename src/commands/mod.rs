//! Commands
//!
//! CLI command implementations, one submodule per command.

pub mod order;
pub mod output;
pub mod rules;
pub mod tree;

pub use order::{execute_order, format_order, OrderFormat, OrderOptions};
pub use output::TreeRenderer;
pub use rules::{execute_rules, rule_matches_filesystem, RulesOptions};
pub use tree::{execute_tree, TreeOptions};
