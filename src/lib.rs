#![forbid(unsafe_code)]

//! # print-order
//!
//! Deterministic ordering of source files for printing.
//!
//! Given a directory and a small rule file, produces one repeatable file
//! sequence: directories and files named by rules are pinned to the front
//! of their level, everything else follows in name order, and headers are
//! paired with their implementation files.
//!
//! ## Example
//!
//! ```rust,no_run
//! use print_order::{Config, Planner};
//!
//! fn main() -> anyhow::Result<()> {
//!     let planner = Planner::new(&Config::default())?;
//!
//!     for path in planner.order("config.txt")? {
//!         println!("{}", path.display());
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod order;
pub mod paths;
pub mod plan;
pub mod rules;
pub mod sequence;
pub mod tree;

// Re-exports
pub use config::Config;
pub use error::{OrderError, Result};
pub use filter::PathFilter;
pub use order::{apply_precedence, OrderEngine};
pub use plan::{Plan, Planner};
pub use rules::{Rule, RuleKind, RuleSet};
pub use sequence::{DirectoryFiles, FileClass, FileClassifier, FileSequencer, Sequence};
pub use tree::{DirNode, DirTree, NodeId, TreeBuilder};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
