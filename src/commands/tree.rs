//! Tree Command
//!
//! Implements `print-order tree`: shows the directory tree in print order,
//! for review before printing or as a cover sheet.

use std::path::PathBuf;

use anyhow::{Context, Result};

use super::output::TreeRenderer;
use crate::config::Config;
use crate::plan::Planner;

/// Options for the tree command
#[derive(Debug, Clone, Default)]
pub struct TreeOptions {
    pub rules: Option<PathBuf>,
    /// List the sequenced files under each directory
    pub files: bool,
    /// Label for the root line
    pub label: Option<String>,
    /// Write the rendering here instead of stdout
    pub output: Option<PathBuf>,
}

/// Execute the tree command
pub fn execute_tree(options: TreeOptions, config: Config) -> Result<()> {
    let rules_path = options.rules.unwrap_or_else(|| config.rules.clone());
    let planner = Planner::new(&config)?;
    let plan = planner
        .plan_from_file(&rules_path)
        .with_context(|| format!("Failed to order files using {}", rules_path.display()))?;

    let mut renderer = TreeRenderer::new(&plan.tree);
    if options.files {
        renderer = renderer.with_files(&plan.sequence);
    }
    if let Some(label) = options.label {
        renderer = renderer.with_root_label(label);
    }
    let text = renderer.render();

    match options.output {
        Some(output) => std::fs::write(&output, text)
            .with_context(|| format!("Failed to write {}", output.display()))?,
        None => print!("{}", text),
    }

    Ok(())
}
