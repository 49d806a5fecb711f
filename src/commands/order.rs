//! Order Command
//!
//! Implements `print-order order`: prints or writes the final print order.

use std::path::PathBuf;

use anyhow::{Context, Result};
use console::style;

use crate::config::Config;
use crate::plan::Planner;

/// Output format for the ordered file list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OrderFormat {
    /// One path per line
    #[default]
    Text,
    /// JSON array of paths
    Json,
}

/// Options for the order command
#[derive(Debug, Clone, Default)]
pub struct OrderOptions {
    /// Rule file (defaults to the one named in the tool config)
    pub rules: Option<PathBuf>,
    pub format: OrderFormat,
    /// Write the list here instead of stdout
    pub output: Option<PathBuf>,
}

/// Render the ordered paths in the requested format
pub fn format_order(paths: &[PathBuf], format: OrderFormat) -> Result<String> {
    match format {
        OrderFormat::Text => {
            let mut text = String::new();
            for path in paths {
                text.push_str(&path.to_string_lossy());
                text.push('\n');
            }
            Ok(text)
        }
        OrderFormat::Json => {
            let mut json = serde_json::to_string_pretty(paths)?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Execute the order command
pub fn execute_order(options: OrderOptions, config: Config) -> Result<()> {
    let rules_path = options.rules.unwrap_or_else(|| config.rules.clone());
    let planner = Planner::new(&config)?;
    let paths = planner
        .order(&rules_path)
        .with_context(|| format!("Failed to order files using {}", rules_path.display()))?;

    if paths.is_empty() {
        eprintln!("{} No printable files found", style("!").yellow());
        eprintln!("  Check the parent path in {}", rules_path.display());
    }

    let rendered = format_order(&paths, options.format)?;

    match options.output {
        Some(output) => {
            if let Some(parent) = output.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(&output, rendered)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            println!(
                "{} Order written to {}",
                style("✓").green(),
                output.display()
            );
            println!("  Files: {}", paths.len());
        }
        None => print!("{}", rendered),
    }

    Ok(())
}
