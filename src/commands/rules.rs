//! Rules Command
//!
//! Implements `print-order rules`: lists the parsed rule file and flags
//! rules whose target does not currently exist.

use std::path::PathBuf;

use anyhow::{Context, Result};
use console::style;

use crate::config::Config;
use crate::rules::{Rule, RuleKind, RuleSet};

/// Options for the rules command
#[derive(Debug, Clone, Default)]
pub struct RulesOptions {
    pub rules: Option<PathBuf>,
    /// Output as JSON
    pub json: bool,
}

/// Whether the rule's target exists with the expected kind
pub fn rule_matches_filesystem(rule: &Rule) -> bool {
    match rule.kind {
        RuleKind::Directory => rule.target.is_dir(),
        RuleKind::File => rule.target.is_file(),
    }
}

/// Execute the rules command
pub fn execute_rules(options: RulesOptions, config: Config) -> Result<()> {
    let rules_path = options.rules.unwrap_or_else(|| config.rules.clone());
    let rules = RuleSet::load(&rules_path)
        .with_context(|| format!("Failed to load rules from {}", rules_path.display()))?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&rules)?);
        return Ok(());
    }

    println!("Root: {}", style(rules.root.display()).cyan());
    println!("Headers first: {}", rules.headers_first);
    println!("Headers only: {}", rules.headers_only);

    for kind in [RuleKind::Directory, RuleKind::File] {
        let list = rules.rules(kind);
        if list.is_empty() {
            continue;
        }
        println!();
        for (i, rule) in list.iter().enumerate() {
            let marker = if rule_matches_filesystem(rule) {
                style("✓").green()
            } else {
                style("✗").red()
            };
            println!(
                "{} {:>3}. {} {} {}",
                marker,
                i + 1,
                kind,
                rule.relative.display(),
                style(format!("(depth {})", rule.depth)).dim()
            );
        }
    }

    Ok(())
}
