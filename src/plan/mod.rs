//! Print planning
//!
//! The top-level ordering operation. A [`Planner`] holds the scanner, the
//! reordering engine and the sequencer, and every call builds its tree and
//! rule set from scratch, so repeated calls against an unchanged directory
//! return identical plans.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Result;
use crate::filter::PathFilter;
use crate::order::OrderEngine;
use crate::rules::RuleSet;
use crate::sequence::{FileClassifier, FileSequencer, Sequence};
use crate::tree::{DirTree, TreeBuilder};

/// Outcome of one ordering request
#[derive(Debug, Clone)]
pub struct Plan {
    pub rules: RuleSet,
    /// Directory tree in its final order
    pub tree: DirTree,
    pub sequence: Sequence,
}

impl Plan {
    /// Ordered file paths, ready to hand to a converter or printer
    pub fn paths(&self) -> Vec<PathBuf> {
        self.sequence.paths()
    }
}

/// Builds print plans from a rule file and the current filesystem
#[derive(Debug, Clone)]
pub struct Planner {
    builder: TreeBuilder,
    engine: OrderEngine,
    sequencer: FileSequencer,
}

impl Default for Planner {
    fn default() -> Self {
        Self {
            builder: TreeBuilder::default(),
            engine: OrderEngine::new(),
            sequencer: FileSequencer::new(FileClassifier::default(), PathFilter::default()),
        }
    }
}

impl Planner {
    pub fn new(config: &Config) -> Result<Self> {
        let filter = PathFilter::from_config(config)?;
        Ok(Self {
            builder: TreeBuilder::new(filter.clone()),
            engine: OrderEngine::new(),
            sequencer: FileSequencer::new(FileClassifier::from_config(config), filter),
        })
    }

    /// Load `rules_path` and plan against the root it names
    pub fn plan_from_file<P: AsRef<Path>>(&self, rules_path: P) -> Result<Plan> {
        let rules = RuleSet::load(rules_path)?;
        self.plan(rules)
    }

    /// Plan with an already parsed rule set
    pub fn plan(&self, rules: RuleSet) -> Result<Plan> {
        tracing::debug!(
            "Planning {} ({} dir rules, {} file rules)",
            rules.root.display(),
            rules.dir_rules.len(),
            rules.file_rules.len()
        );

        let scanned = self.builder.build(&rules.root)?;
        let tree = self.engine.reorder(&scanned, &rules);
        let sequence = self.sequencer.sequence(&tree, &rules)?;

        Ok(Plan {
            rules,
            tree,
            sequence,
        })
    }

    /// Ordered file paths for `rules_path`
    pub fn order<P: AsRef<Path>>(&self, rules_path: P) -> Result<Vec<PathBuf>> {
        Ok(self.plan_from_file(rules_path)?.paths())
    }
}
