//! Exclusion patterns
//!
//! Directory and file exclusions from the tool config, compiled once and
//! matched against paths relative to the ordering root.

use std::path::Path;

use glob::{MatchOptions, Pattern};

use crate::config::Config;
use crate::error::{OrderError, Result};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// Compiled exclusion globs
#[derive(Debug, Clone, Default)]
pub struct PathFilter {
    dirs: Vec<Pattern>,
    files: Vec<Pattern>,
}

impl PathFilter {
    pub fn new(exclude_dirs: &[String], exclude_files: &[String]) -> Result<Self> {
        Ok(Self {
            dirs: compile(exclude_dirs)?,
            files: compile(exclude_files)?,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.exclude_dirs, &config.exclude_files)
    }

    /// True when the directory at `relative` (and its subtree) is skipped
    pub fn excludes_dir(&self, relative: &Path) -> bool {
        matches_any(&self.dirs, relative)
    }

    pub fn excludes_file(&self, relative: &Path) -> bool {
        matches_any(&self.files, relative)
    }
}

fn compile(patterns: &[String]) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|p| {
            Pattern::new(p).map_err(|source| OrderError::Pattern {
                pattern: p.clone(),
                source,
            })
        })
        .collect()
}

fn matches_any(patterns: &[Pattern], relative: &Path) -> bool {
    patterns
        .iter()
        .any(|p| p.matches_path_with(relative, MATCH_OPTIONS))
}
