//! Ordering rules
//!
//! Parses the line-oriented rule file:
//!
//! ```text
//! parent = "../RobotCode"
//! HEADERS_FIRST 1
//! ONLY_HEADERS 0
//! dir src/objects
//! file src/main.cpp
//! # comment
//! ```
//!
//! The grammar is permissive. Lines containing `#` and lines that match no
//! directive are skipped. Rule paths are resolved against the final root
//! once the whole file has been read, and each rule's depth is fixed at
//! that point.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{OrderError, Result};
use crate::paths;

/// Whether a rule pins a directory or a file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    Directory,
    File,
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleKind::Directory => write!(f, "dir"),
            RuleKind::File => write!(f, "file"),
        }
    }
}

/// One precedence directive
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rule {
    /// Canonical path the rule refers to
    pub target: PathBuf,
    pub kind: RuleKind,
    /// Depth below the root at which `target` must appear
    pub depth: usize,
    /// Path as written in the rule file
    pub relative: PathBuf,
}

/// Parsed rule file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleSet {
    pub root: PathBuf,
    pub headers_first: bool,
    pub headers_only: bool,
    pub dir_rules: Vec<Rule>,
    pub file_rules: Vec<Rule>,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            headers_first: true,
            headers_only: false,
            dir_rules: Vec::new(),
            file_rules: Vec::new(),
        }
    }
}

const PARENT_KEY: &str = "parent";
const HEADERS_FIRST_KEY: &str = "HEADERS_FIRST";
const ONLY_HEADERS_KEY: &str = "ONLY_HEADERS";

impl RuleSet {
    /// Read and parse a rule file
    ///
    /// A relative `parent` is resolved against the directory holding the
    /// rule file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| OrderError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(Self::parse(&text, base_dir))
    }

    /// Parse rule text, resolving a relative root against `base_dir`
    pub fn parse(text: &str, base_dir: &Path) -> Self {
        let mut set = Self::default();
        let mut parent = String::from(".");
        let mut pending: Vec<(RuleKind, String)> = Vec::new();

        for (number, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.contains('#') {
                continue;
            }

            let (keyword, rest) = match line.split_once(char::is_whitespace) {
                Some((keyword, rest)) => (keyword, rest.trim()),
                None => (line, ""),
            };

            match keyword {
                "dir" if !rest.is_empty() => pending.push((RuleKind::Directory, rest.to_string())),
                "file" if !rest.is_empty() => pending.push((RuleKind::File, rest.to_string())),
                HEADERS_FIRST_KEY => {
                    if let Some(value) = parse_flag(rest) {
                        set.headers_first = value;
                    } else {
                        tracing::debug!("Ignoring malformed flag on line {}: {}", number + 1, raw);
                    }
                }
                ONLY_HEADERS_KEY => {
                    if let Some(value) = parse_flag(rest) {
                        set.headers_only = value;
                    } else {
                        tracing::debug!("Ignoring malformed flag on line {}: {}", number + 1, raw);
                    }
                }
                _ => match parse_parent(line) {
                    Some(value) => parent = value,
                    None => tracing::debug!("Ignoring line {}: {}", number + 1, raw),
                },
            }
        }

        set.root = paths::normalize(base_dir.join(&parent));

        for (kind, relative) in pending {
            match set.resolve(kind, &relative) {
                Some(rule) => match kind {
                    RuleKind::Directory => set.dir_rules.push(rule),
                    RuleKind::File => set.file_rules.push(rule),
                },
                None => tracing::debug!("Dropping {} rule outside of root: {}", kind, relative),
            }
        }

        set
    }

    /// Rules of one kind, in precedence order
    pub fn rules(&self, kind: RuleKind) -> &[Rule] {
        match kind {
            RuleKind::Directory => &self.dir_rules,
            RuleKind::File => &self.file_rules,
        }
    }

    fn resolve(&self, kind: RuleKind, relative: &str) -> Option<Rule> {
        let target = paths::normalize(self.root.join(relative));
        let depth = paths::depth_below(&self.root, &target)?;
        if depth == 0 {
            return None;
        }
        Some(Rule {
            target,
            kind,
            depth,
            relative: PathBuf::from(relative),
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    let value = value.trim_start_matches('=').trim();
    value.parse::<i64>().ok().map(|v| v != 0)
}

fn parse_parent(line: &str) -> Option<String> {
    let (key, value) = line.split_once('=')?;
    if key.trim() != PARENT_KEY {
        return None;
    }
    let value = value.trim().trim_matches('"').trim();
    if value.is_empty() {
        return None;
    }
    Some(value.to_string())
}
